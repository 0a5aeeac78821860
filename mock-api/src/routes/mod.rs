pub mod movies;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, http::StatusCode, web,
};
use payloads::responses::{INVALID_API_KEY, ProviderFailure};

pub fn api_services() -> impl HttpServiceFactory {
    web::scope("")
        .service(health_check)
        .service(movies::lookup)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

/// Failures answered with a non-2xx status. Everything else the movie
/// database reports as a 200 with `"Response": "False"`.
#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Invalid API key!")]
    InvalidApiKey,
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidApiKey => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::InvalidApiKey => HttpResponse::Unauthorized()
                .json(ProviderFailure::new(INVALID_API_KEY)),
            Self::BadRequest(_) => {
                HttpResponse::BadRequest().body(self.to_string())
            }
        }
    }
}
