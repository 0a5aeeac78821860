use actix_web::{HttpResponse, get, web};
use payloads::responses::{
    INCORRECT_ID, NOTHING_SPECIFIED, ProviderFailure, SearchResponse,
};
use payloads::RawRecord;
use serde::Deserialize;
use serde_json::Value;

use crate::{ProviderSettings, catalog::Catalog};

use super::APIError;

/// Body sent instead of JSON when malformed responses are switched on.
const MALFORMED_BODY: &str =
    "<!DOCTYPE html><html><body>Service Unavailable</body></html>";

/// Query string accepted by the movie database root endpoint.
#[derive(Debug, Deserialize)]
pub struct ProviderQuery {
    pub apikey: Option<String>,
    /// Title search text
    pub s: Option<String>,
    /// Identifier lookup
    pub i: Option<String>,
    pub page: Option<u32>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub plot: Option<String>,
}

#[tracing::instrument(
    skip_all,
    fields(s = ?query.s, i = ?query.i, page = ?query.page)
)]
#[get("/")]
pub async fn lookup(
    query: web::Query<ProviderQuery>,
    settings: web::Data<ProviderSettings>,
    catalog: web::Data<Catalog>,
) -> Result<HttpResponse, APIError> {
    let query = query.into_inner();
    if !settings.accepts_key(query.apikey.as_deref()) {
        tracing::debug!("rejected request with invalid api key");
        return Err(APIError::InvalidApiKey);
    }

    if query.s.is_some() {
        settings.request_counts.record_search();
    } else if query.i.is_some() {
        settings.request_counts.record_lookup();
    }

    if !settings.latency.is_zero() {
        tokio::time::sleep(settings.latency).await;
    }

    if settings.malformed_responses {
        return Ok(HttpResponse::Ok()
            .content_type("text/html")
            .body(MALFORMED_BODY));
    }

    if let Some(text) = query.s.as_deref() {
        let page = query.page.unwrap_or(1);
        if page == 0 {
            return Err(APIError::BadRequest(
                "page must be at least 1".to_string(),
            ));
        }
        let movies_only = query
            .kind
            .as_deref()
            .is_none_or(|kind| kind == payloads::requests::MOVIE_TYPE);
        let body = match catalog.search(text, page) {
            Some((hits, total)) if movies_only => {
                SearchResponse::found(hits, total)
            }
            _ => SearchResponse::not_found(),
        };
        return Ok(HttpResponse::Ok().json(body));
    }

    if let Some(id) = query.i.as_deref() {
        let full_plot =
            query.plot.as_deref() == Some(payloads::requests::FULL_PLOT);
        return Ok(match catalog.find(id) {
            Some(record) if full_plot => HttpResponse::Ok().json(record),
            Some(record) => HttpResponse::Ok().json(short_plot(record.clone())),
            None => HttpResponse::Ok().json(ProviderFailure::new(INCORRECT_ID)),
        });
    }

    Ok(HttpResponse::Ok().json(ProviderFailure::new(NOTHING_SPECIFIED)))
}

/// Cut the plot down to its first sentence, as the short plot option does.
fn short_plot(mut record: RawRecord) -> RawRecord {
    if let Some(Value::String(plot)) = record.get_mut("Plot") {
        if let Some(end) = plot.find(". ") {
            plot.truncate(end + 1);
        }
    }
    record
}
