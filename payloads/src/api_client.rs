use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretBox};
use serde::Serialize;

use crate::{
    MovieDetails, MovieId, RawRecord, SearchPage, SearchQuery,
    filter_movie_details, requests, responses,
};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for the external movie database.
pub struct APIClient {
    pub address: String,
    pub api_key: SecretBox<String>,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self) -> String {
        format!("{}/", self.address.trim_end_matches('/'))
    }

    async fn get(&self, params: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .get(self.format_url())
            .query(&[("apikey", self.api_key.expose_secret().as_str())])
            .query(params)
            .send()
            .await
    }
}

/// Methods on the movie database
impl APIClient {
    /// Fetch one page of title search results.
    ///
    /// A search that matches nothing is an empty page, not an error.
    pub async fn search_movies(
        &self,
        query: &SearchQuery,
    ) -> Result<SearchPage, ClientError> {
        let params = requests::SearchMovies::from(query);
        let response = self.get(&params).await?;
        let body: responses::SearchResponse = ok_body(response).await?;
        body.into_page()
    }

    /// Fetch the raw record for a movie without shaping it.
    pub async fn get_movie_record(
        &self,
        movie_id: &MovieId,
    ) -> Result<RawRecord, ClientError> {
        let params = requests::GetMovie::from(movie_id);
        let response = self.get(&params).await?;
        let record: RawRecord = ok_body(response).await?;
        match responses::record_failure(&record) {
            Some(error) => Err(ClientError::Provider(error)),
            None => Ok(record),
        }
    }

    /// Fetch a movie and shape it for display.
    pub async fn get_movie_details(
        &self,
        movie_id: &MovieId,
    ) -> Result<MovieDetails, ClientError> {
        let record = self.get_movie_record(movie_id).await?;
        Ok(filter_movie_details(&record))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    /// The body was not the JSON the movie database is expected to send.
    #[error("Unexpected response from the movie database.")]
    InvalidResponse(#[source] reqwest::Error),
    /// The movie database understood the request but refused it.
    #[error("{0}")]
    Provider(String),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    response.json::<T>().await.map_err(ClientError::InvalidResponse)
}
