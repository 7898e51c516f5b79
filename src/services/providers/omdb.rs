/// OMDb rating provider
///
/// Looks a movie up by exact title (`t=`) and reports the Rotten Tomatoes score from its
/// `Ratings` list. OMDb answers unknown titles with `200 OK` and `"Response": "False"`,
/// which surfaces here as an empty rating rather than an error.
use crate::{
    error::{AppError, AppResult},
    models::{OmdbMovie, ROTTEN_TOMATOES},
    services::providers::RatingProvider,
};
use reqwest::Client as HttpClient;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(http_client: HttpClient, api_key: String, api_url: String) -> Self {
        Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetches the full OMDb record for a title
    async fn fetch_movie(&self, title: &str) -> AppResult<OmdbMovie> {
        let url = format!("{}/", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("t", title),
                ("r", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(title = %title, response = %response_text, "Raw OMDb API response");

        serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize OMDb response"
            );
            AppError::Decode {
                service: "OMDb",
                source: e,
            }
        })
    }
}

#[async_trait::async_trait]
impl RatingProvider for OmdbProvider {
    async fn lookup_rating(&self, title: &str) -> AppResult<String> {
        let movie = self.fetch_movie(title).await?;

        if movie.not_found() {
            tracing::debug!(
                title = %title,
                error = movie.error.as_deref().unwrap_or("unknown"),
                "OMDb has no record for title"
            );
        }

        let rating = movie.rating_from(ROTTEN_TOMATOES);

        tracing::info!(
            title = %title,
            rating = %rating,
            provider = "omdb",
            "Rating fetched"
        );

        Ok(rating)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
