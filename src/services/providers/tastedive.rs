/// TasteDive similarity provider
///
/// API Flow:
/// 1. `/api/similar?q=<title>&type=movie&limit=<n>`
///    → `{"Similar": {"Info": [...], "Results": [...]}}`
/// 2. Only `Results[*].Name` is handed back to the caller.
use crate::{
    error::{AppError, AppResult},
    models::TasteDiveResponse,
    services::providers::SimilarityProvider,
};
use reqwest::Client as HttpClient;

const RESULT_TYPE: &str = "movie";

#[derive(Clone)]
pub struct TasteDiveProvider {
    http_client: HttpClient,
    api_url: String,
    api_key: Option<String>,
    limit: u32,
}

impl TasteDiveProvider {
    pub fn new(
        http_client: HttpClient,
        api_url: String,
        api_key: Option<String>,
        limit: u32,
    ) -> Self {
        Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key,
            limit,
        }
    }
}

#[async_trait::async_trait]
impl SimilarityProvider for TasteDiveProvider {
    async fn lookup_similar(&self, title: &str) -> AppResult<Vec<String>> {
        let url = format!("{}/api/similar", self.api_url);
        let limit = self.limit.to_string();

        let mut request = self.http_client.get(&url).query(&[
            ("q", title),
            ("type", RESULT_TYPE),
            ("limit", limit.as_str()),
        ]);
        if let Some(api_key) = &self.api_key {
            request = request.query(&[("k", api_key.as_str())]);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TasteDive API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response.text().await?;
        tracing::debug!(response = %response_text, "Raw TasteDive API response");

        let similar: TasteDiveResponse = serde_json::from_str(&response_text).map_err(|e| {
            tracing::error!(
                error = %e,
                response = %response_text,
                "Failed to deserialize TasteDive response"
            );
            AppError::Decode {
                service: "TasteDive",
                source: e,
            }
        })?;

        let names = similar.result_names();

        tracing::info!(
            title = %title,
            results = names.len(),
            provider = "tastedive",
            "Similar titles fetched"
        );

        Ok(names)
    }

    fn name(&self) -> &'static str {
        "tastedive"
    }
}
