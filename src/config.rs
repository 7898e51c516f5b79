use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    services::ranking::{FailurePolicy, RankingOptions},
};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// OMDb API key
    pub omdb_api_key: String,

    /// OMDb API base URL
    #[serde(default = "default_omdb_api_url")]
    pub omdb_api_url: String,

    /// TasteDive API base URL
    #[serde(default = "default_tastedive_api_url")]
    pub tastedive_api_url: String,

    /// TasteDive API key, sent as `k` when present
    #[serde(default)]
    pub tastedive_api_key: Option<String>,

    /// Number of similar titles requested per seed
    #[serde(default = "default_similar_limit")]
    pub similar_limit: u32,

    /// Cap on in-flight rating lookups (0 = unbounded)
    #[serde(default = "default_max_concurrent_lookups")]
    pub max_concurrent_lookups: usize,

    /// Rank what could be rated instead of failing on the first bad rating
    #[serde(default)]
    pub allow_partial: bool,

    /// Seed titles, comma-separated in the environment
    #[serde(default = "default_seed_titles")]
    pub seed_titles: Vec<String>,
}

fn default_omdb_api_url() -> String {
    "http://www.omdbapi.com".to_string()
}

fn default_tastedive_api_url() -> String {
    "https://tastedive.com".to_string()
}

fn default_similar_limit() -> u32 {
    20
}

fn default_max_concurrent_lookups() -> usize {
    8
}

fn default_seed_titles() -> Vec<String> {
    vec!["John wick".to_string()]
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> AppResult<Self> {
        // A missing .env file is fine; a missing OMDB_API_KEY is not.
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| AppError::Config(format!("Failed to load config: {}", e)))?;
        config.validated()
    }

    fn validated(mut self) -> AppResult<Self> {
        if self.omdb_api_key.trim().is_empty() {
            return Err(AppError::Config("OMDB_API_KEY must not be empty".to_string()));
        }

        self.seed_titles = self
            .seed_titles
            .into_iter()
            .map(|title| title.trim().to_string())
            .filter(|title| !title.is_empty())
            .collect();

        Ok(self)
    }

    pub fn ranking_options(&self) -> RankingOptions {
        RankingOptions {
            max_concurrency: self.max_concurrent_lookups,
            policy: if self.allow_partial {
                FailurePolicy::Skip
            } else {
                FailurePolicy::Abort
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_defaults_applied() {
        let config = from_pairs(&[("OMDB_API_KEY", "abc123")]).unwrap();
        assert_eq!(config.omdb_api_key, "abc123");
        assert_eq!(config.omdb_api_url, "http://www.omdbapi.com");
        assert_eq!(config.tastedive_api_url, "https://tastedive.com");
        assert_eq!(config.tastedive_api_key, None);
        assert_eq!(config.similar_limit, 20);
        assert_eq!(config.max_concurrent_lookups, 8);
        assert!(!config.allow_partial);
        assert_eq!(config.seed_titles, vec!["John wick".to_string()]);
    }

    #[test]
    fn test_missing_api_key_fails() {
        assert!(from_pairs(&[("SIMILAR_LIMIT", "5")]).is_err());
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let config = from_pairs(&[("OMDB_API_KEY", "  ")]).unwrap();
        assert!(matches!(config.validated(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_seed_titles_trimmed() {
        let config = from_pairs(&[
            ("OMDB_API_KEY", "abc123"),
            ("SEED_TITLES", "Heat, Ronin,,"),
        ])
        .unwrap()
        .validated()
        .unwrap();
        assert_eq!(config.seed_titles, vec!["Heat".to_string(), "Ronin".to_string()]);
    }

    #[test]
    fn test_ranking_options_from_flags() {
        let config = from_pairs(&[
            ("OMDB_API_KEY", "abc123"),
            ("MAX_CONCURRENT_LOOKUPS", "0"),
            ("ALLOW_PARTIAL", "true"),
        ])
        .unwrap();
        let options = config.ranking_options();
        assert_eq!(options.max_concurrency, 0);
        assert_eq!(options.policy, FailurePolicy::Skip);
    }
}
