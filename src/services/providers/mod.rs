/// External movie data providers
///
/// The recommendation pipeline talks to two services: one that expands a title into
/// similar titles, and one that reports a rating for a title. Each sits behind a trait
/// so the pipeline can be driven by fakes in tests.
use crate::error::AppResult;

#[cfg(test)]
use mockall::automock;

pub mod omdb;
pub mod tastedive;

/// Source of "similar title" lookups
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait SimilarityProvider: Send + Sync {
    /// Returns names of titles similar to `title`, in the order the service ranks them
    async fn lookup_similar(&self, title: &str) -> AppResult<Vec<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Source of per-title ratings
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait RatingProvider: Send + Sync {
    /// Returns the raw rating string for `title`.
    ///
    /// An empty string means the service knows no rating for the title; it is not an
    /// error at this layer.
    async fn lookup_rating(&self, title: &str) -> AppResult<String>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
