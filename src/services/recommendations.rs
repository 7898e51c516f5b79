use std::sync::Arc;

use crate::{
    error::AppResult,
    models::RankingReport,
    services::{
        expansion,
        providers::{RatingProvider, SimilarityProvider},
        ranking::{self, RankingOptions},
    },
};

/// Generates rated recommendations for a list of seed titles
///
/// 1. Expand the seeds into similar titles (sequential, fail-fast)
/// 2. Rate every candidate concurrently
/// 3. Rank by score, highest first
pub async fn get_recommendations(
    similarity: &dyn SimilarityProvider,
    rating: Arc<dyn RatingProvider>,
    seeds: &[String],
    options: RankingOptions,
) -> AppResult<RankingReport> {
    let candidates = expansion::expand(similarity, seeds).await?;

    if candidates.is_empty() {
        tracing::info!(seeds = seeds.len(), "No similar titles found");
        return Ok(RankingReport::default());
    }

    ranking::rank(rating, &candidates, options).await
}
