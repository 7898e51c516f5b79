use std::sync::Arc;

use tokio::{sync::Semaphore, task::JoinSet};

use crate::{
    error::{AppError, AppResult},
    models::{
        CandidateSet, RankedResult, RankingReport, RatedCandidate, RatingError, RatingFailure,
        Score,
    },
    services::providers::RatingProvider,
};

/// Default cap on in-flight rating lookups
pub const MAX_CONCURRENT_LOOKUPS: usize = 8;

/// What to do when a candidate's rating cannot be scored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop at the first unscorable rating and cancel outstanding lookups
    #[default]
    Abort,
    /// Rank the candidates that could be scored and report the rest
    Skip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingOptions {
    /// Maximum concurrent lookups; 0 spawns every lookup at once
    pub max_concurrency: usize,
    pub policy: FailurePolicy,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            max_concurrency: MAX_CONCURRENT_LOOKUPS,
            policy: FailurePolicy::default(),
        }
    }
}

/// Result reported by one lookup task
struct Scored {
    index: usize,
    title: String,
    score: Result<Score, RatingError>,
}

/// Rates every candidate concurrently and sorts them by score
///
/// One task is spawned per candidate, gated by a semaphore when a concurrency cap is set.
/// Each task owns its result; the join loop here is the only place results are merged.
///
/// Equal scores keep the candidates' discovery order.
pub async fn rank(
    provider: Arc<dyn RatingProvider>,
    candidates: &CandidateSet,
    options: RankingOptions,
) -> AppResult<RankingReport> {
    if candidates.is_empty() {
        return Ok(RankingReport::default());
    }

    tracing::info!(
        candidates = candidates.len(),
        max_concurrency = options.max_concurrency,
        policy = ?options.policy,
        "Ranking candidates"
    );

    let limiter = (options.max_concurrency > 0)
        .then(|| Arc::new(Semaphore::new(options.max_concurrency)));

    let mut tasks = JoinSet::new();
    for (index, title) in candidates.iter().enumerate() {
        let provider = Arc::clone(&provider);
        let limiter = limiter.clone();
        let title = title.to_string();

        tasks.spawn(async move {
            // The semaphore is never closed.
            let _permit = match &limiter {
                Some(limiter) => limiter.acquire().await.ok(),
                None => None,
            };
            let score = score_candidate(provider.as_ref(), &title).await;
            Scored { index, title, score }
        });
    }

    let mut rated = Vec::with_capacity(candidates.len());
    let mut failures = Vec::new();

    while let Some(joined) = tasks.join_next().await {
        let scored =
            joined.map_err(|e| AppError::Internal(format!("Rating task failed: {}", e)))?;

        match scored.score {
            Ok(score) => rated.push((
                scored.index,
                RatedCandidate {
                    title: scored.title,
                    score,
                },
            )),
            Err(reason) => {
                let failure = RatingFailure {
                    title: scored.title,
                    reason,
                };
                match options.policy {
                    FailurePolicy::Abort => {
                        tracing::error!(
                            title = %failure.title,
                            reason = %failure.reason,
                            outstanding = tasks.len(),
                            "Unscorable rating, aborting ranking"
                        );
                        // Dropping the set aborts the outstanding lookups.
                        return Err(AppError::Rating(failure));
                    }
                    FailurePolicy::Skip => {
                        tracing::warn!(
                            title = %failure.title,
                            reason = %failure.reason,
                            "Skipping unscorable rating"
                        );
                        failures.push((scored.index, failure));
                    }
                }
            }
        }
    }

    rated.sort_by(|(a_index, a), (b_index, b)| {
        b.score.cmp(&a.score).then_with(|| a_index.cmp(b_index))
    });
    failures.sort_by_key(|(index, _)| *index);

    if !failures.is_empty() {
        tracing::warn!(
            success_count = rated.len(),
            error_count = failures.len(),
            "Partial ranking"
        );
    }

    Ok(RankingReport {
        ranked: RankedResult(rated.into_iter().map(|(_, candidate)| candidate).collect()),
        failures: failures.into_iter().map(|(_, failure)| failure).collect(),
    })
}

/// Looks up and parses one candidate's rating.
///
/// A failed lookup counts as an empty rating, which then fails to parse as
/// [`RatingError::Missing`].
async fn score_candidate(provider: &dyn RatingProvider, title: &str) -> Result<Score, RatingError> {
    let rating = provider.lookup_rating(title).await.unwrap_or_else(|e| {
        tracing::warn!(title = %title, error = %e, "Failed to get rating");
        String::new()
    });

    rating.parse()
}
