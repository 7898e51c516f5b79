use crate::{error::AppResult, models::CandidateSet, services::providers::SimilarityProvider};

/// Expands seed titles into a deduplicated candidate set
///
/// Seeds are looked up one after another; the next lookup starts only once the previous
/// one has been merged. Any lookup error aborts the whole expansion, discarding what was
/// collected so far.
pub async fn expand(
    provider: &dyn SimilarityProvider,
    seeds: &[String],
) -> AppResult<CandidateSet> {
    let mut candidates = CandidateSet::new();

    for seed in seeds {
        let similar = provider.lookup_similar(seed).await.map_err(|e| {
            tracing::error!(seed = %seed, error = %e, "Similarity lookup failed");
            e
        })?;

        let returned = similar.len();
        let added = similar
            .into_iter()
            .filter(|title| candidates.insert(title.clone()))
            .count();

        tracing::debug!(seed = %seed, returned, added, "Seed expanded");
    }

    tracing::info!(
        seeds = seeds.len(),
        candidates = candidates.len(),
        "Title expansion completed"
    );

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::AppError, services::providers::MockSimilarityProvider};

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[tokio::test]
    async fn test_expand_single_seed() {
        let mut provider = MockSimilarityProvider::new();
        provider
            .expect_lookup_similar()
            .withf(|title| title == "John wick")
            .times(1)
            .returning(|_| Ok(titles(&["Equalizer", "Taken"])));

        let candidates = expand(&provider, &titles(&["John wick"])).await.unwrap();
        assert_eq!(candidates.into_vec(), titles(&["Equalizer", "Taken"]));
    }

    #[tokio::test]
    async fn test_expand_dedups_across_seeds_in_first_seen_order() {
        let mut provider = MockSimilarityProvider::new();
        provider.expect_lookup_similar().returning(|title| match title {
            "Heat" => Ok(titles(&["Ronin", "Collateral", "Ronin"])),
            "Drive" => Ok(titles(&["Collateral", "Thief", "Heat"])),
            _ => Ok(vec![]),
        });

        let seeds = titles(&["Heat", "Drive"]);
        let first = expand(&provider, &seeds).await.unwrap();
        let second = expand(&provider, &seeds).await.unwrap();

        assert_eq!(
            first.clone().into_vec(),
            titles(&["Ronin", "Collateral", "Thief", "Heat"])
        );
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_expand_empty_results_contribute_nothing() {
        let mut provider = MockSimilarityProvider::new();
        provider.expect_lookup_similar().times(2).returning(|_| Ok(vec![]));

        let candidates = expand(&provider, &titles(&["A", "B"])).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_expand_no_seeds() {
        let mut provider = MockSimilarityProvider::new();
        provider.expect_lookup_similar().never();

        let candidates = expand(&provider, &[]).await.unwrap();
        assert!(candidates.is_empty());
    }

    #[tokio::test]
    async fn test_expand_fails_fast() {
        let mut provider = MockSimilarityProvider::new();
        provider
            .expect_lookup_similar()
            .withf(|title| title == "First")
            .times(1)
            .returning(|_| Ok(titles(&["Ronin"])));
        provider
            .expect_lookup_similar()
            .withf(|title| title == "Second")
            .times(1)
            .returning(|_| Err(AppError::ExternalApi("boom".to_string())));
        provider
            .expect_lookup_similar()
            .withf(|title| title == "Third")
            .never();

        let result = expand(&provider, &titles(&["First", "Second", "Third"])).await;
        assert!(matches!(result, Err(AppError::ExternalApi(_))));
    }
}
