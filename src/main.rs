use std::sync::Arc;

use anyhow::Context;
use tracing::Instrument;

use movie_recs::{
    config::Config,
    services::{
        providers::{
            omdb::OmdbProvider, tastedive::TasteDiveProvider, RatingProvider, SimilarityProvider,
        },
        recommendations,
    },
    telemetry::{self, RunId},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();

    let config = Config::from_env().context("Failed to load environment variables")?;

    let http_client = reqwest::Client::new();
    let similarity = TasteDiveProvider::new(
        http_client.clone(),
        config.tastedive_api_url.clone(),
        config.tastedive_api_key.clone(),
        config.similar_limit,
    );
    let rating: Arc<dyn RatingProvider> = Arc::new(OmdbProvider::new(
        http_client,
        config.omdb_api_key.clone(),
        config.omdb_api_url.clone(),
    ));

    let run_id = RunId::new();
    let span = telemetry::run_span(&run_id, config.seed_titles.len());

    tracing::info!(
        parent: &span,
        similarity = similarity.name(),
        rating = rating.name(),
        "Starting recommendation run"
    );

    let report = recommendations::get_recommendations(
        &similarity,
        rating,
        &config.seed_titles,
        config.ranking_options(),
    )
    .instrument(span)
    .await
    .context("Failed to build recommendations")?;

    print!("{}", report);

    Ok(())
}
