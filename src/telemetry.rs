use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

const DEFAULT_FILTER: &str = "movie_recs=info";

/// Identifier attached to every log line of a single recommendation run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunId(pub Uuid);

impl RunId {
    /// Creates a new random run ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Installs the global tracing subscriber.
///
/// Logs go to stderr so stdout carries only the recommendation list. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Span wrapping one run of the pipeline
pub fn run_span(run_id: &RunId, seeds: usize) -> tracing::Span {
    tracing::info_span!("run", run_id = %run_id, seeds = seeds)
}
