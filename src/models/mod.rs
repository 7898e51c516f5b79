use serde::Deserialize;

mod rating;
mod title;

pub use rating::{RankedResult, RankingReport, RatedCandidate, RatingError, RatingFailure, Score};
pub use title::CandidateSet;

/// Rating source whose value is used as the score
pub const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";

// ============================================================================
// TasteDive API Types
// ============================================================================

/// Raw response from TasteDive `/api/similar`
///
/// Every field is optional: error payloads such as `{"error": "..."}` decode to an empty
/// result list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TasteDiveResponse {
    #[serde(rename = "Similar", default)]
    pub similar: TasteDiveSimilar,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TasteDiveSimilar {
    /// Entries describing the query itself; not used for expansion
    #[serde(rename = "Info", default)]
    pub info: Vec<TasteDiveEntry>,
    #[serde(rename = "Results", default)]
    pub results: Vec<TasteDiveEntry>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TasteDiveEntry {
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "Type", default)]
    pub entry_type: String,
}

impl TasteDiveResponse {
    /// Names of the similar titles, in the order the service returned them
    pub fn result_names(self) -> Vec<String> {
        self.similar.results.into_iter().map(|entry| entry.name).collect()
    }
}

// ============================================================================
// OMDb API Types
// ============================================================================

/// Raw response from OMDb title lookup
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbMovie {
    #[serde(default)]
    pub ratings: Vec<OmdbRating>,
    /// "True" or "False"
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct OmdbRating {
    pub source: String,
    pub value: String,
}

impl OmdbMovie {
    /// Value reported by the given source, or an empty string when absent
    pub fn rating_from(&self, source: &str) -> String {
        self.ratings
            .iter()
            .find(|rating| rating.source == source)
            .map(|rating| rating.value.clone())
            .unwrap_or_default()
    }

    pub fn not_found(&self) -> bool {
        self.response.as_deref() == Some("False")
    }
}
