use std::{fmt::Display, str::FromStr};

/// Percentage score parsed from a rating string such as "87%"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(pub u32);

/// Why a rating string could not become a [`Score`]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("no rating available")]
    Missing,

    #[error("malformed rating {0:?}")]
    Malformed(String),
}

impl FromStr for Score {
    type Err = RatingError;

    /// Parses the digits before the first `%`.
    ///
    /// An empty rating is [`RatingError::Missing`], never zero.
    fn from_str(rating: &str) -> Result<Self, Self::Err> {
        if rating.is_empty() {
            return Err(RatingError::Missing);
        }

        let digits = rating.split('%').next().unwrap_or_default();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(RatingError::Malformed(rating.to_string()));
        }

        digits
            .parse::<u32>()
            .map(Score)
            .map_err(|_| RatingError::Malformed(rating.to_string()))
    }
}

impl Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// A candidate paired with its score
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatedCandidate {
    pub title: String,
    pub score: Score,
}

/// A candidate whose rating could not be scored
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingFailure {
    pub title: String,
    pub reason: RatingError,
}

impl Display for RatingFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.reason)
    }
}

/// Rated candidates, highest score first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedResult(pub Vec<RatedCandidate>);

impl RankedResult {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RatedCandidate> {
        self.0.iter()
    }

    /// (title, score) pairs in ranked order
    pub fn pairs(&self) -> Vec<(&str, u32)> {
        self.0
            .iter()
            .map(|candidate| (candidate.title.as_str(), candidate.score.0))
            .collect()
    }
}

impl Display for RankedResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Recommendations:")?;
        if self.0.is_empty() {
            return writeln!(f, "  (none)");
        }
        for (rank, candidate) in self.0.iter().enumerate() {
            writeln!(f, "  {}. {} ({})", rank + 1, candidate.title, candidate.score)?;
        }
        Ok(())
    }
}

/// Outcome of a ranking pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankingReport {
    pub ranked: RankedResult,
    /// Candidates that could not be scored, in discovery order
    pub failures: Vec<RatingFailure>,
}

impl RankingReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

impl Display for RankingReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.ranked)?;
        if !self.failures.is_empty() {
            writeln!(f, "Unrated:")?;
            for failure in &self.failures {
                writeln!(f, "  - {}", failure)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentages() {
        assert_eq!("87%".parse::<Score>(), Ok(Score(87)));
        assert_eq!("100%".parse::<Score>(), Ok(Score(100)));
        assert_eq!("0%".parse::<Score>(), Ok(Score(0)));
    }

    #[test]
    fn test_parse_bare_integer() {
        assert_eq!("87".parse::<Score>(), Ok(Score(87)));
    }

    #[test]
    fn test_empty_rating_is_missing_not_zero() {
        assert_eq!("".parse::<Score>(), Err(RatingError::Missing));
    }

    #[test]
    fn test_parse_malformed() {
        for rating in ["N/A", "%", "7.8/10", "-5%", " 87%", "87 %", "abc%"] {
            assert_eq!(
                rating.parse::<Score>(),
                Err(RatingError::Malformed(rating.to_string())),
                "rating {:?}",
                rating
            );
        }
    }

    #[test]
    fn test_parse_overflow_is_malformed() {
        assert!(matches!(
            "99999999999%".parse::<Score>(),
            Err(RatingError::Malformed(_))
        ));
    }

    #[test]
    fn test_ranked_result_display() {
        let ranked = RankedResult(vec![
            RatedCandidate {
                title: "Equalizer".to_string(),
                score: Score(76),
            },
            RatedCandidate {
                title: "Taken".to_string(),
                score: Score(68),
            },
        ]);

        assert_eq!(
            ranked.to_string(),
            "Recommendations:\n  1. Equalizer (76%)\n  2. Taken (68%)\n"
        );
    }

    #[test]
    fn test_empty_ranked_result_display() {
        assert_eq!(
            RankedResult::default().to_string(),
            "Recommendations:\n  (none)\n"
        );
    }

    #[test]
    fn test_report_lists_failures() {
        let report = RankingReport {
            ranked: RankedResult::default(),
            failures: vec![RatingFailure {
                title: "Taken".to_string(),
                reason: RatingError::Missing,
            }],
        };

        assert!(!report.is_complete());
        assert_eq!(
            report.to_string(),
            "Recommendations:\n  (none)\nUnrated:\n  - Taken: no rating available\n"
        );
    }
}
