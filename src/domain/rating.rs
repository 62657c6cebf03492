use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// A score submitted by a customer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RatingRecord")]
pub struct Rating {
    author: String,
    score: f64,
}

/// Unvalidated shape of a persisted rating.
#[derive(Deserialize)]
struct RatingRecord {
    author: String,
    score: f64,
}

impl Rating {
    pub fn new(author: impl Into<String>, score: f64) -> Result<Self, ValidationError> {
        let author = author.into();
        if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
            return Err(ValidationError::OutOfRange(score));
        }
        if author.trim().is_empty() {
            return Err(ValidationError::EmptyAuthor);
        }
        Ok(Self { author, score })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

impl TryFrom<RatingRecord> for Rating {
    type Error = ValidationError;

    fn try_from(record: RatingRecord) -> Result<Self, Self::Error> {
        Rating::new(record.author, record.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bounds_and_fractions() {
        for score in [1.0, 2.5, 4.5, 5.0] {
            assert!(Rating::new("Ana", score).is_ok(), "score {score} should be accepted");
        }
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        for score in [0.0, 0.99, 5.01, 6.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                Rating::new("Ana", score),
                Err(ValidationError::OutOfRange(_))
            ));
        }
    }

    #[test]
    fn rejects_blank_author() {
        assert_eq!(Rating::new("  ", 3.0), Err(ValidationError::EmptyAuthor));
    }

    #[test]
    fn persisted_ratings_are_validated() {
        let ok: Rating = serde_json::from_str(r#"{"author":"Zé","score":2}"#).unwrap();
        assert_eq!(ok.score(), 2.0);
        assert!(serde_json::from_str::<Rating>(r#"{"author":"Zé","score":9}"#).is_err());
    }
}
