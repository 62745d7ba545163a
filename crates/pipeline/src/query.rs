//! The filter specification and the input rules that produce it.
//!
//! Front-ends speak in strings: an "Any" entry in a selector, a slider
//! value, a year typed into a box. Everything here turns that input into a
//! `FilterSpec`, so the "Any" sentinel never reaches the engine.

use data_loader::{MAX_SCORE, MIN_SCORE, Score, Year};
use std::str::FromStr;
use thiserror::Error;

/// Selector entry meaning "do not filter on this field"
pub const ANY: &str = "Any";

/// Number of results a query returns unless told otherwise
pub const DEFAULT_LIMIT: usize = 15;

/// Year pre-filled in the minimum year input
pub const DEFAULT_MIN_YEAR: Year = 2000;

/// Accepted range for the minimum year input
pub const MIN_YEAR_INPUT: Year = 1900;
pub const MAX_YEAR_INPUT: Year = 2050;

/// The user-chosen constraints for one query.
///
/// Built fresh for every query and never stored.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterSpec {
    /// Exact industry to keep, `None` for any
    pub industry: Option<String>,
    /// Exact genre to keep, `None` for any
    pub genre: Option<String>,
    /// Inclusive lower bound on rating
    pub min_rating: Score,
    /// Inclusive lower bound on year, `None` for no bound
    pub min_year: Option<Year>,
}

impl FilterSpec {
    /// A spec with no constraints beyond "has a rating and a year"
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_industry(mut self, selection: Selection) -> Self {
        self.industry = selection.into_option();
        self
    }

    pub fn with_genre(mut self, selection: Selection) -> Self {
        self.genre = selection.into_option();
        self
    }

    pub fn with_min_rating(mut self, min_rating: Score) -> Self {
        self.min_rating = min_rating;
        self
    }

    pub fn with_min_year(mut self, min_year: Year) -> Self {
        self.min_year = Some(min_year);
        self
    }
}

/// A selector choice: either "Any" or one concrete value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Any,
    Exactly(String),
}

impl Selection {
    /// Parse selector text. `"Any"` and blank input mean no constraint.
    ///
    /// Surrounding whitespace is trimmed; the value itself is kept verbatim.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() || text == ANY {
            Selection::Any
        } else {
            Selection::Exactly(text.to_string())
        }
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Selection::Any => None,
            Selection::Exactly(value) => Some(value),
        }
    }
}

impl FromStr for Selection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Selection::parse(s))
    }
}

/// Rejected filter input
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("minimum rating must be between {min} and {max}, got {0}", min = MIN_SCORE, max = MAX_SCORE)]
    RatingOutOfRange(Score),

    #[error("minimum year must be between {min} and {max}, got {0}", min = MIN_YEAR_INPUT, max = MAX_YEAR_INPUT)]
    YearOutOfRange(Year),
}

/// Parse a minimum rating in the 0-10 range
pub fn parse_min_rating(text: &str) -> Result<Score, InputError> {
    let text = text.trim();
    let value: Score = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(InputError::RatingOutOfRange(value));
    }
    Ok(value)
}

/// Parse a minimum year in the 1900-2050 range
pub fn parse_min_year(text: &str) -> Result<Year, InputError> {
    let text = text.trim();
    let value: Year = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if !(MIN_YEAR_INPUT..=MAX_YEAR_INPUT).contains(&value) {
        return Err(InputError::YearOutOfRange(value));
    }
    Ok(value)
}
