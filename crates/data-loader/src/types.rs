//! Core domain types for the movie dataset.
//!
//! A `MovieRecord` is one validated row of the dataset. The `MovieCatalog`
//! owns every record in file order and hands out read-only views to the
//! query engine.

use serde::Serialize;
use std::collections::BTreeSet;

// =============================================================================
// Type Aliases
// =============================================================================

/// Release year of a movie
pub type Year = i32;

/// Rating on the 0-10 scale
pub type Score = f32;

/// Lowest rating a record may carry
pub const MIN_SCORE: Score = 0.0;

/// Highest rating a record may carry
pub const MAX_SCORE: Score = 10.0;

// =============================================================================
// Movie Record
// =============================================================================

/// One movie entry from the dataset.
///
/// Nullable columns are `Option`s: an empty cell in the file becomes `None`
/// and such a record never satisfies a comparison against that field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub title: String,
    pub year: Option<Year>,
    pub genre: Option<String>,
    pub industry: Option<String>,
    /// Rating from 0.0 to 10.0
    pub rating: Option<Score>,
    pub summary: String,
}

// =============================================================================
// MovieCatalog - the loaded dataset
// =============================================================================

/// The whole dataset, loaded once at startup and never mutated.
///
/// Records keep the order they had in the file, which is also the order
/// used to break ties between equal ratings.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    pub(crate) records: Vec<MovieRecord>,
}

impl MovieCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Build a catalog from records already in memory
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Read-only view of every record in dataset order
    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct non-null industries, sorted ascending
    pub fn distinct_industries(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.industry.as_deref()))
    }

    /// Distinct non-null genres, sorted ascending
    pub fn distinct_genres(&self) -> Vec<String> {
        distinct(self.records.iter().filter_map(|r| r.genre.as_deref()))
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
