//! Filter for the earliest acceptable release year.

use crate::traits::Filter;
use data_loader::{MovieRecord, Year};

/// Keeps records released in or after `min_year`.
///
/// Records without a year are always removed, even when no bound is set:
/// the year comparison is made unconditionally and fails on a missing value.
pub struct MinimumYearFilter {
    min_year: Option<Year>,
}

impl MinimumYearFilter {
    /// Create a new MinimumYearFilter.
    ///
    /// # Arguments
    /// * `min_year` - Inclusive lower bound, or `None` to accept any known year
    pub fn new(min_year: Option<Year>) -> Self {
        Self { min_year }
    }
}

impl Filter for MinimumYearFilter {
    fn name(&self) -> &str {
        "MinimumYearFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| {
                movie
                    .year
                    .is_some_and(|year| self.min_year.is_none_or(|min| year >= min))
            })
            .collect()
    }
}
