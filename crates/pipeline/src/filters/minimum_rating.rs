//! Filter to ensure a minimum quality threshold.

use crate::traits::Filter;
use data_loader::{MovieRecord, Score};

/// Removes records rated below the threshold.
///
/// Records without a rating are always removed: a missing value never
/// compares as greater or equal.
pub struct MinimumRatingFilter {
    min_rating: Score,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Inclusive lower bound on the 0-10 scale
    pub fn new(min_rating: Score) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| movie.rating.is_some_and(|rating| rating >= self.min_rating))
            .collect()
    }
}
