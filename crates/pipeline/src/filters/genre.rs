//! Filter to keep only movies of one genre.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose genre equals the requested one exactly.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| movie.genre.as_deref() == Some(self.genre.as_str()))
            .collect()
    }
}
