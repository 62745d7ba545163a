//! Loading the dataset file into a `MovieCatalog`.

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

impl MovieCatalog {
    /// Load the whole dataset from a CSV file
    ///
    /// Steps:
    /// 1. Parse and validate every row
    /// 2. Keep the records in file order
    ///
    /// Any failure is returned as-is; the caller decides whether to abort.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!(path = %path.display(), "Loading movie dataset");

        let records = parser::parse_movies(path)?;
        let catalog = Self::from_records(records);

        info!(
            movies = catalog.len(),
            industries = catalog.distinct_industries().len(),
            genres = catalog.distinct_genres().len(),
            "Movie dataset loaded"
        );
        Ok(catalog)
    }
}
