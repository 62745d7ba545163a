//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible filters to be applied to a view of the catalog.

use data_loader::MovieRecord;

/// Core trait for filtering movie records.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// Filters work on borrowed records: they take ownership of the list of
/// references and return the retained ones in their original order. The
/// catalog itself is never touched.
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a set of records.
    ///
    /// Must preserve the relative order of the records it keeps.
    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord>;
}
