//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::filters::{GenreFilter, IndustryFilter, MinimumRatingFilter, MinimumYearFilter};
use crate::query::FilterSpec;
use crate::traits::Filter;
use data_loader::MovieRecord;
use tracing;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(IndustryFilter::new("Hollywood"))
///     .add_filter(MinimumRatingFilter::new(7.0))
///     .add_filter(MinimumYearFilter::new(Some(2000)));
///
/// let kept = pipeline.apply(catalog.records().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline a query needs.
    ///
    /// Order: industry, genre, then the rating and year thresholds. The
    /// thresholds are always present since they also drop records that
    /// lack a rating or a year.
    pub fn from_spec(spec: &FilterSpec) -> Self {
        let mut pipeline = Self::new();
        if let Some(industry) = &spec.industry {
            pipeline = pipeline.add_filter(IndustryFilter::new(industry.clone()));
        }
        if let Some(genre) = &spec.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone()));
        }
        pipeline
            .add_filter(MinimumRatingFilter::new(spec.min_rating))
            .add_filter(MinimumYearFilter::new(spec.min_year))
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the filters in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence.
    ///
    /// Each filter sees the output of the previous one. Relative order of
    /// the records is preserved end to end.
    pub fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{movie, titles};
    use crate::query::Selection;

    fn create_test_movies() -> Vec<MovieRecord> {
        vec![
            movie("A", Some(2005), Some("Drama"), Some("Hollywood"), Some(7.5)),
            movie("B", Some(2010), Some("Comedy"), Some("Hollywood"), Some(8.9)),
            movie("C", Some(1995), Some("Drama"), Some("Bollywood"), Some(9.0)),
        ]
    }

    #[test]
    fn test_empty_pipeline() {
        let movies = create_test_movies();
        let pipeline = FilterPipeline::new();

        assert!(pipeline.is_empty());
        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(filtered.len(), 3);
    }

    #[test]
    fn test_single_filter() {
        let movies = create_test_movies();
        let pipeline = FilterPipeline::new().add_filter(IndustryFilter::new("Bollywood"));

        let filtered = pipeline.apply(movies.iter().collect());
        assert_eq!(titles(&filtered), vec!["C"]);
    }

    #[test]
    fn test_from_spec_skips_unset_selections() {
        let pipeline = FilterPipeline::from_spec(&FilterSpec::new());
        assert_eq!(pipeline.filter_names(), vec!["MinimumRatingFilter", "MinimumYearFilter"]);

        let spec = FilterSpec::new()
            .with_industry(Selection::parse("Hollywood"))
            .with_genre(Selection::parse("Drama"));
        let pipeline = FilterPipeline::from_spec(&spec);
        assert_eq!(
            pipeline.filter_names(),
            vec!["IndustryFilter", "GenreFilter", "MinimumRatingFilter", "MinimumYearFilter"]
        );
    }

    #[test]
    fn test_from_spec_applies_every_constraint() {
        let movies = create_test_movies();
        let spec = FilterSpec::new()
            .with_industry(Selection::parse("Hollywood"))
            .with_genre(Selection::parse("Drama"))
            .with_min_year(2000);

        let filtered = FilterPipeline::from_spec(&spec).apply(movies.iter().collect());
        assert_eq!(titles(&filtered), vec!["A"]);
    }
}
