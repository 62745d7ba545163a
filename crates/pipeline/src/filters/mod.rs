//! Filter implementations for the query pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod industry;
pub mod genre;
pub mod minimum_rating;
pub mod minimum_year;

// Re-export for convenience
pub use genre::GenreFilter;
pub use industry::IndustryFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use minimum_year::MinimumYearFilter;
