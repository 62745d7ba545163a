//! Query engine for picking top-rated movies out of the catalog.
//!
//! This crate provides:
//! - FilterSpec and the input rules that build it
//! - Filter trait and implementations for record filtering
//! - FilterPipeline for composing filters
//! - `recommend`, which filters, ranks by rating and truncates
//!
//! ## Architecture
//! A query runs in stages:
//! 1. Filters drop records that miss the industry, genre, rating or year constraints
//! 2. The survivors are ranked by rating, highest first (stable on ties)
//! 3. The first `limit` records are returned
//!
//! Every call re-scans the whole catalog; there is no index and no cache.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{recommend, FilterSpec, Selection, DEFAULT_LIMIT};
//!
//! let spec = FilterSpec::new()
//!     .with_industry(Selection::parse("Hollywood"))
//!     .with_min_year(2000);
//!
//! let picks = recommend(catalog.records(), &spec, DEFAULT_LIMIT);
//! ```

pub mod traits;
pub mod filters;
pub mod filter_pipeline;
pub mod query;
pub mod recommend;

// Re-export main types
pub use traits::Filter;
pub use filter_pipeline::FilterPipeline;
pub use query::{
    parse_min_rating, parse_min_year, FilterSpec, InputError, Selection, ANY, DEFAULT_LIMIT,
    DEFAULT_MIN_YEAR, MAX_YEAR_INPUT, MIN_YEAR_INPUT,
};
pub use recommend::{rank_by_rating, recommend};
