//! # Data Loader Crate
//!
//! This crate loads the movie dataset CSV into typed records.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, MovieCatalog)
//! - **parser**: Parse the CSV file into validated records
//! - **catalog**: Load a file into a MovieCatalog
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieCatalog;
//! use std::path::Path;
//!
//! let catalog = MovieCatalog::load_from_file(Path::new("movies.csv"))?;
//!
//! println!("Loaded {} movies", catalog.len());
//! println!("Industries: {:?}", catalog.distinct_industries());
//! ```
//!
//! Records are validated once here, so downstream code never re-parses
//! a field or second-guesses its type.

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod catalog;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    Year,
    Score,
    MIN_SCORE,
    MAX_SCORE,
    // Core types
    MovieRecord,
    MovieCatalog,
};
