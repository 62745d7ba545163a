//! Parser for the movie dataset CSV file.
//!
//! Expected header (any column order, extra columns ignored):
//! `title,year,genre,industry,rating,summary`
//!
//! Each row is deserialized into a loosely-typed raw row first, then
//! validated into a `MovieRecord` so that errors can name the offending line.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Columns every dataset file must provide
pub const REQUIRED_COLUMNS: [&str; 6] = ["title", "year", "genre", "industry", "rating", "summary"];

/// Cell contents treated as a missing value, on top of the empty cell
const NULL_MARKERS: [&str; 7] = ["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

/// One row as it appears in the file, before validation
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    title: Option<String>,
    year: Option<String>,
    genre: Option<String>,
    industry: Option<String>,
    rating: Option<String>,
    summary: Option<String>,
}

/// Parse the dataset file at `path`
pub fn parse_movies(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::Io(e),
    })?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    parse_movies_from_reader(file, &file_name)
}

/// Parse dataset rows from any reader
///
/// `file_name` is only used in error messages.
pub fn parse_movies_from_reader<R: Read>(reader: R, file_name: &str) -> Result<Vec<MovieRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataLoadError::MissingColumn {
                file: file_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    let mut movies = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line_no = record.position().map(|p| p.line()).unwrap_or(0);

        let raw: RawMovieRow = record
            .deserialize(Some(&headers))
            .map_err(|e| DataLoadError::ParseError {
                file: file_name.to_string(),
                line: line_no,
                reason: e.to_string(),
            })?;

        movies.push(validate_row(raw, file_name, line_no)?);
    }

    Ok(movies)
}

/// Turn a raw row into a typed record, rejecting malformed values
fn validate_row(raw: RawMovieRow, file_name: &str, line_no: u64) -> Result<MovieRecord> {
    let title = raw
        .title
        .filter(|t| !t.is_empty())
        .ok_or_else(|| DataLoadError::ParseError {
            file: file_name.to_string(),
            line: line_no,
            reason: "Missing title".to_string(),
        })?;

    let year = match nullable(raw.year) {
        Some(text) => Some(parse_year(&text).ok_or_else(|| DataLoadError::ParseError {
            file: file_name.to_string(),
            line: line_no,
            reason: format!("Invalid year: {}", text),
        })?),
        None => None,
    };

    let rating = match nullable(raw.rating) {
        Some(text) => {
            let value: Score = text.parse().map_err(|e| DataLoadError::ParseError {
                file: file_name.to_string(),
                line: line_no,
                reason: format!("Invalid rating: {}", e),
            })?;
            if !value.is_finite() || !(MIN_SCORE..=MAX_SCORE).contains(&value) {
                return Err(DataLoadError::InvalidValue {
                    field: "rating".to_string(),
                    value: text,
                    line: line_no,
                });
            }
            // Fold -0 into 0 so equal ratings compare equal everywhere
            Some(value + 0.0)
        }
        None => None,
    };

    Ok(MovieRecord {
        title,
        year,
        genre: nullable(raw.genre),
        industry: nullable(raw.industry),
        rating,
        summary: raw.summary.unwrap_or_default(),
    })
}

/// Collapse empty cells and null markers into `None`
fn nullable(cell: Option<String>) -> Option<String> {
    cell.filter(|s| !s.is_empty() && !NULL_MARKERS.contains(&s.as_str()))
}

/// Parse a year, also accepting whole-number floats such as "2005.0"
///
/// Spreadsheet exports write integer columns with gaps that way.
fn parse_year(text: &str) -> Option<Year> {
    if let Ok(year) = text.parse::<Year>() {
        return Some(year);
    }
    let value: f64 = text.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= Year::MAX as f64 {
        Some(value as Year)
    } else {
        None
    }
}
