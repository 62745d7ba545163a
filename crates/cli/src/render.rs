//! Rendering query results for the terminal.

use colored::Colorize;
use data_loader::MovieRecord;
use std::io::{self, Write};

/// Width of the line printed between result blocks
pub const DIVIDER_WIDTH: usize = 70;

/// Placeholder for a missing field
const MISSING: &str = "N/A";

/// Write the result list, or the "no results" message when it is empty
pub fn write_results<W: Write>(out: &mut W, movies: &[&MovieRecord]) -> io::Result<()> {
    if movies.is_empty() {
        writeln!(
            out,
            "{} No results found. Try adjusting filters.",
            "✗".red()
        )?;
        return Ok(());
    }

    writeln!(out, "{} Found {} result(s):\n", "✓".green(), movies.len())?;
    for movie in movies {
        write_movie(out, movie)?;
    }
    Ok(())
}

/// One result block: title and year, genre and industry, rating, summary
fn write_movie<W: Write>(out: &mut W, movie: &MovieRecord) -> io::Result<()> {
    let year = movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| MISSING.to_string());
    let rating = movie
        .rating
        .map(|r| r.to_string())
        .unwrap_or_else(|| MISSING.to_string());

    writeln!(out, "{} ({})", movie.title.bold(), year)?;
    writeln!(
        out,
        "Genre: {} | Industry: {}",
        movie.genre.as_deref().unwrap_or(MISSING),
        movie.industry.as_deref().unwrap_or(MISSING)
    )?;
    writeln!(out, "Rating: {}", rating.yellow())?;
    writeln!(out, "Summary: {}", movie.summary)?;
    writeln!(out, "{}", "-".repeat(DIVIDER_WIDTH))
}

/// Write the result list as a JSON array
pub fn write_json<W: Write>(out: &mut W, movies: &[&MovieRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, movies)?;
    writeln!(out)?;
    Ok(())
}
