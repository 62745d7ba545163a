//! Interactive session: the four filter controls and the "Recommend" action.
//!
//! Each round asks for industry, genre, minimum rating and minimum year,
//! runs one query and prints the result. The session ends when the user
//! declines another round or input runs out.

use anyhow::Result;
use colored::Colorize;
use data_loader::{MovieCatalog, Score, Year};
use pipeline::{
    parse_min_rating, parse_min_year, recommend, FilterSpec, Selection, ANY, DEFAULT_MIN_YEAR,
    MAX_YEAR_INPUT, MIN_YEAR_INPUT,
};
use std::io::{BufRead, Write};

use crate::render::write_results;

pub struct Session<'a, R, W> {
    catalog: &'a MovieCatalog,
    input: R,
    output: W,
    limit: usize,
    industries: Vec<String>,
    genres: Vec<String>,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    /// Create a session. Selector options are taken from the catalog once.
    pub fn new(catalog: &'a MovieCatalog, input: R, output: W, limit: usize) -> Self {
        Self {
            catalog,
            input,
            output,
            limit,
            industries: catalog.distinct_industries(),
            genres: catalog.distinct_genres(),
        }
    }

    /// Run rounds until the user stops or input ends
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", "Movie Recommender".bold().blue())?;

        loop {
            let Some(spec) = self.read_spec()? else {
                break;
            };

            let picks = recommend(self.catalog.records(), &spec, self.limit);
            tracing::info!(?spec, results = picks.len(), "Recommend");

            writeln!(self.output)?;
            write_results(&mut self.output, &picks)?;

            if !self.confirm("Recommend again? [Y/n]: ")? {
                break;
            }
        }
        Ok(())
    }

    /// Collect the four filter values. `None` when input ends midway.
    fn read_spec(&mut self) -> Result<Option<FilterSpec>> {
        let industries = self.industries.clone();
        let Some(industry) = self.choose("Industry", &industries)? else {
            return Ok(None);
        };

        let genres = self.genres.clone();
        let Some(genre) = self.choose("Genre", &genres)? else {
            return Ok(None);
        };

        let Some(min_rating) = self.ask_min_rating()? else {
            return Ok(None);
        };

        let Some(min_year) = self.ask_min_year()? else {
            return Ok(None);
        };

        Ok(Some(
            FilterSpec::new()
                .with_industry(industry)
                .with_genre(genre)
                .with_min_rating(min_rating)
                .with_min_year(min_year),
        ))
    }

    /// Pick "Any" or one of `options`, by name or by listed number
    fn choose(&mut self, label: &str, options: &[String]) -> Result<Option<Selection>> {
        writeln!(self.output, "\n{}:", label.bold())?;
        writeln!(self.output, "  0) {}", ANY)?;
        for (i, option) in options.iter().enumerate() {
            writeln!(self.output, "  {}) {}", i + 1, option)?;
        }

        loop {
            let Some(line) = self.prompt(&format!("Choose {} [{}]: ", label.to_lowercase(), ANY))?
            else {
                return Ok(None);
            };

            if let Ok(index) = line.parse::<usize>() {
                match index {
                    0 => return Ok(Some(Selection::Any)),
                    n if n <= options.len() => {
                        return Ok(Some(Selection::Exactly(options[n - 1].clone())));
                    }
                    _ => {
                        writeln!(self.output, "{} No option numbered {}", "✗".red(), index)?;
                        continue;
                    }
                }
            }

            match Selection::parse(&line) {
                Selection::Any => return Ok(Some(Selection::Any)),
                Selection::Exactly(value) if options.contains(&value) => {
                    return Ok(Some(Selection::Exactly(value)));
                }
                Selection::Exactly(value) => {
                    writeln!(
                        self.output,
                        "{} Unknown {} '{}'",
                        "✗".red(),
                        label.to_lowercase(),
                        value
                    )?;
                }
            }
        }
    }

    fn ask_min_rating(&mut self) -> Result<Option<Score>> {
        loop {
            let Some(line) = self.prompt("Minimum rating (0-10) [0]: ")? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(0.0));
            }
            match parse_min_rating(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
            }
        }
    }

    fn ask_min_year(&mut self) -> Result<Option<Year>> {
        let question = format!(
            "Released in or after ({}-{}) [{}]: ",
            MIN_YEAR_INPUT, MAX_YEAR_INPUT, DEFAULT_MIN_YEAR
        );
        loop {
            let Some(line) = self.prompt(&question)? else {
                return Ok(None);
            };
            if line.is_empty() {
                return Ok(Some(DEFAULT_MIN_YEAR));
            }
            match parse_min_year(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{} {}", "✗".red(), e)?,
            }
        }
    }

    /// Yes unless the answer starts with 'n'. End of input counts as no.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(self
            .prompt(question)?
            .is_some_and(|answer| !answer.to_lowercase().starts_with('n')))
    }

    /// Print `question` and read one trimmed line, `None` at end of input
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}
