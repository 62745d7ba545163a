use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use data_loader::{MovieCatalog, Score, Year};
use pipeline::{
    parse_min_rating, parse_min_year, recommend, FilterSpec, Selection, ANY, DEFAULT_LIMIT,
    DEFAULT_MIN_YEAR, MAX_YEAR_INPUT, MIN_YEAR_INPUT,
};
use rand::Rng;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

mod interactive;
mod render;

use interactive::Session;
use render::{write_json, write_results};

/// Dataset file looked up next to the executable, then in the working directory
const DATA_FILE_NAME: &str = "movies.csv";

/// ReelPicks - top-rated movie picker
#[derive(Parser)]
#[command(name = "reel-picks")]
#[command(about = "Pick top-rated movies by industry, genre, rating and year", long_about = None)]
struct Cli {
    /// Path to the movie dataset CSV [default: movies.csv next to the executable]
    #[arg(short, long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose filters at prompts and get picks, round after round (default)
    Interactive {
        /// Number of movies to show per round
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Run a single query from command-line filters
    Recommend {
        /// Exact industry to keep, or "Any"
        #[arg(long, default_value = ANY, value_parser = selection_arg)]
        industry: Selection,

        /// Exact genre to keep, or "Any"
        #[arg(long, default_value = ANY, value_parser = selection_arg)]
        genre: Selection,

        /// Minimum rating, 0-10
        #[arg(long, default_value = "0", value_parser = rating_arg)]
        min_rating: Score,

        /// Earliest release year, 1900-2050
        #[arg(long, default_value_t = DEFAULT_MIN_YEAR, value_parser = year_arg)]
        min_year: Year,

        /// Number of movies to return
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List the industries and genres available for filtering
    Options,

    /// Time randomly generated queries against the loaded dataset
    Benchmark {
        /// Number of queries to run
        #[arg(long, default_value = "1000")]
        requests: usize,

        /// Number of movies each query returns
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn selection_arg(s: &str) -> Result<Selection, String> {
    Ok(Selection::parse(s))
}

fn rating_arg(s: &str) -> Result<Score, String> {
    parse_min_rating(s).map_err(|e| e.to_string())
}

fn year_arg(s: &str) -> Result<Year, String> {
    parse_min_year(s).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with results
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    // Load the dataset before any prompt; a bad file ends the program here
    let data_file = resolve_data_file(cli.data_file);
    let catalog = MovieCatalog::load_from_file(&data_file).with_context(|| {
        format!(
            "Failed to load movie dataset from {}. Make sure {} is in the same folder!",
            data_file.display(),
            DATA_FILE_NAME
        )
    })?;

    // Dispatch to appropriate command handler
    match cli.command.unwrap_or(Commands::Interactive {
        limit: DEFAULT_LIMIT,
    }) {
        Commands::Interactive { limit } => handle_interactive(&catalog, limit)?,
        Commands::Recommend {
            industry,
            genre,
            min_rating,
            min_year,
            limit,
            format,
        } => {
            let spec = FilterSpec::new()
                .with_industry(industry)
                .with_genre(genre)
                .with_min_rating(min_rating)
                .with_min_year(min_year);
            handle_recommend(&catalog, &spec, limit, format)?
        }
        Commands::Options => handle_options(&catalog),
        Commands::Benchmark { requests, limit } => handle_benchmark(&catalog, requests, limit)?,
    }

    Ok(())
}

/// Pick the dataset path: explicit flag, else beside the executable, else cwd
fn resolve_data_file(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }
    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DATA_FILE_NAME)));
    match beside_exe {
        Some(path) if path.exists() => path,
        _ => Path::new(DATA_FILE_NAME).to_path_buf(),
    }
}

/// Handle the 'interactive' command
fn handle_interactive(catalog: &MovieCatalog, limit: usize) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(catalog, stdin.lock(), stdout.lock(), limit).run()
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: &MovieCatalog,
    spec: &FilterSpec,
    limit: usize,
    format: OutputFormat,
) -> Result<()> {
    let picks = recommend(catalog.records(), spec, limit);

    let mut stdout = io::stdout().lock();
    match format {
        OutputFormat::Text => write_results(&mut stdout, &picks)?,
        OutputFormat::Json => write_json(&mut stdout, &picks)?,
    }
    Ok(())
}

/// Handle the 'options' command
fn handle_options(catalog: &MovieCatalog) {
    println!("{}", "Industries:".bold().blue());
    println!("  - {}", ANY);
    for industry in catalog.distinct_industries() {
        println!("  - {}", industry);
    }

    println!("{}", "Genres:".bold().blue());
    println!("  - {}", ANY);
    for genre in catalog.distinct_genres() {
        println!("  - {}", genre);
    }

    println!(
        "{} {} movies, ratings 0-10, years {}-{}",
        "•".cyan(),
        catalog.len(),
        MIN_YEAR_INPUT,
        MAX_YEAR_INPUT
    );
}

/// Handle the 'benchmark' command
fn handle_benchmark(catalog: &MovieCatalog, requests: usize, limit: usize) -> Result<()> {
    ensure!(requests > 0, "benchmark needs at least one request");

    let industries = catalog.distinct_industries();
    let genres = catalog.distinct_genres();
    let mut rng = rand::rng();

    // Random filter specs, each field left at "Any" about a third of the time
    let specs: Vec<FilterSpec> = (0..requests)
        .map(|_| FilterSpec {
            industry: pick(&mut rng, &industries),
            genre: pick(&mut rng, &genres),
            min_rating: rng.random_range(0..=100) as Score / 10.0,
            min_year: Some(rng.random_range(MIN_YEAR_INPUT..=MAX_YEAR_INPUT)),
        })
        .collect();

    let mut timings: Vec<Duration> = Vec::with_capacity(requests);
    let mut returned = 0usize;
    let start = Instant::now();
    for spec in &specs {
        let query_start = Instant::now();
        returned += recommend(catalog.records(), spec, limit).len();
        timings.push(query_start.elapsed());
    }
    let total_time = start.elapsed();

    let avg_latency = mean_duration(&timings);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f64 / total_time.as_secs_f64();

    println!("Benchmark results:");
    println!("Queries: {} over {} movies", requests, catalog.len());
    println!("Movies returned: {}", returned);
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} queries/second", throughput);

    Ok(())
}

/// Mean of `timings`, zero when empty
fn mean_duration(timings: &[Duration]) -> Duration {
    if timings.is_empty() {
        return Duration::ZERO;
    }
    let total: Duration = timings.iter().sum();
    Duration::from_secs_f64(total.as_secs_f64() / timings.len() as f64)
}

/// A random concrete value from `options`, or `None` for "Any"
fn pick<R: Rng>(rng: &mut R, options: &[String]) -> Option<String> {
    if options.is_empty() || rng.random_range(0..3) == 0 {
        return None;
    }
    Some(options[rng.random_range(0..options.len())].clone())
}
