use data_loader::MovieCatalog;
use std::path::PathBuf;
use std::time::Instant;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("data/movies.csv"));

    println!("Loading movie dataset from {}...\n", path.display());

    let start = Instant::now();
    let catalog = MovieCatalog::load_from_file(&path)?;
    let elapsed = start.elapsed();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!("Industries: {}", catalog.distinct_industries().join(", "));
    println!("Genres: {}", catalog.distinct_genres().join(", "));
    println!("\nPerformance: {:.0} movies/second",
             catalog.len() as f64 / elapsed.as_secs_f64());
    Ok(())
}
