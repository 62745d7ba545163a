//! The query engine entry point: filter, rank, truncate.

use crate::filter_pipeline::FilterPipeline;
use crate::query::FilterSpec;
use data_loader::{MovieRecord, Score};
use std::cmp::Ordering;
use tracing::debug;

/// Top `limit` records matching `spec`, best rated first.
///
/// ## Algorithm
/// 1. Take a borrowed view of every record (the input is never mutated)
/// 2. Run the filters built from `spec`
/// 3. Stable sort by rating descending, so equal ratings keep dataset order
/// 4. Keep the first `limit`
///
/// An empty result means nothing matched; it is not an error.
pub fn recommend<'a>(
    records: &'a [MovieRecord],
    spec: &FilterSpec,
    limit: usize,
) -> Vec<&'a MovieRecord> {
    let pipeline = FilterPipeline::from_spec(spec);
    let mut ranked = pipeline.apply(records.iter().collect());

    rank_by_rating(&mut ranked);
    ranked.truncate(limit);

    debug!(
        scanned = records.len(),
        returned = ranked.len(),
        limit,
        "Recommendation query complete"
    );
    ranked
}

/// Sort records by rating, highest first. Ties keep their current order.
///
/// Unrated records sort last; the filters normally remove them beforehand.
pub fn rank_by_rating(movies: &mut [&MovieRecord]) {
    movies.sort_by(|a, b| {
        sort_key(b)
            .partial_cmp(&sort_key(a))
            .unwrap_or(Ordering::Equal)
    });
}

fn sort_key(movie: &MovieRecord) -> Score {
    movie.rating.unwrap_or(Score::NEG_INFINITY)
}
