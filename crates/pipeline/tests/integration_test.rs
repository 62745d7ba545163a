//! Integration tests for the query engine.
//!
//! These tests run `recommend` end to end: the worked examples first, then
//! the ranking properties checked against generated catalogs.

use data_loader::MovieRecord;
use pipeline::{recommend, FilterSpec, Selection, DEFAULT_LIMIT};
use proptest::prelude::*;

fn movie(title: &str, year: i32, genre: &str, industry: &str, rating: f32) -> MovieRecord {
    MovieRecord {
        title: title.to_string(),
        year: Some(year),
        genre: Some(genre.to_string()),
        industry: Some(industry.to_string()),
        rating: Some(rating),
        summary: format!("Summary of {}", title),
    }
}

fn create_test_catalog() -> Vec<MovieRecord> {
    vec![
        movie("A", 2005, "Drama", "Hollywood", 7.5),
        movie("B", 2010, "Comedy", "Hollywood", 8.9),
        movie("C", 1995, "Drama", "Bollywood", 9.0),
    ]
}

fn titles(movies: &[&MovieRecord]) -> Vec<String> {
    movies.iter().map(|m| m.title.clone()).collect()
}

#[test]
fn test_industry_and_year_example() {
    let catalog = create_test_catalog();
    let spec = FilterSpec::new()
        .with_industry(Selection::parse("Hollywood"))
        .with_min_year(2000);

    let result = recommend(&catalog, &spec, DEFAULT_LIMIT);

    // C is Bollywood; B outranks A
    assert_eq!(titles(&result), vec!["B", "A"]);
}

#[test]
fn test_rating_threshold_with_no_matches() {
    let catalog = create_test_catalog();
    let spec = FilterSpec::new().with_min_rating(9.5);

    let result = recommend(&catalog, &spec, DEFAULT_LIMIT);
    assert!(result.is_empty(), "No movie is rated 9.5 or above");
}

#[test]
fn test_any_sentinel_disables_filters() {
    let catalog = create_test_catalog();
    let spec = FilterSpec::new()
        .with_industry(Selection::parse("Any"))
        .with_genre(Selection::parse("Any"));

    let result = recommend(&catalog, &spec, DEFAULT_LIMIT);
    assert_eq!(titles(&result), vec!["C", "B", "A"]);
}

#[test]
fn test_genre_and_industry_combined() {
    let catalog = create_test_catalog();
    let spec = FilterSpec::new()
        .with_industry(Selection::parse("Hollywood"))
        .with_genre(Selection::parse("Drama"))
        .with_min_rating(7.5)
        .with_min_year(2005);

    let result = recommend(&catalog, &spec, DEFAULT_LIMIT);
    assert_eq!(titles(&result), vec!["A"]);
}

#[test]
fn test_missing_fields_never_match() {
    let mut catalog = create_test_catalog();
    catalog.push(MovieRecord {
        title: "Undated".to_string(),
        year: None,
        genre: Some("Drama".to_string()),
        industry: Some("Hollywood".to_string()),
        rating: Some(9.9),
        summary: String::new(),
    });
    catalog.push(MovieRecord {
        title: "Unrated".to_string(),
        year: Some(2020),
        genre: Some("Drama".to_string()),
        industry: Some("Hollywood".to_string()),
        rating: None,
        summary: String::new(),
    });

    let result = recommend(&catalog, &FilterSpec::new(), DEFAULT_LIMIT);
    assert_eq!(titles(&result), vec!["C", "B", "A"]);
}

// =============================================================================
// Properties over generated catalogs
// =============================================================================

const INDUSTRIES: &[&str] = &["Hollywood", "Bollywood", "Tollywood"];
const GENRES: &[&str] = &["Drama", "Comedy", "Action", "Horror"];

fn arb_catalog() -> impl Strategy<Value = Vec<MovieRecord>> {
    let row = (
        prop::option::weighted(0.9, 1950..2030i32),
        prop::option::weighted(0.9, prop::sample::select(GENRES)),
        prop::option::weighted(0.9, prop::sample::select(INDUSTRIES)),
        prop::option::weighted(0.9, (0u8..=100).prop_map(|x| x as f32 / 10.0)),
    );
    prop::collection::vec(row, 0..60).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (year, genre, industry, rating))| MovieRecord {
                title: format!("Movie {}", i),
                year,
                genre: genre.map(str::to_string),
                industry: industry.map(str::to_string),
                rating,
                summary: String::new(),
            })
            .collect()
    })
}

fn arb_spec() -> impl Strategy<Value = FilterSpec> {
    (
        prop::option::of(prop::sample::select(INDUSTRIES)),
        prop::option::of(prop::sample::select(GENRES)),
        (0u8..=100).prop_map(|x| x as f32 / 10.0),
        prop::option::of(1940..2040i32),
    )
        .prop_map(|(industry, genre, min_rating, min_year)| FilterSpec {
            industry: industry.map(str::to_string),
            genre: genre.map(str::to_string),
            min_rating,
            min_year,
        })
}

fn matches(movie: &MovieRecord, spec: &FilterSpec) -> bool {
    let industry_ok = spec
        .industry
        .as_ref()
        .is_none_or(|i| movie.industry.as_ref() == Some(i));
    let genre_ok = spec
        .genre
        .as_ref()
        .is_none_or(|g| movie.genre.as_ref() == Some(g));
    let rating_ok = movie.rating.is_some_and(|r| r >= spec.min_rating);
    let year_ok = movie
        .year
        .is_some_and(|y| spec.min_year.is_none_or(|min| y >= min));
    industry_ok && genre_ok && rating_ok && year_ok
}

proptest! {
    #[test]
    fn results_satisfy_every_constraint(
        catalog in arb_catalog(),
        spec in arb_spec(),
        limit in 0usize..30,
    ) {
        let result = recommend(&catalog, &spec, limit);

        prop_assert!(result.len() <= limit);
        for movie in &result {
            if let Some(industry) = &spec.industry {
                prop_assert_eq!(movie.industry.as_ref(), Some(industry));
            }
            if let Some(genre) = &spec.genre {
                prop_assert_eq!(movie.genre.as_ref(), Some(genre));
            }
            prop_assert!(movie.rating.is_some_and(|r| r >= spec.min_rating));
            if let Some(min_year) = spec.min_year {
                prop_assert!(movie.year.is_some_and(|y| y >= min_year));
            }
        }
    }

    #[test]
    fn results_sorted_by_rating(catalog in arb_catalog(), spec in arb_spec()) {
        let result = recommend(&catalog, &spec, DEFAULT_LIMIT);

        for pair in result.windows(2) {
            prop_assert!(pair[0].rating >= pair[1].rating);
        }
    }

    #[test]
    fn result_size_is_matches_capped_by_limit(
        catalog in arb_catalog(),
        spec in arb_spec(),
        limit in 0usize..30,
    ) {
        let matching = catalog.iter().filter(|m| matches(m, &spec)).count();
        let result = recommend(&catalog, &spec, limit);

        prop_assert_eq!(result.len(), matching.min(limit));
    }

    #[test]
    fn unconstrained_query_is_top_by_rating(catalog in arb_catalog(), limit in 0usize..30) {
        let spec = FilterSpec::new()
            .with_industry(Selection::parse("Any"))
            .with_genre(Selection::parse("Any"))
            .with_min_rating(0.0)
            .with_min_year(1900);

        let mut expected: Vec<&MovieRecord> = catalog
            .iter()
            .filter(|m| m.rating.is_some() && m.year.is_some())
            .collect();
        expected.sort_by(|a, b| b.rating.unwrap_or(0.0).total_cmp(&a.rating.unwrap_or(0.0)));
        expected.truncate(limit);

        let result = recommend(&catalog, &spec, limit);
        prop_assert_eq!(titles(&result), titles(&expected));
    }
}
