//! Filter to keep only movies from one film industry.

use crate::traits::Filter;
use data_loader::MovieRecord;

/// Keeps records whose industry equals the requested one exactly.
///
/// The comparison is case-sensitive with no normalization. Records with no
/// industry never match.
pub struct IndustryFilter {
    industry: String,
}

impl IndustryFilter {
    pub fn new(industry: impl Into<String>) -> Self {
        Self {
            industry: industry.into(),
        }
    }
}

impl Filter for IndustryFilter {
    fn name(&self) -> &str {
        "IndustryFilter"
    }

    fn apply<'a>(&self, movies: Vec<&'a MovieRecord>) -> Vec<&'a MovieRecord> {
        movies
            .into_iter()
            .filter(|movie| movie.industry.as_deref() == Some(self.industry.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::test_support::{movie, titles};

    #[test]
    fn test_industry_filter() {
        let movies = vec![
            movie("A", Some(2005), Some("Drama"), Some("Hollywood"), Some(7.5)),
            movie("B", Some(2010), Some("Comedy"), Some("hollywood"), Some(8.9)),
            movie("C", Some(1995), Some("Drama"), Some("Bollywood"), Some(9.0)),
            movie("D", Some(2001), Some("Drama"), None, Some(6.0)),
            movie("E", Some(2012), Some("Drama"), Some("Hollywood"), Some(5.0)),
        ];

        let filter = IndustryFilter::new("Hollywood");
        let filtered = filter.apply(movies.iter().collect());

        // Case-sensitive: "hollywood" is a different industry
        assert_eq!(titles(&filtered), vec!["A", "E"]);
    }
}
