//! Client-side helpers over movies already fetched from the upstream
//!
//! Category filtering works on the current page only, and the per-year
//! aggregation feeds the admin bubble chart.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Movie;

/// Earliest year (exclusive) counted by the year aggregation
pub const EARLIEST_YEAR: i32 = 1850;

/// Movies of the page that belong to `category`, or all of them without a filter
pub fn filter_by_category<'a>(movies: &'a [Movie], category: Option<&str>) -> Vec<&'a Movie> {
    match category.filter(|c| !c.is_empty()) {
        Some(category) => movies
            .iter()
            .filter(|movie| movie.categories.iter().any(|c| c == category))
            .collect(),
        None => movies.iter().collect(),
    }
}

/// Split a comma-separated category list, trimming every entry
pub fn parse_categories(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

/// Number of movies per publication year
///
/// Movies without a year, or with a year outside `(1850, current_year]`,
/// are left out.
pub fn count_by_year(movies: &[Movie], current_year: i32) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for movie in movies {
        match movie.pub_date {
            Some(year) if year > EARLIEST_YEAR && year <= current_year => {
                *counts.entry(year).or_insert(0) += 1;
            }
            Some(year) => tracing::debug!(title = %movie.title, year, "year out of range"),
            None => tracing::warn!(title = %movie.title, "movie has invalid or missing pub_date"),
        }
    }
    counts
}

/// Point of the movies-per-year bubble chart
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BubblePoint {
    /// Number of movies
    pub x: usize,
    /// Publication year
    pub y: i32,
    /// Bubble radius
    pub r: usize,
}

/// Chart points ordered by year
pub fn bubble_points(counts: &BTreeMap<i32, usize>) -> Vec<BubblePoint> {
    counts
        .iter()
        .map(|(&year, &count)| BubblePoint {
            x: count,
            y: year,
            r: count * 3,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn movie(title: &str, year: Option<i32>, categories: &[&str]) -> Movie {
        Movie {
            uuid: Uuid::new_v4(),
            title: title.to_string(),
            pub_date: year,
            duration: Some(100.0),
            rating: Some(7.0),
            description: String::new(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            poster_url: None,
        }
    }

    #[test]
    fn filter_matches_exact_category() {
        let movies = vec![
            movie("Alien", Some(1979), &["Horror", "Sci-Fi"]),
            movie("Heat", Some(1995), &["Crime"]),
        ];

        let horror = filter_by_category(&movies, Some("Horror"));
        assert_eq!(horror.len(), 1);
        assert_eq!(horror[0].title, "Alien");

        assert_eq!(filter_by_category(&movies, None).len(), 2);
        assert_eq!(filter_by_category(&movies, Some("")).len(), 2);
        assert!(filter_by_category(&movies, Some("Hor")).is_empty());
    }

    #[test]
    fn categories_are_trimmed() {
        assert_eq!(
            parse_categories(" Drama,Comedy ,  , Sci-Fi"),
            vec!["Drama", "Comedy", "Sci-Fi"]
        );
        assert!(parse_categories("").is_empty());
    }

    #[test]
    fn year_counts_skip_out_of_range() {
        let movies = vec![
            movie("A", Some(1999), &[]),
            movie("B", Some(1999), &[]),
            movie("C", Some(2001), &[]),
            movie("D", Some(1850), &[]),
            movie("E", Some(2100), &[]),
            movie("F", None, &[]),
        ];

        let counts = count_by_year(&movies, 2026);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&1999], 2);
        assert_eq!(counts[&2001], 1);

        let points = bubble_points(&counts);
        assert_eq!(points[0], BubblePoint { x: 2, y: 1999, r: 6 });
        assert_eq!(points[1], BubblePoint { x: 1, y: 2001, r: 3 });
    }
}
