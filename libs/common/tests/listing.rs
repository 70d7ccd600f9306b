//! Integration tests over upstream listing payloads
//!
//! These tests verify that a movies page as sent by the upstream can be
//! paginated, filtered and aggregated without further reshaping.

use common::{
    catalog::{bubble_points, count_by_year, filter_by_category},
    models::{Movie, Page},
    pagination::{MOVIES_PAGE_SIZE, Pager},
};

const PAYLOAD: &str = r#"{
    "count": 26,
    "next": "http://upstream/rent-store/movies/?page=2&page_size=12",
    "previous": null,
    "results": [
        {"uuid": "6f1c1a8e-9a4b-4d5c-8f0e-2b1d3c4e5f60", "title": "Heat", "pub_date": 1995,
         "duration": 170, "rating": 8.3, "description": "", "categories": ["Crime", "Drama"]},
        {"uuid": "0a7e3b52-51a4-4f0e-9a4e-0c6b1f8d2e11", "title": "Casino", "pub_date": "1995",
         "duration": 178, "rating": 8.2, "description": "", "categories": ["Crime"]},
        {"uuid": "9b2d1e44-3f6a-4c1b-8e7d-5a4c3b2a1f00", "title": "Metropolis", "pub_date": 1927,
         "duration": 153, "rating": 8.3, "description": "", "categories": ["Sci-Fi"]}
    ]
}"#;

#[test]
fn test_movies_page_drives_browse_and_chart() {
    let page: Page<Movie> = serde_json::from_str(PAYLOAD).expect("Failed to parse movies page");

    let pager = Pager::from_count(1, page.count, MOVIES_PAGE_SIZE);
    assert_eq!(pager.total(), 3, "26 movies at 12 per page");
    assert!(pager.has_next());

    let crime = filter_by_category(&page.results, Some("Crime"));
    assert_eq!(
        crime.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
        vec!["Heat", "Casino"]
    );

    let points = bubble_points(&count_by_year(&page.results, 2026));
    assert_eq!(points.len(), 2);
    assert_eq!((points[0].y, points[0].x), (1927, 1));
    assert_eq!((points[1].y, points[1].x, points[1].r), (1995, 2, 6));
}
