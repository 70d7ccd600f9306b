//! Browse screen: paginated catalog, category filter and renting

use common::{
    catalog::filter_by_category,
    models::{Category, Movie, Page},
    pagination::{MOVIES_PAGE_SIZE, PageQuery, Pager},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    api::RentStoreApi,
    error::{ClientError, ClientResult},
    screens::or_empty,
    widgets,
};

/// Message shown once a rental went through
pub const RENTED: &str = "Movie rented successfully!";

/// Browse screen state
#[derive(Debug, Clone)]
pub struct HomeScreen {
    pub movies: Page<Movie>,
    pub categories: Vec<Category>,
    pub pager: Pager,
    pub selected_category: Option<String>,
}

impl HomeScreen {
    /// Fetch a page of movies and the category list
    ///
    /// A failing category fetch leaves the chips empty.
    pub async fn load(
        api: &RentStoreApi,
        page: u32,
        selected_category: Option<String>,
    ) -> ClientResult<Self> {
        let query = PageQuery::new(page, MOVIES_PAGE_SIZE);
        let (movies, categories) = tokio::join!(api.movies(query), api.categories());
        let movies = movies?;
        let categories = or_empty(categories, "categories");

        Ok(Self {
            pager: Pager::from_count(query.page, movies.count, MOVIES_PAGE_SIZE),
            movies,
            categories,
            selected_category,
        })
    }

    /// Movies of the current page matching the selected category
    pub fn visible_movies(&self) -> Vec<&Movie> {
        filter_by_category(&self.movies.results, self.selected_category.as_deref())
    }

    /// Movie of the current page by id
    pub fn movie(&self, uuid: Uuid) -> ClientResult<&Movie> {
        self.movies
            .results
            .iter()
            .find(|movie| movie.uuid == uuid)
            .ok_or(ClientError::MovieNotFound(uuid))
    }

    pub fn render(&self) -> String {
        let mut lines = vec![
            "Deus Movies".to_string(),
            String::new(),
            "Browse by category".to_string(),
            widgets::category_chips(&self.categories),
        ];
        if let Some(category) = &self.selected_category {
            lines.push(format!("Filtered by: {category}"));
        }
        lines.push(String::new());
        lines.push(widgets::movie_list(&self.visible_movies()));
        lines.push(String::new());

        let mut navigation = widgets::page_indicator(&self.pager);
        if self.pager.has_previous() {
            navigation.push_str(&format!("  previous: --page {}", self.pager.previous()));
        }
        if self.pager.has_next() {
            navigation.push_str(&format!("  next: --page {}", self.pager.next()));
        }
        lines.push(navigation);

        lines.join("\n")
    }
}

/// Rent a movie
pub async fn rent(api: &RentStoreApi, movie: Uuid) -> ClientResult<&'static str> {
    let rental = api.rent(movie).await?;
    info!("Movie rented successfully: {}", rental);
    Ok(RENTED)
}
