//! Admin screen: catalog upload, all rentals and the movies-per-year chart

use chrono::Datelike;
use common::{
    catalog::{BubblePoint, bubble_points, count_by_year},
    models::{Page, Rental},
    pagination::{CHART_PAGE_SIZE, PageQuery, Pager, RENTALS_PAGE_SIZE},
    validation::MovieForm,
};
use tracing::{error, info};

use crate::{
    api::RentStoreApi,
    error::{ClientError, ClientResult},
    screens::or_empty,
    widgets,
};

/// Message shown once the upstream accepted a new movie
pub const MOVIE_ADDED: &str = "Movie added successfully!";

/// Admin screen state
#[derive(Debug, Clone)]
pub struct AdminScreen {
    pub rentals: Page<Rental>,
    pub pager: Pager,
    pub chart: Vec<BubblePoint>,
}

impl AdminScreen {
    /// Fetch a page of all rentals and the chart data
    ///
    /// Either section renders empty when its fetch fails.
    pub async fn load(api: &RentStoreApi, page: u32) -> ClientResult<Self> {
        let query = PageQuery::new(page, RENTALS_PAGE_SIZE);
        let (rentals, chart) = tokio::join!(api.rentals(query), load_chart(api));
        let rentals = or_empty(rentals, "rentals");
        let chart = or_empty(chart, "movies for the chart");

        Ok(Self {
            pager: Pager::from_count(query.page, rentals.count, RENTALS_PAGE_SIZE),
            rentals,
            chart,
        })
    }

    pub fn render(&self) -> String {
        [
            "Admin Page".to_string(),
            String::new(),
            widgets::bubble_chart(&self.chart),
            String::new(),
            "All Rentals".to_string(),
            widgets::rentals_table(&self.rentals.results, true),
            String::new(),
            widgets::pagination_bar(&self.pager),
        ]
        .join("\n")
    }
}

/// Pull the whole catalog and count movies per publication year
pub async fn load_chart(api: &RentStoreApi) -> ClientResult<Vec<BubblePoint>> {
    let movies = api.movies(PageQuery::new(1, CHART_PAGE_SIZE)).await?;
    let counts = count_by_year(&movies.results, chrono::Utc::now().year());
    Ok(bubble_points(&counts))
}

/// Submit the upload form
pub async fn add_movie(api: &RentStoreApi, form: &MovieForm) -> ClientResult<&'static str> {
    let movie = form.validate()?;

    api.create_movie(&movie).await.map_err(|e| {
        error!("Error adding movie: {}", e);
        ClientError::AddMovieFailed
    })?;

    info!("Movie added successfully: {}", movie.title);
    Ok(MOVIE_ADDED)
}
