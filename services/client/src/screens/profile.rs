//! Profile screen: account details, wallet and the user's rentals

use common::{
    models::{Page, Profile, Rental},
    pagination::{PageQuery, Pager, RENTALS_PAGE_SIZE},
};
use tracing::{error, info};
use uuid::Uuid;

use crate::{api::RentStoreApi, error::ClientResult, screens::or_empty, widgets};

/// Profile screen state
#[derive(Debug, Clone)]
pub struct ProfileScreen {
    pub profile: Option<Profile>,
    pub rentals: Page<Rental>,
    pub pager: Pager,
}

impl ProfileScreen {
    /// Fetch the account and a page of its rentals
    ///
    /// Each section renders empty when its fetch fails.
    pub async fn load(api: &RentStoreApi, page: u32) -> ClientResult<Self> {
        let query = PageQuery::new(page, RENTALS_PAGE_SIZE);
        let (profile, rentals) = tokio::join!(api.profile(), api.rentals(query));
        let profile = profile
            .map_err(|e| error!("Error fetching profile: {}", e))
            .ok();
        let rentals = or_empty(rentals, "rentals");

        Ok(Self {
            pager: Pager::from_count(query.page, rentals.count, RENTALS_PAGE_SIZE),
            profile,
            rentals,
        })
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["User Profile".to_string(), String::new()];
        match &self.profile {
            Some(profile) => lines.extend([
                format!("Email:          {}", profile.email),
                format!("First Name:     {}", profile.first_name),
                format!("Last Name:      {}", profile.last_name),
                format!("Wallet Balance: {}", widgets::wallet(profile.wallet)),
            ]),
            None => lines.push("Profile unavailable".to_string()),
        }
        lines.extend([
            String::new(),
            widgets::rentals_table(&self.rentals.results, false),
            String::new(),
            widgets::pagination_bar(&self.pager),
        ]);
        lines.join("\n")
    }
}

/// Add funds, returning the new wallet balance
pub async fn deposit(api: &RentStoreApi, amount: f64) -> ClientResult<f64> {
    let profile = api.deposit(amount).await?;
    info!("Amount added successfully, wallet is now {}", profile.wallet);
    Ok(profile.wallet)
}

/// Return a rented movie
pub async fn return_movie(api: &RentStoreApi, rental: Uuid) -> ClientResult<()> {
    api.return_rental(rental).await?;
    info!("Movie returned: {}", rental);
    Ok(())
}
