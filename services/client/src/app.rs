//! Client shell tying the session, the view router and the screens together

use common::validation::MovieForm;
use tracing::info;
use uuid::Uuid;

use crate::{
    api::RentStoreApi,
    config::ClientConfig,
    error::{ClientError, ClientResult},
    router::View,
    screens::{
        admin::{self, AdminScreen},
        home::{self, HomeScreen},
        login,
        profile::{self, ProfileScreen},
    },
    session::{Session, SessionStore},
    widgets,
};

/// Options of a paginated screen
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub page: u32,
    pub category: Option<String>,
}

/// Client application
#[derive(Debug, Clone)]
pub struct App {
    api: RentStoreApi,
    store: SessionStore,
}

impl App {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Ok(Self {
            api: RentStoreApi::new(&config.base_url)?,
            store: SessionStore::new(config.token_file.clone()),
        })
    }

    pub fn session(&self) -> ClientResult<Option<Session>> {
        self.store.load()
    }

    /// API client carrying the stored bearer token
    fn signed_in(&self) -> ClientResult<(Session, RentStoreApi)> {
        let session = self.session()?.ok_or(ClientError::NotSignedIn)?;
        let api = self.api.with_token(session.token());
        Ok((session, api))
    }

    /// Resolve `path` against the session and render the resulting screen
    pub async fn open(&self, path: &str, options: &ViewOptions) -> ClientResult<(View, String)> {
        let session = self.session()?;
        let view = View::resolve(path, session.as_ref());
        if view.path() != path.trim_end_matches('/') {
            info!("Navigating from {} to {}", path, view.path());
        }

        let rendered = match (view, session) {
            (View::Home, Some(session)) => {
                let api = self.api.with_token(session.token());
                HomeScreen::load(&api, options.page, options.category.clone())
                    .await?
                    .render()
            }
            (View::Profile, Some(session)) => {
                let api = self.api.with_token(session.token());
                ProfileScreen::load(&api, options.page).await?.render()
            }
            (View::Admin, Some(session)) => {
                let api = self.api.with_token(session.token());
                AdminScreen::load(&api, options.page).await?.render()
            }
            (View::NotFound, _) => format!("Nothing to show at {path}"),
            _ => "Sign in\n\nRun `deus login <username>` to continue.".to_string(),
        };

        Ok((view, rendered))
    }

    /// Sign in and open the landing screen
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<View> {
        let (_, landing) = login::login(&self.api, &self.store, username, password).await?;
        Ok(landing)
    }

    pub fn logout(&self) -> ClientResult<View> {
        login::logout(&self.store)
    }

    /// Detail dialog of a movie listed on `page`
    pub async fn movie(&self, uuid: Uuid, page: u32) -> ClientResult<String> {
        let (_, api) = self.signed_in()?;
        let screen = HomeScreen::load(&api, page, None).await?;
        Ok(widgets::movie_modal(screen.movie(uuid)?))
    }

    pub async fn rent(&self, movie: Uuid) -> ClientResult<&'static str> {
        let (_, api) = self.signed_in()?;
        home::rent(&api, movie).await
    }

    /// Add funds and report the new balance
    pub async fn deposit(&self, amount: f64) -> ClientResult<String> {
        let (_, api) = self.signed_in()?;
        let wallet = profile::deposit(&api, amount).await?;
        Ok(format!("Wallet Balance: {}", widgets::wallet(wallet)))
    }

    pub async fn return_movie(&self, rental: Uuid) -> ClientResult<()> {
        let (_, api) = self.signed_in()?;
        profile::return_movie(&api, rental).await
    }

    /// Submit the admin upload form
    pub async fn add_movie(&self, form: &MovieForm) -> ClientResult<&'static str> {
        let (session, api) = self.signed_in()?;
        if !session.is_admin() {
            return Err(ClientError::AdminOnly);
        }
        admin::add_movie(&api, form).await
    }
}
