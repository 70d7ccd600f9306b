//! HTTP client for the proxy relay's `/api` routes

use common::{
    models::{
        Category, DepositRequest, LoginRequest, LoginResponse, Movie, NewMovie, Page, Profile,
        RentRequest, Rental,
    },
    pagination::PageQuery,
    validation::validate_deposit,
};
use reqwest::{Client, Method, RequestBuilder};
use serde::{Deserialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

/// Category listing, either bare or wrapped in a pagination envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Listing<T> {
    Page(Page<T>),
    List(Vec<T>),
}

impl<T> Listing<T> {
    fn into_items(self) -> Vec<T> {
        match self {
            Listing::Page(page) => page.results,
            Listing::List(items) => items,
        }
    }
}

/// Rent-store API client
#[derive(Debug, Clone)]
pub struct RentStoreApi {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl RentStoreApi {
    /// Create a client for the relay at `base_url`
    pub fn new(base_url: &str) -> ClientResult<Self> {
        Ok(Self {
            http: Client::builder().build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Copy of this client sending the given bearer token
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            token: Some(token.to_string()),
            ..self.clone()
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, format!("{}/api{}", self.base_url, path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ClientResult<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            debug!(%status, %body, "Request rejected");
            return Err(ClientError::Rejected {
                status,
                message: body
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("error")
                    .to_string(),
            });
        }

        Ok(response.json().await?)
    }

    /// Exchange credentials for a token pair
    pub async fn login(&self, credentials: &LoginRequest) -> ClientResult<LoginResponse> {
        self.send(self.request(Method::POST, "/auth/login").json(credentials))
            .await
    }

    pub async fn movies(&self, query: PageQuery) -> ClientResult<Page<Movie>> {
        self.send(self.request(Method::GET, "/rent-store/movies").query(&query))
            .await
    }

    pub async fn categories(&self) -> ClientResult<Vec<Category>> {
        let listing: Listing<Category> = self
            .send(self.request(Method::GET, "/rent-store/categories"))
            .await?;
        Ok(listing.into_items())
    }

    pub async fn profile(&self) -> ClientResult<Profile> {
        self.send(self.request(Method::GET, "/rent-store/profile"))
            .await
    }

    /// Add funds to the wallet, refusing non-positive amounts locally
    pub async fn deposit(&self, amount: f64) -> ClientResult<Profile> {
        let deposit = validate_deposit(Some(amount))?;
        self.send(
            self.request(Method::PATCH, "/rent-store/profile/")
                .json(&DepositRequest { deposit }),
        )
        .await
    }

    /// Rent a movie, returning the upstream rental record
    pub async fn rent(&self, movie: Uuid) -> ClientResult<Value> {
        self.send(
            self.request(Method::POST, "/rent-store/rentals")
                .json(&RentRequest { movie }),
        )
        .await
    }

    pub async fn rentals(&self, query: PageQuery) -> ClientResult<Page<Rental>> {
        self.send(self.request(Method::GET, "/rent-store/rentals").query(&query))
            .await
    }

    /// Mark a rental as returned
    pub async fn return_rental(&self, rental: Uuid) -> ClientResult<Value> {
        self.send(self.request(
            Method::PATCH,
            &format!("/rent-store/rentals/{rental}"),
        ))
        .await
    }

    /// Add a movie to the catalog (admin only)
    pub async fn create_movie(&self, movie: &NewMovie) -> ClientResult<Value> {
        self.send(self.request(Method::POST, "/rent-store/movies").json(movie))
            .await
    }
}
