//! Proxy service routes
//!
//! Each handler re-issues the inbound call to the matching upstream path
//! and answers with the upstream JSON, or with the route's fixed failure
//! body when the upstream call fails.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, Query, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::{get, patch, post},
};
use common::{
    pagination::{MOVIES_PAGE_SIZE, RENTALS_PAGE_SIZE},
    validation::deposit_from_json,
};
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tower_http::services::ServeDir;
use tracing::info;
use uuid::Uuid;

use crate::{
    AppState,
    error::{Failure, ProxyError, ProxyResult},
    middleware::{self, ForwardedAuth},
    upstream::Expect,
};

/// Pagination parameters forwarded to the upstream
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    /// Query pairs with defaults filled in for missing or empty values
    pub fn with_defaults(&self, default_page_size: u32) -> [(&'static str, String); 2] {
        let or_default = |value: &Option<String>, default: u32| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map_or_else(|| default.to_string(), str::to_string)
        };

        [
            ("page", or_default(&self.page, 1)),
            ("page_size", or_default(&self.page_size, default_page_size)),
        ]
    }
}

/// Create the router for the proxy service
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/rent-store/movies", get(list_movies).post(create_movie))
        .route("/rent-store/categories", get(list_categories))
        .route("/rent-store/profile", get(get_profile).patch(deposit))
        .route("/rent-store/profile/", get(get_profile).patch(deposit))
        .route("/rent-store/rentals", get(list_rentals).post(rent_movie))
        .route("/rent-store/rentals/:uuid", patch(return_movie));

    let mut router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state.clone());

    if let Some(dir) = &state.static_dir {
        info!("Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    middleware::apply(router)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "proxy"
    }))
}

/// Parse a JSON request body, treating an empty body as `{}`
fn json_body(body: &Bytes) -> ProxyResult<Value> {
    if body.is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body).map_err(|e| ProxyError::BadRequest(e.to_string()))
}

/// Keep only the listed fields of a JSON object
fn pick(body: &Value, fields: &[&str]) -> Value {
    let picked = fields
        .iter()
        .filter_map(|&field| body.get(field).map(|v| (field.to_string(), v.clone())))
        .collect::<Map<_, _>>();
    Value::Object(picked)
}

/// Login endpoint
pub async fn login(State(state): State<AppState>, body: Bytes) -> ProxyResult<impl IntoResponse> {
    let credentials = pick(&json_body(&body)?, &["username", "password"]);
    let username = credentials
        .get("username")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    info!("Login attempt for user: {}", username);

    let request = state
        .upstream
        .request(Method::POST, "/auth/login/", None)
        .json(&credentials);
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::Generic))?;

    Ok(Json(body))
}

/// List a page of the movie catalog
pub async fn list_movies(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    Query(params): Query<PageParams>,
) -> ProxyResult<impl IntoResponse> {
    let request = state
        .upstream
        .request(Method::GET, "/rent-store/movies/", auth.header())
        .query(&params.with_defaults(MOVIES_PAGE_SIZE));
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::Generic))?;

    Ok(Json(body))
}

/// List categories, bypassing any upstream cache
pub async fn list_categories(
    State(state): State<AppState>,
    auth: ForwardedAuth,
) -> ProxyResult<impl IntoResponse> {
    let request = state
        .upstream
        .request(Method::GET, "/rent-store/categories/", auth.header())
        .header(header::CACHE_CONTROL, HeaderValue::from_static("no-cache"))
        .header(header::PRAGMA, HeaderValue::from_static("no-cache"))
        .header(header::EXPIRES, HeaderValue::from_static("0"));
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::Generic))?;

    Ok(Json(body))
}

/// Profile of the caller
pub async fn get_profile(
    State(state): State<AppState>,
    auth: ForwardedAuth,
) -> ProxyResult<impl IntoResponse> {
    let request = state
        .upstream
        .request(Method::GET, "/rent-store/profile/", auth.header());
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::Generic))?;

    Ok(Json(body))
}

/// Add funds to the caller's wallet
///
/// Missing or non-positive deposits are answered with 400 without calling
/// the upstream.
pub async fn deposit(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    body: Bytes,
) -> ProxyResult<impl IntoResponse> {
    let amount = deposit_from_json(&json_body(&body)?)?;

    let request = state
        .upstream
        .request(Method::PATCH, "/rent-store/profile/", auth.header())
        .json(&json!({ "deposit": amount }));
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::AddingFunds))?;

    info!("Amount added successfully: {}", amount);
    Ok((StatusCode::OK, Json(body)))
}

/// Rent a movie
pub async fn rent_movie(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    body: Bytes,
) -> ProxyResult<impl IntoResponse> {
    let rental = pick(&json_body(&body)?, &["movie"]);
    info!("Received rental request for movie: {}", rental["movie"]);

    let request = state
        .upstream
        .request(Method::POST, "/rent-store/rentals/", auth.header())
        .json(&rental);
    let body = state
        .upstream
        .send(request, Expect::Success)
        .await
        .map_err(ProxyError::upstream(Failure::Generic))?;

    Ok(Json(body))
}

/// List a page of rentals
pub async fn list_rentals(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    Query(params): Query<PageParams>,
) -> ProxyResult<impl IntoResponse> {
    let request = state
        .upstream
        .request(Method::GET, "/rent-store/rentals/", auth.header())
        .query(&params.with_defaults(RENTALS_PAGE_SIZE));
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::FetchingRentals))?;

    Ok(Json(body))
}

/// Mark a rental as returned
pub async fn return_movie(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    Path(uuid): Path<Uuid>,
) -> ProxyResult<impl IntoResponse> {
    let request = state.upstream.request(
        Method::PATCH,
        &format!("/rent-store/rentals/{uuid}"),
        auth.header(),
    );
    let body = state
        .upstream
        .send(request, Expect::Ok)
        .await
        .map_err(ProxyError::upstream(Failure::ReturningMovie))?;

    info!("Movie returned successfully: {}", uuid);
    Ok((StatusCode::OK, Json(body)))
}

/// Add a movie to the catalog
pub async fn create_movie(
    State(state): State<AppState>,
    auth: ForwardedAuth,
    body: Bytes,
) -> ProxyResult<impl IntoResponse> {
    let movie = pick(
        &json_body(&body)?,
        &[
            "title",
            "pub_date",
            "duration",
            "rating",
            "description",
            "categories",
        ],
    );

    let request = state
        .upstream
        .request(Method::POST, "/rent-store/movies/", auth.header())
        .json(&movie);
    let body = state
        .upstream
        .send(request, Expect::Created)
        .await
        .map_err(ProxyError::upstream(Failure::AddingMovie))?;

    Ok((StatusCode::CREATED, Json(body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_fill_defaults() {
        let params = PageParams::default();
        assert_eq!(
            params.with_defaults(12),
            [("page", "1".to_string()), ("page_size", "12".to_string())]
        );

        let params = PageParams {
            page: Some("3".into()),
            page_size: Some(String::new()),
        };
        assert_eq!(
            params.with_defaults(5),
            [("page", "3".to_string()), ("page_size", "5".to_string())]
        );
    }

    #[test]
    fn pick_drops_unknown_and_missing_fields() {
        let body = json!({"movie": "abc", "user": "mallory"});
        assert_eq!(pick(&body, &["movie", "charge"]), json!({"movie": "abc"}));
        assert_eq!(pick(&json!([1, 2]), &["movie"]), json!({}));
    }

    #[test]
    fn empty_body_is_an_empty_object() {
        assert_eq!(json_body(&Bytes::new()).unwrap(), json!({}));
        assert!(json_body(&Bytes::from_static(b"{not json")).is_err());
    }
}
