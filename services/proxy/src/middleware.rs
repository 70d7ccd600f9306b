//! Request extraction and response layers shared by every route

use std::convert::Infallible;

use axum::{
    Router, async_trait,
    extract::FromRequestParts,
    http::{
        HeaderValue,
        header::{AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, EXPIRES, PRAGMA},
        request::Parts,
    },
};
use tower_http::{
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

/// `Authorization` header of the inbound request, forwarded verbatim upstream
#[derive(Debug, Clone, Default)]
pub struct ForwardedAuth(pub Option<HeaderValue>);

impl ForwardedAuth {
    pub fn header(&self) -> Option<&HeaderValue> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ForwardedAuth
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(ForwardedAuth(parts.headers.get(AUTHORIZATION).cloned()))
    }
}

/// CORS opened to every origin
///
/// `Access-Control-Allow-Headers` is sent on preflight responses only.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Wrap the router with tracing, CORS and the no-cache response headers
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
