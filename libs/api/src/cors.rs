use anyhow::Context;
use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method},
    middleware::Next,
    response::Response,
    Router,
};
use tower::ServiceExt;
use tower_http::cors::{Any, CorsLayer};

use crate::Cors;

pub(crate) fn layer(cors: &Cors) -> anyhow::Result<CorsLayer> {
    if cors.allow_origins.is_empty()
        || cors.allow_origins.iter().any(|origin| origin == "*")
    {
        return Ok(CorsLayer::permissive());
    }

    let origins = cors
        .allow_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("invalid cors origin: {origin:?}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

/// `CorsLayer` answers every `OPTIONS` itself, so only real preflights and
/// non-`OPTIONS` requests go through the cors-wrapped router. Any other
/// `OPTIONS` runs the matched handler.
pub(crate) async fn route(
    State(with_cors): State<Router>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() == Method::OPTIONS && !is_preflight(&request) {
        return next.run(request).await;
    }

    match with_cors.oneshot(request).await {
        Ok(response) => response,
        Err(infallible) => match infallible {},
    }
}

fn is_preflight(request: &Request) -> bool {
    let headers = request.headers();

    headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}
