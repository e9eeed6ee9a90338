use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::{
    openapi::{self, PathItemType},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod cors;
pub mod event;
pub mod healthz;
pub mod not_found;

pub use config::{Config, Cors, Server};

use crate::event::response::{EventRecord, EventResponse};

#[derive(OpenApi)]
#[openapi(
    paths(event::get_events, healthz::get_health),
    components(schemas(EventResponse, EventRecord)),
    modifiers(&AnyMethod),
    tags(
        (name = "events", description = "Event listing API")
    )
)]
struct ApiDoc;

/// Event routes answer every method, so the documented `get` operation is
/// copied to the other methods and to the `/events` alias.
struct AnyMethod;

impl Modify for AnyMethod {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let paths = &mut openapi.paths.paths;
        let Some(mut item) = paths.get("/api/events").cloned() else {
            return;
        };
        let Some(get) = item.operations.get(&PathItemType::Get).cloned()
        else {
            return;
        };

        for (method, name) in [
            (PathItemType::Post, "post"),
            (PathItemType::Put, "put"),
            (PathItemType::Delete, "delete"),
            (PathItemType::Options, "options"),
            (PathItemType::Head, "head"),
            (PathItemType::Patch, "patch"),
        ] {
            let mut operation = get.clone();
            operation.operation_id = Some(format!("{name}_events"));
            item.operations.insert(method, operation);
        }

        paths.insert("/events".to_string(), item.clone());
        paths.insert("/api/events".to_string(), item);
    }
}

pub async fn serve(config: &Config) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    router(config)
}

pub fn router(config: &Config) -> anyhow::Result<Router> {
    let cors = cors::layer(&config.cors)?;

    let routes = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .route("/healthz", get(healthz::get_health))
        .route("/api/events", any(event::get_events))
        .route("/events", any(event::get_events))
        .fallback(not_found::get_404);

    let with_cors = routes.clone().layer(cors);
    let router = routes
        .layer(middleware::from_fn_with_state(with_cors, cors::route))
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
