use shuttle_runtime::{Error, SecretStore, Secrets};

#[shuttle_runtime::main]
async fn main(
    #[Secrets] secret_store: SecretStore,
) -> shuttle_axum::ShuttleAxum {
    if secret_store.get("ENV").map_or(true, |env| env == "prod") {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .init();
    }

    let mut config = api::Config::default();
    if let Some(origins) = secret_store.get("CORS_ALLOW_ORIGINS") {
        config.cors.allow_origins = origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();
    }

    let router = api::serve(&config)
        .await
        .map_err(|e| Error::BuildPanic(e.to_string()))?;

    Ok(router.into())
}
