use std::sync::Arc;

use sqlx::sqlite::SqlitePoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lacquer::{
    api,
    config::Settings,
    repository::{
        SqliteServiceRepository, SqliteServiceTypeRepository, SqliteServicesPackRepository,
    },
    storage::LocalStorageProvider,
    usecase::UseCaseContext,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lacquer=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let settings = Settings::new().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config: {}. Using defaults.", e);
        Settings::default()
    });

    tracing::info!(
        "Starting Lacquer server on {}:{}",
        settings.server.host,
        settings.server.port
    );

    // Initialize database
    let db_pool = SqlitePoolOptions::new()
        .max_connections(settings.database.max_connections)
        .connect(&settings.database.url)
        .await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&db_pool).await?;

    // Initialize repositories; the service repository resolves its
    // service-type snapshots through the shared service-type repository.
    let service_type_repo = Arc::new(SqliteServiceTypeRepository::new(db_pool.clone()));
    let service_repo = Arc::new(SqliteServiceRepository::new(
        db_pool.clone(),
        service_type_repo.clone(),
    ));
    let services_pack_repo = Arc::new(SqliteServicesPackRepository::new(db_pool.clone()));

    // Build the use-case graph once at startup
    let context = Arc::new(UseCaseContext::new(
        service_type_repo,
        service_repo,
        services_pack_repo,
    ));

    let storage = Arc::new(LocalStorageProvider::new(
        settings.storage.uploads_dir.clone(),
    ));

    let app = api::create_app(context, storage, Arc::new(settings.clone()));

    let listener = tokio::net::TcpListener::bind(format!(
        "{}:{}",
        settings.server.host, settings.server.port
    ))
    .await?;

    tracing::info!(
        "Server listening on http://{}:{}",
        settings.server.host,
        settings.server.port
    );

    axum::serve(listener, app).await?;

    Ok(())
}
