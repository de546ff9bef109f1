use std::sync::Arc;

use makedeveloper_api::config::AppConfig;
use makedeveloper_api::database::{self, repository::PgProjectRepository};
use makedeveloper_api::router::build_router;
use makedeveloper_api::state::AppState;

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up JWT_PRIVATE_KEY and DATABASE_URL.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            tracing::error!("Shutting down server");
            std::process::exit(1);
        }
    };

    let pool = match database::connect(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Could not connect to Postgres: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Postgres connected");

    if let Err(e) = database::migrate(&pool).await {
        tracing::error!("Migration failed: {}", e);
        std::process::exit(1);
    }

    let port = config.port;
    let state = AppState {
        repository: Arc::new(PgProjectRepository::new(pool)),
        config: Arc::new(config),
    };

    let app = build_router(state);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("MakeDeveloper API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
