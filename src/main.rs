mod cache;
mod config;
mod db;
mod handlers;
mod models;
mod routes;
mod state;
mod store;

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{config::Config, state::AppState, store::PgCategoryStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| {
        tracing::error!("Configuración inválida: {}", e);
        e
    })?;

    let pool = db::init_db(&config).await.map_err(|e| {
        tracing::error!("Error al conectar a la base de datos: {}", e);
        e
    })?;
    tracing::info!("✅ Conexión a Postgres exitosa");

    let state = AppState::new(
        Arc::new(PgCategoryStore::new(pool)),
        config.categories_cache_ttl,
        config.invalidate_cache_on_write,
    );

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = routes::create_routes(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 API de categorías corriendo en http://{}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Servidor detenido");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("No se pudo escuchar Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
}
