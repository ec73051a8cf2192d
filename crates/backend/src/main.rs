pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    system::auth::jwt::initialize_secret(config.auth.jwt_secret.as_deref());
    shared::source::initialize_source(&config)?;

    // Initial fixture load; the store starts empty if nothing is on disk.
    let fixtures_dir = shared::config::get_fixtures_dir(&config)?;
    let datasets = shared::data::fixture::load_datasets(&fixtures_dir)?;
    let series = shared::data::fixture::load_spend_series(&fixtures_dir)?;
    tracing::info!(
        "Loaded {} vendor dataset(s) from {}",
        datasets.len(),
        fixtures_dir.display()
    );
    let _ = shared::data::store::replace(datasets, series);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    let app = routes::configure_routes()
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Analytics backend listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
