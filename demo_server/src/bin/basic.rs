//! Basic demo: path echo, paged items, and an in-memory resource list.
//!
//! Run from repo root: `cargo run -p demo-server --bin basic-demo`

use quarry_sdk::{basic_routes, DemoState, Settings};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("quarry_sdk=info,tower_http=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    let port = settings.port;
    let app = basic_routes(DemoState::new(settings));

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("basic demo listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
