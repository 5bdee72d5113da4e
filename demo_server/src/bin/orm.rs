//! ORM demo: users and posts in a SQLite file, queried through the model façade.
//!
//! Run from repo root: `cargo run -p demo-server --bin orm-demo`

use quarry_sdk::{api_routes, apply_demo_schema, connect, load_or_demo, AppState, Settings};
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
    let pool = connect(&settings.database_url).await?;
    apply_demo_schema(&pool).await?;
    let models = load_or_demo(settings.models_path.as_deref()).await?;
    let port = settings.port;
    tracing::info!(env = %settings.app_env, models = models.len(), "starting orm demo");
    let app = api_routes(AppState::new(pool, models, settings));

    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!("orm demo listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
