/**
 * Notewell Server Entry Point
 *
 * Loads configuration from the environment, assembles the application,
 * and serves it. Missing required configuration or an unreachable
 * database aborts startup.
 */

use notewell::server::config::Config;
use notewell::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing, INFO level by default
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Required configuration; refuse to start without it
    let config = Config::from_env()?;

    // Create the Axum app (pool, migrations, routes)
    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("listening on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
