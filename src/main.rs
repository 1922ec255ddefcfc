use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use csvwash::config::AppConfig;
use csvwash::http;

#[actix_web::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let config = AppConfig::from_env();
    info!(host = %config.host, port = config.port, "starting csvwash");
    info!("upload form: http://{}:{}/", config.host, config.port);
    info!("health check: http://{}:{}/health", config.host, config.port);

    http::start_server(&config)?.await?;
    Ok(())
}
