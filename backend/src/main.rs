use anyhow::Context;
use dotenvy::dotenv;
use site_server::{bind_listener, build_router, SiteConfig};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,site_server=debug,tower_http=info"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    let config = SiteConfig::from_env().context("reading server configuration")?;
    config.validate()?;

    let app = build_router(&config);
    let addr = config.listen_addr();
    tracing::info!(
        site_dir = %config.site_dir.display(),
        hsts = !config.is_development,
        "Starting site server on {}",
        addr
    );
    let listener = bind_listener(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
