use gogo::{config, observability, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Redirect declarations may live in .env next to the binary
    dotenvy::dotenv().ok();

    let config = config::load()?;
    observability::logging::init(&config.log_level, config.log_format()?)?;

    server::run(config).await
}
