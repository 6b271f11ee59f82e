mod telemetry;

use api::ApiConfig;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; real deployments set the environment directly.
    let dotenv = dotenvy::dotenv();

    telemetry::init();

    if let Err(e) = dotenv {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let config = ApiConfig::from_env();
    info!(
        address = %config.address,
        database = config.database_path.as_deref().unwrap_or(":memory:"),
        "starting LineraMind"
    );

    api::start(config).await?;

    Ok(())
}
