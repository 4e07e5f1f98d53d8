//! Energy Quest terminal client.
//!
//! Environment variables are documented on [`ClientConfig::from_env`]; a
//! `.env` file in the working directory is loaded first.
//!
//! ```bash
//! ENERGY_QUEST_ASSET_DIR=./public RUST_LOG=runtime=debug cargo run -p energy-quest
//! ```

use anyhow::Result;
use energy_quest::{Client, ClientConfig, build_orchestrator, logging};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(config.log_dir.as_deref(), config.session_id.as_deref())?;

    tracing::info!("Starting Energy Quest");
    tracing::info!("Persistence: {}", config.enable_persistence);
    tracing::info!("Frame rate: {} fps", config.fps);

    let orchestrator = build_orchestrator(&config)?;
    let client = Client::builder()
        .orchestrator(orchestrator)
        .frame(config.frame_duration())
        .build()?;

    client.run().await?;

    tracing::info!("Client shutdown complete");
    Ok(())
}
