//! Game picker binary: performs one weighted pick and announces it.

use std::{path::Path, process::ExitCode, sync::Arc};

use anyhow::Context;
use tracing::{error, warn};

use game_picker::{
    config::AppConfig,
    dao::game_store::mongodb::{MongoConfig, MongoGameStore},
    DOTENV_PATH, init_tracing, load_env_file,
    services::{
        announcer::WebhookAnnouncer,
        picker_service::{PickerService, RunOutcome},
    },
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let dotenv_error = load_env_file(Path::new(DOTENV_PATH));
    init_tracing();
    if let Some(err) = dotenv_error {
        warn!(error = %err, "ignoring unreadable .env file");
    }

    match run().await {
        Ok(RunOutcome::Success { game, .. }) => {
            println!("This week's pick: {game}");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::NoGamesFound) => {
            println!("No games found in database.");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::PartialFailure { game, error }) => {
            println!("This week's pick: {game}");
            eprintln!("Failed to announce pick: {error}");
            ExitCode::from(2)
        }
        Err(err) => {
            error!(error = ?err, "picker run failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<RunOutcome> {
    let config = AppConfig::from_env();

    let mongo_config = MongoConfig::from_settings(&config.database)
        .await
        .context("building MongoDB options")?;
    let store = MongoGameStore::connect(mongo_config)
        .await
        .context("connecting to MongoDB")?;
    let announcer = WebhookAnnouncer::new(config.announcer.clone());

    let mut picker = PickerService::new(Arc::new(store), Arc::new(announcer), &config);
    picker.run().await.context("running picker")
}
