//! Administrative reset: empties every collection of the game store, keeping the schema.

use std::path::Path;

use anyhow::Context;
use tracing::warn;

use game_picker::{
    config::AppConfig,
    dao::game_store::mongodb::{MongoConfig, MongoGameStore},
    DOTENV_PATH, init_tracing, load_env_file,
    services::admin_service::wipe_store,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let dotenv_error = load_env_file(Path::new(DOTENV_PATH));
    init_tracing();
    if let Some(err) = dotenv_error {
        warn!(error = %err, "ignoring unreadable .env file");
    }

    let config = AppConfig::from_env();
    let mongo_config = MongoConfig::from_settings(&config.database)
        .await
        .context("building MongoDB options")?;
    let store = MongoGameStore::connect(mongo_config)
        .await
        .context("connecting to MongoDB")?;

    let cleared = wipe_store(&store).await.context("wiping store")?;
    if cleared.is_empty() {
        println!("No collections found in database `{}`.", config.database.name);
    } else {
        println!("Database wiped successfully (schema retained): {}", cleared.join(", "));
    }
    Ok(())
}
