//! One scheduled run: refresh the catalog, pick a game, record it, announce it.

use std::{path::PathBuf, sync::Arc};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use crate::{
    config::AppConfig,
    dao::game_store::GameStore,
    error::{AnnounceError, ServiceError},
    services::{
        announcer::{Announce, Announcement},
        catalog_service,
        selection::SelectionPolicy,
    },
};

/// Terminal state of a run.
#[derive(Debug)]
pub enum RunOutcome {
    /// The pick was recorded and the announcement delivered or deliberately skipped.
    Success {
        /// Game that was picked.
        game: String,
        /// How the announcement went.
        announcement: Announcement,
    },
    /// The store holds no games; nothing was picked.
    NoGamesFound,
    /// The pick was recorded but announcing it failed. The pick stands.
    PartialFailure {
        /// Game that was picked.
        game: String,
        /// Why the announcement failed.
        error: AnnounceError,
    },
}

impl RunOutcome {
    /// Game recorded by the run, if any.
    pub fn game(&self) -> Option<&str> {
        match self {
            RunOutcome::Success { game, .. } | RunOutcome::PartialFailure { game, .. } => {
                Some(game.as_str())
            }
            RunOutcome::NoGamesFound => None,
        }
    }
}

/// Sequences catalog loading, selection, persistence and announcement.
pub struct PickerService {
    store: Arc<dyn GameStore>,
    announcer: Arc<dyn Announce>,
    policy: SelectionPolicy,
    catalog_path: PathBuf,
    rng: StdRng,
}

impl PickerService {
    /// Build a service from its collaborators, seeding the RNG from the OS.
    pub fn new(
        store: Arc<dyn GameStore>,
        announcer: Arc<dyn Announce>,
        config: &AppConfig,
    ) -> Self {
        Self {
            store,
            announcer,
            policy: SelectionPolicy::new(config.alpha),
            catalog_path: config.catalog_path.clone(),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Replace the random source, typically with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Execute one run. Only storage failures while reading the catalog or
    /// recording the pick are returned as errors.
    pub async fn run(&mut self) -> Result<RunOutcome, ServiceError> {
        if let Err(err) =
            catalog_service::load_catalog(self.store.as_ref(), &self.catalog_path).await
        {
            warn!(error = %err, "catalog not loaded; continuing with stored games");
        }

        let games = self.store.list_games().await?;
        if games.is_empty() {
            info!("no games found in the store");
            return Ok(RunOutcome::NoGamesFound);
        }

        if tracing::enabled!(tracing::Level::DEBUG) {
            for (game, probability) in games.iter().zip(self.policy.probabilities(&games)) {
                debug!(
                    game = %game.name,
                    times_selected = game.times_selected,
                    probability,
                    "selection weight"
                );
            }
        }

        let Some(chosen) = self.policy.choose(&games, &mut self.rng) else {
            return Ok(RunOutcome::NoGamesFound);
        };
        let game = chosen.name.clone();

        self.store.increment_selection(game.clone()).await?;
        info!(game = %game, alpha = self.policy.alpha(), "pick recorded");

        match self.announcer.announce(game.clone()).await {
            Ok(announcement) => Ok(RunOutcome::Success { game, announcement }),
            Err(error) => {
                warn!(game = %game, error = %error, "announcement failed; pick is kept");
                Ok(RunOutcome::PartialFailure { game, error })
            }
        }
    }
}
