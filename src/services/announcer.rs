//! Announces the weekly pick on a Discord-style webhook, decorated with a store
//! thumbnail when one can be found.

use futures::future::BoxFuture;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{
    config::AnnouncerConfig,
    dto::{search::StoreSearchResponse, webhook::WebhookMessage},
    error::AnnounceError,
};

/// What happened to an announcement that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    /// The webhook accepted the message.
    Delivered {
        /// Image attached to the message, if the lookup found one.
        thumbnail_url: Option<String>,
    },
    /// No webhook is configured, so nothing was sent.
    Skipped,
}

/// Seam between the picker run and the outside world.
pub trait Announce: Send + Sync {
    /// Announce `game`, returning whether a message was actually sent.
    fn announce(&self, game: String) -> BoxFuture<'_, Result<Announcement, AnnounceError>>;
}

/// HTTP announcer backed by `reqwest`.
#[derive(Clone)]
pub struct WebhookAnnouncer {
    client: Client,
    config: AnnouncerConfig,
}

impl WebhookAnnouncer {
    /// Create an announcer with its own connection pool.
    pub fn new(config: AnnouncerConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Create an announcer sharing an existing client.
    pub fn with_client(client: Client, config: AnnouncerConfig) -> Self {
        Self { client, config }
    }

    /// Search the store for `game` and return the first hit's small image.
    ///
    /// Lookup problems only cost the image, so they are logged and mapped to `None`.
    pub async fn lookup_thumbnail(&self, game: &str) -> Option<String> {
        match self.search(game).await {
            Ok(response) => {
                let thumbnail = response.first_thumbnail();
                match &thumbnail {
                    Some(url) => info!(game, thumbnail = %url, "thumbnail found"),
                    None => debug!(game, "no thumbnail in search results"),
                }
                thumbnail
            }
            Err(err) => {
                warn!(game, error = %err, "thumbnail lookup failed");
                None
            }
        }
    }

    async fn search(&self, game: &str) -> Result<StoreSearchResponse, reqwest::Error> {
        self.client
            .get(&self.config.search_url)
            .query(&[("term", game), ("cc", self.config.country_code.as_str())])
            .timeout(self.config.thumbnail_timeout)
            .send()
            .await?
            .error_for_status()?
            .json::<StoreSearchResponse>()
            .await
    }

    /// Post the announcement for `game` to the configured webhook.
    pub async fn post(
        &self,
        game: &str,
        thumbnail_url: Option<String>,
    ) -> Result<(), AnnounceError> {
        let Some(webhook_url) = self.config.webhook_url.as_deref() else {
            return Err(AnnounceError::MissingWebhook);
        };

        let message = WebhookMessage::announce_pick(game, thumbnail_url);
        let response = self
            .client
            .post(webhook_url)
            .json(&message)
            .timeout(self.config.webhook_timeout)
            .send()
            .await
            .map_err(|source| AnnounceError::Request { source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnnounceError::Status { status });
        }

        info!(game, %status, "posted pick to webhook");
        Ok(())
    }
}

impl Announce for WebhookAnnouncer {
    fn announce(&self, game: String) -> BoxFuture<'_, Result<Announcement, AnnounceError>> {
        Box::pin(async move {
            if self.config.webhook_url.is_none() {
                info!(game = %game, "no webhook set; skipping announcement");
                return Ok(Announcement::Skipped);
            }

            let thumbnail_url = self.lookup_thumbnail(&game).await;
            self.post(&game, thumbnail_url.clone()).await?;
            Ok(Announcement::Delivered { thumbnail_url })
        })
    }
}
