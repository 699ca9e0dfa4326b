use mongodb::options::{ClientOptions, Credential};

use super::error::{MongoDaoError, MongoResult};
use crate::config::DatabaseConfig;

const APP_NAME: &str = "game-picker";

/// Driver options plus the database the store works in.
#[derive(Clone)]
pub struct MongoConfig {
    /// Options handed to the MongoDB client.
    pub options: ClientOptions,
    /// Database holding the game collection.
    pub database_name: String,
}

impl MongoConfig {
    /// Parse a connection string and pair it with `db_name`.
    pub async fn from_uri(uri: &str, db_name: &str) -> MongoResult<Self> {
        let options =
            ClientOptions::parse(uri)
                .await
                .map_err(|source| MongoDaoError::InvalidUri {
                    uri: uri.to_owned(),
                    source,
                })?;

        Ok(Self {
            options,
            database_name: db_name.to_owned(),
        })
    }

    /// Build client options from discrete connection parameters.
    ///
    /// Credentials are attached to the options rather than embedded in the URI so
    /// passwords never need percent-encoding. Without both a user and a password
    /// the client connects unauthenticated.
    pub async fn from_settings(settings: &DatabaseConfig) -> MongoResult<Self> {
        let uri = format!("mongodb://{}:{}", settings.host, settings.port);
        let mut config = Self::from_uri(&uri, &settings.name).await?;

        config.options.app_name = Some(APP_NAME.to_owned());
        config.options.connect_timeout = Some(settings.timeout);
        config.options.server_selection_timeout = Some(settings.timeout);

        config.options.credential = settings.credentials().map(|(user, password)| {
            Credential::builder()
                .username(user.to_owned())
                .password(password.to_owned())
                .build()
        });

        Ok(config)
    }
}
