use std::sync::Arc;

use futures::{TryStreamExt, future::BoxFuture};
use mongodb::{Client, Collection, Database, bson::doc, options::IndexOptions};
use tracing::info;

use super::{
    config::MongoConfig,
    connection::establish_connection,
    error::{MongoDaoError, MongoResult},
    models::{MongoGameDocument, increment_update, insert_if_absent_update, name_filter},
};
use crate::dao::{
    game_store::GameStore,
    models::{GameEntity, InsertOutcome},
    storage::StorageResult,
};

const GAME_COLLECTION_NAME: &str = "games";
const SYSTEM_COLLECTION_PREFIX: &str = "system.";

/// [`GameStore`] over the `games` collection, one document per game.
#[derive(Clone)]
pub struct MongoGameStore {
    inner: Arc<MongoInner>,
}

struct MongoInner {
    // Keeps the connection pool alive for as long as the store is shared.
    #[allow(dead_code)]
    client: Client,
    database: Database,
}

impl MongoGameStore {
    /// Establish a connection to MongoDB and ensure indexes are present.
    pub async fn connect(config: MongoConfig) -> MongoResult<Self> {
        let (client, database) =
            establish_connection(&config.options, &config.database_name).await?;

        let store = Self {
            inner: Arc::new(MongoInner { client, database }),
        };
        store.ensure_indexes().await?;
        info!(database = %config.database_name, "connected to MongoDB");
        Ok(store)
    }

    async fn ensure_indexes(&self) -> MongoResult<()> {
        let index = mongodb::IndexModel::builder()
            .keys(doc! {"name": 1})
            .options(
                IndexOptions::builder()
                    .name(Some("game_name_idx".to_owned()))
                    .unique(Some(true))
                    .build(),
            )
            .build();

        self.collection()
            .create_index(index)
            .await
            .map_err(|source| MongoDaoError::EnsureIndex {
                collection: GAME_COLLECTION_NAME,
                index: "name",
                source,
            })?;

        Ok(())
    }

    fn collection(&self) -> Collection<MongoGameDocument> {
        self.inner
            .database
            .collection::<MongoGameDocument>(GAME_COLLECTION_NAME)
    }

    async fn list_games(&self) -> MongoResult<Vec<GameEntity>> {
        let documents: Vec<MongoGameDocument> = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?
            .try_collect()
            .await
            .map_err(|source| MongoDaoError::ListGames { source })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn increment_selection(&self, name: String) -> MongoResult<()> {
        let result = self
            .collection()
            .update_one(name_filter(&name), increment_update())
            .await
            .map_err(|source| MongoDaoError::IncrementGame {
                name: name.clone(),
                source,
            })?;

        if result.matched_count == 0 {
            return Err(MongoDaoError::GameNotFound { name });
        }
        Ok(())
    }

    async fn insert_if_absent(&self, name: String) -> MongoResult<InsertOutcome> {
        let result = self
            .collection()
            .update_one(name_filter(&name), insert_if_absent_update(&name))
            .upsert(true)
            .await
            .map_err(|source| MongoDaoError::InsertGame {
                name: name.clone(),
                source,
            })?;

        Ok(if result.upserted_id.is_some() {
            InsertOutcome::Created
        } else {
            InsertOutcome::AlreadyPresent
        })
    }

    /// Delete every document of every user collection. Collections and their
    /// indexes are kept so the schema survives the reset.
    async fn clear_all(&self) -> MongoResult<Vec<String>> {
        let database = &self.inner.database;
        let names = database
            .list_collection_names()
            .await
            .map_err(|source| MongoDaoError::ListCollections { source })?;

        let mut cleared = Vec::with_capacity(names.len());
        for name in names {
            if name.starts_with(SYSTEM_COLLECTION_PREFIX) {
                continue;
            }
            info!(collection = %name, "clearing collection");
            database
                .collection::<mongodb::bson::Document>(&name)
                .delete_many(doc! {})
                .await
                .map_err(|source| MongoDaoError::ClearCollection {
                    collection: name.clone(),
                    source,
                })?;
            cleared.push(name);
        }

        Ok(cleared)
    }
}

impl GameStore for MongoGameStore {
    fn list_games(&self) -> BoxFuture<'static, StorageResult<Vec<GameEntity>>> {
        let store = self.clone();
        Box::pin(async move { store.list_games().await.map_err(Into::into) })
    }

    fn increment_selection(&self, name: String) -> BoxFuture<'static, StorageResult<()>> {
        let store = self.clone();
        Box::pin(async move { store.increment_selection(name).await.map_err(Into::into) })
    }

    fn insert_if_absent(&self, name: String) -> BoxFuture<'static, StorageResult<InsertOutcome>> {
        let store = self.clone();
        Box::pin(async move { store.insert_if_absent(name).await.map_err(Into::into) })
    }

    fn clear_all(&self) -> BoxFuture<'static, StorageResult<Vec<String>>> {
        let store = self.clone();
        Box::pin(async move { store.clear_all().await.map_err(Into::into) })
    }
}
