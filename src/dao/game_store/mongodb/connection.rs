use mongodb::{Client, Database, bson::doc, options::ClientOptions};

use super::error::{MongoDaoError, MongoResult};

/// Build a client and verify the server answers a ping before handing it out.
///
/// A single attempt is made; the driver's server selection timeout bounds the wait.
pub async fn establish_connection(
    options: &ClientOptions,
    database_name: &str,
) -> MongoResult<(Client, Database)> {
    let client = Client::with_options(options.clone())
        .map_err(|source| MongoDaoError::ClientConstruction { source })?;
    let database = client.database(database_name);

    database
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|source| MongoDaoError::InitialPing { source })?;

    Ok((client, database))
}
