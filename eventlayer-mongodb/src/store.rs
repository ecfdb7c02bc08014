use async_trait::async_trait;
use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{Client, Collection as MongoCollection, options::ClientOptions};

use eventlayer_core::{
    backend::{InsertOneResult, StoreBackend, StoreBackendBuilder},
    error::{StoreError, StoreResult},
};

/// Document store backed by a MongoDB deployment.
///
/// Holds a driver client and the name of the logical database selected at
/// construction time. Client construction is lazy and does not reach the
/// server; call [`MongoDbStore::ping`] to confirm the deployment is usable.
#[derive(Debug)]
pub struct MongoDbStore {
    client: Client,
    database: String,
}

impl MongoDbStore {
    pub fn new(client: Client, database: String) -> Self {
        Self { client, database }
    }

    pub fn builder(dsn: &str, database: &str) -> MongoDbStoreBuilder {
        MongoDbStoreBuilder::new(dsn, database)
    }

    fn get_collection(&self, collection_name: &str) -> MongoCollection<Document> {
        // Names pass through to the driver unchanged.
        self.client
            .database(&self.database)
            .collection(collection_name)
    }

    /// Confirms the selected database answers an administrative `ping`.
    ///
    /// This is the first operation that reaches the server, so a freshly
    /// built store should be pinged before it is accepted.
    pub async fn ping(&self) -> StoreResult<()> {
        self.client
            .database(&self.database)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::Initialization(e.to_string()))?;

        Ok(())
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.client.shutdown().await;

        Ok(())
    }
}

#[async_trait]
impl StoreBackend for MongoDbStore {
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.get_collection(collection)
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .try_collect::<Vec<Document>>()
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))
    }

    async fn insert_one(
        &self,
        document: Document,
        collection: &str,
    ) -> StoreResult<InsertOneResult> {
        let result = self
            .get_collection(collection)
            .insert_one(document)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(InsertOneResult { inserted_id: result.inserted_id })
    }

    async fn shutdown(self) -> StoreResult<()> {
        self.shutdown().await
    }
}

pub struct MongoDbStoreBuilder {
    dsn: String,
    database: String,
}

impl MongoDbStoreBuilder {
    pub fn new(dsn: &str, database: &str) -> Self {
        Self {
            dsn: dsn.to_string(),
            database: database.to_string(),
        }
    }
}

#[async_trait]
impl StoreBackendBuilder for MongoDbStoreBuilder {
    type Backend = MongoDbStore;

    async fn build(self) -> StoreResult<Self::Backend> {
        Ok(MongoDbStore::new(
            Client::with_options(
                ClientOptions::parse(&self.dsn)
                    .await
                    .map_err(|e| StoreError::Initialization(e.to_string()))?,
            )
            .map_err(|e| StoreError::Initialization(e.to_string()))?,
            self.database,
        ))
    }
}
