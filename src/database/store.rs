use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::{Client, Database};
use tracing::info;

/// Errors from the document store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database connection is not configured")]
    Unavailable,

    #[error("store operation failed: {0}")]
    Operation(String),
}

/// Handle to the named collections of one MongoDB database.
///
/// Insert and bounded listing only; records arrive here already validated,
/// the store itself has no schema awareness.
#[derive(Clone)]
pub struct DocumentStore {
    database: Database,
}

impl DocumentStore {
    /// Build a client for `db_name` at `uri`. Short server-selection and
    /// connect timeouts keep calls against an unreachable server from
    /// hanging; reachability itself is only probed per operation.
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self, StoreError> {
        let timeout_uri = if uri.contains('?') {
            format!("{uri}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        } else {
            format!("{uri}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000")
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| StoreError::Operation(format!("failed to build MongoDB client: {e}")))?;

        info!("Created MongoDB client for database '{db_name}'");

        Ok(Self {
            database: client.database(db_name),
        })
    }

    /// Insert one record, returning the store-generated identifier.
    pub async fn insert(&self, collection: &str, record: Document) -> Result<ObjectId, StoreError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(record)
            .await
            .map_err(|e| StoreError::Operation(format!("insert into '{collection}' failed: {e}")))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Operation("store returned a non-ObjectId identifier".to_string()))
    }

    /// Fetch up to `limit` records in natural store order. No filtering,
    /// sorting, or pagination.
    pub async fn list(&self, collection: &str, limit: i64) -> Result<Vec<Document>, StoreError> {
        let cursor = self
            .database
            .collection::<Document>(collection)
            .find(doc! {})
            .limit(limit)
            .await
            .map_err(|e| StoreError::Operation(format!("find in '{collection}' failed: {e}")))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Operation(format!("cursor drain for '{collection}' failed: {e}")))
    }

    /// Collection names currently present in the database. Doubles as the
    /// reachability probe for the status report.
    pub async fn collection_names(&self) -> Result<Vec<String>, StoreError> {
        self.database
            .list_collection_names()
            .await
            .map_err(|e| StoreError::Operation(format!("collection listing failed: {e}")))
    }
}
