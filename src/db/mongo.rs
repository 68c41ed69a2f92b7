//! MongoDB store adapter
//!
//! Thin facade over the MongoDB client: insert one document into a named
//! collection, fetch documents back out, list collection names. Handlers
//! own all schema knowledge; this layer moves raw BSON.

use bson::{doc, Document};
use futures_util::StreamExt;
use mongodb::Client;
use serde::Serialize;
use tracing::info;

use crate::types::{ApiError, Result};

/// MongoDB client wrapper, established once at startup
#[derive(Clone, Debug)]
pub struct MongoStore {
    client: Client,
    db_name: String,
}

impl MongoStore {
    /// Connect and verify the connection with a ping
    pub async fn connect(uri: &str, db_name: &str) -> Result<Self> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| ApiError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| ApiError::Database(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Insert one document, returning the assigned ObjectId as a hex string
    ///
    /// No duplicate checking: repeated inserts create independent documents.
    pub async fn create_document<T: Serialize>(
        &self,
        collection: &str,
        payload: &T,
    ) -> Result<String> {
        let document = bson::to_document(payload)
            .map_err(|e| ApiError::Internal(format!("BSON encoding failed: {}", e)))?;

        let result = self
            .client
            .database(&self.db_name)
            .collection::<Document>(collection)
            .insert_one(document)
            .await
            .map_err(|e| ApiError::Database(format!("Insert failed: {}", e)))?;

        result
            .inserted_id
            .as_object_id()
            .map(|id| id.to_hex())
            .ok_or_else(|| ApiError::Database("Failed to get inserted ID".into()))
    }

    /// Fetch raw documents from a collection in natural order
    ///
    /// An absent or empty collection yields an empty vec, never an error.
    pub async fn get_documents(
        &self,
        collection: &str,
        limit: Option<i64>,
    ) -> Result<Vec<Document>> {
        let coll = self
            .client
            .database(&self.db_name)
            .collection::<Document>(collection);

        let mut find = coll.find(doc! {});
        if let Some(n) = limit {
            find = find.limit(n);
        }

        let mut cursor = find
            .await
            .map_err(|e| ApiError::Database(format!("Find failed: {}", e)))?;

        let mut documents = Vec::new();
        while let Some(item) = cursor.next().await {
            documents
                .push(item.map_err(|e| ApiError::Database(format!("Cursor read failed: {}", e)))?);
        }

        Ok(documents)
    }

    /// List the names of existing collections (diagnostics only)
    pub async fn list_collection_names(&self) -> Result<Vec<String>> {
        self.client
            .database(&self.db_name)
            .list_collection_names()
            .await
            .map_err(|e| ApiError::Database(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would require a running MongoDB instance.
    // The adapter is exercised indirectly through the route handlers;
    // degraded-mode behavior is covered in routes::api.
}
