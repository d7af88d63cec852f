use std::sync::OnceLock;

use mongodb::{Client, Collection, Database, bson::Document};
use tracing::warn;

use crate::error::CleanlyfeError;

/// Database used by accessors that do not name one.
pub const DEFAULT_DATABASE: &str = "chatbot";

/// Holder for the one initialized MongoDB client.
///
/// Constructed empty by the bootstrapper and populated exactly once after the
/// connection has been verified. Handlers reach it through application state;
/// re-running bootstrap means constructing a fresh registry.
#[derive(Default)]
pub struct DbRegistry {
    client: OnceLock<Client>,
}

impl DbRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the verified client. Single-threaded startup assumption: a
    /// second call on the same registry keeps the first handle.
    pub fn store(&self, client: Client) {
        if self.client.set(client).is_err() {
            warn!("database client already stored; keeping the existing handle");
        }
    }

    /// The stored client, or `NotInitialized` before bootstrap has succeeded.
    pub fn client(&self) -> Result<Client, CleanlyfeError> {
        self.client
            .get()
            .cloned()
            .ok_or(CleanlyfeError::NotInitialized)
    }

    /// A named logical database from the stored client.
    pub fn database(&self, name: &str) -> Result<Database, CleanlyfeError> {
        Ok(self.client()?.database(name))
    }

    /// A collection in the default database.
    pub fn collection(&self, name: &str) -> Result<Collection<Document>, CleanlyfeError> {
        self.collection_in(DEFAULT_DATABASE, name)
    }

    /// A collection in a named database.
    pub fn collection_in(
        &self,
        database: &str,
        name: &str,
    ) -> Result<Collection<Document>, CleanlyfeError> {
        Ok(self.database(database)?.collection(name))
    }
}
