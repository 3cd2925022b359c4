use reqwest::Client;
use std::time::Duration;
use uuid::Uuid;

use crate::models::{Collection, CollectionStatus, CreateCollection, Document};

/// HTTP client for the document-collection service. Collections hold
/// documents; the service embeds them in the background and exposes progress
/// through the collection resource.
#[derive(Clone)]
pub struct CollectionStore {
    client: Client,
    base_url: String,
}

impl CollectionStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn collection_url(&self, name: &str) -> String {
        format!("{}/api/v1/collection/{}", self.base_url, name)
    }

    /// Create a collection. Fails if one with the same name already exists.
    pub async fn create_collection(
        &self,
        request: &CreateCollection,
    ) -> Result<(), CollectionError> {
        let url = self.collection_url(&request.name);
        let resp = self.client.post(&url).json(request).send().await?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollectionError::Create(body));
        }

        tracing::info!(collection = %request.name, "Created collection");
        Ok(())
    }

    /// Delete a collection and everything in it.
    pub async fn delete_collection(&self, name: &str) -> Result<(), CollectionError> {
        let url = self.collection_url(name);
        let resp = self.client.delete(&url).send().await?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollectionError::Delete(body));
        }

        Ok(())
    }

    /// Fetch a collection, including its embedding progress counters.
    pub async fn get_collection(&self, name: &str) -> Result<Collection, CollectionError> {
        let url = self.collection_url(name);
        let resp = self.client.get(&url).send().await?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollectionError::Lookup(body));
        }

        Ok(resp.json::<Collection>().await?)
    }

    /// Upload a batch of documents. Returns the server-assigned ids in the
    /// same order the documents were sent.
    pub async fn add_documents(
        &self,
        name: &str,
        documents: &[Document],
    ) -> Result<Vec<Uuid>, CollectionError> {
        let url = format!("{}/document", self.collection_url(name));
        let resp = self.client.post(&url).json(documents).send().await?;

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollectionError::Upload(body));
        }

        Ok(resp.json::<Vec<Uuid>>().await?)
    }

    /// Poll the collection at a fixed interval until the service reports it
    /// ready, logging embedding progress each round. Never times out; the
    /// service owns completion.
    pub async fn await_embedded(
        &self,
        name: &str,
        interval: Duration,
    ) -> Result<Collection, CollectionError> {
        loop {
            let collection = self.get_collection(name).await?;
            tracing::info!(
                collection = %name,
                embedded = collection.document_embedded_count,
                total = collection.document_count,
                "Embedding status"
            );

            if collection.status == CollectionStatus::Ready {
                return Ok(collection);
            }

            tokio::time::sleep(interval).await;
        }
    }

    /// Check if the collection service is healthy.
    pub async fn health_check(&self) -> Result<bool, CollectionError> {
        let url = format!("{}/healthz", self.base_url);
        let resp = self.client.get(&url).send().await?;
        Ok(resp.status().is_success())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("collection creation failed: {0}")]
    Create(String),
    #[error("collection deletion failed: {0}")]
    Delete(String),
    #[error("collection lookup failed: {0}")]
    Lookup(String),
    #[error("document upload failed: {0}")]
    Upload(String),
}
