use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A document queued for embedding in a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub document_id: String,
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// Parameters for creating a new collection.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCollection {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Must match the embedding model the service is configured with.
    pub embedding_dimensions: u32,
    /// Let the service embed documents itself as they are added.
    pub is_auto_embedded: bool,
}

/// A collection as reported by the service, including embedding progress.
#[derive(Debug, Clone, Deserialize)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub embedding_dimensions: u32,
    #[serde(default)]
    pub is_auto_embedded: bool,
    #[serde(default)]
    pub status: CollectionStatus,
    #[serde(default)]
    pub document_count: u64,
    #[serde(default)]
    pub document_embedded_count: u64,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionStatus {
    #[default]
    Pending,
    Ready,
}

impl fmt::Display for CollectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionStatus::Pending => write!(f, "pending"),
            CollectionStatus::Ready => write!(f, "ready"),
        }
    }
}
