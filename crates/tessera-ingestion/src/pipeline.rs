use std::time::Duration;

use serde_json::json;
use tessera_chunker::{ChunkError, RecursiveChunker, Subsection, TokenizerError, TokenizerProvider};
use tessera_common::config::AppConfig;
use tessera_store::{CollectionError, CollectionStore, CreateCollection, Document};

use crate::parser;

#[derive(Debug)]
pub enum IngestResult {
    Indexed { chunk_count: usize },
    Skipped,
}

/// Drives a transcript through parsing, chunking, and upload: sections →
/// QA units → token-bounded chunks → documents in a freshly created
/// collection, then waits for the service to finish embedding them.
pub struct IngestionPipeline {
    store: CollectionStore,
    tokenizers: TokenizerProvider,
    chunker: RecursiveChunker,
    config: AppConfig,
}

impl IngestionPipeline {
    pub fn new(store: CollectionStore, config: AppConfig) -> Self {
        let chunker =
            RecursiveChunker::new(config.max_tokens).with_max_recursion(config.max_recursion);
        Self {
            store,
            tokenizers: TokenizerProvider::new(),
            chunker,
            config,
        }
    }

    /// Process one transcript end to end.
    pub async fn ingest(&self, transcript: &str) -> Result<IngestResult, IngestionError> {
        let chunks = self.chunk_transcript(transcript)?;
        if chunks.is_empty() {
            tracing::warn!("No chunks produced, skipping upload");
            return Ok(IngestResult::Skipped);
        }

        let name = &self.config.collection_name;

        // Recreate the collection from scratch; deleting a collection that
        // does not exist yet is fine.
        let _ = self.store.delete_collection(name).await;
        self.store
            .create_collection(&CreateCollection {
                name: name.clone(),
                description: Some("Q&A transcript embeddings".to_string()),
                embedding_dimensions: self.config.embedding_dimensions,
                is_auto_embedded: true,
            })
            .await?;

        let documents = build_documents(name, &chunks);
        let ids = self.store.add_documents(name, &documents).await?;
        tracing::info!(
            collection = %name,
            documents = ids.len(),
            "Documents uploaded, waiting for embedding"
        );

        self.store
            .await_embedded(name, Duration::from_secs(self.config.poll_interval_secs))
            .await?;

        let chunk_count = chunks.len();
        tracing::info!(collection = %name, chunk_count, "Transcript ingested");
        Ok(IngestResult::Indexed { chunk_count })
    }

    /// Parse the transcript and produce the ordered, token-bounded chunk
    /// list without touching the collection service.
    pub fn chunk_transcript(&self, transcript: &str) -> Result<Vec<String>, IngestionError> {
        let lines = parser::read_lines(transcript);
        let sections = parser::parse_sections(&lines);
        let qa_sections = parser::parse_qa(&sections);

        let tokenizer = self.tokenizers.get(&self.config.model)?;
        let mut chunks = Vec::new();
        for section in &qa_sections {
            for unit in &section.units {
                let subsection =
                    Subsection::new(unit.questions.clone(), unit.answer.clone());
                chunks.extend(self.chunker.split(&tokenizer, &subsection)?);
            }
        }

        tracing::debug!(
            sections = sections.len(),
            chunks = chunks.len(),
            "Transcript chunked"
        );
        Ok(chunks)
    }
}

/// One document per chunk, identified by `{collection_name}-{index}`.
pub fn build_documents(collection_name: &str, chunks: &[String]) -> Vec<Document> {
    chunks
        .iter()
        .enumerate()
        .map(|(i, text)| Document {
            document_id: format!("{collection_name}-{i}"),
            content: text.clone(),
            metadata: json!({ "chunk_index": i }),
        })
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    #[error("tokenizer error: {0}")]
    Tokenizer(#[from] TokenizerError),
    #[error("chunking failed: {0}")]
    Chunk(#[from] ChunkError),
    #[error("collection store error: {0}")]
    Store(#[from] CollectionError),
}
