pub mod parser;
pub mod pipeline;

pub use pipeline::{IngestResult, IngestionError, IngestionPipeline};
