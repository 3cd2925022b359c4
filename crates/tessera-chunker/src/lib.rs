pub mod recursive;
pub mod splitter;
pub mod tokenizer;

pub use recursive::RecursiveChunker;
pub use tokenizer::{Tokenizer, TokenizerError, TokenizerProvider};

/// A titled block of text queued for splitting: the parent titles plus one
/// body string. Titles are prepended when a chunk is emitted so that every
/// chunk is self-describing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subsection {
    pub titles: Vec<String>,
    pub body: String,
}

impl Subsection {
    pub fn new(titles: Vec<String>, body: String) -> Self {
        Self { titles, body }
    }

    /// Titles first, body last, joined with a blank line between each.
    pub fn composed(&self) -> String {
        let mut parts: Vec<&str> = self.titles.iter().map(String::as_str).collect();
        parts.push(&self.body);
        parts.join("\n\n")
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChunkError {
    #[error(transparent)]
    Tokenizer(#[from] TokenizerError),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
