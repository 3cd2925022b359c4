use crate::splitter::halve;
use crate::tokenizer::Tokenizer;
use crate::{ChunkError, Subsection};

/// Default split points, coarsest to finest: paragraph, line, sentence.
pub const DEFAULT_DELIMITERS: [&str; 3] = ["\n\n", "\n", ". "];

pub const DEFAULT_MAX_RECURSION: u32 = 5;

/// Splits a titled subsection into chunks of at most `max_tokens` tokens by
/// repeatedly bisecting the body across a delimiter hierarchy. Blocks that
/// cannot be split within the recursion budget are hard-truncated.
pub struct RecursiveChunker {
    max_tokens: usize,
    max_recursion: u32,
    delimiters: Vec<String>,
}

impl RecursiveChunker {
    pub fn new(max_tokens: usize) -> Self {
        Self {
            max_tokens,
            max_recursion: DEFAULT_MAX_RECURSION,
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn with_max_recursion(mut self, max_recursion: u32) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    pub fn with_delimiters(mut self, delimiters: Vec<String>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Split `subsection` into chunks that each fit the token budget. Every
    /// chunk carries the subsection's titles so it stands on its own.
    pub fn split(
        &self,
        tokenizer: &Tokenizer,
        subsection: &Subsection,
    ) -> Result<Vec<String>, ChunkError> {
        self.split_at_depth(tokenizer, subsection, self.max_recursion)
    }

    fn split_at_depth(
        &self,
        tokenizer: &Tokenizer,
        subsection: &Subsection,
        depth: u32,
    ) -> Result<Vec<String>, ChunkError> {
        let full = subsection.composed();

        if tokenizer.count(&full) <= self.max_tokens {
            return Ok(vec![full]);
        }

        if depth == 0 {
            return Ok(vec![tokenizer.truncate(&full, self.max_tokens)?]);
        }

        for delimiter in &self.delimiters {
            let (left, right) = halve(tokenizer, &subsection.body, delimiter)?;
            if left.is_empty() || right.is_empty() {
                // This delimiter produced no usable split; fall through to a
                // finer-grained one.
                continue;
            }

            let mut chunks = self.split_at_depth(
                tokenizer,
                &Subsection::new(subsection.titles.clone(), left),
                depth - 1,
            )?;
            chunks.extend(self.split_at_depth(
                tokenizer,
                &Subsection::new(subsection.titles.clone(), right),
                depth - 1,
            )?);
            return Ok(chunks);
        }

        // No delimiter in the hierarchy could split the body.
        Ok(vec![tokenizer.truncate(&full, self.max_tokens)?])
    }
}
