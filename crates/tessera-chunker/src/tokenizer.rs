use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tiktoken_rs::CoreBPE;

/// Lazily-built cache of model id → BPE tokenizer. Building a tokenizer is
/// expensive; each model is resolved once and shared thereafter. Passed into
/// components explicitly so they stay testable in isolation.
#[derive(Default)]
pub struct TokenizerProvider {
    cache: Mutex<HashMap<String, Arc<CoreBPE>>>,
}

impl TokenizerProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the tokenizer for a model id, reusing a cached instance when
    /// one exists.
    pub fn get(&self, model: &str) -> Result<Tokenizer, TokenizerError> {
        let mut cache = self.cache.lock().expect("tokenizer cache poisoned");

        if let Some(bpe) = cache.get(model) {
            return Ok(Tokenizer { bpe: bpe.clone() });
        }

        let bpe = tiktoken_rs::get_bpe_from_model(model)
            .map_err(|_| TokenizerError::UnknownModel(model.to_string()))?;
        let bpe = Arc::new(bpe);
        cache.insert(model.to_string(), bpe.clone());

        Ok(Tokenizer { bpe })
    }
}

/// Handle to one model's tokenizer. Cheap to clone.
#[derive(Clone)]
pub struct Tokenizer {
    bpe: Arc<CoreBPE>,
}

impl std::fmt::Debug for Tokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tokenizer").finish_non_exhaustive()
    }
}

impl Tokenizer {
    /// Number of tokens in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.bpe.encode_with_special_tokens(text).len()
    }

    pub fn encode(&self, text: &str) -> Vec<usize> {
        self.bpe.encode_with_special_tokens(text)
    }

    pub fn decode(&self, tokens: Vec<usize>) -> Result<String, TokenizerError> {
        self.bpe
            .decode(tokens)
            .map_err(|e| TokenizerError::Decode(e.to_string()))
    }

    /// Truncate `text` to at most `max_tokens` tokens. The cut is made in
    /// token space, so the character content near the boundary may change on
    /// decode; accepted as lossy.
    pub fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, TokenizerError> {
        let tokens = self.encode(text);
        if tokens.len() <= max_tokens {
            return Ok(text.to_string());
        }

        tracing::warn!(
            original_tokens = tokens.len(),
            max_tokens,
            "truncating block that could not be split"
        );
        self.decode(tokens[..max_tokens].to_vec())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("no tokenizer known for model {0:?}")]
    UnknownModel(String),
    #[error("token decode failed: {0}")]
    Decode(String),
}
