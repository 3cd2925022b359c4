use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Base URL of the document-collection service.
    #[serde(default = "default_store_url")]
    pub store_url: String,
    #[serde(default = "default_collection_name")]
    pub collection_name: String,
    /// Must match the embedding model configured on the collection service.
    #[serde(default = "default_embedding_dimensions")]
    pub embedding_dimensions: u32,
    /// Selects the tokenizer; counts are only reproducible per model.
    #[serde(default = "default_model")]
    pub model: String,
    /// Hard token ceiling for every emitted chunk.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: usize,
    /// Split attempts before a block is force-truncated.
    #[serde(default = "default_max_recursion")]
    pub max_recursion: u32,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_store_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_collection_name() -> String {
    "fever".to_string()
}

fn default_embedding_dimensions() -> u32 {
    1536
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> usize {
    1600
}

fn default_max_recursion() -> u32 {
    5
}

fn default_poll_interval_secs() -> u64 {
    1
}

impl AppConfig {
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_url: default_store_url(),
            collection_name: default_collection_name(),
            embedding_dimensions: default_embedding_dimensions(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            max_recursion: default_max_recursion(),
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}
