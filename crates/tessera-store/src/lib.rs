pub mod collection;
pub mod models;

pub use collection::{CollectionError, CollectionStore};
pub use models::{Collection, CollectionStatus, CreateCollection, Document};
