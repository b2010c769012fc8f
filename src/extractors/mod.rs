use crate::domain::entities::EntitySet;
use crate::error::Result;

pub mod ner;

/// Turns raw text into the set of named entities it mentions.
///
/// Implementations return `Ok(None)` when the text mentions no entities at
/// all. Extractors are shared read-only between rows, so they must be
/// `Send + Sync`.
pub trait EntityExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Option<EntitySet>>;
}
