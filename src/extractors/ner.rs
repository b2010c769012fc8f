//! Entity extraction backed by an `anno` NER model.

use anno::{Model, StackedNER};

use crate::domain::entities::EntitySet;
use crate::error::{Error, Result};
use crate::extractors::EntityExtractor;

/// Adapts any `anno` model to [`EntityExtractor`].
///
/// Only the surface text of each entity is kept; types, offsets and
/// confidences are dropped.
pub struct NerExtractor<M = StackedNER> {
    model: M,
    language: Option<String>,
}

impl NerExtractor<StackedNER> {
    /// Pattern and heuristic layers; needs no model download.
    pub fn stacked() -> Self {
        Self::new(StackedNER::default())
    }
}

impl<M: Model> NerExtractor<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            language: None,
        }
    }

    /// ISO 639-1 hint passed to the model, e.g. `"en"`.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl<M: Model> EntityExtractor for NerExtractor<M> {
    fn extract(&self, text: &str) -> Result<Option<EntitySet>> {
        let entities = self
            .model
            .extract_entities(text, self.language.as_deref())
            .map_err(|error| {
                Error::Extraction(format!("{} failed: {error}", self.model.name()))
            })?;

        let entities: EntitySet = entities
            .into_iter()
            .map(|entity| entity.text.trim().to_string())
            .filter(|text| !text.is_empty())
            .collect();

        if entities.is_empty() {
            Ok(None)
        } else {
            Ok(Some(entities))
        }
    }
}
