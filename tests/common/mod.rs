//! Helpers for integration tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use factual_accuracy::domain::entities::EntitySet;
use factual_accuracy::error::Result;
use factual_accuracy::extractors::EntityExtractor;
use factual_accuracy::processing::embedding::Embedder;

/// Input and report files in a temporary directory removed on drop.
pub struct TestTable {
    dir: tempfile::TempDir,
}

impl TestTable {
    pub fn new(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir.");
        std::fs::write(dir.path().join("input.csv"), contents).expect("Failed to write input table.");
        TestTable { dir }
    }

    pub fn input_path(&self) -> PathBuf {
        self.dir.path().join("input.csv")
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("report.csv")
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}

/// Embeds every text to the same vector, so any pair scores 100.
pub struct ConstantEmbedder;

impl Embedder for ConstantEmbedder {
    fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|_| vec![0.5, 0.5, 0.0]).collect())
    }
}

/// Answers from a fixed text -> entities table; other texts have no entities.
pub struct TableExtractor {
    entities: HashMap<String, EntitySet>,
}

impl TableExtractor {
    pub fn new(entries: &[(&str, &[&str])]) -> Self {
        TableExtractor {
            entities: entries
                .iter()
                .map(|(text, entities)| (text.to_string(), entities.iter().copied().collect()))
                .collect(),
        }
    }
}

impl EntityExtractor for TableExtractor {
    fn extract(&self, text: &str) -> Result<Option<EntitySet>> {
        Ok(self.entities.get(text).cloned())
    }
}
