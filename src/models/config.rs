//! Configuration model loaded from external sources.

use std::path::Path;

use serde::Deserialize;

use crate::DEFAULT_OUTPUT_PATH;
use crate::error::{Error, Result};

const ENV_PREFIX: &str = "FACTUAL";

#[derive(Clone, Debug, Deserialize)]
/// Settings for a batch evaluation run.
pub struct AppConfig {
    pub input_path: Option<String>,
    pub output_path: String,
    pub delimiter: String,
    pub embedding_model: String,
    pub show_download_progress: bool,
}

impl AppConfig {
    /// Load configuration from, in increasing priority: built-in defaults,
    /// `config/default.yaml` (or the explicit `path`, which must exist) and
    /// `FACTUAL_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config/default").required(false),
        };

        let settings = config::Config::builder()
            .set_default("output_path", DEFAULT_OUTPUT_PATH)?
            .set_default("delimiter", ",")?
            .set_default("embedding_model", "all-minilm-l6-v2")?
            .set_default("show_download_progress", false)?
            .add_source(file)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Field delimiter as a single byte.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(Error::InvalidInput(format!(
                "Delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }
}
