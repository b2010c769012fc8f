use fastembed::{EmbeddingModel, InitOptions, TextEmbedding};

use crate::error::{Error, Result};

/// Source of sentence embeddings, one vector per input text.
pub trait Embedder {
    fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>>;
}

impl Embedder for TextEmbedding {
    fn embed(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        TextEmbedding::embed(self, texts.to_vec(), None)
            .map_err(|error| Error::Embedding(format!("Failed to generate embedding: {error:?}")))
    }
}

/// Map a configured model name onto a fastembed model.
pub fn parse_embedding_model(name: &str) -> Result<EmbeddingModel> {
    let model = match name.to_ascii_lowercase().as_str() {
        "all-minilm-l6-v2" => EmbeddingModel::AllMiniLML6V2,
        "all-minilm-l12-v2" => EmbeddingModel::AllMiniLML12V2,
        "paraphrase-multilingual-minilm-l12-v2" => EmbeddingModel::ParaphraseMLMiniLML12V2,
        "paraphrase-multilingual-mpnet-base-v2" => EmbeddingModel::ParaphraseMLMpnetBaseV2,
        "bge-small-en-v1.5" => EmbeddingModel::BGESmallENV15,
        "bge-base-en-v1.5" => EmbeddingModel::BGEBaseENV15,
        "multilingual-e5-small" => EmbeddingModel::MultilingualE5Small,
        "multilingual-e5-large" => EmbeddingModel::MultilingualE5Large,
        other => {
            return Err(Error::InvalidInput(format!(
                "Unknown embedding model: {other}"
            )));
        }
    };
    Ok(model)
}

/// Load a fastembed model. This downloads the weights on first use.
pub fn load_text_embedding(
    model_name: &str,
    show_download_progress: bool,
) -> Result<TextEmbedding> {
    let model = parse_embedding_model(model_name)?;
    log::info!("Loading embedding model {model_name}");
    TextEmbedding::try_new(
        InitOptions::new(model).with_show_download_progress(show_download_progress),
    )
    .map_err(|error| Error::Embedding(format!("Failed to initialize embedder: {error:?}")))
}

/// Cosine similarity of two vectors; zero when either vector has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

/// Scale a similarity in `[0, 1]` to a percentage with two decimals.
pub fn round_percentage(similarity: f32) -> f32 {
    ((similarity as f64 * 100.0 * 100.0).round() / 100.0) as f32
}

/// Scores semantic overlap between aligned lists of texts.
///
/// Owns its embedder so the model is loaded once and reused for every call.
pub struct SimilarityScorer<E> {
    embedder: E,
}

impl<E: Embedder> SimilarityScorer<E> {
    pub fn new(embedder: E) -> Self {
        Self { embedder }
    }

    /// Average cosine similarity of every `list_a` x `list_b` pair, as a percentage.
    ///
    /// Both lists must have the same length. The mean runs over the full
    /// pairwise matrix, not only positionally aligned pairs.
    pub fn score_similarity(&mut self, list_a: &[String], list_b: &[String]) -> Result<f32> {
        if list_a.len() != list_b.len() {
            return Err(Error::LengthMismatch {
                left: list_a.len(),
                right: list_b.len(),
            });
        }
        if list_a.is_empty() {
            return Err(Error::InvalidInput(
                "cannot score similarity of empty lists".to_string(),
            ));
        }

        let embeddings_a = self.embed_checked(list_a)?;
        let embeddings_b = self.embed_checked(list_b)?;

        let mut total = 0.0_f64;
        for a in &embeddings_a {
            for b in &embeddings_b {
                total += cosine_similarity(a, b) as f64;
            }
        }
        let mean = total / (embeddings_a.len() * embeddings_b.len()) as f64;

        Ok(round_percentage(mean as f32))
    }

    fn embed_checked(&mut self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let embeddings = self.embedder.embed(texts)?;
        if embeddings.len() != texts.len() {
            return Err(Error::Embedding(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                embeddings.len()
            )));
        }
        Ok(embeddings)
    }
}
