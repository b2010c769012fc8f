use crate::domain::entities::EntitySet;
use crate::domain::report::{InputRow, InputTable, ReportRow};
use crate::error::{Error, Result};
use crate::extractors::EntityExtractor;
use crate::processing::accuracy::{
    check_factual_accuracy, get_unique_entities, unique_in_ground_truth, unique_in_output,
};
use crate::processing::embedding::{Embedder, SimilarityScorer};
use crate::repository::{ReportWriter, RowReader};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub rows: usize,
    pub covered: usize,
    pub not_covered: usize,
    pub failed: usize,
}

/// Runs every evaluation case of a table through extraction, comparison and
/// similarity scoring.
pub struct Reporter<X, E> {
    extractor: X,
    scorer: SimilarityScorer<E>,
}

impl<X, E> Reporter<X, E>
where
    X: EntityExtractor,
    E: Embedder,
{
    pub fn new(extractor: X, scorer: SimilarityScorer<E>) -> Self {
        Self { extractor, scorer }
    }

    fn extract(&self, text: &str, errors: &mut Vec<String>) -> Option<EntitySet> {
        self.extractor.extract(text).unwrap_or_else(|error| {
            errors.push(error.to_string());
            None
        })
    }

    /// Evaluate one case. Extraction and scoring failures are recorded on the
    /// row instead of being returned, so one bad row never aborts a batch.
    pub fn evaluate_row(&mut self, input: InputRow) -> ReportRow {
        let mut errors = Vec::new();
        let ground_truth_entities = self.extract(&input.ground_truth, &mut errors);
        let output_entities = self.extract(&input.output, &mut errors);

        let all_unique_entities =
            get_unique_entities(ground_truth_entities.as_ref(), output_entities.as_ref());
        let unique_in_output =
            unique_in_output(output_entities.as_ref(), ground_truth_entities.as_ref());
        let unique_in_ground_truth =
            unique_in_ground_truth(ground_truth_entities.as_ref(), output_entities.as_ref());
        let result =
            check_factual_accuracy(output_entities.as_ref(), ground_truth_entities.as_ref());

        let overlap_pct = match self.scorer.score_similarity(
            std::slice::from_ref(&input.ground_truth),
            std::slice::from_ref(&input.output),
        ) {
            Ok(score) => Some(score),
            Err(error) => {
                errors.push(error.to_string());
                None
            }
        };

        ReportRow {
            input,
            ground_truth_entities,
            output_entities,
            all_unique_entities,
            unique_in_output,
            unique_in_ground_truth,
            result,
            overlap_pct,
            error: (!errors.is_empty()).then(|| errors.join("; ")),
        }
    }

    pub fn evaluate_rows(&mut self, rows: Vec<InputRow>) -> (Vec<ReportRow>, ReportSummary) {
        let mut summary = ReportSummary::default();
        let mut report = Vec::with_capacity(rows.len());

        for (idx, row) in rows.into_iter().enumerate() {
            let evaluated = self.evaluate_row(row);
            summary.rows += 1;
            if evaluated.result {
                summary.covered += 1;
            } else {
                summary.not_covered += 1;
            }
            if let Some(error) = &evaluated.error {
                summary.failed += 1;
                log::warn!("Failed to evaluate row {idx}: {error}");
            }
            report.push(evaluated);
        }

        (report, summary)
    }

    /// Evaluate every row of `table` and write the report through `writer`.
    pub fn run_table<W>(&mut self, table: InputTable, writer: &W) -> Result<ReportSummary>
    where
        W: ReportWriter,
    {
        let InputTable { headers, rows } = table;
        let (report, summary) = self.evaluate_rows(rows);
        writer.write_report(&headers, &report)?;

        log::info!(
            "Finished factual accuracy report: rows={}, covered={}, not_covered={}, failed={}",
            summary.rows,
            summary.covered,
            summary.not_covered,
            summary.failed
        );
        if summary.failed > 0 {
            log::warn!(
                "Factual accuracy report had {} rows with errors",
                summary.failed
            );
        }

        Ok(summary)
    }

    /// Read the input table from `repo`, evaluate it and write the report back.
    ///
    /// A missing input file is logged and yields `Ok(None)`; the caller may
    /// then fall back to [`sample_table`].
    pub fn run<R>(&mut self, repo: &R) -> Result<Option<ReportSummary>>
    where
        R: RowReader + ReportWriter,
    {
        let table = match repo.read_table() {
            Ok(table) => table,
            Err(Error::MissingInputFile(path)) => {
                log::error!("File Not Found: {path}.");
                log::error!("No data found in the specified file.");
                return Ok(None);
            }
            Err(error) => return Err(error),
        };

        self.run_table(table, repo).map(Some)
    }
}

/// Synthetic evaluation cases used when no input table is available.
pub fn sample_table() -> InputTable {
    InputTable::from_pairs(vec![
        InputRow::new(
            "A distribution in Omni refers to the process of sharing or pushing an audience from \
             Audience Explorer (Omni) to another application within the Omni ecosystem or to \
             external platforms (e.g., Demand Side Platforms, or DSPs) for activation.",
            "A distribution in Omni refers to the process of sharing or pushing an audience from \
             Audience Explorer (Omni) to another application within the Omni ecosystem or to \
             external platforms (e.g., Demand Side Platforms, or DSPs) for activation.",
        ),
        InputRow::new(
            "In Omni L&D.",
            "The Omni Foundations Certification is available on Omni L&D, the learning and \
             development platform for Omnicom employees. Omni L&D hosts the recorded sessions, \
             presentation decks, and assessment required for completing the certification.",
        ),
    ])
}
