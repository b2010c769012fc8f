use crate::domain::entities::{Difference, EntitySet};
use crate::{GROUND_TRUTH_COLUMN, OUTPUT_COLUMN};

/// One evaluation case read from the input table.
///
/// `cells` holds every input cell in table order, so the report can echo the
/// row unchanged before its own columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputRow {
    pub ground_truth: String,
    pub output: String,
    pub cells: Vec<String>,
}

impl InputRow {
    /// A row of a two-column `Ground_Truth`, `Output` table.
    pub fn new(ground_truth: impl Into<String>, output: impl Into<String>) -> Self {
        let ground_truth = ground_truth.into();
        let output = output.into();
        Self {
            cells: vec![ground_truth.clone(), output.clone()],
            ground_truth,
            output,
        }
    }
}

/// Input headers together with the rows below them.
#[derive(Clone, Debug, PartialEq)]
pub struct InputTable {
    pub headers: Vec<String>,
    pub rows: Vec<InputRow>,
}

impl InputTable {
    /// A table with only the `Ground_Truth` and `Output` columns.
    pub fn from_pairs(rows: Vec<InputRow>) -> Self {
        Self {
            headers: vec![GROUND_TRUTH_COLUMN.to_string(), OUTPUT_COLUMN.to_string()],
            rows,
        }
    }
}

/// An input row extended with everything derived from it.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub input: InputRow,
    pub ground_truth_entities: Option<EntitySet>,
    pub output_entities: Option<EntitySet>,
    pub all_unique_entities: Option<EntitySet>,
    pub unique_in_output: Difference,
    pub unique_in_ground_truth: Difference,
    pub result: bool,
    /// `None` when scoring failed for this row.
    pub overlap_pct: Option<f32>,
    pub error: Option<String>,
}
