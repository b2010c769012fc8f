pub mod domain;
pub mod error;
pub mod extractors;
pub mod models;
pub mod processing;
pub mod repository;

/// Report location used when none is configured.
pub const DEFAULT_OUTPUT_PATH: &str = "factual_accuracy_results.csv";

pub const GROUND_TRUTH_COLUMN: &str = "Ground_Truth";
pub const OUTPUT_COLUMN: &str = "Output";

/// Columns appended to every input row, in report order.
pub const REPORT_COLUMNS: [&str; 8] = [
    "Ground_Truth_Entities",
    "Output_Entities",
    "All_Unique_Entities",
    "Unique_In_Output",
    "Unique_in_Ground_Truth",
    "Result",
    "Overlap_PCT",
    "Error",
];
