use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, WriterBuilder};

use crate::domain::entities::{Difference, EntitySet};
use crate::domain::report::{InputRow, InputTable, ReportRow};
use crate::error::{Error, Result};
use crate::repository::{ReportWriter, RowReader};
use crate::{GROUND_TRUTH_COLUMN, OUTPUT_COLUMN, REPORT_COLUMNS};

/// Delimited-text table holding evaluation cases and their report.
pub struct CsvTable {
    input_path: PathBuf,
    output_path: PathBuf,
    delimiter: u8,
}

impl CsvTable {
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            delimiter: b',',
        }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or_else(|| {
            Error::InvalidInput(format!(
                "Column {name} not found in {}",
                path.display()
            ))
        })
}

impl RowReader for CsvTable {
    fn read_table(&self) -> Result<InputTable> {
        if !self.input_path.is_file() {
            return Err(Error::MissingInputFile(self.input_path.display().to_string()));
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .delimiter(self.delimiter)
            .flexible(true)
            .from_path(&self.input_path)?;

        let headers = reader.headers()?.clone();
        let ground_truth_idx = column_index(&headers, GROUND_TRUTH_COLUMN, &self.input_path)?;
        let output_idx = column_index(&headers, OUTPUT_COLUMN, &self.input_path)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            // Cells line up with the headers: short records are padded and
            // surplus trailing cells dropped.
            let cells = (0..headers.len())
                .map(|idx| record.get(idx).unwrap_or_default().to_string())
                .collect();

            rows.push(InputRow {
                ground_truth: record.get(ground_truth_idx).unwrap_or_default().to_string(),
                output: record.get(output_idx).unwrap_or_default().to_string(),
                cells,
            });
        }

        log::info!(
            "Read {} rows from {}",
            rows.len(),
            self.input_path.display()
        );

        Ok(InputTable {
            headers: headers.iter().map(str::to_string).collect(),
            rows,
        })
    }
}

/// JSON array for a present set, empty cell for an absent one.
fn entities_cell(entities: Option<&EntitySet>) -> Result<String> {
    match entities {
        Some(entities) => Ok(serde_json::to_string(entities)?),
        None => Ok(String::new()),
    }
}

fn difference_cell(difference: &Difference) -> Result<String> {
    match difference {
        Difference::Entities(entities) => entities_cell(Some(entities)),
        Difference::Status(status) => Ok(status.to_string()),
    }
}

impl ReportWriter for CsvTable {
    fn write_report(&self, headers: &[String], rows: &[ReportRow]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(&self.output_path)?;

        let mut header: Vec<&str> = headers.iter().map(String::as_str).collect();
        header.extend(REPORT_COLUMNS);
        writer.write_record(&header)?;

        for row in rows {
            let mut record: Vec<String> = row.input.cells.clone();
            record.push(entities_cell(row.ground_truth_entities.as_ref())?);
            record.push(entities_cell(row.output_entities.as_ref())?);
            record.push(entities_cell(row.all_unique_entities.as_ref())?);
            record.push(difference_cell(&row.unique_in_output)?);
            record.push(difference_cell(&row.unique_in_ground_truth)?);
            record.push(row.result.to_string());
            record.push(
                row.overlap_pct
                    .map(|value| format!("{value:.2}"))
                    .unwrap_or_default(),
            );
            record.push(row.error.clone().unwrap_or_default());
            writer.write_record(&record)?;
        }

        writer.flush()?;
        log::info!(
            "Wrote {} report rows to {}",
            rows.len(),
            self.output_path.display()
        );

        Ok(())
    }
}
