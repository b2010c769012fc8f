use crate::domain::report::{InputTable, ReportRow};
use crate::error::Result;

pub mod table;

pub trait RowReader {
    fn read_table(&self) -> Result<InputTable>;
}

pub trait ReportWriter {
    /// Write `rows` under the input `headers` followed by the report columns.
    fn write_report(&self, headers: &[String], rows: &[ReportRow]) -> Result<()>;
}
