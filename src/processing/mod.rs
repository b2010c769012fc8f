pub mod accuracy;
pub mod embedding;
pub mod report;
