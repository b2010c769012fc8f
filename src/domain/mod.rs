pub mod entities;
pub mod report;
