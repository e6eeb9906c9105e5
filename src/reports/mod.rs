//! Report compilation pipeline
//!
//! Orchestrates chart generation, the spreadsheet export and the assembly of
//! the paginated PDF report. Data flows one direction: store -> aggregates ->
//! compiler -> artifacts.

pub mod charts;
pub mod compiler;
pub mod document;
pub mod fonts;
pub mod spreadsheet;

pub use compiler::{ReportArtifacts, ReportCompiler, ROWS_PER_PAGE};
