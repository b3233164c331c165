//! Document export compilers. Each compiler is a pure function from an
//! in-memory record snapshot to an ephemeral byte buffer; missing fields are
//! substituted with defaults, and only buffer/encoding failures propagate.

use thiserror::Error;

mod pdf;
pub mod roster;
pub mod subject;
pub mod summary;

pub use roster::{ROSTER_COLUMNS, RosterRow, compile_roster_spreadsheet};
pub use subject::compile_subject_document;
pub use summary::compile_roster_summary;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] printpdf::Error),
    #[error("Spreadsheet rendering failed: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}
