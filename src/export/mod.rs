//! Export functionality
//!
//! Turns records and composed documents into downloadable artifacts: CSV text
//! via the `csv` crate and PDF bytes via `printpdf`. Also provides the
//! single-flight guard that rejects a second export while one is running.

pub mod csv;
pub mod guard;
pub mod pdf;

pub use csv::{campaigns_to_csv, metrics_to_csv, revenue_to_csv};
pub use guard::{ExportGuard, ExportTicket};
pub use pdf::render_pdf;
