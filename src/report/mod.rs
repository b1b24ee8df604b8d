//! Report building
//!
//! Normalizes domain records into flat table sections and assembles them into
//! paginated report documents with titles, covers, and per-page footers.

pub mod assembler;
pub mod kind;
pub mod section;

pub use assembler::{build_full_report, build_metrics_report, build_revenue_report, finalize};
pub use kind::{Artifact, ReportKind};
pub use section::TableSection;
