//! admetrics - Terminal-based campaign analytics report exporter
//!
//! This library turns in-memory analytics records (KPI metrics, campaign
//! performance, monthly revenue) into downloadable CSV and PDF report
//! artifacts, with multi-table pagination and cross-page footer numbering.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Record types (metrics, campaigns, revenue)
//! - `datasource`: Pluggable suppliers of record arrays
//! - `report`: Normalization into table sections and report assembly
//! - `document`: Paginated document composition
//! - `export`: CSV serialization, PDF rendering, single-flight guard
//! - `display`: Number formatting and terminal table previews
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use admetrics::datasource::{DataSource, StaticSource};
//! use admetrics::export::metrics_to_csv;
//!
//! let source = StaticSource::new();
//! let csv = metrics_to_csv(&source.metrics()?, chrono::Utc::now())?;
//! assert!(csv.starts_with("Metric,Value,Change,Exported"));
//! # Ok::<(), admetrics::error::ReportError>(())
//! ```

pub mod cli;
pub mod config;
pub mod datasource;
pub mod display;
pub mod document;
pub mod error;
pub mod export;
pub mod models;
pub mod report;

pub use error::{ReportError, ReportResult};
