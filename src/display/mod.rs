//! Display formatting utilities
//!
//! Number/percent formatting helpers shared by the normalizer and the data
//! sources, plus terminal table rendering for report previews.

pub mod format;
pub mod table;

pub use format::{format_currency, format_growth, group_thousands};
pub use table::render_section;
