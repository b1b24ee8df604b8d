//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::ReportPaths;
pub use settings::Settings;
