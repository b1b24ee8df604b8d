//! User settings for admetrics
//!
//! Report branding and output preferences, persisted as JSON in the config
//! directory.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::paths::ReportPaths;
use crate::error::ReportError;

/// User settings for admetrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Brand name stamped on report titles and footers
    #[serde(default = "default_brand")]
    pub brand: String,

    /// Attribution line on the full report's cover page
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Directory report files are written to; current directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

fn default_schema_version() -> u32 {
    1
}

fn default_brand() -> String {
    "AdMetrics".to_string()
}

fn default_attribution() -> String {
    "Generated by AdMetrics Suite".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            brand: default_brand(),
            attribution: default_attribution(),
            output_dir: None,
        }
    }
}

impl Settings {
    /// Name shown in page footers
    pub fn footer_name(&self) -> String {
        format!("{} Analytics", self.brand)
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReportPaths) -> Result<Self, ReportError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| ReportError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReportError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReportPaths) -> Result<(), ReportError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ReportError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| ReportError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
