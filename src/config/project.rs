//! Project metadata for the report cover page
//!
//! Loaded from an optional `project_info.json`. An absent file or unparseable
//! content falls back to built-in defaults; the report must never fail because
//! the metadata is missing.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// A team member listed on the report cover page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TeamMember {
    /// Member name; renders as an empty line when missing
    #[serde(default)]
    pub name: String,
}

/// Metadata block printed on the report cover page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub project_title: String,
    pub project_name: String,
    pub course: String,
    pub institute: String,
    pub supervisor: String,
    pub semester: String,
    pub generated_by: String,
    pub team: Vec<TeamMember>,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            project_title: "Smart Expense Tracker".to_string(),
            project_name: "Smart Expense Tracker System".to_string(),
            course: String::new(),
            institute: String::new(),
            supervisor: String::new(),
            semester: String::new(),
            generated_by: "Smart Expense Tracker System".to_string(),
            team: Vec::new(),
        }
    }
}

impl ProjectInfo {
    /// Load project metadata, falling back to defaults on any failure.
    ///
    /// A missing file is the normal case and is not logged; a file that
    /// exists but cannot be read or parsed produces a warning.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                warn!("failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(info) => info,
            Err(e) => {
                warn!("failed to parse {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
