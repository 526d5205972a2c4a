//! Persisted project configuration and toolchain settings

pub mod toolchain;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

pub use toolchain::Toolchain;

/// File written to the project root after a successful run
pub const CONFIG_FILE_NAME: &str = "orbit.config.json";

/// shadcn/ui version tag used when none is configured
pub const DEFAULT_SHADCN_VERSION: &str = "latest";

/// Decisions recorded for a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitConfig {
    /// Selected component identifiers, in installation order
    pub components: Vec<String>,

    pub tailwind: bool,

    /// Version tag passed to `shadcn@<version>`
    pub shadcn_version: String,
}

impl OrbitConfig {
    /// Config for a run that selected `components`
    pub fn new(components: Vec<String>, shadcn_version: impl Into<String>) -> Self {
        Self {
            components,
            tailwind: true,
            shadcn_version: shadcn_version.into(),
        }
    }
}

/// Path of the config file inside `project_dir`
pub fn config_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE_NAME)
}

/// Write `config` to `project_dir`, replacing any existing file
pub async fn write_config(project_dir: &Path, config: &OrbitConfig) -> Result<PathBuf> {
    fs::create_dir_all(project_dir)
        .await
        .with_context(|| format!("Failed to create directory: {}", project_dir.display()))?;

    let path = config_path(project_dir);
    let content = serde_json::to_string_pretty(config).context("Failed to serialize config")?;
    fs::write(&path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))?;
    Ok(path)
}

/// Read the config from `project_dir`. Missing or malformed files yield `None`.
pub async fn read_config(project_dir: &Path) -> Option<OrbitConfig> {
    let content = fs::read_to_string(config_path(project_dir)).await.ok()?;
    serde_json::from_str(&content).ok()
}
