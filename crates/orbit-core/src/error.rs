//! Fatal flow errors

use std::path::PathBuf;
use thiserror::Error;

/// Conditions that abort a flow. The binary reports them and exits non-zero.
#[derive(Debug, Error)]
pub enum OrbitError {
    #[error("Project name is required")]
    MissingProjectName,

    #[error("Invalid project name \"{0}\": use lowercase letters, digits and hyphens only")]
    InvalidProjectName(String),

    #[error("Directory \"{0}\" already exists")]
    DirectoryExists(String),

    #[error("{} is not a Next.js project", .0.display())]
    NotNextProject(PathBuf),

    #[error("{step}: {message}")]
    StepFailed { step: String, message: String },

    #[error("Prompt failed: {0}")]
    Prompt(#[from] std::io::Error),

    #[error("Failed to write {}: {message}", .path.display())]
    ConfigWrite { path: PathBuf, message: String },
}

impl OrbitError {
    /// Hint printed under the error message, if any
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            OrbitError::MissingProjectName => Some(
                "Usage: create-next-orbit <project-name> [options]\n       \
                 create-next-orbit add-components [options]",
            ),
            OrbitError::InvalidProjectName(_) => {
                Some("Project name must be a valid npm package name (lowercase, hyphens only)")
            }
            OrbitError::NotNextProject(_) => {
                Some("Please run this command from a Next.js project directory")
            }
            _ => None,
        }
    }
}
