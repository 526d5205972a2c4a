//! Read-only checks of project state on disk
//!
//! Every probe answers `false` when the underlying filesystem access fails.

use serde_json::Value;
use std::path::Path;

/// Manifest inspected to recognize a Next.js project
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Marker written by `shadcn init`
pub const SHADCN_MARKER: &str = "components.json";

/// Whether `path` exists and is a directory
pub fn directory_exists(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
}

/// Whether `path/package.json` lists `next` as a dependency or dev dependency
pub fn is_next_project(path: &Path) -> bool {
    let Ok(content) = std::fs::read_to_string(path.join(PACKAGE_MANIFEST)) else {
        return false;
    };
    let Ok(manifest) = serde_json::from_str::<Value>(&content) else {
        return false;
    };

    ["dependencies", "devDependencies"]
        .iter()
        .any(|section| declares(&manifest[*section], "next"))
}

/// Whether shadcn/ui has been initialized in `path`
pub fn is_shadcn_initialized(path: &Path) -> bool {
    path.join(SHADCN_MARKER).exists()
}

fn declares(section: &Value, package: &str) -> bool {
    match section.get(package) {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(version)) => !version.is_empty(),
        Some(_) => true,
    }
}
