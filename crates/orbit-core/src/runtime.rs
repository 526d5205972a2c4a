//! Runtime detection for Node.js

use std::process::Command;

/// Runtime detection result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

impl RuntimeInfo {
    /// Short label, e.g. `Node.js (v20.11.0)` or `Node.js (not installed)`
    pub fn describe(&self) -> String {
        if self.available {
            format!("{} ({})", self.name, self.version.as_deref().unwrap_or("unknown"))
        } else {
            format!("{} (not installed)", self.name)
        }
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_program("Node.js", "node")
}

fn check_program(name: &'static str, program: &str) -> RuntimeInfo {
    let output = Command::new(program).arg("--version").output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}
