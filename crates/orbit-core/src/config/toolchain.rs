//! External programs invoked by the flows

use super::DEFAULT_SHADCN_VERSION;

/// Environment variable overriding the shadcn/ui version tag
pub const SHADCN_VERSION_ENV: &str = "ORBIT_SHADCN_VERSION";

/// Environment variable overriding the create-next-app version tag
pub const NEXT_VERSION_ENV: &str = "ORBIT_NEXT_VERSION";

/// Program names and version pins for the external tools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Package runner (`npx`)
    pub npx: String,
    /// Package manager used for `install` and the dev server hint
    pub npm: String,
    /// Version tag for `create-next-app`
    pub next_version: String,
    /// Version tag for `shadcn`, also persisted in the config
    pub shadcn_version: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            npx: platform_program("npx"),
            npm: platform_program("npm"),
            next_version: "latest".to_string(),
            shadcn_version: DEFAULT_SHADCN_VERSION.to_string(),
        }
    }
}

impl Toolchain {
    /// Defaults with overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`; blank values are ignored
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut toolchain = Self::default();
        if let Some(version) = read(NEXT_VERSION_ENV) {
            toolchain.next_version = version;
        }
        if let Some(version) = read(SHADCN_VERSION_ENV) {
            toolchain.shadcn_version = version;
        }
        toolchain
    }

    /// `create-next-app@<version>`
    pub fn generator_package(&self) -> String {
        format!("create-next-app@{}", self.next_version)
    }

    /// `shadcn@<version>`
    pub fn shadcn_package(&self) -> String {
        format!("shadcn@{}", self.shadcn_version)
    }
}

// npm ships batch shims on Windows, which process spawning does not resolve
fn platform_program(name: &str) -> String {
    if cfg!(windows) {
        format!("{}.cmd", name)
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_packages() {
        let toolchain = Toolchain::default();
        assert_eq!(toolchain.generator_package(), "create-next-app@latest");
        assert_eq!(toolchain.shadcn_package(), "shadcn@latest");
    }

    #[test]
    fn test_overrides_from_lookup() {
        let toolchain = Toolchain::from_lookup(|key| match key {
            SHADCN_VERSION_ENV => Some("2.3.0".to_string()),
            NEXT_VERSION_ENV => Some(" 15 ".to_string()),
            _ => None,
        });
        assert_eq!(toolchain.shadcn_package(), "shadcn@2.3.0");
        assert_eq!(toolchain.generator_package(), "create-next-app@15");
    }

    #[test]
    fn test_blank_override_ignored() {
        let toolchain = Toolchain::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(toolchain, Toolchain::default());
    }
}
