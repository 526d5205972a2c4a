//! Component name normalization and project name validation

/// Convert user-typed component names into canonical identifiers.
///
/// Lowercases, collapses whitespace runs into a single hyphen and drops every
/// character outside `[a-z0-9-]`. Normalizing twice equals normalizing once.
pub fn normalize_component_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                normalized.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
            normalized.push(c);
        }
    }

    normalized
}

/// Parse a comma-separated component list (as given to `--components`).
///
/// Order is preserved. Empty pieces are dropped, as are pieces that normalize
/// to an identifier already in the list.
pub fn parse_component_list(input: &str) -> Vec<String> {
    let mut components: Vec<String> = Vec::new();

    for piece in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let name = normalize_component_name(piece);
        if !name.is_empty() && !components.contains(&name) {
            components.push(name);
        }
    }

    components
}

/// Check a project name: lowercase alphanumerics and hyphens, no leading or
/// trailing hyphen, at least one character.
pub fn validate_project_name(name: &str) -> bool {
    let valid_chars = name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    !name.is_empty() && valid_chars && !name.starts_with('-') && !name.ends_with('-')
}
