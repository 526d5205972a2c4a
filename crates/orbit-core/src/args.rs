//! Command-line intent parsing
//!
//! The parser is deliberately tolerant: unknown flags are ignored and missing
//! values fall back to defaults. Validation happens in the flows.

/// Top-level action selected by the first token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Scaffold a new project (default)
    #[default]
    Create,
    /// Install the whole catalog into the project in the current directory
    AddComponents,
}

impl Command {
    /// Token that selects [`Command::AddComponents`]
    pub const ADD_COMPONENTS: &'static str = "add-components";

    /// Earlier name of the add-components action, still accepted
    const ADD_ALL_ALIAS: &'static str = "add-all";

    fn from_token(token: &str) -> Option<Self> {
        match token {
            Self::ADD_COMPONENTS | Self::ADD_ALL_ALIAS => Some(Command::AddComponents),
            _ => None,
        }
    }
}

/// Parsed invocation intent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    /// First positional token; empty when none was given
    pub project_name: String,

    /// Raw `--components` value with quotes stripped
    pub components: Option<String>,

    /// Report actions without running them
    pub dry_run: bool,

    /// Skip `npm install` after generating the project
    pub no_install: bool,

    /// Reserved: reuse a persisted `orbit.config.json`
    pub use_config: bool,

    /// Install the whole catalog without prompting
    pub all: bool,

    pub command: Command,
}

/// Parse the tokens that follow the program name. Never fails.
pub fn parse_args<I, S>(tokens: I) -> CliArgs
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut parsed = CliArgs::default();
    let mut tokens = tokens.into_iter().peekable();

    if let Some(command) = tokens
        .peek()
        .and_then(|first| Command::from_token(first.as_ref()))
    {
        parsed.command = command;
        tokens.next();
    }

    for token in tokens {
        let token = token.as_ref();

        if token.starts_with("--") {
            let (flag, value) = match token.split_once('=') {
                Some((flag, value)) => (flag, Some(value)),
                None => (token, None),
            };

            match flag {
                "--components" => parsed.components = Some(strip_quotes(value.unwrap_or(""))),
                "--dry-run" => parsed.dry_run = true,
                "--no-install" => parsed.no_install = true,
                "--use-config" => parsed.use_config = true,
                "--all" => parsed.all = true,
                _ => {}
            }
        } else if parsed.project_name.is_empty() {
            parsed.project_name = token.to_string();
        }
    }

    parsed
}

fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '"' | '\'')).collect()
}
