//! Orbit Core - Shared library for the create-next-orbit CLI
//!
//! This library scaffolds Next.js projects and installs shadcn/ui components by
//! orchestrating external tools (`create-next-app`, `npm`, `shadcn`).
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Pure functions for argument parsing, name
//!   normalization, the component catalog, project probes and config persistence
//! - **Layer 2: Execution** - `CommandRunner` capability and the dry-run aware `Executor`
//! - **Layer 3: Workflow Orchestration** - `Orchestrator` running the create and
//!   add-components flows against the `Prompter`/`Reporter` capabilities
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompts and reporter
//!
//! # Example Usage
//!
//! ```ignore
//! use orbit_core::{parse_args, Orchestrator, Toolchain, TokioRunner};
//! use orbit_core::tui::{CliclackPrompter, CliclackReporter};
//!
//! let args = parse_args(std::env::args().skip(1));
//! let (runner, prompter, reporter) = (TokioRunner, CliclackPrompter, CliclackReporter::new());
//! let orchestrator = Orchestrator::new(
//!     &runner, &prompter, &reporter, Toolchain::from_env(), std::env::current_dir()?,
//! );
//! let outcome = orchestrator.run(&args).await?;
//! ```

pub mod args;
pub mod catalog;
pub mod config;
pub mod error;
pub mod exec;
pub mod flow;
pub mod names;
pub mod probe;
pub mod runtime;
pub mod ui;

#[cfg(feature = "tui")]
pub mod tui;

#[cfg(test)]
pub(crate) mod testing;

// Re-export main types for convenience
pub use args::{parse_args, CliArgs, Command};
pub use catalog::{ComponentOption, COMPONENTS};
pub use config::{read_config, write_config, OrbitConfig, Toolchain, CONFIG_FILE_NAME};
pub use error::OrbitError;
pub use exec::{CommandResult, CommandRunner, Executor, TokioRunner};
pub use flow::{Orchestrator, Outcome};
pub use names::{normalize_component_name, parse_component_list, validate_project_name};
pub use ui::{Prompter, Reporter};
