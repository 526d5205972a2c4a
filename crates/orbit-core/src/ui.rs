//! User interaction capabilities
//!
//! Flows only talk to these traits. The `tui` feature provides cliclack-backed
//! implementations; tests use recording doubles.

use crate::catalog::ComponentOption;
use std::io;

/// Interactive questions asked during a flow
pub trait Prompter {
    /// Let the user pick zero or more components. The returned values are
    /// catalog identifiers and may include [`crate::catalog::ALL_SHORTCUT`].
    fn select_components(&self, catalog: &[ComponentOption]) -> io::Result<Vec<String>>;

    /// Ask a yes/no question
    fn confirm(&self, message: &str, default: bool) -> io::Result<bool>;
}

/// Progress and diagnostic output of a flow
pub trait Reporter {
    fn intro(&self, title: &str);
    fn info(&self, message: &str);
    fn warning(&self, message: &str);
    fn error(&self, message: &str);

    /// A command that would have run outside dry-run mode
    fn dry_run(&self, command: &str);

    /// Start a long-running step (spinner)
    fn step_start(&self, message: &str);
    /// Finish the current step successfully
    fn step_done(&self, message: &str);
    /// Finish the current step with a failure
    fn step_failed(&self, message: &str);

    fn next_steps(&self, steps: &[String]);
    fn outro(&self, message: &str);
}
