//! External command execution
//!
//! This module provides:
//! - The [`CommandRunner`] capability and its tokio-backed implementation
//! - The [`Executor`], which adds dry-run handling and uniform results

pub mod executor;
pub mod runner;

pub use executor::{CommandResult, Executor};
pub use runner::{CommandRunner, Invocation, ProcessOutput, TokioRunner};
