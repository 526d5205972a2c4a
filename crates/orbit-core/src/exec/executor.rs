//! Uniform command execution with dry-run support

use super::runner::{CommandRunner, Invocation, ProcessOutput};
use crate::config::Toolchain;
use crate::ui::Reporter;
use std::path::Path;

/// Default answers for the `shadcn init` prompts
pub const SHADCN_INIT_INPUT: &str = "\n\n\n\n\n\n";

/// Default answer for the `shadcn add` prompt
pub const SHADCN_ADD_INPUT: &str = "\n";

/// Outcome of one external program call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub success: bool,
    /// Full command line, for diagnostics
    pub command: String,
    pub output: Option<String>,
    pub error: Option<String>,
}

impl CommandResult {
    fn ok(command: String, output: Option<String>) -> Self {
        Self {
            success: true,
            command,
            output,
            error: None,
        }
    }

    fn failed(command: String, error: String) -> Self {
        Self {
            success: false,
            command,
            output: None,
            error: Some(error),
        }
    }

    /// Diagnostic text for a failed result
    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Command failed")
    }
}

/// Runs external programs and never fails past its boundary: every problem
/// comes back as an unsuccessful [`CommandResult`].
pub struct Executor<'a> {
    runner: &'a dyn CommandRunner,
    reporter: &'a dyn Reporter,
    toolchain: &'a Toolchain,
    dry_run: bool,
}

impl<'a> Executor<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        reporter: &'a dyn Reporter,
        toolchain: &'a Toolchain,
        dry_run: bool,
    ) -> Self {
        Self {
            runner,
            reporter,
            toolchain,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Run `program` with `args` in `cwd`
    pub async fn execute(
        &self,
        program: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> CommandResult {
        self.run(Invocation::new(program, args.to_vec()).cwd(cwd.map(Path::to_path_buf)))
            .await
    }

    /// Run `npx <package> <args>` in `cwd`
    pub async fn execute_npx(
        &self,
        package: &str,
        args: &[String],
        cwd: Option<&Path>,
    ) -> CommandResult {
        let mut npx_args = Vec::with_capacity(args.len() + 1);
        npx_args.push(package.to_string());
        npx_args.extend_from_slice(args);
        self.execute(&self.toolchain.npx, &npx_args, cwd).await
    }

    /// Run `npx shadcn@<version> <args>` in `cwd`, answering its interactive
    /// prompts with defaults for the `init` and `add` actions.
    pub async fn execute_shadcn(&self, args: &[String], cwd: Option<&Path>) -> CommandResult {
        let stdin = match args.first().map(String::as_str) {
            Some("init") => Some(SHADCN_INIT_INPUT),
            Some("add") => Some(SHADCN_ADD_INPUT),
            _ => None,
        };

        let mut npx_args = vec![self.toolchain.shadcn_package()];
        npx_args.extend_from_slice(args);

        let invocation = Invocation::new(self.toolchain.npx.as_str(), npx_args)
            .cwd(cwd.map(Path::to_path_buf))
            .stdin(stdin.map(str::to_string));
        self.run(invocation).await
    }

    async fn run(&self, invocation: Invocation) -> CommandResult {
        let command = invocation.to_string();

        if self.dry_run {
            self.reporter.dry_run(&command);
            return CommandResult::ok(command, None);
        }

        match self.runner.run(&invocation).await {
            Ok(output) => Self::interpret(command, output),
            Err(e) => CommandResult::failed(
                command,
                format!("Failed to run {}: {}", invocation.program, e),
            ),
        }
    }

    fn interpret(command: String, output: ProcessOutput) -> CommandResult {
        if output.success() {
            return CommandResult::ok(command, Some(output.stdout));
        }

        let stderr = output.stderr.trim();
        let error = if !stderr.is_empty() {
            stderr.to_string()
        } else {
            match output.exit_code {
                Some(code) => format!("Command failed with exit code {}", code),
                None => "Command terminated by signal".to_string(),
            }
        };
        CommandResult::failed(command, error)
    }
}
