//! Workflow orchestration
//!
//! Two flows share the executor, probes and UI capabilities:
//! - [`Orchestrator::create_project`] scaffolds a new Next.js project
//! - [`Orchestrator::add_components`] installs the whole catalog into the
//!   project in the working directory
//!
//! Fatal steps return [`OrbitError`]. A component that fails to install is
//! reported and skipped.

mod add;
mod create;

use crate::args::{CliArgs, Command};
use crate::catalog;
use crate::config::{self, OrbitConfig, Toolchain};
use crate::error::OrbitError;
use crate::exec::{CommandResult, CommandRunner, Executor};
use crate::ui::{Prompter, Reporter};
use std::path::{Path, PathBuf};

/// What a completed flow did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Project the components were installed into
    pub project_dir: PathBuf,
    /// Selected components, in installation order
    pub components: Vec<String>,
    /// Components whose installation failed and was skipped
    pub failed: Vec<String>,
    /// Written config file; `None` in dry-run mode
    pub config_path: Option<PathBuf>,
}

/// Sequences probes, external commands and persistence for one invocation
pub struct Orchestrator<'a> {
    runner: &'a dyn CommandRunner,
    prompter: &'a dyn Prompter,
    reporter: &'a dyn Reporter,
    toolchain: Toolchain,
    cwd: PathBuf,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        prompter: &'a dyn Prompter,
        reporter: &'a dyn Reporter,
        toolchain: Toolchain,
        cwd: PathBuf,
    ) -> Self {
        Self {
            runner,
            prompter,
            reporter,
            toolchain,
            cwd,
        }
    }

    /// Run the flow selected by `args.command`
    pub async fn run(&self, args: &CliArgs) -> Result<Outcome, OrbitError> {
        if args.use_config {
            self.reporter
                .warning("--use-config is reserved for a future release and has no effect");
        }

        match args.command {
            Command::Create => self.create_project(args).await,
            Command::AddComponents => self.add_components(args).await,
        }
    }

    fn executor(&self, dry_run: bool) -> Executor<'_> {
        Executor::new(self.runner, self.reporter, &self.toolchain, dry_run)
    }

    /// Close the current step; an unsuccessful result aborts the flow
    fn finish_step(
        &self,
        result: CommandResult,
        done: &str,
        failed: &str,
    ) -> Result<(), OrbitError> {
        if result.success {
            self.reporter.step_done(done);
            return Ok(());
        }

        self.reporter.step_failed(failed);
        Err(OrbitError::StepFailed {
            step: failed.to_string(),
            message: result.error_message().to_string(),
        })
    }

    async fn initialize_shadcn(
        &self,
        executor: &Executor<'_>,
        project_dir: &Path,
    ) -> Result<(), OrbitError> {
        self.reporter.step_start("Initializing shadcn/ui...");
        let result = executor
            .execute_shadcn(&["init".to_string()], Some(project_dir))
            .await;
        self.finish_step(
            result,
            "shadcn/ui initialized successfully",
            "Failed to initialize shadcn/ui",
        )
    }

    /// Add each component in order. Returns the components that failed.
    async fn install_components(
        &self,
        executor: &Executor<'_>,
        components: &[String],
        project_dir: &Path,
    ) -> Vec<String> {
        let unknown = catalog::unknown_components(components);
        if !unknown.is_empty() {
            self.reporter.warning(&format!(
                "Not in the component catalog, trying anyway: {}",
                unknown.join(", ")
            ));
        }

        let mut failed = Vec::new();

        for component in components {
            self.reporter.step_start(&format!("Adding {}...", component));
            let result = executor
                .execute_shadcn(&["add".to_string(), component.clone()], Some(project_dir))
                .await;

            if result.success {
                self.reporter.step_done(&format!("Added {}", component));
            } else {
                self.reporter
                    .step_failed(&format!("Failed to install component: {}", component));
                self.reporter.error(result.error_message());
                self.reporter
                    .warning(&format!("Skipping {} and continuing...", component));
                failed.push(component.clone());
            }
        }

        let installed = components.len() - failed.len();
        if failed.is_empty() {
            self.reporter
                .info(&format!("Installed {} components", installed));
        } else {
            self.reporter.warning(&format!(
                "Installed {} of {} components, skipped: {}",
                installed,
                components.len(),
                failed.join(", ")
            ));
        }

        failed
    }

    /// Record the selection unless running dry
    async fn persist(
        &self,
        executor: &Executor<'_>,
        project_dir: &Path,
        components: &[String],
    ) -> Result<Option<PathBuf>, OrbitError> {
        if executor.is_dry_run() {
            return Ok(None);
        }

        let config = OrbitConfig::new(components.to_vec(), self.toolchain.shadcn_version.as_str());
        config::write_config(project_dir, &config)
            .await
            .map(Some)
            .map_err(|e| OrbitError::ConfigWrite {
                path: config::config_path(project_dir),
                message: format!("{:#}", e),
            })
    }

    fn report_saved(&self, config_path: &Option<PathBuf>) {
        match config_path {
            Some(_) => self
                .reporter
                .info(&format!("Configuration saved to: {}", config::CONFIG_FILE_NAME)),
            None => self.reporter.info("Dry run complete, no files were written"),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::testing::{RecordingReporter, RecordingRunner, ScriptedPrompter};

    /// Owned doubles plus a scratch working directory
    pub struct Harness {
        pub runner: RecordingRunner,
        pub prompter: ScriptedPrompter,
        pub reporter: RecordingReporter,
        pub dir: tempfile::TempDir,
    }

    impl Harness {
        pub fn new() -> Self {
            Self::with_prompter(ScriptedPrompter::default())
        }

        pub fn with_prompter(prompter: ScriptedPrompter) -> Self {
            Self {
                runner: RecordingRunner::new(),
                prompter,
                reporter: RecordingReporter::default(),
                dir: tempfile::tempdir().unwrap(),
            }
        }

        pub fn cwd(&self) -> PathBuf {
            self.dir.path().to_path_buf()
        }

        pub fn orchestrator(&self) -> Orchestrator<'_> {
            Orchestrator::new(
                &self.runner,
                &self.prompter,
                &self.reporter,
                Toolchain::default(),
                self.cwd(),
            )
        }

        pub async fn run(&self, tokens: &[&str]) -> Result<Outcome, OrbitError> {
            let args = crate::args::parse_args(tokens);
            self.orchestrator().run(&args).await
        }
    }
}
