//! create-next-orbit - Next.js project scaffolding with shadcn/ui components

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use orbit_core::runtime;
use orbit_core::tui::{CliclackPrompter, CliclackReporter};
use orbit_core::{parse_args, Orchestrator, OrbitError, Reporter, TokioRunner, Toolchain};

const AFTER_HELP: &str = "\
Usage:
  create-next-orbit <project-name> [options]
  create-next-orbit add-components [options]

Options:
  --components=\"a,b,c\"  Components to install (comma-separated)
  --all                 Install every component without prompting
  --dry-run             Print the commands instead of running them
  --no-install          Skip `npm install` after creating the project
  --use-config          Reserved for a future release

Environment:
  ORBIT_SHADCN_VERSION  shadcn/ui version tag (default: latest)
  ORBIT_NEXT_VERSION    create-next-app version tag (default: latest)";

#[derive(Parser, Debug)]
#[command(name = "create-next-orbit")]
#[command(about = "CLI for scaffolding Next.js projects with shadcn/ui components")]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Args {
    /// Project name or `add-components`, followed by options
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub tokens: Vec<String>,
}

/// Warn early when the tools every flow shells out to cannot work
fn preflight(reporter: &dyn Reporter) {
    let node = runtime::check_node();
    if !node.available {
        reporter.warning(&format!(
            "{}: npx and npm will not run. Install it from https://nodejs.org",
            node.describe()
        ));
    }
}

fn report_failure(reporter: &dyn Reporter, err: &OrbitError) {
    reporter.error(&err.to_string());
    if let Some(hint) = err.hint() {
        reporter.warning(hint);
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored and the exit status is non-zero on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
        std::process::exit(1);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let cli = Args::parse();
    let args = parse_args(&cli.tokens);

    let cwd = std::env::current_dir().context("Failed to read the current directory")?;
    let toolchain = Toolchain::from_env();

    let runner = TokioRunner;
    let prompter = CliclackPrompter;
    let reporter = if args.dry_run {
        CliclackReporter::new().without_spinners()
    } else {
        CliclackReporter::new()
    };

    if args.dry_run {
        reporter.info(&format!(
            "{} commands are printed, nothing is executed",
            "Dry run:".blue().bold()
        ));
    } else {
        preflight(&reporter);
    }

    let orchestrator = Orchestrator::new(&runner, &prompter, &reporter, toolchain, cwd);
    let result = orchestrator.run(&args).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Err(err) = result {
        report_failure(&reporter, &err);
        std::process::exit(1);
    }

    Ok(())
}
