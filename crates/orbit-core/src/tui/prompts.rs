//! Charm-style CLI prompts and progress output using cliclack

use crate::catalog::{ComponentOption, ALL_SHORTCUT};
use crate::ui::{Prompter, Reporter};
use colored::Colorize;
use std::cell::RefCell;
use std::io;

/// Interactive prompts rendered with cliclack
#[derive(Debug, Default)]
pub struct CliclackPrompter;

impl Prompter for CliclackPrompter {
    fn select_components(&self, catalog: &[ComponentOption]) -> io::Result<Vec<String>> {
        let mut multi = cliclack::multiselect("Select shadcn/ui components to install")
            .item(
                ALL_SHORTCUT.to_string(),
                "Install all components",
                "recommended for the full UI library",
            );

        for component in catalog {
            multi = multi.item(
                component.value.to_string(),
                component.name,
                component.description,
            );
        }

        multi.required(false).interact()
    }

    fn confirm(&self, message: &str, default: bool) -> io::Result<bool> {
        cliclack::confirm(message).initial_value(default).interact()
    }
}

/// Progress output rendered with cliclack log lines and spinners.
///
/// Terminal write errors are ignored.
pub struct CliclackReporter {
    spinners: bool,
    spinner: RefCell<Option<cliclack::ProgressBar>>,
}

impl Default for CliclackReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CliclackReporter {
    pub fn new() -> Self {
        Self {
            spinners: true,
            spinner: RefCell::new(None),
        }
    }

    /// Log steps as plain lines. Used in dry-run mode, where command notices
    /// are printed while a step is in progress.
    pub fn without_spinners(mut self) -> Self {
        self.spinners = false;
        self
    }

    fn take_spinner(&self) -> Option<cliclack::ProgressBar> {
        self.spinner.borrow_mut().take()
    }
}

impl Reporter for CliclackReporter {
    fn intro(&self, title: &str) {
        let _ = cliclack::intro(title.bold().to_string());
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warning(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn error(&self, message: &str) {
        let _ = cliclack::log::error(message.red().to_string());
    }

    fn dry_run(&self, command: &str) {
        let _ = cliclack::log::remark(format!("{} {}", "DRY RUN:".blue().bold(), command));
    }

    fn step_start(&self, message: &str) {
        if !self.spinners {
            let _ = cliclack::log::step(message);
            return;
        }

        if let Some(previous) = self.take_spinner() {
            previous.stop("");
        }
        let spinner = cliclack::spinner();
        spinner.start(message);
        *self.spinner.borrow_mut() = Some(spinner);
    }

    fn step_done(&self, message: &str) {
        match self.take_spinner() {
            Some(spinner) => spinner.stop(message),
            None => {
                let _ = cliclack::log::success(message);
            }
        }
    }

    fn step_failed(&self, message: &str) {
        match self.take_spinner() {
            Some(spinner) => spinner.error(message),
            None => {
                let _ = cliclack::log::error(message);
            }
        }
    }

    fn next_steps(&self, steps: &[String]) {
        println!();
        println!("  {}", "Next steps".cyan().bold());
        println!();

        for (i, step) in steps.iter().enumerate() {
            println!("  {}.  {}", i + 1, step);
        }
        println!();
    }

    fn outro(&self, message: &str) {
        let _ = cliclack::outro(message.green().to_string());
    }
}
