use super::{Orchestrator, Outcome};
use crate::args::CliArgs;
use crate::catalog::{self, COMPONENTS};
use crate::error::OrbitError;
use crate::names::{parse_component_list, validate_project_name};
use crate::probe::directory_exists;

impl Orchestrator<'_> {
    /// Scaffold `args.project_name` under the working directory and install the
    /// selected components into it.
    pub async fn create_project(&self, args: &CliArgs) -> Result<Outcome, OrbitError> {
        let name = args.project_name.as_str();
        if name.is_empty() {
            return Err(OrbitError::MissingProjectName);
        }
        if !validate_project_name(name) {
            return Err(OrbitError::InvalidProjectName(name.to_string()));
        }

        let project_dir = self.cwd.join(name);
        if directory_exists(&project_dir) {
            return Err(OrbitError::DirectoryExists(name.to_string()));
        }

        let executor = self.executor(args.dry_run);
        self.reporter
            .intro(&format!("Creating Next.js project: {}", name));

        self.reporter.step_start("Creating Next.js project...");
        let generator_args: Vec<String> = [name, "--typescript", "--tailwind", "--yes"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let result = executor
            .execute_npx(
                &self.toolchain.generator_package(),
                &generator_args,
                Some(self.cwd.as_path()),
            )
            .await;
        self.finish_step(
            result,
            "Next.js project created successfully",
            "Failed to create Next.js project",
        )?;

        if !args.no_install && !args.dry_run {
            self.reporter.step_start("Installing dependencies...");
            let result = executor
                .execute(
                    &self.toolchain.npm,
                    &["install".to_string()],
                    Some(project_dir.as_path()),
                )
                .await;
            self.finish_step(
                result,
                "Dependencies installed successfully",
                "Failed to install dependencies",
            )?;
        }

        self.initialize_shadcn(&executor, &project_dir).await?;

        let components = self.resolve_selection(args)?;
        let failed = if components.is_empty() {
            self.reporter
                .warning("No components selected. Skipping component installation.");
            Vec::new()
        } else {
            self.install_components(&executor, &components, &project_dir)
                .await
        };

        let config_path = self
            .persist(&executor, &project_dir, &components)
            .await?;

        self.reporter
            .next_steps(&[format!("cd {}", name), "npm run dev".to_string()]);
        if !components.is_empty() {
            let listing = if args.all {
                format!("  - All {} components installed", components.len())
            } else {
                components
                    .iter()
                    .map(|c| format!("  - {}", c))
                    .collect::<Vec<_>>()
                    .join("\n")
            };
            self.reporter
                .info(&format!("Installed components:\n{}", listing));
        }
        self.report_saved(&config_path);
        self.reporter.outro("Project created successfully!");

        Ok(Outcome {
            project_dir,
            components,
            failed,
            config_path,
        })
    }

    /// `--all` wins over `--components`, which wins over the interactive prompt
    fn resolve_selection(&self, args: &CliArgs) -> Result<Vec<String>, OrbitError> {
        if args.all {
            let all = catalog::all_values();
            self.reporter
                .info(&format!("Installing all {} components...", all.len()));
            return Ok(all);
        }

        if let Some(list) = args.components.as_deref().filter(|l| !l.is_empty()) {
            return Ok(parse_component_list(list));
        }

        loop {
            let selected = catalog::expand_selection(self.prompter.select_components(COMPONENTS)?);
            if !selected.is_empty() {
                return Ok(selected);
            }

            let proceed = self
                .prompter
                .confirm("No components selected. Continue without components?", true)?;
            if proceed {
                return Ok(selected);
            }
        }
    }
}
