use super::{Orchestrator, Outcome};
use crate::args::CliArgs;
use crate::catalog;
use crate::error::OrbitError;
use crate::probe::{is_next_project, is_shadcn_initialized};

impl Orchestrator<'_> {
    /// Install the whole catalog into the Next.js project in the working
    /// directory, initializing shadcn/ui first when needed.
    ///
    /// Component selection flags are not honored here; the full catalog is
    /// always installed.
    pub async fn add_components(&self, args: &CliArgs) -> Result<Outcome, OrbitError> {
        let project_dir = self.cwd.clone();

        if !is_next_project(&project_dir) {
            return Err(OrbitError::NotNextProject(project_dir));
        }

        let executor = self.executor(args.dry_run);
        self.reporter.intro("Adding shadcn/ui components");

        if args.components.is_some() || args.all {
            self.reporter.warning(
                "Selection flags are ignored by add-components; installing the full catalog",
            );
        }

        if !is_shadcn_initialized(&project_dir) {
            self.initialize_shadcn(&executor, &project_dir).await?;
        }

        let components = catalog::all_values();
        self.reporter
            .info(&format!("Installing all {} components...", components.len()));

        let failed = self
            .install_components(&executor, &components, &project_dir)
            .await;

        let config_path = self
            .persist(&executor, &project_dir, &components)
            .await?;

        self.report_saved(&config_path);
        self.reporter.outro("All components installed successfully!");

        Ok(Outcome {
            project_dir,
            components,
            failed,
            config_path,
        })
    }
}
