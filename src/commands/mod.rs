//! Command handlers
//!
//! Each handler loads the project, calls one use case, and renders the
//! result as text or NDJSON. Findings that should fail CI exit with status 1.

pub mod check;
pub mod generate;
pub mod manifest;
pub mod project_root;
pub mod watch;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use assetsync::{Config, ConfigWarning};

use crate::cli::{Cli, Commands};
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn run(cli: Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    let project = Project::load(cli.project.as_deref(), &ui)?;

    match cli.command {
        Commands::Watch {
            debounce_ms,
            strategy,
        } => watch::cmd_watch(project, debounce_ms, strategy.as_deref(), &ui),
        Commands::Generate { check } => generate::cmd_generate(&project, check, &ui),
        Commands::Add { path } => manifest::cmd_add(&project, &path, &ui),
        Commands::Remove { path } => manifest::cmd_remove(&project, &path, &ui),
        Commands::Check => check::cmd_check(&project, &ui),
        Commands::List => manifest::cmd_list(&project, &ui),
    }
}

/// Resolved project root plus its effective configuration
pub struct Project {
    pub root: PathBuf,
    pub config: Config,
}

impl Project {
    fn load(explicit: Option<&Path>, ui: &UiContext) -> Result<Self> {
        let start = match explicit {
            Some(dir) => dir.to_path_buf(),
            None => {
                let cwd = std::env::current_dir().context("cannot read current directory")?;
                project_root::discover_project_root(&cwd)
            }
        };
        let root = start
            .canonicalize()
            .with_context(|| format!("project directory {} does not exist", start.display()))?;

        let (config, warnings) = Config::load_or_default(&root)
            .with_context(|| format!("failed to load configuration for {}", root.display()))?;
        report_warnings(&warnings, ui);

        Ok(Self { root, config })
    }

    /// `path` relative to the root with `/` separators, for display
    pub fn display(&self, path: &Path) -> String {
        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .to_string_lossy()
            .replace('\\', "/")
    }
}

fn report_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    for warning in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(
                "config",
                "warning",
                &serde_json::json!({
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }),
            );
        } else {
            eprintln!("{} {}", Icon::Warning.colored(ui.color, ui.unicode), warning);
        }
    }
}
