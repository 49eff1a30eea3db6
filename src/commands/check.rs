use anyhow::{Context, Result};
use assetsync::{CheckUseCase, CodeGenerator, LocalFs, ManifestService};

use super::Project;
use crate::ui::context::UiContext;

pub fn cmd_check(project: &Project, ui: &UiContext) -> Result<()> {
    let config = &project.config;
    let manifest = ManifestService::from_config(LocalFs::new(), &project.root, config);
    let generator = CodeGenerator::from_config(LocalFs::new(), &project.root, config);
    let filter = config.event_filter(&project.root)?;

    let report = CheckUseCase::new(
        &project.root,
        &config.project.assets_dir,
        &manifest,
        &generator,
        &filter,
    )
    .execute()
    .with_context(|| format!("failed to check {}", project.root.display()))?;

    let output = project.display(generator.output());
    if ui.json {
        crate::ui::json::emit(
            "check",
            "complete",
            &serde_json::json!({
                "undeclared": report.undeclared,
                "missing": report.missing,
                "stale": report.stale.as_ref().map(|stale| serde_json::json!({
                    "output": output,
                    "exists": stale.exists,
                    "diff": stale.diff,
                })),
                "issues": report.issue_count(),
                "success": report.is_clean(),
            }),
        )?;
    } else {
        print!(
            "{}",
            crate::ui::views::check::render_check_report(
                &report,
                &output,
                ui.verbose,
                ui.color,
                ui.unicode
            )
        );
    }

    if !report.is_clean() {
        std::process::exit(1);
    }
    Ok(())
}
