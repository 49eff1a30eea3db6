use std::path::Path;

use anyhow::{Context, Result};
use assetsync::{AssetPath, LocalFs, ManifestAction, ManifestService};

use super::Project;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::manifest::{render_edit, render_list};

/// Accept manifest-style relative paths and absolute paths under the root
fn parse_asset(project: &Project, raw: &str) -> Result<AssetPath> {
    let path = Path::new(raw);
    let asset = if path.is_absolute() {
        AssetPath::from_absolute(&project.root, path)
    } else {
        AssetPath::parse(raw)
    };
    asset.with_context(|| format!("invalid asset path '{}'", raw))
}

pub fn cmd_add(project: &Project, raw: &str, ui: &UiContext) -> Result<()> {
    let asset = parse_asset(project, raw)?;
    if !ui.json && !project.root.join(asset.as_str()).exists() {
        eprintln!(
            "{} {} does not exist yet",
            Icon::Warning.colored(ui.color, ui.unicode),
            asset
        );
    }
    edit(project, &asset, ManifestAction::Added, ui)
}

pub fn cmd_remove(project: &Project, raw: &str, ui: &UiContext) -> Result<()> {
    let asset = parse_asset(project, raw)?;
    edit(project, &asset, ManifestAction::Removed, ui)
}

fn edit(
    project: &Project,
    asset: &AssetPath,
    requested: ManifestAction,
    ui: &UiContext,
) -> Result<()> {
    let manifest = ManifestService::from_config(LocalFs::new(), &project.root, &project.config);
    let manifest_display = project.display(manifest.path());

    let action = match requested {
        ManifestAction::Added => manifest.add(asset),
        ManifestAction::Removed => manifest.remove(asset),
    }
    .with_context(|| format!("failed to update {}", manifest_display))?;

    let command = match requested {
        ManifestAction::Added => "add",
        ManifestAction::Removed => "remove",
    };
    if ui.json {
        crate::ui::json::emit(
            command,
            "complete",
            &serde_json::json!({
                "path": asset.as_str(),
                "manifest": manifest_display,
                "changed": action.is_some(),
            }),
        )?;
    } else {
        print!(
            "{}",
            render_edit(
                asset.as_str(),
                &manifest_display,
                action,
                requested,
                ui.color,
                ui.unicode
            )
        );
    }
    Ok(())
}

pub fn cmd_list(project: &Project, ui: &UiContext) -> Result<()> {
    let manifest = ManifestService::from_config(LocalFs::new(), &project.root, &project.config);
    let manifest_display = project.display(manifest.path());
    let declared: Vec<String> = manifest
        .declared()
        .with_context(|| format!("failed to read {}", manifest_display))?
        .iter()
        .map(|path| path.to_string())
        .collect();

    if ui.json {
        crate::ui::json::emit(
            "list",
            "complete",
            &serde_json::json!({ "manifest": manifest_display, "assets": declared }),
        )?;
    } else {
        print!(
            "{}",
            render_list(&manifest_display, &declared, ui.color, ui.unicode)
        );
    }
    Ok(())
}
