use anyhow::{Context, Result};
use assetsync::{CodeGenerator, LocalFs};

use super::Project;
use crate::ui::context::UiContext;
use crate::ui::views::generate::{render_freshness, render_generated};

pub fn cmd_generate(project: &Project, check: bool, ui: &UiContext) -> Result<()> {
    let generator = CodeGenerator::from_config(LocalFs::new(), &project.root, &project.config);
    let output = project.display(generator.output());

    if check {
        let up_to_date = generator
            .is_up_to_date()
            .with_context(|| format!("failed to check {}", output))?;
        if ui.json {
            crate::ui::json::emit(
                "generate",
                "check",
                &serde_json::json!({ "output": output, "up_to_date": up_to_date }),
            )?;
        } else {
            print!("{}", render_freshness(&output, up_to_date, ui.color, ui.unicode));
        }
        if !up_to_date {
            std::process::exit(1);
        }
        return Ok(());
    }

    let report = generator
        .generate()
        .with_context(|| format!("failed to generate {}", output))?;
    if ui.json {
        crate::ui::json::emit(
            "generate",
            "complete",
            &serde_json::json!({
                "output": output,
                "assets": report.assets,
                "changed": report.changed,
            }),
        )?;
    } else {
        print!(
            "{}",
            render_generated(&output, report.assets, report.changed, ui.color, ui.unicode)
        );
    }
    Ok(())
}
