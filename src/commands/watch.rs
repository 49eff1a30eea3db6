use anyhow::{anyhow, Context, Result};
use assetsync::config::DebounceStrategy;
use assetsync::{LocalFs, NotifyEventSource, WatchEvent, WatchOptions, WatchOrchestrator};

use super::Project;
use crate::ui::context::UiContext;

pub fn cmd_watch(
    mut project: Project,
    debounce_ms: Option<u64>,
    strategy: Option<&str>,
    ui: &UiContext,
) -> Result<()> {
    if let Some(ms) = debounce_ms {
        project.config.watch.debounce_ms = ms;
    }
    if let Some(raw) = strategy {
        project.config.watch.strategy = DebounceStrategy::parse(raw)
            .ok_or_else(|| anyhow!("unknown strategy '{}' (expected batch or per-path)", raw))?;
    }

    let options = WatchOptions::new(&project.root).with_config(project.config.clone());
    let orchestrator = WatchOrchestrator::new(LocalFs::new(), options)?;

    // Set up Ctrl+C handler
    let stop = orchestrator.stop_handle();
    ctrlc::set_handler(move || stop.stop()).context("failed to install Ctrl+C handler")?;

    if !ui.json {
        let config = &project.config;
        print!(
            "{}",
            crate::ui::views::watch::render_watch_header(
                &project.root.display().to_string(),
                &project.display(&config.assets_path(&project.root)),
                &project.display(&config.manifest_path(&project.root)),
                &project.display(&config.output_path(&project.root)),
                ui.color,
                ui.unicode
            )
        );
    }

    let json = ui.json;
    let (color, unicode) = (ui.color, ui.unicode);
    orchestrator
        .start(NotifyEventSource::new(), |event| {
            if json {
                println!("{}", event.to_json());
                return;
            }

            let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
            let rendered =
                crate::ui::views::watch::render_watch_event(&timestamp, &event, color, unicode);
            match event {
                WatchEvent::Error { .. } => eprint!("{rendered}"),
                _ => print!("{rendered}"),
            }
        })
        .with_context(|| format!("watch failed for {}", project.root.display()))?;

    Ok(())
}
