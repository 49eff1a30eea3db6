use assetsync::application::WatchEvent;
use assetsync::{ChangeKind, ManifestAction};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_watch_header(
    root: &str,
    assets_dir: &str,
    manifest: &str,
    output: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "assetsync watch");
    header.add("Project", root);
    header.add("Assets", assets_dir);
    header.add("Manifest", manifest);
    header.add("Output", output);
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

/// One timestamped line per event
pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);
    let icon = |icon: Icon| icon.colored(supports_color, supports_unicode);

    match event {
        WatchEvent::WatchStarted {
            assets_dir,
            debounce_ms,
            strategy,
            ..
        } => format!(
            "{} {} Watching {} ({} ms, {})\n",
            prefix,
            icon(Icon::Watch),
            assets_dir,
            debounce_ms,
            strategy
        ),
        WatchEvent::FileChanged { path, kind } => {
            let marker = match kind {
                ChangeKind::Added => Icon::Added,
                ChangeKind::Removed => Icon::Removed,
                ChangeKind::Modified => Icon::Modified,
            };
            format!("{} {} {} {}\n", prefix, icon(marker), kind.as_str(), path)
        }
        WatchEvent::ManifestUpdated { path, action } => {
            let verb = match action {
                ManifestAction::Added => "Declared",
                ManifestAction::Removed => "Undeclared",
            };
            format!("{} {} {} {}\n", prefix, icon(Icon::Arrow), verb, path)
        }
        WatchEvent::Generated { output, assets } => format!(
            "{} {} Generated {} ({} assets)\n",
            prefix,
            icon(Icon::Success),
            output,
            assets
        ),
        WatchEvent::Error { path, message } => match path {
            Some(path) => format!(
                "{} {} {}: {}\n",
                prefix,
                icon(Icon::Error),
                path,
                ColoredText::error(message.as_str()).render(supports_color)
            ),
            None => format!(
                "{} {} {}\n",
                prefix,
                icon(Icon::Error),
                ColoredText::error(message.as_str()).render(supports_color)
            ),
        },
        WatchEvent::Shutdown => format!("\n{} {} Watch stopped.\n", prefix, icon(Icon::Watch)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_file_change_with_kind_marker() {
        let event = WatchEvent::FileChanged {
            path: "assets/logo.png".to_string(),
            kind: ChangeKind::Added,
        };
        let rendered = render_watch_event("12:00:00", &event, false, false);
        assert_eq!(rendered, "[12:00:00] [+] added assets/logo.png\n");
    }

    #[test]
    fn renders_error_with_path() {
        let event = WatchEvent::Error {
            path: Some("assets/a.png".to_string()),
            message: "permission denied".to_string(),
        };
        let rendered = render_watch_event("00:00:01", &event, false, false);
        assert_eq!(rendered, "[00:00:01] [FAIL] assets/a.png: permission denied\n");
    }

    #[test]
    fn renders_generated_count() {
        let event = WatchEvent::Generated {
            output: "lib/gen/assets.dart".to_string(),
            assets: 4,
        };
        let rendered = render_watch_event("00:00:02", &event, false, true);
        assert!(rendered.contains("Generated lib/gen/assets.dart (4 assets)"));
    }
}
