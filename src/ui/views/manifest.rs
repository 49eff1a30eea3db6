use assetsync::ManifestAction;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Result of `add` / `remove`. `None` means the manifest was already in the
/// requested state.
pub fn render_edit(
    path: &str,
    manifest: &str,
    action: Option<ManifestAction>,
    requested: ManifestAction,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match action {
        Some(ManifestAction::Added) => format!(
            "{} Declared {} in {}\n",
            Icon::Added.colored(supports_color, supports_unicode),
            ColoredText::success(path).render(supports_color),
            manifest
        ),
        Some(ManifestAction::Removed) => format!(
            "{} Removed {} from {}\n",
            Icon::Removed.colored(supports_color, supports_unicode),
            ColoredText::warning(path).render(supports_color),
            manifest
        ),
        None => {
            let state = match requested {
                ManifestAction::Added => "already declared",
                ManifestAction::Removed => "not declared",
            };
            format!(
                "{} {} is {}\n",
                Icon::Arrow.colored(supports_color, supports_unicode),
                path,
                ColoredText::dim(state).render(supports_color)
            )
        }
    }
}

pub fn render_list(
    manifest: &str,
    declared: &[String],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::List, "Declared assets");
    header.add("Manifest", manifest);
    header.add("Entries", declared.len().to_string());
    let mut out = header.render(supports_color, supports_unicode);

    for path in declared {
        let text = if path.ends_with('/') {
            ColoredText::info(path.as_str())
        } else {
            ColoredText::plain(path.as_str())
        };
        out.push_str(&format!("  {}\n", text.render(supports_color)));
    }
    out
}
