use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_generated(
    output: &str,
    assets: usize,
    changed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let detail = if changed { "written" } else { "unchanged" };
    format!(
        "{} {} {} ({} assets, {})\n",
        Icon::Generate.colored(supports_color, supports_unicode),
        ColoredText::success("Generated").render(supports_color),
        output,
        assets,
        detail
    )
}

/// `generate --check` outcome
pub fn render_freshness(
    output: &str,
    up_to_date: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if up_to_date {
        format!(
            "{} {} is up to date\n",
            Icon::Success.colored(supports_color, supports_unicode),
            output
        )
    } else {
        format!(
            "{} {} is stale. Run `assetsync generate` to update it.\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(output).render(supports_color)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_unchanged_generation() {
        let out = render_generated("lib/gen/assets.dart", 2, false, false, false);
        assert_eq!(out, "[GEN] Generated lib/gen/assets.dart (2 assets, unchanged)\n");
    }

    #[test]
    fn stale_message_names_the_fix() {
        let out = render_freshness("lib/gen/assets.dart", false, false, false);
        assert!(out.starts_with("[FAIL] lib/gen/assets.dart is stale"));
        assert!(out.contains("assetsync generate"));
    }
}
