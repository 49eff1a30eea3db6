use assetsync::CheckReport;

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_check_report(
    report: &CheckReport,
    output: &str,
    verbose: u8,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = String::new();
    let mut section = |title: &str, items: &[String], marker: Icon| {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!(
            "{} {} ({})\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(title).bold().render(supports_color),
            items.len()
        ));
        for item in items {
            out.push_str(&format!(
                "  {} {}\n",
                marker.colored(supports_color, supports_unicode),
                item
            ));
        }
    };

    section("Undeclared assets", &report.undeclared, Icon::Added);
    section("Declared but missing", &report.missing, Icon::Removed);

    if let Some(stale) = &report.stale {
        let state = if stale.exists { "stale" } else { "missing" };
        out.push_str(&format!(
            "{} {} is {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(output).bold().render(supports_color),
            state
        ));
        if verbose > 0 {
            out.push_str(&render_diff(&stale.diff, supports_color));
        }
    }

    out.push_str(&render_check_summary(
        report.issue_count(),
        supports_color,
        supports_unicode,
    ));
    out
}

pub fn render_check_summary(issues: usize, supports_color: bool, supports_unicode: bool) -> String {
    if issues == 0 {
        format!(
            "{} {}\n",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success("Manifest, assets, and constants are in sync")
                .render(supports_color)
        )
    } else {
        format!(
            "{} {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("{} issue(s) found", issues)).render(supports_color)
        )
    }
}

fn render_diff(diff: &str, supports_color: bool) -> String {
    let mut out = String::new();
    for line in diff.lines() {
        let text = if line.starts_with("+++") || line.starts_with("---") || line.starts_with("@@")
        {
            ColoredText::info(line)
        } else if line.starts_with('+') {
            ColoredText::success(line)
        } else if line.starts_with('-') {
            ColoredText::error(line)
        } else {
            ColoredText::dim(line)
        };
        out.push_str("    ");
        out.push_str(&text.render(supports_color));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetsync::application::StaleArtifact;
    use std::path::PathBuf;

    #[test]
    fn clean_report_is_one_line() {
        let out = render_check_report(&CheckReport::default(), "lib/gen/assets.dart", 0, false, false);
        assert_eq!(out, "[OK] Manifest, assets, and constants are in sync\n");
    }

    #[test]
    fn verbose_report_includes_diff() {
        let report = CheckReport {
            undeclared: vec!["assets/new.png".to_string()],
            missing: vec![],
            stale: Some(StaleArtifact {
                output: PathBuf::from("/p/lib/gen/assets.dart"),
                exists: true,
                diff: "@@ -1 +1 @@\n-old\n+new\n".to_string(),
            }),
        };

        let quiet = render_check_report(&report, "lib/gen/assets.dart", 0, false, false);
        assert!(quiet.contains("Undeclared assets (1)"));
        assert!(quiet.contains("  [+] assets/new.png"));
        assert!(quiet.contains("lib/gen/assets.dart is stale"));
        assert!(!quiet.contains("+new"));
        assert!(quiet.ends_with("[FAIL] 2 issue(s) found\n"));

        let verbose = render_check_report(&report, "lib/gen/assets.dart", 1, false, false);
        assert!(verbose.contains("    +new\n"));
    }
}
