use crate::upgrade::{StepKind, UpgradeStep};
use colored::Colorize;

/// `1 step` / `N steps`.
pub fn format_step_count(count: usize) -> String {
    if count == 1 {
        format!("{count} step")
    } else {
        format!("{count} steps")
    }
}

/// One rendered plan line; major jumps carry a `!` marker.
pub fn format_step_line(step: &UpgradeStep) -> String {
    let marker = match step.kind {
        StepKind::Major => "!",
        StepKind::Minor => " ",
    };
    format!("  {} {} -> {}", marker, step.current, step.target)
}

/// Print the upgrade report for one dependency.
///
/// An empty plan also covers the current version missing from every band,
/// which is deliberately reported the same way as being up to date.
pub fn print_upgrade_report(
    dependency: &str,
    current_version: &str,
    plan: &[UpgradeStep],
    apply: bool,
) {
    if plan.is_empty() {
        println!(
            "`{}` is at the latest version ({}).",
            dependency.white().bold(),
            current_version
        );
        println!("  No upgrades available at this time.");
        return;
    }

    let latest = plan[plan.len() - 1].target.to_string();
    println!(
        "`{}` has a newer version available!",
        dependency.white().bold()
    );
    println!(
        "  installed: {}, latest: {}",
        current_version.red(),
        latest.green().bold()
    );
    println!(
        "\nTo safely upgrade `{}` while applying code migrations, this is the upgrade path of {}:",
        dependency,
        format_step_count(plan.len())
    );

    for step in plan {
        let line = format_step_line(step);
        match step.kind {
            StepKind::Major => println!("{}", line.yellow()),
            StepKind::Minor => println!("{line}"),
        }
    }

    if !apply {
        println!("\n{}", "No changes were made.".dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use semver::Version;

    fn step(current: &str, target: &str, kind: StepKind) -> UpgradeStep {
        UpgradeStep {
            current: Version::parse(current).unwrap(),
            target: Version::parse(target).unwrap(),
            kind,
        }
    }

    #[test]
    fn pluralizes_step_counts() {
        assert_eq!(format_step_count(1), "1 step");
        assert_eq!(format_step_count(2), "2 steps");
        assert_eq!(format_step_count(0), "0 steps");
    }

    #[test]
    fn marks_major_steps() {
        let minor = step("0.0.1", "0.1.1", StepKind::Minor);
        let major = step("0.1.1", "1.0.0", StepKind::Major);

        assert_eq!(format_step_line(&minor), "    0.0.1 -> 0.1.1");
        assert_eq!(format_step_line(&major), "  ! 0.1.1 -> 1.0.0");
    }
}
