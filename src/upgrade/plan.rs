use crate::upgrade::partition::{find_partition_satisfies, partition_parsed, Partition};
use crate::upgrade::version::VersionComparator;
use semver::Version;
use std::fmt;

/// Kind of a single upgrade transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Stays within one major band.
    Minor,
    /// Crosses from one band to the next.
    Major,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepKind::Minor => write!(f, "minor"),
            StepKind::Major => write!(f, "major"),
        }
    }
}

/// One atomic version transition of an upgrade plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpgradeStep {
    pub current: Version,
    pub target: Version,
    pub kind: StepKind,
}

/// Walk the band chain from `partitions[start]` and emit upgrade steps in
/// strict application order.
///
/// The plan first tops out the starting band, then alternates a major jump
/// into each linked band with a minor catch-up inside it. The walk stops at
/// the first unlinked band, so a gap in majors truncates the plan to the
/// reachable suffix. An empty plan means `current` already sits at the end
/// of an unlinked band.
pub fn get_upgrade_plan(
    current: &Version,
    partitions: &[Partition],
    start: usize,
) -> Vec<UpgradeStep> {
    let mut steps = Vec::new();
    let Some(starting) = partitions.get(start) else {
        return steps;
    };

    if *current != starting.end {
        steps.push(UpgradeStep {
            current: current.clone(),
            target: starting.end.clone(),
            kind: StepKind::Minor,
        });
    }

    let mut idx = start;
    while partitions[idx].linked {
        let next = &partitions[idx + 1];
        steps.push(UpgradeStep {
            current: partitions[idx].end.clone(),
            target: next.start.clone(),
            kind: StepKind::Major,
        });
        if next.start != next.end {
            steps.push(UpgradeStep {
                current: next.start.clone(),
                target: next.end.clone(),
                kind: StepKind::Minor,
            });
        }
        idx += 1;
    }

    steps
}

/// Build the full upgrade plan for `current_version` out of a raw registry
/// version list.
///
/// Prerelease versions are dropped unless explicitly allowed. A malformed
/// current version, a malformed list member, or a current version outside
/// every band all degrade to an empty plan; none of them is an error.
pub fn construct_upgrade_plan(
    versions: &[String],
    current_version: &str,
    allow_prerelease: bool,
) -> Vec<UpgradeStep> {
    let Some(current) = VersionComparator::parse(current_version) else {
        return Vec::new();
    };
    let Some(mut parsed) = VersionComparator::parse_all(versions) else {
        return Vec::new();
    };

    if !allow_prerelease {
        parsed.retain(|version| !VersionComparator::is_prerelease(version));
    }

    let partitions = partition_parsed(parsed);
    let Some(start) = find_partition_satisfies(&partitions, &current) else {
        return Vec::new();
    };

    get_upgrade_plan(&current, &partitions, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upgrade::partition::semver_major_partition;

    fn v(raw: &str) -> Version {
        Version::parse(raw).unwrap()
    }

    fn raw(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_string()).collect()
    }

    fn step(current: &str, target: &str, kind: StepKind) -> UpgradeStep {
        UpgradeStep {
            current: v(current),
            target: v(target),
            kind,
        }
    }

    #[test]
    fn plans_across_two_linked_bands() {
        let versions = raw(&["0.0.1", "0.1.1", "1.0.0", "1.0.1", "1.0.2"]);
        let partitions = semver_major_partition(&versions);
        let start = find_partition_satisfies(&partitions, &v("0.0.1")).unwrap();

        let plan = get_upgrade_plan(&v("0.0.1"), &partitions, start);
        assert_eq!(
            plan,
            vec![
                step("0.0.1", "0.1.1", StepKind::Minor),
                step("0.1.1", "1.0.0", StepKind::Major),
                step("1.0.0", "1.0.2", StepKind::Minor),
            ]
        );
    }

    #[test]
    fn single_member_band_gets_no_inner_minor_step() {
        let versions = raw(&["0.1.0", "0.2.0", "1.0.0"]);
        let partitions = semver_major_partition(&versions);
        let start = find_partition_satisfies(&partitions, &v("0.2.0")).unwrap();

        let plan = get_upgrade_plan(&v("0.2.0"), &partitions, start);
        assert_eq!(plan, vec![step("0.2.0", "1.0.0", StepKind::Major)]);
    }

    #[test]
    fn walk_stops_at_a_major_gap() {
        let versions = raw(&["1.0.0", "1.1.0", "5.0.0"]);
        let partitions = semver_major_partition(&versions);
        let start = find_partition_satisfies(&partitions, &v("1.0.0")).unwrap();

        let plan = get_upgrade_plan(&v("1.0.0"), &partitions, start);
        // the band at major 5 is unreachable across the gap
        assert_eq!(plan, vec![step("1.0.0", "1.1.0", StepKind::Minor)]);
    }

    #[test]
    fn endpoint_of_own_plan_yields_empty_plan() {
        let versions = raw(&["0.0.1", "0.1.1", "1.0.0", "1.0.2"]);
        let partitions = semver_major_partition(&versions);
        let start = find_partition_satisfies(&partitions, &v("0.0.1")).unwrap();

        let plan = get_upgrade_plan(&v("0.0.1"), &partitions, start);
        let final_target = plan.last().unwrap().target.clone();

        let end_band = find_partition_satisfies(&partitions, &final_target).unwrap();
        assert!(get_upgrade_plan(&final_target, &partitions, end_band).is_empty());
    }

    #[test]
    fn construct_filters_prereleases_by_default() {
        let versions = raw(&["1.0.0", "1.1.0", "2.0.0-alpha"]);

        let plan = construct_upgrade_plan(&versions, "1.0.0", false);
        assert_eq!(plan, vec![step("1.0.0", "1.1.0", StepKind::Minor)]);

        let plan = construct_upgrade_plan(&versions, "1.0.0", true);
        assert_eq!(
            plan,
            vec![
                step("1.0.0", "1.1.0", StepKind::Minor),
                step("1.1.0", "2.0.0-alpha", StepKind::Major),
            ]
        );
    }

    #[test]
    fn construct_is_silent_when_current_is_unknown() {
        let versions = raw(&["2.0.0", "2.1.0"]);
        assert!(construct_upgrade_plan(&versions, "0.1.0", false).is_empty());
    }

    #[test]
    fn construct_is_silent_on_malformed_input() {
        assert!(construct_upgrade_plan(&raw(&["1.0.0"]), "not-a-version", false).is_empty());
        assert!(construct_upgrade_plan(&raw(&["1.0.0", "garbage"]), "1.0.0", false).is_empty());
    }

    #[test]
    fn construct_reports_up_to_date_as_empty() {
        let versions = raw(&["1.0.0", "1.1.0"]);
        assert!(construct_upgrade_plan(&versions, "1.1.0", false).is_empty());
    }

    #[test]
    fn step_kind_displays_lowercase() {
        assert_eq!(StepKind::Minor.to_string(), "minor");
        assert_eq!(StepKind::Major.to_string(), "major");
    }
}
