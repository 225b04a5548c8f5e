use crate::upgrade::version::{VersionComparator, VersionRange};
use semver::Version;

/// One contiguous major-version band of a sorted version list.
///
/// Bands are produced in ascending `major` order. Instead of a pointer to
/// the following band, `linked` records whether the band that comes next in
/// the output continues at exactly `major + 1`; a gap in majors leaves the
/// flag unset and breaks the upgrade chain there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub major: u64,
    pub start: Version,
    pub end: Version,
    pub range: VersionRange,
    pub versions: Vec<Version>,
    pub linked: bool,
}

/// Group a raw version list into contiguous major-version bands.
///
/// The input may be unsorted and may contain duplicates; every occurrence
/// lands in its band exactly once. Any member that is not a valid semantic
/// version aborts the whole call with an empty list rather than an error.
pub fn semver_major_partition(versions: &[String]) -> Vec<Partition> {
    match VersionComparator::parse_all(versions) {
        Some(parsed) => partition_parsed(parsed),
        None => Vec::new(),
    }
}

/// Band discovery over an already-parsed list. Sorts once, then finds each
/// band end with a binary search over the remaining suffix.
pub(crate) fn partition_parsed(mut versions: Vec<Version>) -> Vec<Partition> {
    VersionComparator::sort_ascending(&mut versions);

    let mut result: Vec<Partition> = Vec::new();
    let mut start_idx = 0;

    while start_idx < versions.len() {
        let major = versions[start_idx].major;
        let end_idx = last_index_in_major(&versions, start_idx, major);
        let band = &versions[start_idx..=end_idx];

        let start = band[0].clone();
        let end = band[band.len() - 1].clone();
        let partition = Partition {
            major,
            range: VersionRange::new(start.clone(), end.clone()),
            start,
            end,
            versions: band.to_vec(),
            linked: false,
        };

        if let Some(previous) = result.last_mut() {
            if previous.major + 1 == major {
                previous.linked = true;
            }
        }

        result.push(partition);
        start_idx = end_idx + 1;
    }

    result
}

/// Right-most index in `sorted[start..]` whose major is still `<= major`.
///
/// The suffix is ascending, so the predicate splits it into a true prefix
/// and a false suffix; `sorted[start]` itself always satisfies it.
fn last_index_in_major(sorted: &[Version], start: usize, major: u64) -> usize {
    let mut low = start;
    let mut high = sorted.len() - 1;
    let mut result = start;

    while low <= high {
        let mid = low + (high - low) / 2;
        if sorted[mid].major <= major {
            result = mid;
            low = mid + 1;
        } else {
            // mid > start here, so the subtraction cannot underflow
            high = mid - 1;
        }
    }

    result
}

/// Linear scan for the first partition whose range contains `version`.
/// Returns the band index so callers can walk the adjacency chain from it.
pub fn find_partition_satisfies(partitions: &[Partition], version: &Version) -> Option<usize> {
    partitions.iter().position(|p| p.range.contains(version))
}
