pub mod partition;
pub mod plan;
pub mod version;

pub use partition::{find_partition_satisfies, semver_major_partition, Partition};
pub use plan::{construct_upgrade_plan, get_upgrade_plan, StepKind, UpgradeStep};
pub use version::{VersionComparator, VersionRange};
