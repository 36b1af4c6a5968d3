//! Data behind the contributors wall and version history widgets of the showcase site.
#![deny(missing_docs)]

/// Contributors wall roster.
pub mod contributors;
/// Release catalog and version comparison.
pub mod releases;

pub use contributors::{Contributor, MergeSummary, RoleFilter, Roster, RosterStats, UpstreamContributor};
pub use releases::{ReleaseKind, VersionCatalog, VersionComparison, VersionHistoryExport, VersionRecord};
