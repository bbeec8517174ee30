//! Domain logic - pure business rules independent of the hosting platform

pub mod commit;
pub mod issue;
pub mod version;

pub use commit::{strip_change_tags, ChangeCategory, Commit};
pub use issue::{extract_issue_ref, Issue, IssueCategory};
pub use version::{Version, VersionBump};
