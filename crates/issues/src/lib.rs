//! Issues domain module: reported stock problems and their severity summary.

pub mod issue;
pub mod summary;

pub use issue::{Issue, IssueColor, IssueSeverity};
pub use summary::{IssueStat, summarize};
