use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use stockboard_core::ProductId;
use stockboard_infra::access::IssueClient;
use stockboard_issues::{Issue, IssueStat, summarize};

/// Severity-bucketed issue counts and per-product issue lists.
#[derive(Clone)]
pub struct IssueService {
    issues: Arc<dyn IssueClient>,
    period: Duration,
}

impl IssueService {
    /// `period` is the window compared against the one before it for deltas.
    pub fn new(issues: Arc<dyn IssueClient>, period: Duration) -> Self {
        Self { issues, period }
    }

    pub fn get_issues_summary(&self, now: DateTime<Utc>) -> Vec<IssueStat> {
        let issues = self.issues.all_issues();
        let summary = summarize(&issues, now, self.period);
        tracing::debug!(issues = issues.len(), "summarized issues by severity");
        summary
    }

    pub fn get_product_issues(&self, product_id: &ProductId) -> Vec<Issue> {
        let issues = self.issues.product_issues(product_id);
        tracing::debug!(%product_id, returned = issues.len(), "filtered product issues");
        issues
    }
}
