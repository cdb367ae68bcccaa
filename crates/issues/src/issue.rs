use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockboard_core::{Entity, IssueId, ProductId};

/// How bad a reported issue is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueSeverity {
    Severe,
    Major,
    Low,
}

impl IssueSeverity {
    /// All severities, most severe first.
    pub const ALL: [IssueSeverity; 3] = [IssueSeverity::Severe, IssueSeverity::Major, IssueSeverity::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueSeverity::Severe => "Severe",
            IssueSeverity::Major => "Major",
            IssueSeverity::Low => "Low",
        }
    }

    /// Badge color the dashboard shows for this severity.
    pub fn color(self) -> IssueColor {
        match self {
            IssueSeverity::Severe => IssueColor::Rose,
            IssueSeverity::Major => IssueColor::Amber,
            IssueSeverity::Low => IssueColor::Zinc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueColor {
    Rose,
    Amber,
    Zinc,
}

impl core::fmt::Display for IssueSeverity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A problem reported against a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub severity: IssueSeverity,
    pub product_id: ProductId,
    pub reported_at: DateTime<Utc>,
}

impl Issue {
    pub fn is_for(&self, product_id: &ProductId) -> bool {
        &self.product_id == product_id
    }
}

impl Entity for Issue {
    type Id = IssueId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_by_name() {
        assert_eq!(serde_json::to_string(&IssueSeverity::Severe).unwrap(), "\"Severe\"");
        let back: IssueSeverity = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(back, IssueSeverity::Low);
    }

    #[test]
    fn all_is_ordered_by_severity() {
        let mut sorted = IssueSeverity::ALL;
        sorted.sort();
        assert_eq!(sorted, IssueSeverity::ALL);
    }

    #[test]
    fn severities_map_to_badge_colors() {
        assert_eq!(IssueSeverity::Severe.color(), IssueColor::Rose);
        assert_eq!(IssueSeverity::Major.color(), IssueColor::Amber);
        assert_eq!(serde_json::to_string(&IssueSeverity::Low.color()).unwrap(), "\"zinc\"");
    }
}
