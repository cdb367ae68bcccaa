use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::issue::{Issue, IssueColor, IssueSeverity};

/// Issue count for one severity bucket.
///
/// `quantity` counts every issue reported up to `now`; `delta` is the count
/// reported in the current period minus the count in the period before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueStat {
    pub severity: IssueSeverity,
    pub quantity: u64,
    pub delta: i64,
    pub color: IssueColor,
}

/// Group issues by severity.
///
/// Always yields one row per severity, most severe first. The current period
/// is `(now - period, now]`, the previous one `(now - 2*period, now - period]`.
/// Issues reported after `now` are ignored. Window bounds that would fall
/// before the earliest representable instant are clamped to it.
pub fn summarize(issues: &[Issue], now: DateTime<Utc>, period: Duration) -> Vec<IssueStat> {
    let current_start = window_start(now, period);
    let previous_start = window_start(current_start, period);

    IssueSeverity::ALL
        .iter()
        .map(|&severity| {
            let mut quantity = 0u64;
            let mut current = 0i64;
            let mut previous = 0i64;

            for issue in issues
                .iter()
                .filter(|i| i.severity == severity && i.reported_at <= now)
            {
                quantity += 1;
                if issue.reported_at > current_start {
                    current += 1;
                } else if issue.reported_at > previous_start {
                    previous += 1;
                }
            }

            IssueStat {
                severity,
                quantity,
                delta: current - previous,
                color: severity.color(),
            }
        })
        .collect()
}

fn window_start(end: DateTime<Utc>, period: Duration) -> DateTime<Utc> {
    end.checked_sub_signed(period)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockboard_core::{IssueId, ProductId};

    fn issue(id: &str, severity: IssueSeverity, reported_at: DateTime<Utc>) -> Issue {
        Issue {
            id: IssueId::new(id).unwrap(),
            severity,
            product_id: ProductId::new("SKU_001").unwrap(),
            reported_at,
        }
    }

    #[test]
    fn empty_input_yields_zero_rows_for_every_severity() {
        let stats = summarize(&[], Utc::now(), Duration::days(7));
        assert_eq!(stats.len(), 3);
        assert!(stats.iter().all(|s| s.quantity == 0 && s.delta == 0));
        assert_eq!(stats[0].severity, IssueSeverity::Severe);
    }

    #[test]
    fn delta_compares_current_with_previous_period() {
        let now = Utc::now();
        let week = Duration::days(7);
        let issues = vec![
            issue("is_01", IssueSeverity::Severe, now - Duration::days(1)),
            issue("is_02", IssueSeverity::Severe, now - Duration::days(2)),
            issue("is_03", IssueSeverity::Severe, now - Duration::days(9)),
            issue("is_04", IssueSeverity::Major, now - Duration::days(10)),
            issue("is_05", IssueSeverity::Low, now - Duration::days(30)),
        ];

        let stats = summarize(&issues, now, week);

        assert_eq!(stats[0], IssueStat { severity: IssueSeverity::Severe, quantity: 3, delta: 1, color: IssueColor::Rose });
        assert_eq!(stats[1], IssueStat { severity: IssueSeverity::Major, quantity: 1, delta: -1, color: IssueColor::Amber });
        assert_eq!(stats[2], IssueStat { severity: IssueSeverity::Low, quantity: 1, delta: 0, color: IssueColor::Zinc });
    }

    #[test]
    fn future_issues_are_ignored() {
        let now = Utc::now();
        let issues = vec![issue("is_01", IssueSeverity::Low, now + Duration::days(1))];
        let stats = summarize(&issues, now, Duration::days(7));
        assert_eq!(stats[2].quantity, 0);
    }

    #[test]
    fn period_reaching_past_the_calendar_is_clamped() {
        let now = Utc::now();
        let issues = vec![
            issue("is_01", IssueSeverity::Major, now - Duration::days(1)),
            issue("is_02", IssueSeverity::Major, now - Duration::days(50_000)),
        ];

        let stats = summarize(&issues, now, Duration::days(100_000_000));

        assert_eq!(stats[1], IssueStat { severity: IssueSeverity::Major, quantity: 2, delta: 2, color: IssueColor::Amber });
    }
}
