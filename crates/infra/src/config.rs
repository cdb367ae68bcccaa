//! Configuration loading and representation.

use std::path::PathBuf;

use chrono::Duration;
use thiserror::Error;

pub const TOP_N_VAR: &str = "STOCKBOARD_TOP_N";
pub const ISSUE_PERIOD_VAR: &str = "STOCKBOARD_ISSUE_PERIOD_DAYS";
pub const SEED_PATH_VAR: &str = "STOCKBOARD_SEED_PATH";

const DEFAULT_TOP_N: usize = 3;
const DEFAULT_ISSUE_PERIOD_DAYS: u32 = 7;
/// Longest accepted issue window (ten years).
pub const MAX_ISSUE_PERIOD_DAYS: u32 = 3650;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// Dashboard settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Length of the top-product rankings.
    pub top_n: usize,
    /// Window used for issue deltas (current vs previous period).
    pub issue_period_days: u32,
    /// JSON dataset to seed from; `None` means the built-in sample.
    pub seed_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            issue_period_days: DEFAULT_ISSUE_PERIOD_DAYS,
            seed_path: None,
        }
    }
}

impl DashboardConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; unset keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(TOP_N_VAR) {
            config.top_n = parse_positive(TOP_N_VAR, &raw)?;
        }
        if let Some(raw) = lookup(ISSUE_PERIOD_VAR) {
            let days: u32 = parse_positive(ISSUE_PERIOD_VAR, &raw)?;
            if days > MAX_ISSUE_PERIOD_DAYS {
                return Err(ConfigError::Invalid {
                    var: ISSUE_PERIOD_VAR,
                    value: raw,
                    reason: "longer than ten years",
                });
            }
            config.issue_period_days = days;
        }
        if let Some(raw) = lookup(SEED_PATH_VAR) {
            let raw = raw.trim();
            if !raw.is_empty() {
                config.seed_path = Some(PathBuf::from(raw));
            }
        }

        Ok(config)
    }

    pub fn issue_period(&self) -> Duration {
        Duration::days(i64::from(self.issue_period_days))
    }
}

fn parse_positive<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr + Default + PartialEq,
{
    let value: T = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: "not a number",
    })?;
    if value == T::default() {
        return Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}
