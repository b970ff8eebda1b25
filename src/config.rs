//! Runtime configuration
//!
//! Gitlet has no configuration file; like `git` it reads a handful of
//! environment variables once at startup:
//!
//! - `GITLET_COMMIT_DATE`: fixed timestamp for new commits (RFC 2822 or
//!   `%Y-%m-%d %H:%M:%S %z`), used to make histories reproducible
//! - `GITLET_LOG`: `tracing` filter directive for diagnostics on stderr
//! - `NO_PAGER`: never page `log`/`global-log` output
//! - `NO_COLOR`: never colour section headers

use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use is_terminal::IsTerminal;

pub const COMMIT_DATE_VAR: &str = "GITLET_COMMIT_DATE";
pub const LOG_FILTER_VAR: &str = "GITLET_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone)]
pub struct Config {
    /// Timestamp override for new commits
    pub commit_date: Option<DateTime<FixedOffset>>,
    /// Page long output through `minus`
    pub pager: bool,
    /// Colour section headers
    pub color: bool,
    /// `tracing` filter directive
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            commit_date: None,
            pager: false,
            color: false,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let commit_date = match std::env::var(COMMIT_DATE_VAR) {
            Ok(raw) => Some(
                Self::parse_commit_date(&raw)
                    .with_context(|| format!("invalid {COMMIT_DATE_VAR}: {raw}"))?,
            ),
            Err(_) => None,
        };

        let stdout_is_terminal = std::io::stdout().is_terminal();
        let pager = stdout_is_terminal && std::env::var_os("NO_PAGER").is_none();
        let color = stdout_is_terminal && std::env::var_os("NO_COLOR").is_none();
        let log_filter =
            std::env::var(LOG_FILTER_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string());

        Ok(Config {
            commit_date,
            pager,
            color,
            log_filter,
        })
    }

    pub fn with_commit_date(mut self, commit_date: DateTime<FixedOffset>) -> Self {
        self.commit_date = Some(commit_date);
        self
    }

    pub fn parse_commit_date(raw: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc2822(raw)
            .or_else(|_| DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S %z"))
            .context("expected RFC 2822 or `%Y-%m-%d %H:%M:%S %z`")
    }

    /// Timestamp for a commit created now
    pub fn commit_timestamp(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
