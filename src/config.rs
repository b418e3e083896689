//! Configuration types and constants for code-answer
//!
//! Defines the answer count, log verbosity and search endpoint settings.

use crate::error::{AnswerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://www.google.com/search";

/// Default Q&A site the search is restricted to
pub const DEFAULT_SITE: &str = "stackoverflow.com";

/// Default interface language passed to the search engine
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default user agent for outgoing requests
pub const DEFAULT_USER_AGENT: &str = concat!("code-answer/", env!("CARGO_PKG_VERSION"));

/// Number of answers to collect, always within `[MIN, MAX]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct AnswerCount(usize);

impl AnswerCount {
    pub const MIN: usize = 1;
    pub const MAX: usize = 10;

    /// Validate and wrap an answer count
    pub fn new(count: usize) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&count) {
            Ok(Self(count))
        } else {
            Err(AnswerError::InvalidCount(count.to_string()))
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for AnswerCount {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl TryFrom<usize> for AnswerCount {
    type Error = AnswerError;

    fn try_from(count: usize) -> Result<Self> {
        Self::new(count)
    }
}

impl From<AnswerCount> for usize {
    fn from(count: AnswerCount) -> Self {
        count.0
    }
}

impl std::str::FromStr for AnswerCount {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self> {
        let count: usize = s
            .trim()
            .parse()
            .map_err(|_| AnswerError::InvalidCount(s.to_string()))?;
        Self::new(count)
    }
}

impl fmt::Display for AnswerCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Log verbosity accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    ///
    /// tracing has no level above error, so critical shares its filter.
    pub fn directive(&self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            _ => Err(format!(
                "Unknown log level: {}. Valid options: debug, info, warning, error, critical",
                s
            )),
        }
    }
}

/// Configuration for searching and fetching answers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Search engine endpoint
    pub search_url: String,
    /// Site the search is restricted to
    pub site: String,
    /// Interface language for the search engine (`hl` parameter)
    pub language: String,
    /// User agent sent with every request
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            site: DEFAULT_SITE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Config {
    /// Create a config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search endpoint
    pub fn with_search_url(mut self, search_url: impl Into<String>) -> Self {
        self.search_url = search_url.into();
        self
    }

    /// Set the site filter
    pub fn with_site(mut self, site: impl Into<String>) -> Self {
        self.site = site.into();
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_count_range() {
        assert!(AnswerCount::new(0).is_err());
        assert_eq!(AnswerCount::new(1).unwrap().get(), 1);
        assert_eq!(AnswerCount::new(10).unwrap().get(), 10);
        assert!(AnswerCount::new(11).is_err());
    }

    #[test]
    fn test_answer_count_parsing() {
        let count: AnswerCount = "3".parse().unwrap();
        assert_eq!(count.get(), 3);

        assert!("0".parse::<AnswerCount>().is_err());
        assert!("42".parse::<AnswerCount>().is_err());
        assert!("-1".parse::<AnswerCount>().is_err());
        assert!("three".parse::<AnswerCount>().is_err());
    }

    #[test]
    fn test_answer_count_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<AnswerCount>("5").is_ok());
        assert!(serde_json::from_str::<AnswerCount>("12").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        let level: LogLevel = "debug".parse().unwrap();
        assert_eq!(level.directive(), "debug");

        let level: LogLevel = "WARNING".parse().unwrap();
        assert_eq!(level, LogLevel::Warning);

        let level: LogLevel = "critical".parse().unwrap();
        assert_eq!(level.directive(), "error");

        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(AnswerCount::default().get(), 1);
        assert_eq!(config.search_url, "https://www.google.com/search");
        assert_eq!(config.site, "stackoverflow.com");
        assert_eq!(config.language, "en");
        assert_eq!(LogLevel::default(), LogLevel::Warning);
    }
}
