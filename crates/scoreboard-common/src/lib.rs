//! Common types shared across the scoreboard crates

pub mod config;

pub use config::{AppConfig, ConfigError, DisplayConfig, SourceConfig, DEFAULT_CONFIG_FILE};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which fields a source row must carry to be ranked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Name, score and avatar are all required
    #[default]
    Strict,
    /// Name and score are required, the avatar may be blank
    Relaxed,
}

impl ValidationPolicy {
    /// Whether a row without an avatar filename is rejected
    pub fn requires_avatar(&self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationPolicy::Strict => "strict",
            ValidationPolicy::Relaxed => "relaxed",
        }
    }

    /// Get all supported policies
    pub fn all() -> Vec<ValidationPolicy> {
        vec![ValidationPolicy::Strict, ValidationPolicy::Relaxed]
    }
}

impl fmt::Display for ValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValidationPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ValidationPolicy::Strict),
            "relaxed" => Ok(ValidationPolicy::Relaxed),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parsing() {
        assert_eq!("strict".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::Strict);
        assert_eq!(" Relaxed ".parse::<ValidationPolicy>().unwrap(), ValidationPolicy::Relaxed);
        assert!("lenient".parse::<ValidationPolicy>().is_err());
    }

    #[test]
    fn test_policy_round_trips_through_display() {
        for policy in ValidationPolicy::all() {
            assert_eq!(policy.to_string().parse::<ValidationPolicy>().unwrap(), policy);
        }
    }

    #[test]
    fn test_only_strict_requires_avatar() {
        assert!(ValidationPolicy::Strict.requires_avatar());
        assert!(!ValidationPolicy::Relaxed.requires_avatar());
        assert_eq!(ValidationPolicy::default(), ValidationPolicy::Strict);
    }
}
