//! Gateway environment selection.

use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::str::FromStr;

const SANDBOX_BASE_URL: &str = "http://demo2.pesapal.com/api/";
const PRODUCTION_BASE_URL: &str = "https://www.pesapal.com/api/";

/// Which Pesapal host requests are addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    /// Base URL every endpoint path is appended to
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_BASE_URL,
            Environment::Production => PRODUCTION_BASE_URL,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Load from `PESAPAL_ENVIRONMENT`, falling back to the sandbox
    pub fn from_env() -> Self {
        env::var("PESAPAL_ENVIRONMENT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sandbox" | "demo" | "test" | "testing" => Ok(Environment::Sandbox),
            "production" | "live" | "prod" => Ok(Environment::Production),
            other => Err(format!("Unknown Pesapal environment: {other}")),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Sandbox => write!(f, "sandbox"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_urls() {
        assert_eq!(
            Environment::Sandbox.base_url(),
            "http://demo2.pesapal.com/api/"
        );
        assert_eq!(
            Environment::Production.base_url(),
            "https://www.pesapal.com/api/"
        );
    }

    #[test]
    fn test_default_is_sandbox() {
        assert_eq!(Environment::default(), Environment::Sandbox);
        assert!(!Environment::default().is_production());
    }

    #[test]
    fn test_parse_aliases() {
        assert_eq!("LIVE".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!(" production ".parse::<Environment>(), Ok(Environment::Production));
        assert_eq!("demo".parse::<Environment>(), Ok(Environment::Sandbox));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for environment in [Environment::Sandbox, Environment::Production] {
            assert_eq!(environment.to_string().parse::<Environment>(), Ok(environment));
        }
    }
}
