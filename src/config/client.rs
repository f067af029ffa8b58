//! Client credential configuration.

use crate::config::Environment;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;

/// Configuration for constructing a [`crate::PesapalClient`]
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct PesapalConfig {
    pub consumer_key: String,
    pub consumer_secret: String,
    #[serde(default)]
    pub environment: Environment,
}

impl PesapalConfig {
    pub fn new(
        consumer_key: impl Into<String>,
        consumer_secret: impl Into<String>,
        environment: Environment,
    ) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            consumer_secret: consumer_secret.into(),
            environment,
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let consumer_key = env::var("PESAPAL_CONSUMER_KEY").unwrap_or_default();
        let consumer_secret = env::var("PESAPAL_CONSUMER_SECRET").unwrap_or_default();

        Self {
            consumer_key,
            consumer_secret,
            environment: Environment::from_env(),
        }
    }
}

// Keep the secret out of logs
impl fmt::Debug for PesapalConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PesapalConfig")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("environment", &self.environment)
            .finish()
    }
}
