#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::{NotifierError, Result};
use crate::utils::validation::{
    validate_aws_region, validate_topic_arn, validate_url, Validate,
};
use std::env;

pub const TOPIC_ENV: &str = "BOOKING_TOPIC";
pub const REGION_ENV: &str = "SNS_REGION";
pub const ENDPOINT_ENV: &str = "SNS_ENDPOINT_URL";

/// Process configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    pub topic_arn: String,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
}

impl NotifierConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            topic_arn: get(TOPIC_ENV).ok_or_else(|| NotifierError::MissingConfigError {
                field: TOPIC_ENV.to_string(),
            })?,
            region: get(REGION_ENV),
            endpoint_url: get(ENDPOINT_ENV),
        })
    }
}

impl ConfigProvider for NotifierConfig {
    fn topic_arn(&self) -> &str {
        &self.topic_arn
    }

    fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }
}

impl Validate for NotifierConfig {
    fn validate(&self) -> Result<()> {
        validate_topic_arn("topic_arn", &self.topic_arn)?;

        if let Some(region) = &self.region {
            validate_aws_region("region", region)?;
        }
        if let Some(endpoint) = &self.endpoint_url {
            validate_url("endpoint_url", endpoint)?;
        }

        tracing::debug!("Notifier configuration validation passed");
        Ok(())
    }
}
