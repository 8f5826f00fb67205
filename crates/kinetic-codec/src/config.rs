//! # Codec Configuration
//!
//! Identity, shared secret and cluster version for a codec service.
//!
//! ## Security Requirements
//!
//! - `hmac_secret` MUST NOT be empty in production
//! - The secret is supplied by the embedding application; it is never
//!   generated or persisted here

use kinetic_types::HmacKey;
use thiserror::Error;
use tracing::{info, warn};

/// Environment variable holding the key identity.
pub const ENV_HMAC_IDENTITY: &str = "KINETIC_HMAC_IDENTITY";

/// Environment variable holding the raw shared secret string.
pub const ENV_HMAC_SECRET: &str = "KINETIC_HMAC_SECRET";

/// Environment variable holding the cluster version.
pub const ENV_CLUSTER_VERSION: &str = "KINETIC_CLUSTER_VERSION";

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// HMAC secret is not set.
    #[error(
        "SECURITY VIOLATION: HMAC secret is empty. \
         Set KINETIC_HMAC_SECRET environment variable or provide in config."
    )]
    InsecureHmacSecret,

    /// An environment variable holds an unparsable value.
    #[error("Invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Codec configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Identity of the key, sent in every envelope.
    pub identity: i64,
    /// Shared secret keying the HMAC.
    pub hmac_secret: HmacKey,
    /// Cluster version stamped on built requests.
    pub cluster_version: i64,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            identity: 1,
            hmac_secret: HmacKey::default(),
            cluster_version: 0,
        }
    }
}

impl CodecConfig {
    pub fn new(identity: i64, hmac_secret: HmacKey) -> Self {
        Self {
            identity,
            hmac_secret,
            ..Self::default()
        }
    }

    pub fn with_cluster_version(mut self, cluster_version: i64) -> Self {
        self.cluster_version = cluster_version;
        self
    }

    /// Load configuration from the environment.
    ///
    /// Unparsable values are logged and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from the environment, rejecting unparsable values.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidValue` naming the offending variable.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::try_from_lookup(|var| std::env::var(var).ok())
    }

    /// Validate configuration for production readiness.
    ///
    /// # Returns
    ///
    /// Returns `Err` if:
    /// - HMAC secret is empty
    pub fn validate_for_production(&self) -> Result<(), ConfigError> {
        if self.hmac_secret.is_empty() {
            return Err(ConfigError::InsecureHmacSecret);
        }
        Ok(())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(secret) = lookup(ENV_HMAC_SECRET) {
            config.hmac_secret = HmacKey::from(secret);
            info!("Loaded HMAC secret from environment");
        }

        if let Some(raw) = lookup(ENV_HMAC_IDENTITY) {
            match raw.trim().parse() {
                Ok(identity) => config.identity = identity,
                Err(_) => warn!("{ENV_HMAC_IDENTITY} must be an integer, keeping default"),
            }
        }

        if let Some(raw) = lookup(ENV_CLUSTER_VERSION) {
            match raw.trim().parse() {
                Ok(version) => config.cluster_version = version,
                Err(_) => warn!("{ENV_CLUSTER_VERSION} must be an integer, keeping default"),
            }
        }

        config
    }

    fn try_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(secret) = lookup(ENV_HMAC_SECRET) {
            config.hmac_secret = HmacKey::from(secret);
        }
        if let Some(identity) = parse_var(&lookup, ENV_HMAC_IDENTITY)? {
            config.identity = identity;
        }
        if let Some(version) = parse_var(&lookup, ENV_CLUSTER_VERSION)? {
            config.cluster_version = version;
        }

        Ok(config)
    }
}

fn parse_var(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<i64>, ConfigError> {
    lookup(var)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var, value: raw })
        })
        .transpose()
}
