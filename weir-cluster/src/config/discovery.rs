use std::time::Duration;

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use weir_core::error::Error;

/// Pacing of the discovery loop: the per-probe timeout, the wait between
/// failed attempts and the total attempt budget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(default)]
pub struct DiscoverySettings {
    #[builder(default = Duration::from_secs(3))]
    pub gossip_timeout: Duration,
    #[builder(default = Duration::from_millis(500))]
    pub discovery_interval: Duration,
    #[builder(default = 10)]
    pub max_discovery_attempts: u16,
}

impl DiscoverySettings {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_discovery_attempts == 0 {
            return Err(Error::InvalidConfiguration(
                "max_discovery_attempts must be at least 1".to_string(),
            ));
        }
        if self.gossip_timeout.is_zero() {
            return Err(Error::InvalidConfiguration(
                "gossip_timeout must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        DiscoverySettings::builder().build()
    }
}
