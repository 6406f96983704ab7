use config::builder::DefaultState;
use config::{File, FileFormat, Source};
use serde::{Deserialize, Serialize};

use weir_core::config::ConfigBuilder;

use crate::config::discovery::DiscoverySettings;
use crate::config::topology::ClusterTopologyConfig;
use crate::REFERENCE;

pub mod discovery;
pub mod topology;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    pub topology: ClusterTopologyConfig,
    pub discovery: DiscoverySettings,
}

impl ClusterConfig {
    pub fn builder() -> ClusterConfigBuilder {
        ClusterConfigBuilder::default()
    }
}

#[derive(Debug)]
pub struct ClusterConfigBuilder {
    builder: config::ConfigBuilder<DefaultState>,
}

impl Default for ClusterConfigBuilder {
    fn default() -> Self {
        // reference defaults go in first, caller sources layer on top
        let builder =
            config::Config::builder().add_source(File::from_str(REFERENCE, FileFormat::Toml));
        Self { builder }
    }
}

impl ConfigBuilder for ClusterConfigBuilder {
    type C = ClusterConfig;

    fn add_source<T>(self, source: T) -> anyhow::Result<Self>
    where
        T: Source + Send + Sync + 'static,
    {
        Ok(Self {
            builder: self.builder.add_source(source),
        })
    }

    fn build(self) -> anyhow::Result<Self::C> {
        let config = self.builder.build()?.try_deserialize::<Self::C>()?;
        Ok(config)
    }
}
