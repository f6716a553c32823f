use crate::utils::config_loader::{LoadConfigError, RouteConfigLoader, RouteConfigLoaderSync, load_from_file, load_from_file_sync, parse_config};
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
pub struct RouterConfigRoot {
    pub router: RouterConfigSection,
}

#[derive(Clone, Deserialize, Debug, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RouterConfigSection {
    /// Upper bound on the number of hops of a route. Unbounded when not set.
    #[serde(default)]
    pub max_hops: Option<u8>,
}

impl RouterConfigSection {
    pub fn with_max_hops(&self, max_hops: u8) -> Self {
        Self { max_hops: Some(max_hops) }
    }

    pub fn from_toml_str(raw_config: &str) -> Result<Self, LoadConfigError> {
        let root: RouterConfigRoot = parse_config(raw_config)?;
        root.router.validated()
    }

    fn validated(self) -> Result<Self, LoadConfigError> {
        if self.max_hops == Some(0) {
            return Err(LoadConfigError::ConfigError("router.max_hops must be at least 1".to_string()));
        }
        Ok(self)
    }
}

#[async_trait]
impl RouteConfigLoader for RouterConfigSection {
    type SectionType = RouterConfigSection;

    async fn load_section_from_file(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: RouterConfigRoot = load_from_file(file_name).await?;
        root.router.validated()
    }
}

impl RouteConfigLoaderSync for RouterConfigSection {
    type SectionType = RouterConfigSection;

    fn load_section_from_file_sync(file_name: String) -> Result<Self::SectionType, LoadConfigError> {
        let root: RouterConfigRoot = load_from_file_sync(file_name)?;
        root.router.validated()
    }
}
