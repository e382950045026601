use bevy::asset::io::Reader;
use bevy::asset::{AssetLoader, LoadContext};
use bevy::prelude::*;
use bevy::reflect::TypePath;
use serde::Deserialize;

use crate::error::SettingsLoadError;
use crate::types::TerrainConfig;

/// Contents of `terrain.ron`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    pub config: TerrainConfig,
    /// Fixed RNG seed. `None` picks a new one every run.
    pub seed: Option<u64>,
}

impl TerrainSettings {
    pub fn from_ron(text: &str) -> Result<Self, SettingsLoadError> {
        let settings: TerrainSettings = ron::from_str(text)?;
        settings.config.validate()?;
        Ok(settings)
    }
}

#[derive(Asset, TypePath, Debug, Clone)]
pub struct TerrainSettingsAsset(pub TerrainSettings);

#[derive(Default)]
pub struct TerrainSettingsAssetLoader;

impl AssetLoader for TerrainSettingsAssetLoader {
    type Asset = TerrainSettingsAsset;
    type Settings = ();
    type Error = SettingsLoadError;

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;

        let text = std::str::from_utf8(&bytes)?;
        Ok(TerrainSettingsAsset(TerrainSettings::from_ron(text)?))
    }

    fn extensions(&self) -> &[&str] {
        &["ron"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TerrainError;

    #[test]
    fn parses_full_settings() {
        let settings = TerrainSettings::from_ron(
            "(config: (grid_size: 32, fault_count: 500), seed: Some(1234))",
        )
        .unwrap();
        assert_eq!(
            settings,
            TerrainSettings {
                config: TerrainConfig {
                    grid_size: 32,
                    fault_count: 500,
                },
                seed: Some(1234),
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let settings = TerrainSettings::from_ron("()").unwrap();
        assert_eq!(settings, TerrainSettings::default());
        assert_eq!(settings.config, TerrainConfig::default());
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn rejects_invalid_grid_size() {
        let err = TerrainSettings::from_ron("(config: (grid_size: 1, fault_count: 3))").unwrap_err();
        assert!(matches!(
            err,
            SettingsLoadError::Invalid(TerrainError::InvalidConfiguration { grid_size: 1, .. })
        ));
    }

    #[test]
    fn rejects_oversized_grid() {
        let err =
            TerrainSettings::from_ron("(config: (grid_size: 60000, fault_count: 3))").unwrap_err();
        assert!(matches!(
            err,
            SettingsLoadError::Invalid(TerrainError::InvalidConfiguration { grid_size: 60000, .. })
        ));
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(matches!(
            TerrainSettings::from_ron("(config: (grid_size: \"big\"))"),
            Err(SettingsLoadError::Ron(_))
        ));
    }
}
