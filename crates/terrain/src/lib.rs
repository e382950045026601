pub mod assets;
pub mod error;
pub mod fault;
pub mod generator;
pub mod grid;
pub mod normalize;
pub mod render;
pub mod types;

pub use error::*;
pub use generator::generate_terrain;
pub use types::*;

use bevy::prelude::*;

pub struct TerrainPlugin;

impl Plugin for TerrainPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<types::TerrainConfig>()
            .add_message::<types::RegenerateTerrain>()
            .init_asset::<assets::TerrainSettingsAsset>()
            .init_asset_loader::<assets::TerrainSettingsAssetLoader>()
            .add_systems(Startup, render::setup_terrain_renderer)
            .add_systems(
                Update,
                (render::finish_settings_load, render::regenerate_terrain).chain(),
            );
    }
}
