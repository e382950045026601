pub mod camera;

use bevy::prelude::*;

use terrain as terrain_crate;
use ui as ui_crate;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(camera::OrbitCameraSettings::default())
            .add_plugins(terrain_crate::TerrainPlugin)
            .add_plugins(ui_crate::UiPlugin)
            .add_systems(Startup, camera::setup_viewer)
            .add_systems(
                Update,
                (camera::orbit_camera_input, camera::update_orbit_camera).chain(),
            );
    }
}
