pub mod terrain_panel;

pub use terrain_panel::{
    TerrainPanelState, UiInputCapture, regenerate_hotkey, sync_panel_from_config,
    terrain_panel_system, update_ui_input_capture,
};

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TerrainPanelState>()
            .insert_resource(UiInputCapture::default())
            .add_systems(Update, (sync_panel_from_config, regenerate_hotkey).chain())
            .add_systems(
                EguiPrimaryContextPass,
                (update_ui_input_capture, terrain_panel_system),
            );
    }
}
