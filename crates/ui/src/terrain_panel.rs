use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};
use terrain::{CurrentTerrain, MAX_GRID_SIZE, MIN_GRID_SIZE, RegenerateTerrain, TerrainConfig};

pub const GRID_SIZE_INPUT_RANGE: std::ops::RangeInclusive<u32> = MIN_GRID_SIZE..=MAX_GRID_SIZE;
pub const FAULT_COUNT_INPUT_RANGE: std::ops::RangeInclusive<u32> = 0..=10_000;

#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct UiInputCapture {
    /// True when egui wants to consume mouse/pointer input.
    pub pointer: bool,
    /// True when egui wants to consume keyboard input (typically when editing a value).
    pub keyboard: bool,
}

/// Values currently typed into the panel, not yet applied.
#[derive(Resource, Default, Clone, Copy, Debug)]
pub struct TerrainPanelState {
    pub pending: TerrainConfig,
}

impl TerrainPanelState {
    pub fn clamped(&self) -> TerrainConfig {
        TerrainConfig {
            grid_size: self.pending.grid_size.clamp(
                *GRID_SIZE_INPUT_RANGE.start(),
                *GRID_SIZE_INPUT_RANGE.end(),
            ),
            fault_count: self.pending.fault_count.min(*FAULT_COUNT_INPUT_RANGE.end()),
        }
    }
}

pub fn update_ui_input_capture(mut contexts: EguiContexts, mut capture: ResMut<UiInputCapture>) {
    let ctx = match contexts.ctx_mut() {
        Ok(ctx) => ctx,
        Err(_) => {
            capture.pointer = false;
            capture.keyboard = false;
            return;
        }
    };

    capture.pointer = ctx.wants_pointer_input() || ctx.is_pointer_over_area();
    capture.keyboard = ctx.wants_keyboard_input();
}

/// Mirror the applied config into the inputs whenever it changes (settings load, regenerate).
pub fn sync_panel_from_config(config: Res<TerrainConfig>, mut panel: ResMut<TerrainPanelState>) {
    if config.is_changed() {
        panel.pending = *config;
    }
}

pub fn regenerate_hotkey(
    keys: Res<ButtonInput<KeyCode>>,
    panel: Res<TerrainPanelState>,
    ui_capture: Res<UiInputCapture>,
    mut regenerate: MessageWriter<RegenerateTerrain>,
) {
    if ui_capture.keyboard {
        return;
    }

    if keys.just_pressed(KeyCode::KeyR) {
        regenerate.write(RegenerateTerrain(panel.clamped()));
    }
}

pub fn terrain_panel_system(
    mut contexts: EguiContexts,
    mut panel: ResMut<TerrainPanelState>,
    current: Option<Res<CurrentTerrain>>,
    mut regenerate: MessageWriter<RegenerateTerrain>,
) {
    let ctx = match contexts.ctx_mut() {
        Ok(ctx) => ctx,
        Err(_) => return,
    };

    let margin = 10.0;

    egui::Area::new("terrain_panel".into())
        .fixed_pos(egui::pos2(margin, margin))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(egui::Color32::from_rgb(35, 35, 35))
                .stroke(egui::Stroke::new(1.0, egui::Color32::from_rgb(90, 90, 90)))
                .corner_radius(6)
                .inner_margin(8)
                .show(ui, |ui| {
                    ui.set_min_width(220.0);

                    egui::Grid::new("terrain_inputs")
                        .num_columns(2)
                        .show(ui, |ui| {
                            ui.label("Grid size");
                            ui.add(
                                egui::DragValue::new(&mut panel.pending.grid_size)
                                    .range(GRID_SIZE_INPUT_RANGE),
                            );
                            ui.end_row();

                            ui.label("Faults");
                            ui.add(
                                egui::DragValue::new(&mut panel.pending.fault_count)
                                    .range(FAULT_COUNT_INPUT_RANGE),
                            );
                            ui.end_row();
                        });

                    if ui.button("Regenerate (R)").clicked() {
                        regenerate.write(RegenerateTerrain(panel.clamped()));
                    }

                    let Some(current) = current.as_deref() else {
                        return;
                    };

                    if let Some(mesh) = &current.mesh {
                        ui.label(format!(
                            "{} vertices, {} triangles",
                            mesh.vertex_count(),
                            mesh.triangle_count()
                        ));
                    }
                    if let Some(e) = &current.last_error {
                        ui.colored_label(egui::Color32::from_rgb(230, 90, 80), e);
                    }
                });
        });
}
