use bevy::input::mouse::MouseWheel;
use bevy::prelude::*;
use ui::UiInputCapture;

#[derive(Component)]
pub struct OrbitCamera;

#[derive(Resource, Clone)]
pub struct OrbitCameraSettings {
    /// How far the eye drifts left/right along x.
    pub sway: f32,
    /// Radians per second of the sway cycle.
    pub sway_speed: f32,
    pub height: f32,
    pub depth: f32,
    pub zoom: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,
    pub zoom_speed: f32,
    pub paused: bool,
    /// Sway phase, only advanced while not paused.
    pub phase: f32,
}

impl Default for OrbitCameraSettings {
    fn default() -> Self {
        Self {
            sway: 1.0,
            sway_speed: 1.0,
            height: 1.5,
            depth: 1.5,
            zoom: 1.0,
            min_zoom: 0.3,
            max_zoom: 3.0,
            zoom_speed: 0.12,
            paused: false,
            phase: 0.0,
        }
    }
}

impl OrbitCameraSettings {
    pub fn eye(&self) -> Vec3 {
        Vec3::new(self.sway * self.phase.cos(), self.height, self.depth) * self.zoom
    }
}

pub fn setup_viewer(mut commands: Commands) {
    commands.spawn((
        OrbitCamera,
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 1.5,
            near: 0.1,
            far: 10.0,
            ..default()
        }),
        Transform::from_translation(OrbitCameraSettings::default().eye())
            .looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

pub fn orbit_camera_input(
    time: Res<Time>,
    keys: Res<ButtonInput<KeyCode>>,
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut settings: ResMut<OrbitCameraSettings>,
    ui_capture: Res<UiInputCapture>,
) {
    if !ui_capture.keyboard && keys.just_pressed(KeyCode::Space) {
        settings.paused = !settings.paused;
    }

    if !settings.paused {
        settings.phase += settings.sway_speed * time.delta_secs();
    }

    // Always drain, even when the UI owns the pointer.
    let scroll: f32 = mouse_wheel.read().map(|ev| ev.y).sum();
    if ui_capture.pointer || scroll == 0.0 {
        return;
    }

    let factor = (1.0 - scroll * settings.zoom_speed).clamp(0.2, 5.0);
    settings.zoom = (settings.zoom * factor).clamp(settings.min_zoom, settings.max_zoom);
}

pub fn update_orbit_camera(
    settings: Res<OrbitCameraSettings>,
    mut q_cam: Query<&mut Transform, With<OrbitCamera>>,
) {
    let mut cam = match q_cam.single_mut() {
        Ok(c) => c,
        Err(_) => return,
    };

    cam.translation = settings.eye();
    cam.look_at(Vec3::ZERO, Vec3::Y);
}
