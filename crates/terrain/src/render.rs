use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::assets::{TerrainSettings, TerrainSettingsAsset};
use crate::generator::generate_terrain;
use crate::types::{CurrentTerrain, RegenerateTerrain, TerrainConfig, TerrainMesh, TerrainRng};

#[derive(Component)]
pub struct Terrain;

#[derive(Resource, Clone)]
pub struct TerrainSettingsHandle(pub Handle<TerrainSettingsAsset>);

#[derive(Resource)]
pub struct TerrainMaterial {
    pub material: Handle<StandardMaterial>,
}

pub fn setup_terrain_renderer(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(CurrentTerrain::default());

    let handle: Handle<TerrainSettingsAsset> = asset_server.load("terrain.ron");
    commands.insert_resource(TerrainSettingsHandle(handle));

    // Shaded by the per-vertex grays only, no lighting.
    let material = materials.add(StandardMaterial {
        base_color: Color::WHITE,
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    commands.insert_resource(TerrainMaterial { material });
}

pub fn finish_settings_load(
    mut commands: Commands,
    handle: Option<Res<TerrainSettingsHandle>>,
    asset_server: Res<AssetServer>,
    assets: Res<Assets<TerrainSettingsAsset>>,
    mut regenerate: MessageWriter<RegenerateTerrain>,
) {
    let Some(handle) = handle else {
        return;
    };

    let settings = if let Some(asset) = assets.get(&handle.0) {
        asset.0
    } else if let Some(bevy::asset::LoadState::Failed(e)) = asset_server.get_load_state(handle.0.id()) {
        warn!("failed to load terrain settings, using defaults: {e}");
        TerrainSettings::default()
    } else {
        return;
    };

    commands.remove_resource::<TerrainSettingsHandle>();

    let rng = match settings.seed {
        Some(seed) => {
            info!("seeding terrain rng with {seed}");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };
    commands.insert_resource(TerrainRng(rng));
    commands.insert_resource(settings.config);

    regenerate.write(RegenerateTerrain(settings.config));
}

/// Replace the terrain on screen with a freshly generated one.
///
/// Only the last request of a frame is honored. The old entity is removed in
/// the same pass the new one is spawned, so two terrains are never visible.
pub fn regenerate_terrain(
    mut commands: Commands,
    mut requests: MessageReader<RegenerateTerrain>,
    mut meshes: ResMut<Assets<Mesh>>,
    material: Option<Res<TerrainMaterial>>,
    rng: Option<ResMut<TerrainRng>>,
    mut current: ResMut<CurrentTerrain>,
    mut config: ResMut<TerrainConfig>,
) {
    // Requests stay queued until settings have loaded.
    let (Some(material), Some(mut rng)) = (material, rng) else {
        return;
    };
    let Some(RegenerateTerrain(requested)) = requests.read().last().copied() else {
        return;
    };

    let terrain = match generate_terrain(&requested, &mut rng.0) {
        Ok(terrain) => terrain,
        Err(e) => {
            error!("{e}");
            current.last_error = Some(e.to_string());
            return;
        }
    };

    info!(
        "generated {}x{} terrain with {} faults ({} vertices, {} triangles)",
        requested.grid_size,
        requested.grid_size,
        requested.fault_count,
        terrain.vertex_count(),
        terrain.triangle_count()
    );

    if let Some(old) = current.entity.take() {
        commands.entity(old).despawn();
    }

    let mesh_handle = meshes.add(mesh_from_terrain(&terrain));
    let entity = commands
        .spawn((
            Terrain,
            Mesh3d(mesh_handle),
            MeshMaterial3d(material.material.clone()),
            Transform::IDENTITY,
        ))
        .id();

    current.entity = Some(entity);
    current.mesh = Some(terrain);
    current.last_error = None;
    *config = requested;
}

pub fn mesh_from_terrain(terrain: &TerrainMesh) -> Mesh {
    let colors: Vec<[f32; 4]> = terrain
        .colors()
        .into_iter()
        .map(|[r, g, b]| [r, g, b, 1.0])
        .collect();

    let mut mesh = Mesh::new(
        PrimitiveTopology::TriangleList,
        RenderAssetUsages::default(),
    );
    mesh.insert_attribute(Mesh::ATTRIBUTE_POSITION, terrain.positions());
    mesh.insert_attribute(Mesh::ATTRIBUTE_COLOR, colors);
    mesh.insert_indices(Indices::U32(terrain.indices()));
    mesh
}
