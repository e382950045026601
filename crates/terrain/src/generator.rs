use bevy::log::debug;
use rand::Rng;

use crate::error::TerrainError;
use crate::fault::apply_faults;
use crate::grid::build_grid;
use crate::normalize::{HEIGHT_HALF_RANGE, normalize_heights};
use crate::types::{TerrainConfig, TerrainMesh};

/// Build a fresh fault-formed terrain: flat grid, `fault_count` faults, then normalize.
///
/// A flat result (zero faults, or faults that cancel out) is a valid terrain
/// and comes back as a plane at y=0. An invalid grid size yields no mesh at all.
pub fn generate_terrain(
    config: &TerrainConfig,
    rng: &mut impl Rng,
) -> Result<TerrainMesh, TerrainError> {
    config.validate()?;

    let (mut grid, triangles) = build_grid(config.grid_size, rng)?;
    apply_faults(&mut grid, config.fault_count, rng);

    match normalize_heights(&mut grid, HEIGHT_HALF_RANGE) {
        Ok(range) => debug!(
            "normalized heights from [{}, {}] to +/-{}",
            range.min, range.max, HEIGHT_HALF_RANGE
        ),
        Err(TerrainError::DegenerateRange { height }) => {
            // Faults can cancel out into a raised or sunken plane; settle it at y=0.
            debug!("terrain is flat at y={height}, recentering to 0");
            for v in grid.vertices_mut() {
                v.position.y -= height;
            }
        }
        Err(e) => return Err(e),
    }

    Ok(TerrainMesh::new(grid, triangles))
}
