use bevy::prelude::*;
use glam::Vec3;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;

use crate::error::TerrainError;

/// Smallest grid that still has one cell.
pub const MIN_GRID_SIZE: u32 = 2;
/// Largest accepted grid. Also keeps `N * N` vertex indices well inside `u32`.
pub const MAX_GRID_SIZE: u32 = 512;

// --- Config ---

#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerrainConfig {
    pub grid_size: u32,
    pub fault_count: u32,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            fault_count: 200,
        }
    }
}

impl TerrainConfig {
    pub fn validate(&self) -> Result<(), TerrainError> {
        check_grid_size(self.grid_size)
    }
}

pub fn check_grid_size(size: u32) -> Result<(), TerrainError> {
    if size < MIN_GRID_SIZE {
        return Err(TerrainError::InvalidConfiguration {
            grid_size: size,
            reason: format!("grid size must be at least {MIN_GRID_SIZE}"),
        });
    }
    if size > MAX_GRID_SIZE {
        return Err(TerrainError::InvalidConfiguration {
            grid_size: size,
            reason: format!("grid size must be at most {MAX_GRID_SIZE}"),
        });
    }
    Ok(())
}

// --- Geometry ---

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub color: Vec3,
}

/// Row-major `size x size` lattice of vertices.
#[derive(Clone, Debug)]
pub struct Grid {
    size: u32,
    vertices: Vec<Vertex>,
}

impl Grid {
    pub(crate) fn from_vertices(size: u32, vertices: Vec<Vertex>) -> Self {
        debug_assert_eq!(vertices.len(), size as usize * size as usize);
        Self { size, vertices }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    pub fn heights(&self) -> impl Iterator<Item = f32> + '_ {
        self.vertices.iter().map(|v| v.position.y)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriangleList(pub Vec<[u32; 3]>);

impl TriangleList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u32; 3]> {
        self.0.iter()
    }
}

/// Finished terrain handed to the renderer. Read-only once built.
#[derive(Clone, Debug)]
pub struct TerrainMesh {
    grid: Grid,
    triangles: TriangleList,
}

impl TerrainMesh {
    pub(crate) fn new(grid: Grid, triangles: TriangleList) -> Self {
        Self { grid, triangles }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn triangles(&self) -> &TriangleList {
        &self.triangles
    }

    pub fn vertex_count(&self) -> usize {
        self.grid.vertices().len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    pub fn positions(&self) -> Vec<[f32; 3]> {
        self.grid
            .vertices()
            .iter()
            .map(|v| v.position.to_array())
            .collect()
    }

    pub fn colors(&self) -> Vec<[f32; 3]> {
        self.grid
            .vertices()
            .iter()
            .map(|v| v.color.to_array())
            .collect()
    }

    pub fn indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }
}

// --- Resources ---

/// RNG used for every generation request in the app.
#[derive(Resource)]
pub struct TerrainRng(pub ChaCha8Rng);

/// Terrain currently on screen, if any.
#[derive(Resource, Default)]
pub struct CurrentTerrain {
    pub mesh: Option<TerrainMesh>,
    pub entity: Option<Entity>,
    pub last_error: Option<String>,
}

/// Ask the renderer to throw away the current terrain and build a new one.
#[derive(Message, Clone, Copy, Debug)]
pub struct RegenerateTerrain(pub TerrainConfig);
