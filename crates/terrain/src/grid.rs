use glam::Vec3;
use rand::Rng;

use crate::error::TerrainError;
use crate::types::{Grid, TriangleList, Vertex, check_grid_size};

/// Build a flat `size x size` grid spanning `[-1, 1]` on x and z, plus its triangles.
///
/// Rows walk along x and columns along z, so vertex `(row, col)` lives at
/// `row * size + col`. Every vertex gets its own random gray color.
pub fn build_grid(size: u32, rng: &mut impl Rng) -> Result<(Grid, TriangleList), TerrainError> {
    check_grid_size(size)?;

    let n = size as usize;
    let step = 2.0 / (size - 1) as f32;

    let mut vertices = Vec::with_capacity(n * n);
    for row in 0..size {
        for col in 0..size {
            let x = lattice_coord(row, size, step);
            let z = lattice_coord(col, size, step);
            let gray: f32 = rng.random();
            vertices.push(Vertex {
                position: Vec3::new(x, 0.0, z),
                color: Vec3::splat(gray),
            });
        }
    }

    Ok((Grid::from_vertices(size, vertices), build_triangles(size)))
}

// The far edge is pinned to exactly 1.0.
fn lattice_coord(i: u32, size: u32, step: f32) -> f32 {
    if i == size - 1 {
        1.0
    } else {
        -1.0 + i as f32 * step
    }
}

fn build_triangles(size: u32) -> TriangleList {
    let cells = (size as usize - 1) * (size as usize - 1);
    let mut triangles = Vec::with_capacity(cells * 2);

    for i in 0..size - 1 {
        for j in 0..size - 1 {
            let pos = i * size + j;
            triangles.push([pos, pos + 1, pos + size]);
            triangles.push([pos + 1, pos + size, pos + size + 1]);
        }
    }

    TriangleList(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MAX_GRID_SIZE;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn counts_match_grid_size() {
        for size in [2, 3, 5, 17, 64] {
            let (grid, triangles) = build_grid(size, &mut rng()).unwrap();
            let n = size as usize;
            assert_eq!(grid.vertices().len(), n * n);
            assert_eq!(triangles.len(), 2 * (n - 1) * (n - 1));
            assert!(triangles.iter().flatten().all(|&i| (i as usize) < n * n));
        }
    }

    #[test]
    fn three_by_three_triangles() {
        let (_, triangles) = build_grid(3, &mut rng()).unwrap();
        assert_eq!(
            triangles.0,
            vec![
                [0, 1, 3],
                [1, 3, 4],
                [1, 2, 4],
                [2, 4, 5],
                [3, 4, 6],
                [4, 6, 7],
                [4, 5, 7],
                [5, 7, 8],
            ]
        );
    }

    #[test]
    fn lattice_spans_unit_square_evenly() {
        let size = 9;
        let (grid, _) = build_grid(size, &mut rng()).unwrap();
        let step = 2.0 / (size - 1) as f32;

        for row in 0..size {
            for col in 0..size {
                let v = grid.vertices()[grid.index(row, col)];
                assert!((v.position.x - (-1.0 + row as f32 * step)).abs() < 1e-6);
                assert!((v.position.z - (-1.0 + col as f32 * step)).abs() < 1e-6);
                assert_eq!(v.position.y, 0.0);
            }
        }

        let corner = grid.vertices()[grid.index(size - 1, size - 1)];
        assert_eq!(corner.position.x, 1.0);
        assert_eq!(corner.position.z, 1.0);
    }

    #[test]
    fn colors_are_gray_in_unit_range() {
        let (grid, _) = build_grid(6, &mut rng()).unwrap();
        for v in grid.vertices() {
            assert_eq!(v.color.x, v.color.y);
            assert_eq!(v.color.y, v.color.z);
            assert!((0.0..1.0).contains(&v.color.x));
        }
    }

    #[test]
    fn rejects_too_small() {
        for size in [0, 1] {
            assert!(matches!(
                build_grid(size, &mut rng()),
                Err(TerrainError::InvalidConfiguration { .. })
            ));
        }
    }

    #[test]
    fn rejects_too_large() {
        assert!(matches!(
            build_grid(MAX_GRID_SIZE + 1, &mut rng()),
            Err(TerrainError::InvalidConfiguration { grid_size, .. }) if grid_size == MAX_GRID_SIZE + 1
        ));
    }
}
