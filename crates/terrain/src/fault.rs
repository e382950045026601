use std::f32::consts::TAU;

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::types::Grid;

/// Height added to (or removed from) a vertex by a single fault.
pub const DISPLACEMENT: f32 = 1.0;

/// A vertical plane through `point` with horizontal unit `normal`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaultPlane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl FaultPlane {
    pub fn sample(rng: &mut impl Rng) -> Self {
        let x = rng.random_range(-1.0..=1.0);
        let z = rng.random_range(-1.0..=1.0);
        let theta: f32 = rng.random_range(0.0..TAU);
        Self {
            point: Vec3::new(x, 0.0, z),
            normal: Vec3::new(theta.sin(), 0.0, theta.cos()),
        }
    }

    /// True when `position` lies strictly on the normal's side. Points on the
    /// line itself count as the lower side.
    pub fn raises(&self, position: Vec3) -> bool {
        let delta = Vec2::new(position.x - self.point.x, position.z - self.point.z);
        delta.dot(Vec2::new(self.normal.x, self.normal.z)) > 0.0
    }

    pub fn apply(&self, grid: &mut Grid) {
        for v in grid.vertices_mut() {
            if self.raises(v.position) {
                v.position.y += DISPLACEMENT;
            } else {
                v.position.y -= DISPLACEMENT;
            }
        }
    }
}

/// Run `fault_count` random faults over the grid, one after another.
pub fn apply_faults(grid: &mut Grid, fault_count: u32, rng: &mut impl Rng) {
    for _ in 0..fault_count {
        FaultPlane::sample(rng).apply(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::build_grid;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_faults_is_noop() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let (mut grid, _) = build_grid(8, &mut rng).unwrap();
        let before = grid.clone();
        apply_faults(&mut grid, 0, &mut rng);
        assert_eq!(grid.vertices(), before.vertices());
    }

    #[test]
    fn sampled_plane_is_horizontal_unit() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        for _ in 0..100 {
            let plane = FaultPlane::sample(&mut rng);
            assert_eq!(plane.point.y, 0.0);
            assert_eq!(plane.normal.y, 0.0);
            assert!((-1.0..=1.0).contains(&plane.point.x));
            assert!((-1.0..=1.0).contains(&plane.point.z));
            assert!((plane.normal.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn side_test_ignores_height() {
        let plane = FaultPlane {
            point: Vec3::ZERO,
            normal: Vec3::X,
        };
        assert!(plane.raises(Vec3::new(0.5, -100.0, 0.0)));
        assert!(!plane.raises(Vec3::new(-0.5, 100.0, 0.0)));
    }

    #[test]
    fn points_on_the_line_are_lowered() {
        let plane = FaultPlane {
            point: Vec3::new(0.25, 0.0, 0.0),
            normal: Vec3::X,
        };
        assert!(!plane.raises(Vec3::new(0.25, 0.0, 0.9)));
    }

    #[test]
    fn each_fault_moves_every_vertex_by_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let (mut grid, _) = build_grid(5, &mut rng).unwrap();
        let plane = FaultPlane {
            point: Vec3::ZERO,
            normal: Vec3::Z,
        };
        plane.apply(&mut grid);

        for v in grid.vertices() {
            let expected = if v.position.z > 0.0 { 1.0 } else { -1.0 };
            assert_eq!(v.position.y, expected);
        }
    }

    #[test]
    fn heights_keep_parity_of_fault_count() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let (mut grid, _) = build_grid(6, &mut rng).unwrap();
        apply_faults(&mut grid, 7, &mut rng);

        for y in grid.heights() {
            assert_eq!(y.fract(), 0.0);
            assert!(y.abs() <= 7.0);
            assert_eq!((y as i32).rem_euclid(2), 1);
        }
    }
}
