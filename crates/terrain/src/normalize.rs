use crate::error::TerrainError;
use crate::types::Grid;

/// Normalized heights land in `[-HEIGHT_HALF_RANGE, HEIGHT_HALF_RANGE]`.
pub const HEIGHT_HALF_RANGE: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl HeightRange {
    pub fn of(grid: &Grid) -> Option<Self> {
        let mut heights = grid.heights();
        let first = heights.next()?;
        let (min, max) = heights.fold((first, first), |(min, max), y| (min.min(y), max.max(y)));
        Some(Self { min, max })
    }

    pub fn midpoint(&self) -> f32 {
        0.5 * (self.max + self.min)
    }

    pub fn half_span(&self) -> f32 {
        0.5 * (self.max - self.min)
    }
}

/// Rescale heights so the lowest vertex sits at `-half_range` and the highest at `+half_range`.
///
/// Returns the range measured before rescaling. A flat grid is left untouched
/// and reported as [`TerrainError::DegenerateRange`].
pub fn normalize_heights(grid: &mut Grid, half_range: f32) -> Result<HeightRange, TerrainError> {
    let Some(range) = HeightRange::of(grid) else {
        return Err(TerrainError::DegenerateRange { height: 0.0 });
    };
    if range.max == range.min {
        return Err(TerrainError::DegenerateRange { height: range.min });
    }

    let mid = range.midpoint();
    let half_span = range.half_span();
    for v in grid.vertices_mut() {
        v.position.y = half_range * (v.position.y - mid) / half_span;
    }

    Ok(range)
}
