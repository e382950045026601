use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("invalid terrain configuration (grid size {grid_size}): {reason}")]
    InvalidConfiguration { grid_size: u32, reason: String },

    /// Every vertex has the same height, so there is no range to rescale.
    #[error("heightfield is flat at y={height}, nothing to normalize")]
    DegenerateRange { height: f32 },
}

#[derive(Debug, Error)]
pub enum SettingsLoadError {
    #[error("failed to read terrain settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("terrain settings were not valid utf-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to parse terrain settings ron: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error(transparent)]
    Invalid(#[from] TerrainError),
}
