use thiserror::Error;

/// Failure to build or present a single frame.
///
/// A frame that fails is skipped; whatever was acquired before the failure
/// is still released.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("failed to acquire visible surface")]
    VisibleSurface,

    #[error("failed to create off-screen surface")]
    Surface,

    #[error("failed to create {width}x{height} bitmap")]
    Bitmap { width: u32, height: u32 },

    #[error("failed to create solid brush")]
    Brush,

    #[error("failed to select {0} into off-screen surface")]
    Select(&'static str),

    #[error("failed to draw: {0}")]
    Draw(String),

    #[error("failed to present frame: {0}")]
    Present(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}
