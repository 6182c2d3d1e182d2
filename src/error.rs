use thiserror::Error;

#[derive(Debug, Error)]
pub enum RadarError {
    #[error("radar needs at least one ring")]
    NoRings,

    #[error("radar needs at least one sector")]
    NoSectors,

    #[error("radar width must be a positive number, got {0}")]
    InvalidWidth(f64),

    #[error("blip offset must be a positive number, got {0}")]
    InvalidOffset(f64),

    #[error("blip offset {offset} is too fine for width {width}: more than {max} grid steps per axis")]
    GridTooDense { width: f64, offset: f64, max: usize },

    #[error("placement seed must be a finite number, got {0}")]
    InvalidSeed(f64),

    #[error("no entry with id {0}")]
    UnknownEntry(usize),

    #[error("no sector with id {0}")]
    UnknownSector(usize),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RadarError>;
