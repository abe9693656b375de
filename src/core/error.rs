use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Coordinates ({x}, {y}) outside world bounds 0-{max}", max = crate::core::types::WORLD_MAX)]
    InvalidCoordinate { x: i32, y: i32 },

    #[error("Invalid NPC name: {0:?}")]
    InvalidName(String),

    #[error("Unknown NPC variant: {0}")]
    UnknownVariant(String),

    #[error("Malformed record {line:?}: {reason}")]
    MalformedRecord { line: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, ArenaError>;
