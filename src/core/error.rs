use thiserror::Error;

#[derive(Error, Debug)]
pub enum FortressError {
    #[error("No dwarf named {0}")]
    UnknownDwarf(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Unknown construction type: {0}")]
    UnknownConstruction(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FortressError>;
