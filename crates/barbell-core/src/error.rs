use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid entry {id}: {message}")]
    InvalidEntry { id: u32, message: String },

    #[error("Duplicate entry id: {0}")]
    DuplicateEntryId(u32),

    #[error("Unknown formula: {0}")]
    UnknownFormula(String),

    #[error("Unknown equipment: {0}")]
    UnknownEquipment(String),

    #[error("Unknown event: {0}")]
    UnknownEvent(String),

    #[error("Unknown sex: {0}")]
    UnknownSex(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
