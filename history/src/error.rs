use thiserror::Error;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("history file I/O failed")]
    Io(#[from] std::io::Error),
    #[error("history file is not valid JSON")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HistoryError>;
