use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Sector index out of range")]
    InvalidIndex,
    #[error("Mine layout does not match declared geometry")]
    LayoutMismatch,
}

pub type Result<T> = core::result::Result<T, GameError>;
