use thiserror::Error;

use crate::types::Position;

/// Faults at the editor boundary. The core stages themselves never error:
/// a stage that cannot produce a result signals a no-op through [`crate::types::Outcome`].
#[derive(Debug, Error)]
pub enum Error {
    #[error("position {0:?} outside document bounds")]
    OutOfBounds(Position),

    #[error("editor access error: {0}")]
    Editor(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
