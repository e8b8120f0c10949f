use thiserror::Error;

use super::types::{Player, Position};

/// Reasons a board access or a move is rejected. None of them change game state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("position {position} is outside the {size}x{size} board")]
    OutOfRange { position: Position, size: usize },

    #[error("cell {position} is already occupied")]
    CellOccupied { position: Position },

    #[error("it is {expected}'s turn, not {actual}'s")]
    NotPlayersTurn { expected: Player, actual: Player },

    #[error("game is already over")]
    GameAlreadyOver,

    #[error("board of this size needs {expected} cells, got {got}")]
    InvalidBoardLength { expected: usize, got: usize },
}

pub type EngineResult<T> = Result<T, EngineError>;
