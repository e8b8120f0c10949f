//! Tic-tac-toe rules engine with an exhaustive minimax opponent.
//!
//! [`GameEngine`] owns one session: apply moves, classify the board with
//! [`GameEngine::evaluate`] and ask for the best reply with
//! [`GameEngine::best_move_for`]. Rendering and input belong to the caller.

pub mod config;
pub mod logger;
pub mod tictactoe;

pub use tictactoe::*;
