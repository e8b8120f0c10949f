mod board;
mod bot_controller;
mod engine;
mod error;
mod session_rng;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    BotType, calculate_minimax_move, calculate_move, minimax_score, search_in_background,
};
pub use engine::GameEngine;
pub use error::{EngineError, EngineResult};
pub use session_rng::SessionRng;
pub use settings::{GameSettings, MAX_BOARD_SIZE, MIN_BOARD_SIZE, MINIMAX_BOARD_SIZE};
pub use types::{
    Cell, GameState, PLAYER_A_WIN_SCORE, PLAYER_B_WIN_SCORE, Player, Position, TIE_SCORE,
    WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
