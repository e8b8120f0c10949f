use serde::{Deserialize, Serialize};

use super::bot_controller::BotType;
use super::types::Player;
use crate::config::Validate;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 10;
pub const MINIMAX_BOARD_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    pub board_size: usize,
    pub first_player: Player,
    pub bot_type: BotType,
    pub bot_player: Player,
}

impl GameSettings {
    pub fn human_player(&self) -> Player {
        self.bot_player.opponent()
    }
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            board_size: MINIMAX_BOARD_SIZE,
            first_player: Player::PlayerA,
            bot_type: BotType::Minimax,
            bot_player: Player::PlayerB,
        }
    }
}

impl Validate for GameSettings {
    fn validate(&self) -> Result<(), String> {
        if self.board_size < MIN_BOARD_SIZE || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if self.bot_type == BotType::Minimax && self.board_size != MINIMAX_BOARD_SIZE {
            return Err(format!(
                "Minimax bot only supports a {0}x{0} board, got {1}x{1}",
                MINIMAX_BOARD_SIZE, self.board_size
            ));
        }
        Ok(())
    }
}
