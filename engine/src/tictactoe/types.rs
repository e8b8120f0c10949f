use serde::{Deserialize, Serialize};
use std::fmt;

pub const PLAYER_A_WIN_SCORE: i32 = -10;
pub const PLAYER_B_WIN_SCORE: i32 = 10;
pub const TIE_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerA,
    PlayerB,
}

impl Cell {
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerA => Some(Player::PlayerA),
            Cell::PlayerB => Some(Player::PlayerB),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::PlayerA => 'O',
            Cell::PlayerB => 'X',
        }
    }
}

/// One side of the game. `PlayerB` is the maximizing side of the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    PlayerA,
    PlayerB,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::PlayerA => Player::PlayerB,
            Player::PlayerB => Player::PlayerA,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::PlayerA => Cell::PlayerA,
            Player::PlayerB => Cell::PlayerB,
        }
    }

    pub fn symbol(self) -> char {
        self.cell().symbol()
    }

    /// Utility of a finished game won by this player.
    pub fn win_score(self) -> i32 {
        match self {
            Player::PlayerA => PLAYER_A_WIN_SCORE,
            Player::PlayerB => PLAYER_B_WIN_SCORE,
        }
    }

    /// Whether `candidate` is a better outcome than `current` from this player's side.
    pub fn prefers(self, candidate: i32, current: i32) -> bool {
        match self {
            Player::PlayerA => candidate < current,
            Player::PlayerB => candidate > current,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::PlayerA => write!(f, "player A ({})", self.symbol()),
            Player::PlayerB => write!(f, "player B ({})", self.symbol()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize, size: usize) -> Self {
        Self {
            x: index % size,
            y: index / size,
        }
    }

    pub fn to_index(self, size: usize) -> usize {
        self.x + self.y * size
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Win(Player),
    Tie,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::InProgress)
    }

    /// Fixed leaf value of a finished game, `None` while it is still running.
    pub fn utility(self) -> Option<i32> {
        match self {
            GameState::InProgress => None,
            GameState::Win(player) => Some(player.win_score()),
            GameState::Tie => Some(TIE_SCORE),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(player: Player, start: Position, end: Position) -> Self {
        Self { player, start, end }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_index_is_row_major() {
        assert_eq!(Position::new(2, 0).to_index(3), 2);
        assert_eq!(Position::new(0, 1).to_index(3), 3);
        assert_eq!(Position::from_index(7, 3), Position::new(1, 2));
    }

    #[test]
    fn test_player_b_maximizes_and_player_a_minimizes() {
        assert!(Player::PlayerB.prefers(10, 0));
        assert!(!Player::PlayerB.prefers(0, 0));
        assert!(Player::PlayerA.prefers(-10, 0));
        assert!(!Player::PlayerA.prefers(10, -10));
    }

    #[test]
    fn test_utility_scores() {
        assert_eq!(GameState::Win(Player::PlayerA).utility(), Some(-10));
        assert_eq!(GameState::Win(Player::PlayerB).utility(), Some(10));
        assert_eq!(GameState::Tie.utility(), Some(0));
        assert_eq!(GameState::InProgress.utility(), None);
    }

    #[test]
    fn test_cell_player_conversion() {
        for player in [Player::PlayerA, Player::PlayerB] {
            assert_eq!(player.cell().player(), Some(player));
            assert_eq!(player.opponent().opponent(), player);
        }
        assert_eq!(Cell::Empty.player(), None);
    }
}
