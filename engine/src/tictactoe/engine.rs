use super::board::Board;
use super::bot_controller::calculate_minimax_move;
use super::error::{EngineError, EngineResult};
use super::types::{Cell, GameState, Player, Position};
use super::win_detector::evaluate;
use crate::log;

/// One game session: the board plus whose turn it is.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    first_player: Player,
    current_player: Player,
    last_move: Option<Position>,
}

impl GameEngine {
    pub fn new(size: usize, first_player: Player) -> Self {
        Self {
            board: Board::new(size),
            first_player,
            current_player: first_player,
            last_move: None,
        }
    }

    /// Resumes from an arbitrary board with `next_player` to move.
    pub fn from_board(board: Board, next_player: Player) -> Self {
        Self {
            board,
            first_player: next_player,
            current_player: next_player,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    pub fn evaluate(&self) -> GameState {
        evaluate(&self.board)
    }

    pub fn apply_move(&mut self, position: Position, player: Player) -> EngineResult<GameState> {
        if self.evaluate().is_terminal() {
            return Err(EngineError::GameAlreadyOver);
        }

        let occupant = self.board.occupant(position)?;

        if player != self.current_player {
            return Err(EngineError::NotPlayersTurn {
                expected: self.current_player,
                actual: player,
            });
        }

        if occupant != Cell::Empty {
            return Err(EngineError::CellOccupied { position });
        }

        self.board.set(position, player.cell())?;
        self.current_player = player.opponent();
        self.last_move = Some(position);

        let state = self.evaluate();
        match state {
            GameState::Win(winner) => log!("Game over: {} wins", winner),
            GameState::Tie => log!("Game over: tie"),
            GameState::InProgress => {}
        }
        Ok(state)
    }

    /// Best move for `player` by exhaustive minimax, or `None` once the game is over.
    pub fn best_move_for(&mut self, player: Player) -> Option<Position> {
        calculate_minimax_move(&mut self.board, player)
    }

    /// Owned copy of the board for searching off the caller's thread.
    pub fn search_snapshot(&self) -> Board {
        self.board.clone()
    }

    pub fn reset(&mut self) {
        self.board.reset();
        self.current_player = self.first_player;
        self.last_move = None;
    }
}
