use serde::{Deserialize, Serialize};
use tokio::task::JoinError;

use super::board::Board;
use super::session_rng::SessionRng;
use super::types::{Cell, Player, Position, TIE_SCORE};
use super::win_detector::evaluate;
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BotType {
    Minimax,
    Random,
}

pub fn calculate_move(
    bot_type: BotType,
    board: &mut Board,
    player: Player,
    rng: &mut SessionRng,
) -> Option<Position> {
    let position = match bot_type {
        BotType::Minimax => calculate_minimax_move(board, player),
        BotType::Random => calculate_random_move(board, rng),
    };
    if let Some(position) = position {
        log!("{:?} bot picked {} for {}", bot_type, position, player);
    }
    position
}

/// Runs the bot on a blocking worker against its own copy of the board.
pub async fn search_in_background(
    snapshot: Board,
    player: Player,
    bot_type: BotType,
    seed: u64,
) -> Result<Option<Position>, JoinError> {
    tokio::task::spawn_blocking(move || {
        let mut board = snapshot;
        let mut rng = SessionRng::new(seed);
        calculate_move(bot_type, &mut board, player, &mut rng)
    })
    .await
}

fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_positions();
    if available_moves.is_empty() {
        return None;
    }
    let idx = rng.random_index(available_moves.len());
    Some(available_moves[idx])
}

/// Exhaustive minimax. Ties between equally scored moves go to the first
/// empty cell in index order. Leaves `board` exactly as it found it.
pub fn calculate_minimax_move(board: &mut Board, player: Player) -> Option<Position> {
    minimax(board, player).1
}

/// Game value of `board` with `mover` to play, assuming both sides play perfectly.
pub fn minimax_score(board: &mut Board, mover: Player) -> i32 {
    minimax(board, mover).0
}

fn minimax(board: &mut Board, mover: Player) -> (i32, Option<Position>) {
    if let Some(score) = evaluate(board).utility() {
        return (score, None);
    }

    let mut best: Option<(i32, Position)> = None;
    for position in board.empty_positions() {
        board.write(position, mover.cell());
        let (score, _) = minimax(board, mover.opponent());
        board.write(position, Cell::Empty);

        if best.is_none_or(|(best_score, _)| mover.prefers(score, best_score)) {
            best = Some((score, position));
        }
    }

    match best {
        Some((score, position)) => (score, Some(position)),
        None => (TIE_SCORE, None),
    }
}
