use super::board::Board;
use super::types::{Cell, GameState, Player, Position, WinningLine};

/// Classifies the board as it is right now. Never cached.
pub fn evaluate(board: &Board) -> GameState {
    if let Some(winner) = check_win(board) {
        return GameState::Win(winner);
    }
    if board.is_full() {
        return GameState::Tie;
    }
    GameState::InProgress
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

/// First full line of one mark, scanning rows, then columns, then the main
/// diagonal and finally the anti-diagonal.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let size = board.size();
    if size == 0 {
        return None;
    }

    for y in 0..size {
        if let Some(line) = check_line(board, |i| Position::new(i, y)) {
            return Some(line);
        }
    }

    for x in 0..size {
        if let Some(line) = check_line(board, |i| Position::new(x, i)) {
            return Some(line);
        }
    }

    if let Some(line) = check_line(board, |i| Position::new(i, i)) {
        return Some(line);
    }

    check_line(board, |i| Position::new(size - 1 - i, i))
}

fn check_line(board: &Board, position_at: impl Fn(usize) -> Position) -> Option<WinningLine> {
    let size = board.size();
    let start = position_at(0);
    let mark = board.cell_at(start);
    if mark == Cell::Empty {
        return None;
    }

    if (1..size).all(|i| board.cell_at(position_at(i)) == mark) {
        let player = mark.player()?;
        return Some(WinningLine::new(player, start, position_at(size - 1)));
    }
    None
}
