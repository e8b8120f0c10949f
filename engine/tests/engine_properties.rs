use tictactoe_engine::{Board, Cell, EngineError, GameEngine, GameState, Player, Position};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

fn at(index: usize) -> Position {
    Position::from_index(index, 3)
}

fn owns_line(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&i| board.cells()[i] == player.cell()))
}

fn walk_all_games(engine: &GameEngine, visited: &mut usize) {
    *visited += 1;
    let state = engine.evaluate();
    assert_eq!(state, engine.evaluate());

    match state {
        GameState::Win(winner) => {
            assert!(owns_line(engine.board(), winner));
            assert!(!owns_line(engine.board(), winner.opponent()));
            return;
        }
        GameState::Tie => {
            assert!(engine.board().is_full());
            assert!(!owns_line(engine.board(), Player::PlayerA));
            assert!(!owns_line(engine.board(), Player::PlayerB));
            return;
        }
        GameState::InProgress => {
            assert!(!owns_line(engine.board(), Player::PlayerA));
            assert!(!owns_line(engine.board(), Player::PlayerB));
        }
    }

    let mover = engine.current_player();
    for position in engine.board().empty_positions() {
        let mut next = engine.clone();
        next.apply_move(position, mover).unwrap();
        walk_all_games(&next, visited);
    }
}

#[test]
fn test_win_reported_only_for_completed_lines() {
    let mut visited = 0;
    walk_all_games(&GameEngine::new(3, Player::PlayerA), &mut visited);

    // Every reachable position of a game started by one fixed side.
    assert_eq!(visited, 549_946);
}

fn bot_never_loses(engine: &mut GameEngine, bot: Player, finished: &mut usize) {
    match engine.evaluate() {
        GameState::Win(winner) => {
            assert_eq!(winner, bot, "bot lost on board\n{}", engine.board());
            *finished += 1;
            return;
        }
        GameState::Tie => {
            *finished += 1;
            return;
        }
        GameState::InProgress => {}
    }

    let mover = engine.current_player();
    if mover == bot {
        let before = engine.board().clone();
        let best = engine.best_move_for(bot).expect("bot must have a move");
        assert_eq!(engine.board(), &before);

        let mut next = engine.clone();
        next.apply_move(best, bot).unwrap();
        bot_never_loses(&mut next, bot, finished);
    } else {
        for position in engine.board().empty_positions() {
            let mut next = engine.clone();
            next.apply_move(position, mover).unwrap();
            bot_never_loses(&mut next, bot, finished);
        }
    }
}

#[test]
fn test_maximizing_bot_never_loses_moving_second() {
    let mut finished = 0;
    bot_never_loses(&mut GameEngine::new(3, Player::PlayerA), Player::PlayerB, &mut finished);
    assert!(finished > 0);
}

#[test]
fn test_maximizing_bot_never_loses_moving_first() {
    let mut finished = 0;
    bot_never_loses(&mut GameEngine::new(3, Player::PlayerB), Player::PlayerB, &mut finished);
    assert!(finished > 0);
}

#[test]
fn test_minimizing_bot_never_loses() {
    let mut finished = 0;
    bot_never_loses(&mut GameEngine::new(3, Player::PlayerB), Player::PlayerA, &mut finished);
    assert!(finished > 0);
}

#[test]
fn test_optimal_self_play_is_a_tie() {
    for first in [Player::PlayerA, Player::PlayerB] {
        let mut engine = GameEngine::new(3, first);
        let mut state = engine.evaluate();

        while state == GameState::InProgress {
            let mover = engine.current_player();
            let best = engine.best_move_for(mover).unwrap();
            state = engine.apply_move(best, mover).unwrap();
        }

        assert_eq!(state, GameState::Tie);
    }
}

#[test]
fn test_player_a_takes_the_open_row() {
    let mut cells = vec![Cell::Empty; 9];
    cells[0] = Cell::PlayerA;
    cells[1] = Cell::PlayerA;
    cells[4] = Cell::PlayerB;
    let board = Board::from_cells(3, cells).unwrap();
    let mut engine = GameEngine::from_board(board.clone(), Player::PlayerA);

    let best = engine.best_move_for(Player::PlayerA);

    assert_eq!(best, Some(at(2)));
    assert_eq!(best.map(|p| p.to_index(3)), Some(2));
    assert_eq!(engine.board(), &board);
    assert_eq!(
        engine.apply_move(at(2), Player::PlayerA),
        Ok(GameState::Win(Player::PlayerA))
    );
}

#[test]
fn test_full_board_without_line_is_tie() {
    #[rustfmt::skip]
    let cells = vec![
        Cell::PlayerA, Cell::PlayerB, Cell::PlayerA,
        Cell::PlayerB, Cell::PlayerB, Cell::PlayerA,
        Cell::PlayerA, Cell::PlayerA, Cell::PlayerB,
    ];
    let engine = GameEngine::from_board(Board::from_cells(3, cells).unwrap(), Player::PlayerA);

    assert_eq!(engine.evaluate(), GameState::Tie);
}

#[test]
fn test_tie_locks_the_game() {
    let mut engine = GameEngine::new(3, Player::PlayerA);
    let mut state = GameState::InProgress;
    // O X O / O X X / X O O
    for (index, player) in [
        (0, Player::PlayerA),
        (1, Player::PlayerB),
        (2, Player::PlayerA),
        (4, Player::PlayerB),
        (3, Player::PlayerA),
        (5, Player::PlayerB),
        (7, Player::PlayerA),
        (6, Player::PlayerB),
        (8, Player::PlayerA),
    ] {
        state = engine.apply_move(at(index), player).unwrap();
    }

    assert_eq!(state, GameState::Tie);
    assert_eq!(
        engine.apply_move(at(0), Player::PlayerB),
        Err(EngineError::GameAlreadyOver)
    );
}

#[test]
fn test_rejected_move_keeps_board_bytes() {
    let mut engine = GameEngine::new(3, Player::PlayerA);
    engine.apply_move(at(4), Player::PlayerA).unwrap();
    engine.apply_move(at(0), Player::PlayerB).unwrap();
    let before = engine.board().clone();

    assert_eq!(
        engine.apply_move(at(4), Player::PlayerA),
        Err(EngineError::CellOccupied { position: at(4) })
    );
    assert_eq!(
        engine.apply_move(at(5), Player::PlayerB),
        Err(EngineError::NotPlayersTurn {
            expected: Player::PlayerA,
            actual: Player::PlayerB
        })
    );
    assert_eq!(engine.board().cells(), before.cells());
    assert_eq!(engine.current_player(), Player::PlayerA);
}
