use std::error::Error;
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};

use tictactoe_engine::{
    GameEngine, GameSettings, GameState, Player, SessionRng, check_win_with_line, log,
    search_in_background,
};

use crate::input::{Command, parse_command};

/// Plays games until the human quits, input runs out or they decline a rematch.
/// Returns the result of every finished game.
pub async fn run_session<R, W>(
    settings: GameSettings,
    rng: &mut SessionRng,
    input: R,
    output: &mut W,
) -> Result<Vec<GameState>, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut engine = GameEngine::new(settings.board_size, settings.first_player);
    let mut lines = input.lines();
    let mut results = Vec::new();

    writeln!(
        output,
        "You are {}, the bot is {}. Enter moves as `x y` (0-based), `q` to quit.",
        settings.human_player(),
        settings.bot_player
    )?;

    loop {
        match play_game(&mut engine, &settings, rng, &mut lines, output).await? {
            Some(state) => results.push(state),
            None => return Ok(results),
        }

        write!(output, "Play again? [y/N] ")?;
        output.flush()?;
        match lines.next_line().await? {
            Some(answer) if answer.trim().eq_ignore_ascii_case("y") => engine.reset(),
            _ => return Ok(results),
        }
    }
}

async fn play_game<R, W>(
    engine: &mut GameEngine,
    settings: &GameSettings,
    rng: &mut SessionRng,
    lines: &mut Lines<R>,
    output: &mut W,
) -> Result<Option<GameState>, Box<dyn Error>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let human = settings.human_player();
    let bot = settings.bot_player;

    loop {
        writeln!(output, "\n{}", engine.board())?;

        let state = engine.evaluate();
        if state.is_terminal() {
            report_result(engine, state, human, output)?;
            return Ok(Some(state));
        }

        if engine.current_player() == bot {
            let seed = rng.next_seed();
            let position =
                search_in_background(engine.search_snapshot(), bot, settings.bot_type, seed)
                    .await?
                    .ok_or("bot found no move on an unfinished board")?;
            engine.apply_move(position, bot)?;
            writeln!(output, "Bot plays {}", position)?;
            continue;
        }

        write!(output, "{} > ", human.symbol())?;
        output.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(output, "\nInput closed")?;
            return Ok(None);
        };

        match parse_command(&line) {
            Ok(Command::Quit) => return Ok(None),
            Ok(Command::Place(position)) => {
                if let Err(err) = engine.apply_move(position, human) {
                    writeln!(output, "Move rejected: {}", err)?;
                }
            }
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

fn report_result<W: Write>(
    engine: &GameEngine,
    state: GameState,
    human: Player,
    output: &mut W,
) -> std::io::Result<()> {
    log!("Finished game: {:?}", state);

    if let Some(line) = check_win_with_line(engine.board()) {
        let who = if line.player == human { "You win!" } else { "Bot wins!" };
        return writeln!(output, "{} Line from {} to {}", who, line.start, line.end);
    }
    writeln!(output, "It's a tie.")
}
