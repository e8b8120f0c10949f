mod config;
mod input;
mod session;

use clap::{Parser, ValueEnum};
use tictactoe_engine::{BotType, SessionRng, log, logger};
use tokio::io::BufReader;

use config::{Config, DEFAULT_CONFIG_FILE, Validate, get_config_manager};
use session::run_session;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe against a bot in the terminal")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,
    #[arg(long)]
    use_log_prefix: bool,
    /// Who makes the first move
    #[arg(long, value_enum)]
    first: Option<FirstMover>,
    #[arg(long, value_enum)]
    bot: Option<BotArg>,
    #[arg(long)]
    size: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// Write the effective settings back to the config file
    #[arg(long)]
    save_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstMover {
    Human,
    Bot,
}

#[derive(Clone, Copy, ValueEnum)]
enum BotArg {
    Minimax,
    Random,
}

impl From<BotArg> for BotType {
    fn from(arg: BotArg) -> Self {
        match arg {
            BotArg::Minimax => BotType::Minimax,
            BotArg::Random => BotType::Random,
        }
    }
}

impl Args {
    fn apply_to(&self, config: &mut Config) {
        if let Some(first) = self.first {
            config.game.first_player = match first {
                FirstMover::Human => config.game.human_player(),
                FirstMover::Bot => config.game.bot_player,
            };
        }
        if let Some(bot) = self.bot {
            config.game.bot_type = bot.into();
        }
        if let Some(size) = self.size {
            config.game.board_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let config_manager = get_config_manager(&args.config);
    let mut config = config_manager.get_config()?;
    args.apply_to(&mut config);
    config.validate()?;

    if args.save_config {
        config_manager.set_config(&config)?;
        log!("Saved settings to {}", args.config);
    }

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Starting session with {:?}, seed {}", config.game, rng.seed());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let results = run_session(config.game, &mut rng, stdin, &mut stdout).await?;

    log!("Session ended after {} finished game(s)", results.len());
    Ok(())
}
