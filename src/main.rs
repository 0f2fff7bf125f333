#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use solo_battleship::{
    button, init_logging, transport::http, ui, Assets, GameConfig, GameController,
    MonotonicClock, RandomFleet, RestartTrigger, DEBOUNCE_QUIET_US, TURN_BUDGET, WIN_THRESHOLD,
};

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use std::{path::PathBuf, sync::Arc};
#[cfg(feature = "std")]
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Rules shared by every front end.
#[derive(Args, Clone, Debug)]
#[cfg(feature = "std")]
struct GameArgs {
    #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, default_value_t = WIN_THRESHOLD, help = "Distinct hits needed to win")]
    win_threshold: u8,
    #[arg(long, default_value_t = TURN_BUDGET, help = "Misses allowed before the game is lost")]
    turns: u8,
}

#[cfg(feature = "std")]
impl GameArgs {
    fn config(&self) -> GameConfig {
        GameConfig::new(self.win_threshold, self.turns)
    }

    fn generator(&self) -> RandomFleet {
        match self.seed {
            Some(s) => {
                log::info!("Using fixed seed: {} (layouts will be reproducible)", s);
                RandomFleet::seeded(s)
            }
            None => RandomFleet::from_entropy(),
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Serve the game over HTTP.
    Serve {
        #[arg(long, default_value = "0.0.0.0:8080")]
        bind: String,
        #[arg(long, help = "Directory holding index.html and style.css (embedded copies otherwise)")]
        assets: Option<PathBuf>,
        #[arg(long, default_value_t = DEBOUNCE_QUIET_US / 1000, help = "Restart button debounce in milliseconds")]
        debounce_ms: u32,
        #[command(flatten)]
        game: GameArgs,
    },
    /// Play in the terminal.
    Play {
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            bind,
            assets,
            debounce_ms,
            game,
        } => {
            let trigger: &'static RestartTrigger = Box::leak(Box::new(RestartTrigger::new(
                debounce_ms.saturating_mul(1000),
            )));
            let controller = GameController::new(game.generator(), trigger, game.config())
                .map_err(|e| anyhow::anyhow!(e))?;
            let assets = match assets {
                Some(dir) => Assets::from_dir(&dir)?,
                None => Assets::embedded(),
            };
            let server = Arc::new(http::GameServer::new(controller, assets));
            let listener = TcpListener::bind(&bind).await?;

            tokio::spawn(async move {
                if let Err(e) = button::watch_sigusr1(trigger, MonotonicClock::new()).await {
                    log::error!("restart button watcher stopped: {}", e);
                }
            });
            http::serve(listener, server).await?;
        }
        Commands::Play { game } => {
            let trigger = RestartTrigger::default();
            let mut controller = GameController::new(game.generator(), &trigger, game.config())
                .map_err(|e| anyhow::anyhow!(e))?;
            let clock = MonotonicClock::new();
            tokio::task::block_in_place(|| {
                let stdin = std::io::stdin();
                ui::run_terminal(&mut controller, &clock, stdin.lock(), std::io::stdout())
            })?;
        }
    }
    Ok(())
}
