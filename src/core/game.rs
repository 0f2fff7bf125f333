use super::board::{Board, BoardSnapshot};
use super::common::{GameError, GuessResult, MoveError};
use super::config::GameConfig;
use super::layout::{Layout, LayoutGenerator, OccupancyGrid};
use super::moves::{apply_move, Move};
use super::restart::RestartTrigger;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// What the presentation layer should show for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(tag = "view", content = "board", rename_all = "snake_case"))]
pub enum View {
    /// The restart button was pressed; a new game has been dealt.
    Restarting,
    /// The turn budget ran out; a new game has been dealt.
    GameOver,
    /// The win threshold was reached; a new game has been dealt.
    YouWin,
    /// Game in progress.
    Board(BoardSnapshot),
}

/// One game: the hidden ships plus what the player has uncovered.
#[derive(Debug, Clone)]
pub struct GameSession {
    ships: OccupancyGrid,
    ship_count: usize,
    board: Board,
}

impl GameSession {
    pub fn new(layout: Layout, config: GameConfig) -> Self {
        Self {
            ships: layout.grid,
            ship_count: layout.ship_count,
            board: Board::new(config),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ships(&self) -> &OccupancyGrid {
        &self.ships
    }

    pub fn ship_count(&self) -> usize {
        self.ship_count
    }

    /// Apply a guess to this session's board.
    pub fn apply(&mut self, mv: Move) -> Result<GuessResult, MoveError> {
        apply_move(&mut self.board, &self.ships, mv)
    }

    /// A spent turn budget takes precedence over a reached win threshold.
    pub fn status(&self) -> GameStatus {
        if self.board.is_lost() {
            GameStatus::Lost
        } else if self.board.is_won() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}

/// Owns the live session and decides, per request, whether to restart,
/// report the end of a game, or play a move.
pub struct GameController<'t, G: LayoutGenerator> {
    generator: G,
    trigger: &'t RestartTrigger,
    config: GameConfig,
    session: GameSession,
    games_started: u64,
}

impl<'t, G: LayoutGenerator> GameController<'t, G> {
    /// Deal the first game. Fails if `config` is unusable or the generator
    /// cannot produce a layout.
    pub fn new(
        mut generator: G,
        trigger: &'t RestartTrigger,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        config.validate()?;
        let layout = generator.generate()?;
        log_layout(&layout, &config, 1);
        Ok(Self {
            generator,
            trigger,
            config,
            session: GameSession::new(layout, config),
            games_started: 1,
        })
    }

    /// Handle one external request, optionally carrying a move.
    ///
    /// Invalid moves are dropped without touching the board. The only error
    /// is a failure to generate the next layout.
    pub fn handle(&mut self, mv: Option<Move>) -> Result<View, GameError> {
        if self.trigger.consume() {
            log::info!("restart button pressed, dealing a new game");
            self.restart()?;
            return Ok(View::Restarting);
        }
        match self.session.status() {
            GameStatus::Lost => {
                log::info!(
                    "game {} lost with score {}",
                    self.games_started,
                    self.session.board().score()
                );
                self.restart()?;
                Ok(View::GameOver)
            }
            GameStatus::Won => {
                log::info!(
                    "game {} won with {} turns left",
                    self.games_started,
                    self.session.board().turns_left()
                );
                self.restart()?;
                Ok(View::YouWin)
            }
            GameStatus::InProgress => {
                if let Some(mv) = mv {
                    match self.session.apply(mv) {
                        Ok(res) => log::debug!("move ({}, {}) -> {:?}", mv.row, mv.col, res),
                        Err(e) => log::debug!("ignored move: {}", e),
                    }
                }
                Ok(View::Board(self.session.board().snapshot()))
            }
        }
    }

    /// Replace the session with a freshly generated layout and a blank board.
    ///
    /// On error the current session is kept.
    pub fn restart(&mut self) -> Result<(), GameError> {
        let layout = self.generator.generate()?;
        self.games_started += 1;
        log_layout(&layout, &self.config, self.games_started);
        self.session = GameSession::new(layout, self.config);
        Ok(())
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn status(&self) -> GameStatus {
        self.session.status()
    }

    pub fn trigger(&self) -> &'t RestartTrigger {
        self.trigger
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Games dealt so far, including the current one.
    pub fn games_started(&self) -> u64 {
        self.games_started
    }
}

fn log_layout(layout: &Layout, config: &GameConfig, game: u64) {
    let cells = layout.grid.ship_cells();
    if cells < config.win_threshold as usize {
        log::warn!(
            "game {} has {} ship cells but needs {} hits to win",
            game,
            cells,
            config.win_threshold
        );
    }
    log::debug!(
        "game {}: {} ships over {} cells\n{:?}",
        game,
        layout.ship_count,
        cells,
        layout.grid
    );
}
