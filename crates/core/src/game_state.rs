//! Game state module - the per-tick orchestrator
//!
//! Owns the board and the active piece, spawns pieces, applies commands, advances the step and
//! lock timers, locks pieces and clears full rows. The host calls [`GameState::tick`] once per
//! frame with the elapsed time and the commands received during that frame.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::config::{GameConfig, Rules};
use crate::error::ConfigError;
use crate::ghost::{project, Ghost};
use crate::piece::{ActivePiece, PiecePhase, StepOutcome};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, TimersSnapshot};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    rules: Rules,
    board: Board,
    active: Option<ActivePiece>,
    rng: SimpleRng,
    seed: u32,
    started: bool,
    /// Last lock/game-over event (consumed by observers).
    last_event: Option<CoreLastEvent>,
    pieces_spawned: u32,
    pieces_locked: u32,
    game_overs: u32,
    lines_cleared: u32,
}

impl GameState {
    /// Create a new game with validated rules and the given RNG seed
    pub fn new(rules: Rules, seed: u32) -> Self {
        Self {
            board: Board::new(rules.bounds),
            rules,
            active: None,
            rng: SimpleRng::new(seed),
            seed,
            started: false,
            last_event: None,
            pieces_spawned: 0,
            pieces_locked: 0,
            game_overs: 0,
            lines_cleared: 0,
        }
    }

    /// Validate `config` and create a game from it
    pub fn with_config(config: &GameConfig, seed: u32) -> Result<Self, ConfigError> {
        Ok(Self::new(config.build()?, seed))
    }

    /// Start the game and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for setting up positions
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn game_overs(&self) -> u32 {
        self.game_overs
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Take and clear the last lock/game-over event.
    pub fn take_last_event(&mut self) -> Option<CoreLastEvent> {
        self.last_event.take()
    }

    /// Spawn a uniformly random kind from the catalog
    ///
    /// Returns false when the spawn position is blocked (game over).
    pub fn spawn_piece(&mut self) -> bool {
        let index = self.rng.next_index(self.rules.catalog.len());
        let kind = match self.rules.catalog.at(index) {
            Some(shape) => shape.kind(),
            None => return false,
        };
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind at the configured spawn position
    ///
    /// If the piece does not fit, the game is over: the board is cleared and play continues
    /// with the new piece on the empty board. Returns false in that case, and when `kind` is not
    /// in the catalog.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        let Some(shape) = self.rules.catalog.get(kind) else {
            return false;
        };

        let piece = ActivePiece::new(shape, self.rules.spawn, self.rules.step_delay_ms);
        self.started = true;
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        let fits = piece.is_valid(&self.board);
        if !fits {
            self.game_over();
        }
        self.active = Some(piece);
        fits
    }

    fn game_over(&mut self) {
        self.board.clear();
        self.game_overs = self.game_overs.wrapping_add(1);
        self.last_event.get_or_insert_with(CoreLastEvent::default).game_over = true;
    }

    /// Try to move the active piece
    pub fn try_move(&mut self, dx: i32, dy: i32) -> bool {
        match self.active.as_mut() {
            Some(active) => active.try_move(dx, dy, &self.board),
            None => false,
        }
    }

    /// Try to rotate the active piece with SRS wall kicks
    pub fn try_rotate(&mut self, direction: Direction) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let Some(shape) = self.rules.catalog.get(active.kind) else {
            return false;
        };
        active.try_rotate(shape, direction, &self.board)
    }

    /// Drop the active piece as far as it goes and lock it immediately
    ///
    /// Returns the number of rows dropped.
    pub fn hard_drop(&mut self) -> u32 {
        let Some(active) = self.active.as_mut() else {
            return 0;
        };
        let distance = active.drop_to_floor(&self.board);
        self.lock_piece();
        distance
    }

    /// Forced gravity step; locks the piece when it is grounded past the lock delay
    pub fn step(&mut self) -> StepOutcome {
        let Some(active) = self.active.as_mut() else {
            return StepOutcome::Grounded;
        };
        let outcome = active.step(
            &self.board,
            self.rules.step_delay_ms,
            self.rules.lock_delay_ms,
        );
        if outcome == StepOutcome::Lock {
            self.lock_piece();
        }
        outcome
    }

    /// Lock the active piece onto the board, clear full rows and spawn the next piece
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.lock_cells(&active.absolute_cells(), active.kind);
        let cleared = self.board.clear_full_rows();

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(cleared);
        self.last_event = Some(CoreLastEvent {
            locked: true,
            lines_cleared: cleared,
            game_over: false,
        });

        self.spawn_piece();
    }

    /// Apply a single command
    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::MoveLeft => self.try_move(-1, 0),
            Command::MoveRight => self.try_move(1, 0),
            Command::SoftDrop => self.try_move(0, -1),
            Command::HardDrop => {
                if self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            Command::RotateCw => self.try_rotate(Direction::Clockwise),
            Command::RotateCcw => self.try_rotate(Direction::CounterClockwise),
        }
    }

    /// Main game tick
    ///
    /// Advances the timers, applies each received command at most once in a fixed order, then
    /// performs the gravity step if it is due. Returns true if a piece locked during the tick.
    pub fn tick(&mut self, elapsed_ms: u32, commands: &[Command]) -> bool {
        if !self.started {
            return false;
        }
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        active.advance(elapsed_ms);

        let locked_before = self.pieces_locked;

        for command in ordered_commands(commands) {
            self.apply_command(command);
        }

        // A hard drop hands over to a fresh piece whose step timer has just been reset.
        if self.active.is_some_and(|a| a.step_timer_ms == 0) {
            self.step();
        }

        self.pieces_locked != locked_before
    }

    /// Landing preview for the active piece
    pub fn ghost(&self) -> Option<Ghost> {
        self.active.as_ref().map(|active| project(active, &self.board))
    }

    /// Check if the active piece is resting on something
    pub fn phase(&self) -> Option<PiecePhase> {
        self.active.as_ref().map(|active| active.phase(&self.board))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let bounds = self.board.bounds();
        let rows = (bounds.y_min..bounds.y_max())
            .rev()
            .filter_map(|y| self.board.row(y).map(<[Cell]>::to_vec))
            .collect();

        GameSnapshot {
            bounds,
            rows,
            active: self
                .active
                .as_ref()
                .map(|active| ActiveSnapshot::new(active, active.phase(&self.board))),
            ghost: self.ghost().map(|ghost| ghost.absolute_cells()),
            timers: self
                .active
                .map(|active| TimersSnapshot {
                    step_ms: active.step_timer_ms,
                    lock_ms: active.lock_timer_ms,
                })
                .unwrap_or_default(),
            pieces_spawned: self.pieces_spawned,
            game_overs: self.game_overs,
            lines_cleared: self.lines_cleared,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default(), 1)
    }
}

/// Deduplicate `commands` into tick order. Counter-clockwise rotation wins over clockwise and
/// left wins over right when both arrive in the same tick.
pub fn ordered_commands(commands: &[Command]) -> ArrayVec<Command, { Command::COUNT }> {
    let has = |c: Command| commands.contains(&c);

    Command::TICK_ORDER
        .iter()
        .copied()
        .filter(|&c| has(c))
        .filter(|&c| match c {
            Command::RotateCw => !has(Command::RotateCcw),
            Command::MoveRight => !has(Command::MoveLeft),
            _ => true,
        })
        .collect()
}
