//! Game session: owns the current board and replaces it after a win or loss.

use tracing::{debug, instrument};

use crate::board::Board;
use crate::config::BoardConfig;
use crate::error::BoardError;
use crate::rng::{BoardRng, RandomSource};
use crate::types::BoardState;

/// The caller-side loop around a [`Board`].
///
/// A finished board is never reset in place; [`Session::restart`] generates a
/// new one from the same config and random source.
#[derive(Debug)]
pub struct Session<R = BoardRng> {
    config: BoardConfig,
    rng: R,
    board: Board,
    games_played: u32,
}

impl Session<BoardRng> {
    /// Session seeded from system entropy.
    pub fn from_entropy(config: BoardConfig) -> Result<Self, BoardError> {
        Self::new(config, BoardRng::new())
    }
}

impl<R: RandomSource> Session<R> {
    pub fn new(config: BoardConfig, mut rng: R) -> Result<Self, BoardError> {
        config.validate()?;
        let board = config.build(&mut rng)?;
        Ok(Self {
            config,
            rng,
            board,
            games_played: 0,
        })
    }

    pub fn reveal(&mut self, x: usize, y: usize) -> Result<BoardState, BoardError> {
        self.board.reveal(x, y)
    }

    pub fn toggle_flag(&mut self, x: usize, y: usize) -> Result<BoardState, BoardError> {
        self.board.toggle_flag(x, y)
    }

    /// Replace the current board with a freshly generated one.
    ///
    /// Finished boards count towards [`Session::games_played`]; abandoning an
    /// unfinished board does not.
    #[instrument(skip(self), fields(previous = ?self.board.state()))]
    pub fn restart(&mut self) -> Result<&Board, BoardError> {
        if self.board.state().is_terminal() {
            self.games_played += 1;
        }
        self.board = self.config.build(&mut self.rng)?;
        debug!(games_played = self.games_played, "new board");
        Ok(&self.board)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }
}
