//! The board state machine: construction, cascade reveal and flag bookkeeping.
//!
//! A [`Board`] is mutated only through [`Board::reveal`] and
//! [`Board::toggle_flag`]. Once it reaches [`BoardState::Won`] or
//! [`BoardState::Lost`] every further call is a no-op; callers replace the
//! board rather than resetting it.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::error::BoardError;
use crate::layout::{calculate_numbers, place_mines_at, place_mines_bernoulli, Mines};
use crate::rng::RandomSource;
use crate::types::{cell_index, BoardState, NeighborCache, Tile, MINE_SENTINEL};

/// [`Board::visible_cells`] value of an unopened tile.
pub const VISIBLE_HIDDEN: i8 = -1;
/// [`Board::visible_cells`] value of a flagged tile.
pub const VISIBLE_FLAGGED: i8 = -2;

/// A `width x height` minefield and its game counters.
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    /// Tiles, column-major.
    tiles: Vec<Tile>,
    neighbors: NeighborCache,
    total_mines: usize,
    remaining_flags: usize,
    flagged_mines: usize,
    opened: usize,
    state: BoardState,
}

fn check_dimensions(width: usize, height: usize) -> Result<(), BoardError> {
    if width == 0 || height == 0 {
        return Err(BoardError::EmptyBoard { width, height });
    }
    Ok(())
}

/// Reject probabilities outside `[0, 1]`, NaN included.
pub(crate) fn check_probability(probability: f64) -> Result<(), BoardError> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(BoardError::InvalidProbability { probability });
    }
    Ok(())
}

impl Board {
    /// Generate a board with one Bernoulli(`mine_probability`) draw per tile.
    #[instrument(skip(rng), level = "debug")]
    pub fn new<R: RandomSource + ?Sized>(
        width: usize,
        height: usize,
        mine_probability: f64,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        check_probability(mine_probability)?;
        let mines = place_mines_bernoulli(width, height, mine_probability, rng);
        Ok(Self::from_mines(mines))
    }

    /// Build a board with mines at exactly the given coordinates.
    #[instrument(skip(mines), level = "debug")]
    pub fn with_mines(
        width: usize,
        height: usize,
        mines: &[(usize, usize)],
    ) -> Result<Self, BoardError> {
        check_dimensions(width, height)?;
        let mines = place_mines_at(width, height, mines)?;
        Ok(Self::from_mines(mines))
    }

    fn from_mines(mines: Mines) -> Self {
        let (width, height) = (mines.width, mines.height);
        let neighbors = NeighborCache::new(width, height);
        let counts = calculate_numbers(&mines, &neighbors);

        let mut tiles = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                let idx = cell_index(height, x, y);
                tiles.push(Tile::new(x, y, mines.cells[idx], counts[idx]));
            }
        }

        let total_mines = mines.count();
        debug!(width, height, total_mines, "board generated");

        Self {
            width,
            height,
            tiles,
            neighbors,
            total_mines,
            remaining_flags: total_mines,
            flagged_mines: 0,
            opened: 0,
            state: BoardState::InProgress,
        }
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        if x >= self.width || y >= self.height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(cell_index(self.height, x, y))
    }

    /// Open the tile at `(x, y)`, cascading through zero-count regions.
    ///
    /// Opened or flagged tiles are left alone. Opening a mine loses the game
    /// without opening anything else. Winning is never decided here.
    #[instrument(skip(self), level = "debug")]
    pub fn reveal(&mut self, x: usize, y: usize) -> Result<BoardState, BoardError> {
        let idx = self.index(x, y)?;
        if self.state.is_terminal() {
            trace!(state = ?self.state, "reveal ignored, game is over");
            return Ok(self.state);
        }

        let tile = self.tiles[idx];
        if tile.is_opened || tile.is_flagged {
            trace!(opened = tile.is_opened, flagged = tile.is_flagged, "reveal ignored");
            return Ok(self.state);
        }
        if tile.has_mine {
            self.state = BoardState::Lost;
            debug!("mine hit, game lost");
            return Ok(self.state);
        }

        self.open(idx);
        if tile.adjacent_mines == 0 {
            self.cascade(x, y);
        }
        Ok(self.state)
    }

    fn open(&mut self, idx: usize) {
        self.tiles[idx].is_opened = true;
        self.opened += 1;
    }

    /// Flood-fill from an opened zero-count tile.
    ///
    /// Tiles are opened as they are pushed, so none is queued twice. Only
    /// zero-count tiles are expanded, and those have no mined neighbors.
    fn cascade(&mut self, x: usize, y: usize) {
        let mut stack = vec![(x, y)];
        let before = self.opened;

        while let Some((cx, cy)) = stack.pop() {
            for i in 0..self.neighbors.get(cx, cy).len() {
                let (nx, ny) = self.neighbors.get(cx, cy)[i];
                let nidx = cell_index(self.height, nx, ny);
                let neighbor = self.tiles[nidx];
                if neighbor.is_opened || neighbor.is_flagged {
                    continue;
                }
                debug_assert!(!neighbor.has_mine);
                self.open(nidx);
                if neighbor.adjacent_mines == 0 {
                    stack.push((nx, ny));
                }
            }
        }

        trace!(cascaded = self.opened - before, "cascade finished");
    }

    /// Place or remove a flag on an unopened tile.
    ///
    /// Placing is refused once every flag is in use. The game is won as soon
    /// as every mine carries a flag, regardless of flags on safe tiles.
    #[instrument(skip(self), level = "debug")]
    pub fn toggle_flag(&mut self, x: usize, y: usize) -> Result<BoardState, BoardError> {
        let idx = self.index(x, y)?;
        if self.state.is_terminal() {
            trace!(state = ?self.state, "flag ignored, game is over");
            return Ok(self.state);
        }

        let tile = &mut self.tiles[idx];
        if tile.is_opened {
            trace!("flag ignored, tile already opened");
            return Ok(self.state);
        }

        if tile.is_flagged {
            tile.is_flagged = false;
            self.remaining_flags += 1;
            if tile.has_mine {
                self.flagged_mines -= 1;
            }
        } else {
            if self.remaining_flags == 0 {
                trace!("flag ignored, no flags left");
                return Ok(self.state);
            }
            tile.is_flagged = true;
            self.remaining_flags -= 1;
            if tile.has_mine {
                self.flagged_mines += 1;
            }
        }

        if self.flagged_mines == self.total_mines {
            self.state = BoardState::Won;
            debug!(total_mines = self.total_mines, "all mines flagged, game won");
        }
        Ok(self.state)
    }

    /// Coordinates of the in-bounds neighbors of `(x, y)`.
    pub fn neighbors(&self, x: usize, y: usize) -> Result<Vec<(usize, usize)>, BoardError> {
        self.index(x, y)?;
        Ok(self.neighbors.get(x, y).to_vec())
    }

    /// The in-bounds neighbors of `(x, y)` as tiles.
    pub fn neighbor_tiles(&self, x: usize, y: usize) -> Result<Vec<Tile>, BoardError> {
        self.index(x, y)?;
        Ok(self
            .neighbors
            .get(x, y)
            .iter()
            .map(|&(nx, ny)| self.tiles[cell_index(self.height, nx, ny)])
            .collect())
    }

    pub fn tile_at(&self, x: usize, y: usize) -> Result<Tile, BoardError> {
        Ok(self.tiles[self.index(x, y)?])
    }

    /// All tiles, column-major.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.tiles.iter()
    }

    pub fn state(&self) -> BoardState {
        self.state
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total_mines(&self) -> usize {
        self.total_mines
    }

    pub fn remaining_flags(&self) -> usize {
        self.remaining_flags
    }

    pub fn flagged_mines(&self) -> usize {
        self.flagged_mines
    }

    /// Number of opened tiles.
    pub fn opened_count(&self) -> usize {
        self.opened
    }

    /// What the player can see, one byte per tile, column-major.
    ///
    /// `-1` hidden, `-2` flagged, `0-8` opened count, and `9` for mines once
    /// the game is lost.
    pub fn visible_cells(&self) -> Vec<i8> {
        self.tiles
            .iter()
            .map(|tile| {
                if tile.is_flagged {
                    VISIBLE_FLAGGED
                } else if tile.has_mine && self.state == BoardState::Lost {
                    MINE_SENTINEL as i8
                } else if tile.is_opened {
                    tile.adjacent_mines as i8
                } else {
                    VISIBLE_HIDDEN
                }
            })
            .collect()
    }
}

/// Text rendering: `#` hidden, `F` flagged, `.` empty, `1`-`8` counts, and
/// `*` for mines once the game is lost. One row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let tile = &self.tiles[cell_index(self.height, x, y)];
                let symbol = if tile.is_flagged {
                    'F'
                } else if tile.has_mine && self.state == BoardState::Lost {
                    '*'
                } else if !tile.is_opened {
                    '#'
                } else if tile.adjacent_mines == 0 {
                    '.'
                } else {
                    char::from(b'0' + tile.adjacent_mines)
                };
                write!(f, "{symbol}")?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
