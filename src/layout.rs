//! Board generation: mine placement and number calculation.
//!
//! A [`Mines`] layer is produced either by independent Bernoulli draws or
//! from an explicit coordinate list, and [`calculate_numbers`] turns it into
//! per-cell adjacency counts. Counting always runs after placement is done.

use crate::error::BoardError;
use crate::rng::RandomSource;
use crate::types::{cell_index, NeighborCache, MINE_SENTINEL};

/// Mine positions for each cell, column-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mines {
    pub width: usize,
    pub height: usize,
    pub cells: Vec<bool>,
}

impl Mines {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![false; width * height],
        }
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[cell_index(self.height, x, y)]
    }

    #[inline(always)]
    pub fn set(&mut self, x: usize, y: usize, val: bool) {
        self.cells[cell_index(self.height, x, y)] = val;
    }

    /// Count total mines on the board.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&v| v).count()
    }
}

/// Place mines by one Bernoulli(`probability`) draw per cell.
///
/// Draws run in row-major order (`y` outer, `x` inner) so a seeded source
/// always yields the same layout.
pub fn place_mines_bernoulli<R: RandomSource + ?Sized>(
    width: usize,
    height: usize,
    probability: f64,
    rng: &mut R,
) -> Mines {
    let mut mines = Mines::new(width, height);
    for y in 0..height {
        for x in 0..width {
            if rng.bernoulli(probability) {
                mines.set(x, y, true);
            }
        }
    }
    mines
}

/// Build a mine layer from explicit coordinates. Duplicates collapse.
pub fn place_mines_at(
    width: usize,
    height: usize,
    coords: &[(usize, usize)],
) -> Result<Mines, BoardError> {
    let mut mines = Mines::new(width, height);
    for &(x, y) in coords {
        if x >= width || y >= height {
            return Err(BoardError::OutOfBounds {
                x,
                y,
                width,
                height,
            });
        }
        mines.set(x, y, true);
    }
    Ok(mines)
}

/// Calculate the neighbor mine counts for all cells.
///
/// Non-mine cells get the count of adjacent mines (0-8); mine cells get
/// [`MINE_SENTINEL`].
pub fn calculate_numbers(mines: &Mines, neighbor_cache: &NeighborCache) -> Vec<u8> {
    let mut counts = vec![0u8; mines.width * mines.height];

    for x in 0..mines.width {
        for y in 0..mines.height {
            let idx = cell_index(mines.height, x, y);
            if mines.get(x, y) {
                counts[idx] = MINE_SENTINEL;
                continue;
            }
            counts[idx] = neighbor_cache
                .get(x, y)
                .iter()
                .filter(|&&(nx, ny)| mines.get(nx, ny))
                .count() as u8;
        }
    }

    counts
}
