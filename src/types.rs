//! Core data types for the Minesweeper board.
//!
//! All per-cell storage uses flat `Vec`s with column-major layout:
//! `cells[x * height + y]` is the tile at `(x, y)`.

use serde::Serialize;

/// Adjacency value stored on mine tiles. Never read by the game rules.
pub const MINE_SENTINEL: u8 = 9;

/// Column-major index of `(x, y)` on a board of the given height.
#[inline(always)]
pub fn cell_index(height: usize, x: usize, y: usize) -> usize {
    x * height + y
}

/// Lifecycle of a board. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum BoardState {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl BoardState {
    /// True once the game can no longer change.
    pub fn is_terminal(self) -> bool {
        !matches!(self, BoardState::InProgress)
    }
}

/// One grid cell.
///
/// `has_mine` and `adjacent_mines` are fixed once the board is built; only
/// the board itself flips `opened` and `flagged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub(crate) x: usize,
    pub(crate) y: usize,
    pub(crate) has_mine: bool,
    pub(crate) is_opened: bool,
    pub(crate) is_flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Tile {
    pub(crate) fn new(x: usize, y: usize, has_mine: bool, adjacent_mines: u8) -> Self {
        Self {
            x,
            y,
            has_mine,
            is_opened: false,
            is_flagged: false,
            adjacent_mines,
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn has_mine(&self) -> bool {
        self.has_mine
    }

    pub fn is_opened(&self) -> bool {
        self.is_opened
    }

    pub fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    /// Number of mined neighbors (0-8). Mine tiles report [`MINE_SENTINEL`].
    pub fn adjacent_mines(&self) -> u8 {
        self.adjacent_mines
    }
}

/// Pre-computed neighbor cache for all cells.
///
/// Stores the 8-directional neighbors (clipped to grid bounds) for every cell.
/// Indexed by `x * height + y`, each entry is a slice of `(nx, ny)` pairs.
/// Both adjacency counting and the reveal cascade read from here.
#[derive(Debug, Clone)]
pub struct NeighborCache {
    height: usize,
    /// Flat storage of all neighbor pairs.
    data: Vec<(usize, usize)>,
    /// offsets[i] = start index in `data` for cell i.
    offsets: Vec<usize>,
}

impl NeighborCache {
    /// Build the neighbor cache for a grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        let total = width * height;
        let mut data = Vec::with_capacity(total * 8);
        let mut offsets = Vec::with_capacity(total + 1);

        for x in 0..width {
            for y in 0..height {
                offsets.push(data.len());
                for dx in -1isize..=1 {
                    for dy in -1isize..=1 {
                        if dx == 0 && dy == 0 {
                            continue;
                        }
                        let (Some(nx), Some(ny)) =
                            (x.checked_add_signed(dx), y.checked_add_signed(dy))
                        else {
                            continue;
                        };
                        if nx < width && ny < height {
                            data.push((nx, ny));
                        }
                    }
                }
            }
        }
        offsets.push(data.len()); // sentinel

        Self {
            height,
            data,
            offsets,
        }
    }

    /// Get the pre-computed neighbors for cell (x, y).
    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> &[(usize, usize)] {
        let idx = cell_index(self.height, x, y);
        let start = self.offsets[idx];
        let end = self.offsets[idx + 1];
        &self.data[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbor_cache_corners_edges_interior() {
        let nc = NeighborCache::new(5, 5);
        assert_eq!(nc.get(0, 0).len(), 3);
        assert_eq!(nc.get(4, 4).len(), 3);
        assert_eq!(nc.get(0, 2).len(), 5);
        assert_eq!(nc.get(2, 4).len(), 5);
        assert_eq!(nc.get(2, 2).len(), 8);
    }

    #[test]
    fn test_neighbor_cache_stays_adjacent() {
        let nc = NeighborCache::new(10, 7);
        for &(nx, ny) in nc.get(5, 5) {
            assert!(nx < 10 && ny < 7);
            let dx = nx as i32 - 5;
            let dy = ny as i32 - 5;
            assert!(dx.abs() <= 1 && dy.abs() <= 1);
            assert!(dx != 0 || dy != 0);
        }
    }

    #[test]
    fn test_neighbor_cache_no_duplicates() {
        let nc = NeighborCache::new(4, 3);
        for x in 0..4 {
            for y in 0..3 {
                let mut seen = nc.get(x, y).to_vec();
                seen.sort_unstable();
                seen.dedup();
                assert_eq!(seen.len(), nc.get(x, y).len());
            }
        }
    }

    #[test]
    fn test_single_row_board() {
        let nc = NeighborCache::new(3, 1);
        assert_eq!(nc.get(0, 0), &[(1, 0)]);
        assert_eq!(nc.get(1, 0).len(), 2);
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BoardState::InProgress.is_terminal());
        assert!(BoardState::Won.is_terminal());
        assert!(BoardState::Lost.is_terminal());
    }
}
