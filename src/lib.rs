//! Minesweeper board engine.
//!
//! Generates a rectangular minefield with Bernoulli mine placement, computes
//! adjacency counts, and runs the two player actions: cascade reveal and
//! flag toggling, with win/loss detection. Rendering and input mapping are
//! left to the caller, which reads tiles back through [`Board::tile_at`].
//!
//! Grid data is stored column-major: `cells[x * height + y]`.

pub mod board;
pub mod config;
pub mod error;
pub mod layout;
pub mod rng;
pub mod session;
pub mod types;

pub use board::Board;
pub use config::BoardConfig;
pub use error::BoardError;
pub use rng::{BoardRng, RandomSource};
pub use session::Session;
pub use types::{BoardState, Tile};

// ─── WASM Exports (only compiled for wasm32 target) ─────────────────────────

#[cfg(target_arch = "wasm32")]
mod wasm_exports {
    use wasm_bindgen::prelude::*;

    use crate::{Board, BoardError, BoardRng};

    fn js_error(err: BoardError) -> JsValue {
        JsError::new(&err.to_string()).into()
    }

    /// A board handle for JavaScript. Errors are thrown as `Error`s.
    #[wasm_bindgen(js_name = "Board")]
    pub struct JsBoard {
        inner: Board,
    }

    #[wasm_bindgen(js_class = "Board")]
    impl JsBoard {
        /// New board seeded from browser entropy.
        #[wasm_bindgen(constructor)]
        pub fn new(width: usize, height: usize, probability: f64) -> Result<JsBoard, JsValue> {
            let inner = Board::new(width, height, probability, &mut BoardRng::new())
                .map_err(js_error)?;
            Ok(JsBoard { inner })
        }

        /// Deterministic board for replays.
        #[wasm_bindgen(js_name = "withSeed")]
        pub fn with_seed(
            width: usize,
            height: usize,
            probability: f64,
            seed: u64,
        ) -> Result<JsBoard, JsValue> {
            let inner = Board::new(width, height, probability, &mut BoardRng::from_seed(seed))
                .map_err(js_error)?;
            Ok(JsBoard { inner })
        }

        /// Returns the state name after the call: `InProgress`, `Won` or `Lost`.
        pub fn reveal(&mut self, x: usize, y: usize) -> Result<JsValue, JsValue> {
            let state = self.inner.reveal(x, y).map_err(js_error)?;
            Ok(serde_wasm_bindgen::to_value(&state)?)
        }

        #[wasm_bindgen(js_name = "toggleFlag")]
        pub fn toggle_flag(&mut self, x: usize, y: usize) -> Result<JsValue, JsValue> {
            let state = self.inner.toggle_flag(x, y).map_err(js_error)?;
            Ok(serde_wasm_bindgen::to_value(&state)?)
        }

        #[wasm_bindgen(getter)]
        pub fn state(&self) -> Result<JsValue, JsValue> {
            Ok(serde_wasm_bindgen::to_value(&self.inner.state())?)
        }

        #[wasm_bindgen(getter, js_name = "remainingFlags")]
        pub fn remaining_flags(&self) -> usize {
            self.inner.remaining_flags()
        }

        #[wasm_bindgen(getter)]
        pub fn width(&self) -> usize {
            self.inner.width()
        }

        #[wasm_bindgen(getter)]
        pub fn height(&self) -> usize {
            self.inner.height()
        }

        /// `{ x, y, hasMine, isOpened, isFlagged, adjacentMines }`
        #[wasm_bindgen(js_name = "tileAt")]
        pub fn tile_at(&self, x: usize, y: usize) -> Result<JsValue, JsValue> {
            let tile = self.inner.tile_at(x, y).map_err(js_error)?;
            Ok(serde_wasm_bindgen::to_value(&tile)?)
        }

        /// Column-major `Int8Array`: -1 hidden, -2 flagged, 0-8 opened, 9 mine.
        #[wasm_bindgen(js_name = "visibleGrid")]
        pub fn visible_grid(&self) -> js_sys::Int8Array {
            let cells = self.inner.visible_cells();
            let arr = js_sys::Int8Array::new_with_length(cells.len() as u32);
            arr.copy_from(&cells);
            arr
        }
    }

    /// Ping function to verify WASM is loaded.
    #[wasm_bindgen(js_name = "ping")]
    pub fn wasm_ping() -> String {
        "WASM board ready".to_string()
    }
}
