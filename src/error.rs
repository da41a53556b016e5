// src/error.rs
//! ゲームコアのエラー型。どれも回復可能で、失敗した操作だけが却下されるよ。

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors surfaced by the timer, the grid and the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The countdown limit is negative or does not fit in a `u32`.
    #[error("seconds must be in 0..={} (got {0})", u32::MAX)]
    InvalidDuration(i64),

    /// The grid needs more distinct symbols than the palette holds.
    #[error("grid needs {required} symbol pairs but the palette only has {available}")]
    InsufficientSymbols { required: usize, available: usize },

    /// A click or state change addressed a cell outside the current grid.
    #[error("cell ({row}, {column}) is outside the grid")]
    OutOfRange { row: u32, column: u32 },

    /// Zero rows/columns, or a configuration payload that could not be read.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<GameError> for JsValue {
    fn from(err: GameError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
