// src/components/position.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// グリッド上のマス目の座標だよ！📍 (row, column) の組。
///
/// カードの位置は生成時に決まって、その後は変わらない。
/// DOM 側では `"{column} {row}"` という id でカード要素を探すので、
/// `Display` もその順番に合わせてあるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    pub row: u32,
    pub column: u32,
}

impl CellPos {
    pub fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Parses the `"{column} {row}"` element id used by the board markup.
    pub fn from_element_id(id: &str) -> Option<Self> {
        let mut parts = id.split_whitespace();
        let column = parts.next()?.parse().ok()?;
        let row = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self { row, column })
    }
}

impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column, self.row)
    }
}
