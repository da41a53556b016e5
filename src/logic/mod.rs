// src/logic/mod.rs
//! ゲームのルール側のロジック。DOM には一切さわらないよ！

pub mod deck;
pub mod grid;
pub mod palette;
pub mod timer;

pub use grid::Grid;
pub use timer::{CountdownTimer, TickEvent};
