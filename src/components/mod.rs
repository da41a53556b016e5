// src/components/mod.rs

// ゲームの「データ」になる型をまとめたモジュールだよ！
pub mod card;
pub mod game_state;
pub mod position;

pub use card::{Card, CardState, Symbol};
pub use game_state::{GameOutcome, GamePhase};
pub use position::CellPos;
