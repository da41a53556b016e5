// src/config/mod.rs
//! ゲーム設定とレイアウト。

pub mod game_config;
pub mod layout;

pub use game_config::{GameConfig, Theme};
pub use layout::{card_size, CardSize};
