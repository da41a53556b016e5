// src/config/layout.rs
//! ボードのレイアウトに関する定数と、カードサイズの計算だよ！

use serde::Serialize;

use crate::config::game_config::GameConfig;

pub const CARD_GAP: f64 = 10.0; // カード同士のすき間 (px)
pub const MIN_CARD_SIZE: f64 = 1.0; // どんなに詰めてもこれより小さくしない

/// Pixel size of a single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardSize {
    pub width: f64,
    pub height: f64,
}

/// Splits the configured display area into `columns x rows` cards with
/// `CARD_GAP` between neighbours.
pub fn card_size(config: &GameConfig) -> CardSize {
    CardSize {
        width: span(config.width, config.columns),
        height: span(config.height, config.rows),
    }
}

fn span(total: f64, count: u32) -> f64 {
    if count == 0 {
        return MIN_CARD_SIZE;
    }
    let gaps = CARD_GAP * f64::from(count - 1);
    ((total - gaps) / f64::from(count)).max(MIN_CARD_SIZE)
}
