// src/components/card.rs

use serde::{Deserialize, Serialize};

use crate::components::position::CellPos;

/// パレットの中の絵柄を指す不透明な ID だよ！🃏
///
/// 中身はパレットのインデックス。表示用の文字は
/// [`crate::logic::palette::glyph`] で引けるよ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Symbol(pub usize);

/// カードの状態。裏向き → 表向き → そろった、の三つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardState {
    /// 裏向き (クリックできる)
    Hidden,
    /// めくられて、ペア判定を待っている or 戻されるのを待っている
    Revealed,
    /// ペアがそろった。もう動かない
    Matched,
}

/// グリッドに置かれた一枚のカード。
///
/// - `symbol`: 隠れている絵柄
/// - `position`: 置かれたマス (生成後は変わらない)
/// - `state`: 今の状態
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub symbol: Symbol,
    pub position: CellPos,
    pub state: CardState,
}

impl Card {
    /// Creates a face-down card.
    pub fn new(symbol: Symbol, position: CellPos) -> Self {
        Self {
            symbol,
            position,
            state: CardState::Hidden,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_starts_face_down() {
        let card = Card::new(Symbol(3), CellPos::new(1, 2));
        assert_eq!(card.state, CardState::Hidden);
        assert!(card.is_hidden());
        assert!(!card.is_matched());
        assert_eq!(card.position, CellPos::new(1, 2));
    }

    #[test]
    fn card_state_serializes_by_name() {
        let json = serde_json::to_string(&CardState::Revealed).expect("serialize state");
        assert_eq!(json, "\"Revealed\"");
    }
}
