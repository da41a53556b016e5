// src/logic/palette.rs
//! カードの絵柄パレット。💜🧡💚 … 全部で 18 種類のハート！

use crate::components::card::Symbol;

pub const HEARTS: [&str; 18] = [
    "💜", "🧡", "💚", "🤎", "💛", "🤍", "💙", "🖤", "💔", "💌", "💟", "💓", "💗", "💖", "💕",
    "💘", "💞", "💝",
];

/// Number of distinct symbols available to a board.
pub const PALETTE_SIZE: usize = HEARTS.len();

/// The glyph drawn for `symbol`, or `None` if it is not part of the palette.
pub fn glyph(symbol: Symbol) -> Option<&'static str> {
    HEARTS.get(symbol.0).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn palette_glyphs_are_distinct() {
        let unique: HashSet<_> = HEARTS.iter().collect();
        assert_eq!(unique.len(), PALETTE_SIZE);
    }

    #[test]
    fn glyph_lookup() {
        assert_eq!(glyph(Symbol(0)), Some("💜"));
        assert_eq!(glyph(Symbol(PALETTE_SIZE)), None);
    }
}
