// src/logic/deck.rs

use crate::components::card::Symbol;
use crate::error::GameError;
use rand::Rng;

/// ペアのデッキ (絵柄の列) を作る関数だよ！🃏
///
/// パレットの先頭から `pair_count` 種類を選んで、それぞれ2枚ずつ並べる。
/// 並び順はまだバラバラじゃないので、[`shuffle_deck`] でシャッフルしてね。
///
/// # エラー
/// パレットの種類数より多いペアを頼まれたら `InsufficientSymbols`。
pub fn create_pair_deck(pair_count: usize, palette_size: usize) -> Result<Vec<Symbol>, GameError> {
    if pair_count > palette_size {
        return Err(GameError::InsufficientSymbols {
            required: pair_count,
            available: palette_size,
        });
    }
    let mut deck = Vec::with_capacity(pair_count * 2);
    for index in 0..pair_count {
        deck.push(Symbol(index));
        deck.push(Symbol(index));
    }
    Ok(deck)
}

/// Fisher–Yates shuffle: walk from the last index down to 1 and swap each slot
/// with a uniformly chosen index in `0..=i`.
pub fn shuffle_deck<T, R: Rng + ?Sized>(deck: &mut [T], rng: &mut R) {
    for i in (1..deck.len()).rev() {
        let j = rng.gen_range(0..=i);
        deck.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn counts(deck: &[Symbol]) -> HashMap<Symbol, usize> {
        let mut counts = HashMap::new();
        for &symbol in deck {
            *counts.entry(symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn pair_deck_holds_every_symbol_twice() {
        let deck = create_pair_deck(6, 18).expect("palette is large enough");
        assert_eq!(deck.len(), 12);
        let counts = counts(&deck);
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn too_many_pairs_is_an_error() {
        assert_eq!(
            create_pair_deck(19, 18),
            Err(GameError::InsufficientSymbols { required: 19, available: 18 })
        );
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = create_pair_deck(9, 18).expect("palette is large enough");
        let mut shuffled = original.clone();
        shuffle_deck(&mut shuffled, &mut rng);

        assert_eq!(counts(&original), counts(&shuffled));
        assert_eq!(original.len(), shuffled.len());
    }

    #[test]
    fn shuffle_changes_order() {
        // 18枚のデッキがシードを変えても毎回同じ並びになることはまず無い
        let original = create_pair_deck(9, 18).expect("palette is large enough");
        let changed = (0..8).any(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut shuffled = original.clone();
            shuffle_deck(&mut shuffled, &mut rng);
            shuffled != original
        });
        assert!(changed, "shuffle never moved a card");
    }

    #[test]
    fn shuffle_handles_tiny_decks() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut empty: Vec<Symbol> = Vec::new();
        shuffle_deck(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec![Symbol(4)];
        shuffle_deck(&mut single, &mut rng);
        assert_eq!(single, vec![Symbol(4)]);
    }
}
