// src/logic/grid.rs
//! カードグリッド: ペアをシャッフルして rows × columns に並べ、
//! 各マスの状態と「まだそろっていない枚数」を管理するよ。

use itertools::iproduct;
use log::debug;
use rand::Rng;

use crate::components::card::{Card, CardState, Symbol};
use crate::components::position::CellPos;
use crate::error::GameError;
use crate::logic::deck::{create_pair_deck, shuffle_deck};

/// Cards laid out row-major. A cell holding `None` is the deliberate gap left
/// when `columns * rows` is odd: nothing is drawn there and it cannot be clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    cells: Vec<Option<Card>>,
    unmatched: usize,
}

impl Grid {
    /// Builds a shuffled board of `floor(columns * rows / 2)` pairs.
    ///
    /// The first `pair_count` symbols of the palette are used, each twice, and
    /// the deck is Fisher–Yates shuffled with `rng`. With an odd cell count the
    /// last cell (bottom-right) stays empty.
    pub fn generate<R: Rng + ?Sized>(
        columns: u32,
        rows: u32,
        palette_size: usize,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let cell_count = columns as usize * rows as usize;
        let mut deck = create_pair_deck(cell_count / 2, palette_size)?;
        shuffle_deck(&mut deck, rng);

        let mut symbols = deck.into_iter();
        let cells: Vec<Option<Card>> = iproduct!(0..rows, 0..columns)
            .map(|(row, column)| symbols.next().map(|symbol| Card::new(symbol, CellPos::new(row, column))))
            .collect();
        let unmatched = cells.iter().flatten().count();

        debug!(
            "Grid::generate: {}x{} board, {} cards, {} empty cell(s)",
            columns,
            rows,
            unmatched,
            cell_count - unmatched
        );
        Ok(Self {
            columns,
            rows,
            cells,
            unmatched,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Cards still in play (not matched). Even, and zero once the board is cleared.
    pub fn unmatched_count(&self) -> usize {
        self.unmatched
    }

    pub fn is_cleared(&self) -> bool {
        self.unmatched == 0
    }

    /// Number of cards actually placed (`2 * floor(columns * rows / 2)`).
    pub fn card_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    /// Every placed card in row-major order; empty cells are skipped.
    pub fn cards(&self) -> impl Iterator<Item = &Card> + '_ {
        self.cells.iter().flatten()
    }

    /// The card at `pos`, `None` for the empty cell. `OutOfRange` outside the board.
    pub fn card(&self, pos: CellPos) -> Result<Option<&Card>, GameError> {
        let index = self.index_of(pos)?;
        Ok(self.cells[index].as_ref())
    }

    /// The symbol at `pos` unless that card is already matched (or the cell is empty).
    pub fn revealed_symbol_at(&self, pos: CellPos) -> Result<Option<Symbol>, GameError> {
        Ok(self
            .card(pos)?
            .filter(|card| !card.is_matched())
            .map(|card| card.symbol))
    }

    /// Sets the state of one card. Only the coordinates are checked; the empty
    /// cell has no card to mutate and is reported as `OutOfRange` as well.
    pub fn set_state(&mut self, pos: CellPos, state: CardState) -> Result<(), GameError> {
        let index = self.index_of(pos)?;
        let card = self.cells[index]
            .as_mut()
            .ok_or(GameError::OutOfRange { row: pos.row, column: pos.column })?;

        match (card.state, state) {
            (CardState::Matched, CardState::Matched) => {}
            (CardState::Matched, _) => self.unmatched += 1,
            (_, CardState::Matched) => self.unmatched -= 1,
            _ => {}
        }
        card.state = state;
        Ok(())
    }

    fn index_of(&self, pos: CellPos) -> Result<usize, GameError> {
        if pos.row >= self.rows || pos.column >= self.columns {
            return Err(GameError::OutOfRange { row: pos.row, column: pos.column });
        }
        Ok(pos.row as usize * self.columns as usize + pos.column as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::palette::PALETTE_SIZE;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn grid(columns: u32, rows: u32) -> Grid {
        let mut rng = StdRng::seed_from_u64(42);
        Grid::generate(columns, rows, PALETTE_SIZE, &mut rng).expect("palette is large enough")
    }

    fn symbol_counts(grid: &Grid) -> HashMap<Symbol, usize> {
        let mut counts = HashMap::new();
        for card in grid.cards() {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn every_symbol_appears_exactly_twice() {
        for (columns, rows) in [(1, 2), (2, 2), (5, 4), (3, 3), (6, 6), (7, 5)] {
            let grid = grid(columns, rows);
            let cells = (columns * rows) as usize;
            assert_eq!(grid.card_count(), 2 * (cells / 2), "{}x{}", columns, rows);
            assert_eq!(grid.unmatched_count(), grid.card_count());
            assert!(symbol_counts(&grid).values().all(|&n| n == 2), "{}x{}", columns, rows);
        }
    }

    #[test]
    fn cards_know_their_own_cell() {
        let grid = grid(4, 3);
        for card in grid.cards() {
            let at = grid.card(card.position).expect("in range").expect("card present");
            assert_eq!(at, card);
            assert!(card.is_hidden());
        }
    }

    #[test]
    fn odd_board_leaves_bottom_right_empty() {
        let grid = grid(3, 3);
        assert_eq!(grid.card_count(), 8);
        assert_eq!(grid.card(CellPos::new(2, 2)), Ok(None));
        assert_eq!(grid.revealed_symbol_at(CellPos::new(2, 2)), Ok(None));
        assert!(grid.card(CellPos::new(2, 1)).expect("in range").is_some());
    }

    #[test]
    fn single_cell_board_has_no_cards() {
        let grid = grid(1, 1);
        assert_eq!(grid.card_count(), 0);
        assert!(grid.is_cleared());
    }

    #[test]
    fn palette_too_small() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = Grid::generate(6, 7, PALETTE_SIZE, &mut rng).unwrap_err();
        assert_eq!(err, GameError::InsufficientSymbols { required: 21, available: 18 });
    }

    #[test]
    fn revealed_symbol_hides_matched_cards() {
        let mut grid = grid(2, 1);
        let pos = CellPos::new(0, 0);
        let symbol = grid.card(pos).expect("in range").expect("card").symbol;

        grid.set_state(pos, CardState::Revealed).expect("in range");
        assert_eq!(grid.revealed_symbol_at(pos), Ok(Some(symbol)));

        grid.set_state(pos, CardState::Matched).expect("in range");
        assert_eq!(grid.revealed_symbol_at(pos), Ok(None));
    }

    #[test]
    fn matching_updates_unmatched_count() {
        let mut grid = grid(2, 2);
        assert_eq!(grid.unmatched_count(), 4);

        grid.set_state(CellPos::new(0, 0), CardState::Matched).expect("in range");
        grid.set_state(CellPos::new(0, 1), CardState::Matched).expect("in range");
        assert_eq!(grid.unmatched_count(), 2);

        // 同じ状態を二回セットしても数はずれない
        grid.set_state(CellPos::new(0, 1), CardState::Matched).expect("in range");
        assert_eq!(grid.unmatched_count(), 2);

        grid.set_state(CellPos::new(0, 1), CardState::Hidden).expect("in range");
        assert_eq!(grid.unmatched_count(), 3);
    }

    #[test]
    fn out_of_range_access_fails_safely() {
        let mut grid = grid(2, 2);
        let before = grid.clone();
        let outside = CellPos::new(2, 0);

        assert_eq!(grid.card(outside), Err(GameError::OutOfRange { row: 2, column: 0 }));
        assert!(grid.revealed_symbol_at(CellPos::new(0, 5)).is_err());
        assert!(grid.set_state(outside, CardState::Revealed).is_err());
        assert_eq!(grid, before);
    }

    #[test]
    fn empty_cell_cannot_be_mutated() {
        let mut grid = grid(3, 1);
        assert_eq!(
            grid.set_state(CellPos::new(0, 2), CardState::Revealed),
            Err(GameError::OutOfRange { row: 0, column: 2 })
        );
    }
}
