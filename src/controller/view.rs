// src/controller/view.rs
//! コントローラーが画面に頼みたいことの一覧。
//! DOM を直接さわる代わりに、このトレイト越しにお願いするよ。

use crate::components::card::CardState;
use crate::components::position::CellPos;
use crate::config::game_config::Theme;
use crate::config::layout::CardSize;

/// Presentation capability implemented by the page (or by a test double).
pub trait GameView {
    /// Clears the board and lays out an empty `columns x rows` grid.
    fn render_board(&mut self, columns: u32, rows: u32, card_size: CardSize);

    /// Redraws one card. `glyph` is `Some` while the card face is showing.
    fn render_card(&mut self, pos: CellPos, state: CardState, glyph: Option<&str>);

    /// Remaining seconds, or `None` for the idle placeholder.
    fn render_timer(&mut self, seconds_left: Option<u32>);

    fn set_controls_enabled(&mut self, start: bool, stop: bool);

    fn set_config_visible(&mut self, visible: bool);

    fn apply_theme(&mut self, theme: Theme);

    fn notify_win(&mut self);
}
