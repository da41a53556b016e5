// src/controller/mod.rs
//! ゲームコントローラー: 設定・タイマー・グリッドをまとめて、
//! カードをめくる状態機械を回すよ！🎮
//!
//! 画面とタイマーのスケジュールは [`GameView`] と [`Scheduler`] 越しに
//! 操作するので、テストではどちらも偽物に差し替えられる。

pub mod scheduler;
pub mod session;
pub mod view;


use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::components::card::CardState;
use crate::components::game_state::{GameOutcome, GamePhase};
use crate::components::position::CellPos;
use crate::config::game_config::{GameConfig, Theme};
use crate::config::layout::card_size;
use crate::error::GameError;
use crate::logic::grid::Grid;
use crate::logic::palette::{glyph, PALETTE_SIZE};
use crate::logic::timer::{CountdownTimer, TickEvent};

pub use scheduler::{RevertTask, Scheduler, MISMATCH_DELAY_MS, TICK_INTERVAL_MS};
pub use session::{Session, SessionSnapshot};
pub use view::GameView;

/// What a card click led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Not playing, empty cell, card already face up, or input locked.
    Ignored,
    /// First card of a pair is now face up.
    FirstRevealed,
    /// Second card matched the first.
    Matched,
    /// Second card did not match; both flip back after [`MISMATCH_DELAY_MS`].
    Mismatched,
    /// The match cleared the board and the session ended.
    Won,
}

/// Serializable state of the whole controller.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub phase: GamePhase,
    pub theme: Theme,
    pub last_outcome: Option<GameOutcome>,
    pub session: Option<SessionSnapshot>,
}

pub struct GameController<V: GameView, S: Scheduler> {
    config: GameConfig,
    theme: Theme,
    phase: GamePhase,
    session: Option<Session>,
    next_session_id: u64,
    last_outcome: Option<GameOutcome>,
    rng: StdRng,
    view: V,
    scheduler: S,
}

impl<V: GameView, S: Scheduler> GameController<V, S> {
    /// Controller seeded from the platform's entropy source.
    pub fn new(view: V, scheduler: S) -> Self {
        Self::with_rng(view, scheduler, StdRng::from_entropy())
    }

    pub fn with_rng(view: V, scheduler: S, rng: StdRng) -> Self {
        let config = GameConfig::default();
        Self {
            theme: config.theme,
            config,
            phase: GamePhase::Idle,
            session: None,
            next_session_id: 0,
            last_outcome: None,
            rng,
            view,
            scheduler,
        }
    }

    /// Idle → Configuring: shows the form, sets the buttons and draws a
    /// face-down preview of the default board. Calling it again does nothing.
    pub fn init(&mut self) {
        if self.phase != GamePhase::Idle {
            return;
        }
        info!("GameController: init");
        self.phase = GamePhase::Configuring;
        self.view.apply_theme(self.theme);
        self.view.set_config_visible(true);
        self.view.set_controls_enabled(true, false);
        self.view.render_timer(None);

        // プレビュー用の盤面。Playing じゃないのでクリックは無視される
        match Grid::generate(self.config.columns, self.config.rows, PALETTE_SIZE, &mut self.rng) {
            Ok(grid) => {
                self.view
                    .render_board(grid.columns(), grid.rows(), card_size(&self.config));
                for card in grid.cards() {
                    self.view.render_card(card.position, CardState::Hidden, None);
                }
            }
            Err(e) => warn!("GameController: could not draw preview board: {}", e),
        }
    }

    /// Starts a new session with `config`.
    ///
    /// Everything is validated before anything changes, so a rejected start
    /// leaves the current phase, session and screen as they were. A start
    /// while playing replaces the running session.
    pub fn start(&mut self, config: GameConfig) -> Result<(), GameError> {
        config.validate()?;
        let grid = Grid::generate(config.columns, config.rows, PALETTE_SIZE, &mut self.rng)?;
        let mut timer = CountdownTimer::new();
        timer.start(config.seconds_limit)?;

        self.teardown_session();
        self.next_session_id += 1;
        let session = Session::new(self.next_session_id, config.clone(), grid, timer);
        info!(
            "GameController: session {} started ({}x{}, {} pairs, {}s)",
            session.id(),
            config.columns,
            config.rows,
            config.pair_count(),
            config.seconds_limit
        );

        self.scheduler.start_ticking();
        self.theme = config.theme;
        self.view.apply_theme(self.theme);
        self.view.set_config_visible(false);
        self.view.set_controls_enabled(false, true);
        self.view
            .render_board(config.columns, config.rows, card_size(&config));
        for card in session.grid().cards() {
            self.view.render_card(card.position, card.state, None);
        }
        self.view.render_timer(Some(session.timer().seconds_left()));

        self.config = config;
        self.session = Some(session);
        self.phase = GamePhase::Playing;
        self.last_outcome = None;
        Ok(())
    }

    /// Handles a click on the card at (`row`, `column`).
    pub fn reveal(&mut self, row: u32, column: u32) -> Result<RevealOutcome, GameError> {
        if self.phase != GamePhase::Playing {
            return Ok(RevealOutcome::Ignored);
        }
        let Some(session) = self.session.as_mut() else {
            return Ok(RevealOutcome::Ignored);
        };

        let pos = CellPos::new(row, column);
        let Some((symbol, state)) = session.grid.card(pos)?.map(|card| (card.symbol, card.state)) else {
            debug!("GameController: click on the empty cell {}", pos);
            return Ok(RevealOutcome::Ignored);
        };
        if session.pending_revert.is_some() {
            debug!("GameController: input locked, ignoring click on {}", pos);
            return Ok(RevealOutcome::Ignored);
        }
        if state != CardState::Hidden {
            return Ok(RevealOutcome::Ignored);
        }

        session.grid.set_state(pos, CardState::Revealed)?;
        self.view.render_card(pos, CardState::Revealed, glyph(symbol));

        let Some(first) = session.first_revealed.take() else {
            session.first_revealed = Some(pos);
            return Ok(RevealOutcome::FirstRevealed);
        };

        let first_symbol = session.grid.card(first)?.map(|card| card.symbol);
        if first_symbol != Some(symbol) {
            let task = RevertTask {
                session_id: session.id(),
                first,
                second: pos,
            };
            session.pending_revert = Some(task);
            self.scheduler.schedule_revert(task, MISMATCH_DELAY_MS);
            debug!("GameController: mismatch {} / {}", first, pos);
            return Ok(RevealOutcome::Mismatched);
        }

        session.grid.set_state(first, CardState::Matched)?;
        session.grid.set_state(pos, CardState::Matched)?;
        self.view.render_card(first, CardState::Matched, glyph(symbol));
        self.view.render_card(pos, CardState::Matched, glyph(symbol));
        debug!(
            "GameController: match {} / {}, {} card(s) left",
            first,
            pos,
            session.grid.unmatched_count()
        );

        if session.grid.is_cleared() {
            self.end_game(GameOutcome::Won);
            self.view.notify_win();
            return Ok(RevealOutcome::Won);
        }
        Ok(RevealOutcome::Matched)
    }

    /// Turns a mismatched pair back over. Returns `false` for a stale task
    /// (its session ended, or it is not the pair currently pending).
    pub fn fire_revert(&mut self, task: RevertTask) -> bool {
        let Some(session) = self.session.as_mut() else {
            debug!("GameController: dropping revert for ended session {}", task.session_id);
            return false;
        };
        if session.pending_revert != Some(task) {
            debug!("GameController: dropping stale revert {:?}", task);
            return false;
        }
        session.pending_revert = None;
        for pos in [task.first, task.second] {
            match session.grid.set_state(pos, CardState::Hidden) {
                Ok(()) => self.view.render_card(pos, CardState::Hidden, None),
                Err(e) => warn!("GameController: revert of {} failed: {}", pos, e),
            }
        }
        true
    }

    /// One scheduled second. Expiry ends the session as timed out.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let event = self.session.as_mut()?.timer.tick();
        match event {
            Some(TickEvent::Remaining(seconds)) => self.view.render_timer(Some(seconds)),
            Some(TickEvent::Expired) => self.time_up(),
            None => {}
        }
        event
    }

    /// The stop button. Only meaningful while playing.
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        self.end_game(GameOutcome::Stopped);
    }

    /// Page hidden → pause the countdown; page shown → resume it if a game is running.
    pub fn visibility_changed(&mut self, hidden: bool) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if hidden {
            session.timer.pause();
            self.scheduler.stop_ticking();
            debug!("GameController: paused at {}s", session.timer.seconds_left());
        } else if !session.timer.is_running() {
            session.timer.resume();
            if session.timer.is_running() {
                self.scheduler.start_ticking();
                debug!("GameController: resumed at {}s", session.timer.seconds_left());
            } else {
                // 0 秒で止まったまま再開できない: 最初の tick を待たずに時間切れ
                self.time_up();
            }
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.view.apply_theme(theme);
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn last_outcome(&self) -> Option<GameOutcome> {
        self.last_outcome
    }

    pub fn seconds_left(&self) -> Option<u32> {
        self.session.as_ref().map(|s| s.timer().seconds_left())
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            theme: self.theme,
            last_outcome: self.last_outcome,
            session: self.session.as_ref().map(SessionSnapshot::from),
        }
    }

    fn time_up(&mut self) {
        self.view.render_timer(Some(0));
        info!("GameController: time is up");
        self.end_game(GameOutcome::TimedOut);
    }

    /// Win, timeout and stop all come through here and land in Configuring.
    fn end_game(&mut self, outcome: GameOutcome) {
        self.teardown_session();
        self.phase = GamePhase::Configuring;
        self.last_outcome = Some(outcome);
        self.view.set_config_visible(true);
        self.view.set_controls_enabled(true, false);
        self.view.render_timer(None);
        info!("GameController: game ended ({:?})", outcome);
    }

    /// Drops the session and cancels everything scheduled on its behalf.
    fn teardown_session(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.timer.stop();
            if let Some(task) = session.pending_revert.take() {
                self.scheduler.cancel_revert(task);
            }
            debug!("GameController: session {} torn down", session.id());
        }
        self.scheduler.stop_ticking();
    }
}
