// src/controller/session.rs

use serde::Serialize;

use crate::components::card::Card;
use crate::components::position::CellPos;
use crate::config::game_config::GameConfig;
use crate::controller::scheduler::RevertTask;
use crate::logic::grid::Grid;
use crate::logic::timer::CountdownTimer;

/// 一回分のゲーム。スタートで作られて、勝ち・時間切れ・ストップで捨てられるよ。
///
/// `first_revealed` はグリッドの中のマスを座標で指すだけで、カードは持たない。
#[derive(Debug)]
pub struct Session {
    id: u64,
    config: GameConfig,
    pub(crate) grid: Grid,
    pub(crate) timer: CountdownTimer,
    pub(crate) first_revealed: Option<CellPos>,
    pub(crate) pending_revert: Option<RevertTask>,
}

impl Session {
    pub(crate) fn new(id: u64, config: GameConfig, grid: Grid, timer: CountdownTimer) -> Self {
        Self {
            id,
            config,
            grid,
            timer,
            first_revealed: None,
            pending_revert: None,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn timer(&self) -> &CountdownTimer {
        &self.timer
    }

    /// The face-up card waiting for its partner, if any.
    pub fn first_revealed(&self) -> Option<CellPos> {
        self.first_revealed
    }

    /// The mismatched pair still waiting to be turned back over. Input is
    /// locked while this is set.
    pub fn pending_revert(&self) -> Option<RevertTask> {
        self.pending_revert
    }
}

/// Serializable view of a session for the page's debug hooks.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub id: u64,
    pub config: GameConfig,
    pub columns: u32,
    pub rows: u32,
    pub seconds_left: u32,
    pub seconds_limit: u32,
    pub timer_running: bool,
    pub unmatched_count: usize,
    pub first_revealed: Option<CellPos>,
    pub input_locked: bool,
    pub cards: Vec<Card>,
}

impl From<&Session> for SessionSnapshot {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            config: session.config().clone(),
            columns: session.grid.columns(),
            rows: session.grid.rows(),
            seconds_left: session.timer.seconds_left(),
            seconds_limit: session.timer.seconds_limit(),
            timer_running: session.timer.is_running(),
            unmatched_count: session.grid.unmatched_count(),
            first_revealed: session.first_revealed,
            input_locked: session.pending_revert.is_some(),
            cards: session.grid.cards().cloned().collect(),
        }
    }
}
