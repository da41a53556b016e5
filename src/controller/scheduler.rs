// src/controller/scheduler.rs
//! 時間で動くもの (1秒ごとの tick と、ハズレたカードを戻す遅延処理) の窓口。

use serde::Serialize;

use crate::components::position::CellPos;

/// Delay before a mismatched pair is turned face down again.
pub const MISMATCH_DELAY_MS: u32 = 500;

/// Period of the countdown tick.
pub const TICK_INTERVAL_MS: u32 = 1000;

/// A deferred "turn these two cards back over", bound to the session that
/// scheduled it. A task whose session is gone is stale and must be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RevertTask {
    pub session_id: u64,
    pub first: CellPos,
    pub second: CellPos,
}

/// Time source the controller drives. Implementations must really cancel
/// (clear the interval / timeout), not just let late callbacks through.
pub trait Scheduler {
    /// Begins calling the controller's `tick` every [`TICK_INTERVAL_MS`].
    /// Calling it while already ticking restarts the interval.
    fn start_ticking(&mut self);

    fn stop_ticking(&mut self);

    /// Calls the controller's `fire_revert(task)` once after `delay_ms`.
    fn schedule_revert(&mut self, task: RevertTask, delay_ms: u32);

    fn cancel_revert(&mut self, task: RevertTask);
}
