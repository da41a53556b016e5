// src/logic/timer.rs
//! カウントダウンタイマー ⏱️
//!
//! ここは「状態」だけを持つよ。1秒ごとに `tick()` を呼ぶのは外側
//! (ブラウザなら `setInterval`) の役目。止めたときにスケジュールを
//! キャンセルするのもコントローラーがやる。

use log::debug;

use crate::error::GameError;

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// Seconds left after this tick (always > 0).
    Remaining(u32),
    /// The countdown just reached zero. Reported once per `start`.
    Expired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountdownTimer {
    seconds_limit: u32,
    seconds_left: u32,
    running: bool,
}

impl CountdownTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms the countdown with `seconds` and starts it.
    ///
    /// Negative input, or more than `u32::MAX` seconds, fails with
    /// `InvalidDuration` and leaves the timer untouched.
    pub fn start(&mut self, seconds: i64) -> Result<(), GameError> {
        let seconds = u32::try_from(seconds).map_err(|_| GameError::InvalidDuration(seconds))?;
        self.seconds_limit = seconds;
        self.seconds_left = seconds;
        self.running = true;
        debug!("CountdownTimer: started with {}s", seconds);
        Ok(())
    }

    /// Advances the countdown by one second. Does nothing while paused or stopped.
    pub fn tick(&mut self) -> Option<TickEvent> {
        if !self.running {
            return None;
        }
        self.seconds_left = self.seconds_left.saturating_sub(1);
        if self.seconds_left == 0 {
            self.running = false;
            debug!("CountdownTimer: expired");
            return Some(TickEvent::Expired);
        }
        Some(TickEvent::Remaining(self.seconds_left))
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Continues from the current `seconds_left`. An expired timer stays expired.
    pub fn resume(&mut self) {
        if self.running || self.seconds_left == 0 {
            return;
        }
        self.running = true;
    }

    /// Pauses and rewinds to the full limit.
    pub fn stop(&mut self) {
        self.running = false;
        self.seconds_left = self.seconds_limit;
    }

    pub fn seconds_left(&self) -> u32 {
        self.seconds_left
    }

    pub fn seconds_limit(&self) -> u32 {
        self.seconds_limit
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
