// src/app/mod.rs
//! ブラウザ側の薄い殻。ゲームのルールはここには置かないよ！

pub mod browser_event_manager;
pub mod dom_view;
pub mod state_getter;
pub mod web_scheduler;

use crate::controller::GameController;

pub use dom_view::DomView;
pub use web_scheduler::WebScheduler;

/// The controller as wired up in the browser.
pub type WebController = GameController<DomView, WebScheduler>;

// ブラウザ上でしか動かせないテストはこっち (wasm-pack test --headless --firefox)
#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests;
