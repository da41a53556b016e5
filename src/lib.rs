// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// コントローラーはブラウザの単一スレッドでしか触らないので Rc + RefCell で十分！
use std::cell::RefCell;
use std::rc::Rc;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app;
pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod logic;
pub mod logging;

use crate::app::browser_event_manager::{self, Listeners};
use crate::app::{state_getter, DomView, WebController, WebScheduler};
use crate::config::game_config::{GameConfig, Theme};
use crate::controller::GameController;
use log::{info, LevelFilter};

// JavaScript の console.log を Rust から呼び出すための準備 (extern ブロック)。
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = log)]
    fn console_log(s: &str);
}

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
    logging::init(LevelFilter::Info);
    info!("Panic hook set!");
}

// --- ゲーム全体のアプリケーション状態を管理する構造体 ---
#[wasm_bindgen]
pub struct MatchGridApp {
    controller: Rc<RefCell<WebController>>,
    listeners: Listeners,
}

#[wasm_bindgen]
impl MatchGridApp {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MatchGridApp, JsValue> {
        info!("MatchGridApp: Initializing...");
        let view = DomView::new()?;
        // スケジューラーのコールバックは Weak でコントローラーを指す
        let controller = Rc::new_cyclic(|weak| {
            RefCell::new(GameController::new(view, WebScheduler::new(weak.clone())))
        });
        Ok(Self {
            controller,
            listeners: Listeners::new(),
        })
    }

    /// Hooks up the page's buttons, form and board, then shows the settings form.
    pub fn attach(&mut self) -> Result<(), JsValue> {
        if self.listeners.is_empty() {
            self.listeners = browser_event_manager::attach_listeners(&self.controller)?;
        }
        self.with_controller(|c| c.init())
    }

    /// Starts a game from a JSON configuration (`{"columns": 4, "rows": 3, ...}`).
    pub fn start_with_json(&self, config_json: &str) -> Result<(), JsValue> {
        let config = GameConfig::from_json(config_json)?;
        self.with_controller(|c| c.start(config))?
            .map_err(JsValue::from)
    }

    pub fn stop(&self) -> Result<(), JsValue> {
        self.with_controller(|c| c.stop())
    }

    /// Clicks the card at (`row`, `column`) and returns what happened.
    pub fn reveal(&self, row: u32, column: u32) -> Result<String, JsValue> {
        let outcome = self.with_controller(|c| c.reveal(row, column))??;
        Ok(format!("{:?}", outcome))
    }

    pub fn set_visibility(&self, hidden: bool) -> Result<(), JsValue> {
        self.with_controller(|c| c.visibility_changed(hidden))
    }

    pub fn set_theme(&self, name: &str) -> Result<(), JsValue> {
        let theme = Theme::from_name(name);
        self.with_controller(|c| c.set_theme(theme))
    }

    pub fn theme(&self) -> Result<String, JsValue> {
        self.with_controller(|c| c.theme().as_str().to_string())
    }

    pub fn seconds_left(&self) -> Result<Option<u32>, JsValue> {
        self.with_controller(|c| c.seconds_left())
    }

    pub fn is_playing(&self) -> Result<bool, JsValue> {
        self.with_controller(|c| c.is_playing())
    }

    // デバッグ用: 状態を JSON で取得
    pub fn state_json(&self) -> Result<String, JsValue> {
        let snapshot = self.with_controller(|c| c.snapshot())?;
        state_getter::snapshot_json(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl MatchGridApp {
    fn with_controller<T>(&self, f: impl FnOnce(&mut WebController) -> T) -> Result<T, JsValue> {
        let mut controller = self
            .controller
            .try_borrow_mut()
            .map_err(|e| JsValue::from_str(&format!("Controller is busy: {}", e)))?;
        Ok(f(&mut controller))
    }
}
