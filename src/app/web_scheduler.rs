// src/app/web_scheduler.rs
//! `setInterval` / `setTimeout` を使った Scheduler の実装。
//!
//! コールバックは `Weak` 経由でコントローラーに届く。コントローラーが
//! もう借用中 (= 別のイベントを処理中) なら、その回は重ねずに捨てるよ。

use std::cell::RefCell;
use std::rc::Weak;

use log::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::app::WebController;
use crate::controller::{RevertTask, Scheduler, TICK_INTERVAL_MS};

struct Interval {
    id: i32,
    callback: Closure<dyn FnMut()>,
}

struct Timeout {
    task: RevertTask,
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

pub struct WebScheduler {
    controller: Weak<RefCell<WebController>>,
    interval: Option<Interval>,
    reverts: Vec<Timeout>,
    // clearInterval したコールバック。実行中に自分自身を drop しないよう、次の start まで預かる
    retired: Vec<Closure<dyn FnMut()>>,
}

impl WebScheduler {
    pub fn new(controller: Weak<RefCell<WebController>>) -> Self {
        Self {
            controller,
            interval: None,
            reverts: Vec::new(),
            retired: Vec::new(),
        }
    }

    fn set_interval(&self, callback: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
        let window = window().ok_or("Failed to get window")?;
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            TICK_INTERVAL_MS as i32,
        )
    }

    fn set_timeout(&self, callback: &Closure<dyn FnMut()>, delay_ms: u32) -> Result<i32, JsValue> {
        let window = window().ok_or("Failed to get window")?;
        window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
    }
}

impl Scheduler for WebScheduler {
    fn start_ticking(&mut self) {
        self.stop_ticking();
        self.retired.clear();

        let controller = self.controller.clone();
        let callback = Closure::wrap(Box::new(move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            // 前の tick がまだ終わってなければ重ねない
            let Ok(mut controller) = controller.try_borrow_mut() else {
                warn!("WebScheduler: controller busy, skipping tick");
                return;
            };
            controller.tick();
        }) as Box<dyn FnMut()>);

        match self.set_interval(&callback) {
            Ok(id) => self.interval = Some(Interval { id, callback }),
            Err(e) => error!("WebScheduler: setInterval failed: {:?}", e),
        }
    }

    fn stop_ticking(&mut self) {
        if let Some(interval) = self.interval.take() {
            if let Some(window) = window() {
                window.clear_interval_with_handle(interval.id);
            }
            self.retired.push(interval.callback);
        }
    }

    fn schedule_revert(&mut self, task: RevertTask, delay_ms: u32) {
        // 発火済みのものはここで片付ける (入力ロック中は同時に一つしか無い)
        for old in self.reverts.drain(..) {
            if let Some(window) = window() {
                window.clear_timeout_with_handle(old.id);
            }
        }

        let controller = self.controller.clone();
        let callback = Closure::wrap(Box::new(move || {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            let Ok(mut controller) = controller.try_borrow_mut() else {
                warn!("WebScheduler: controller busy, revert {:?} dropped", task);
                return;
            };
            controller.fire_revert(task);
        }) as Box<dyn FnMut()>);

        match self.set_timeout(&callback, delay_ms) {
            Ok(id) => self.reverts.push(Timeout { task, id, _callback: callback }),
            Err(e) => error!("WebScheduler: setTimeout failed: {:?}", e),
        }
    }

    fn cancel_revert(&mut self, task: RevertTask) {
        let window = window();
        self.reverts.retain(|timeout| {
            if timeout.task != task {
                return true;
            }
            if let Some(window) = &window {
                window.clear_timeout_with_handle(timeout.id);
            }
            false
        });
    }
}

impl Drop for WebScheduler {
    // 登録したままのコールバックが drop 済みの Closure を呼ばないように
    fn drop(&mut self) {
        self.stop_ticking();
        let reverts: Vec<RevertTask> = self.reverts.iter().map(|t| t.task).collect();
        for task in reverts {
            self.cancel_revert(task);
        }
    }
}
