// src/app/browser_event_manager.rs
//! Attaches the page's DOM listeners (buttons, theme select, card clicks,
//! visibility) and forwards them to the controller.

use std::cell::RefCell;
use std::rc::Rc;

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::app::dom_view::{
    CONFIG_FORM_ID, GAME_CONTAINER_ID, START_BUTTON_ID, STOP_BUTTON_ID, THEME_SELECT_ID,
};
use crate::app::WebController;
use crate::components::position::CellPos;
use crate::config::game_config::{GameConfig, Theme};

/// Listener closures. They must outlive the page, so the app keeps them.
pub type Listeners = Vec<Closure<dyn FnMut(Event)>>;

/// Wires every listener the game needs and returns the closures to keep alive.
pub(crate) fn attach_listeners(controller: &Rc<RefCell<WebController>>) -> Result<Listeners, JsValue> {
    let document = window()
        .ok_or("Failed to get window")?
        .document()
        .ok_or("Failed to get document")?;
    let mut listeners = Listeners::new();

    // --- スタートボタン ---
    {
        let controller = Rc::clone(controller);
        let form_document = document.clone();
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            let config = match GameConfig::from_form_fields(|name| form_value(&form_document, name)) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Start rejected: {}", e);
                    return;
                }
            };
            with_controller(&controller, |c| {
                if let Err(e) = c.start(config) {
                    warn!("Start rejected: {}", e);
                }
            });
        }) as Box<dyn FnMut(Event)>);
        listen(&document, START_BUTTON_ID, "click", &closure)?;
        listeners.push(closure);
    }

    // --- ストップボタン ---
    {
        let controller = Rc::clone(controller);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            event.prevent_default();
            with_controller(&controller, |c| c.stop());
        }) as Box<dyn FnMut(Event)>);
        listen(&document, STOP_BUTTON_ID, "click", &closure)?;
        listeners.push(closure);
    }

    // --- テーマ選択 ---
    {
        let controller = Rc::clone(controller);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(select) = event
                .target()
                .and_then(|t| t.dyn_into::<HtmlSelectElement>().ok())
            else {
                error!("theme change did not come from a <select>");
                return;
            };
            let theme = Theme::from_name(&select.value());
            with_controller(&controller, |c| c.set_theme(theme));
        }) as Box<dyn FnMut(Event)>);
        listen(&document, THEME_SELECT_ID, "change", &closure)?;
        listeners.push(closure);
    }

    // --- カードのクリック (コンテナで受けて id から座標を取る) ---
    {
        let controller = Rc::clone(controller);
        let closure = Closure::wrap(Box::new(move |event: Event| {
            let Some(pos) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| CellPos::from_element_id(&el.id()))
            else {
                return;
            };
            with_controller(&controller, |c| {
                if let Err(e) = c.reveal(pos.row, pos.column) {
                    error!("Click on {} rejected: {}", pos, e);
                }
            });
        }) as Box<dyn FnMut(Event)>);
        listen(&document, GAME_CONTAINER_ID, "click", &closure)?;
        listeners.push(closure);
    }

    // --- タブの表示/非表示 ---
    {
        let controller = Rc::clone(controller);
        let visibility_document = document.clone();
        let closure = Closure::wrap(Box::new(move |_event: Event| {
            let hidden = visibility_document.hidden();
            with_controller(&controller, |c| c.visibility_changed(hidden));
        }) as Box<dyn FnMut(Event)>);
        document.add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref())?;
        listeners.push(closure);
    }

    info!("Attached {} DOM listeners.", listeners.len());
    Ok(listeners)
}

fn listen(
    document: &Document,
    id: &str,
    event: &str,
    closure: &Closure<dyn FnMut(Event)>,
) -> Result<(), JsValue> {
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{} not found", id)))?;
    element.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
}

/// Runs `f` on the controller unless another event is still being handled.
fn with_controller(controller: &Rc<RefCell<WebController>>, f: impl FnOnce(&mut WebController)) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => f(&mut controller),
        Err(_) => warn!("Controller busy, event dropped."),
    }
}

/// Value of the named control inside the settings form.
fn form_value(document: &Document, name: &str) -> Option<String> {
    let selector = format!("#{} [name=\"{}\"]", CONFIG_FORM_ID, name);
    let element = document.query_selector(&selector).ok().flatten()?;
    match element.dyn_into::<HtmlInputElement>() {
        Ok(input) => Some(input.value()),
        Err(element) => element.dyn_into::<HtmlSelectElement>().ok().map(|s| s.value()),
    }
}
