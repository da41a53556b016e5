// src/app/dom_view.rs
//! GameView の DOM 実装。ページ側の HTML (ボタンやフォームの id) に合わせて描画するよ。

use log::{error, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, Window};

use crate::components::card::CardState;
use crate::components::position::CellPos;
use crate::config::game_config::Theme;
use crate::config::layout::{CardSize, MIN_CARD_SIZE};
use crate::controller::GameView;

pub const START_BUTTON_ID: &str = "start-button";
pub const STOP_BUTTON_ID: &str = "stop-button";
pub const TIMER_ID: &str = "timer";
pub const CONFIG_FORM_ID: &str = "config";
pub const CONFIG_SECTION_ID: &str = "config-form";
pub const FORM_LABEL_ID: &str = "form-label";
pub const GAME_CONTAINER_ID: &str = "game-container";
pub const THEME_SELECT_ID: &str = "theme-select";
const TIMER_CONTAINER_ID: &str = "timer-container";
const MAIN_ID: &str = "main";
const HEADER_ID: &str = "header";

const TIMER_PLACEHOLDER: &str = "--";
const WIN_MESSAGE: &str = "You win!";

pub struct DomView {
    window: Window,
    document: Document,
    card_size: CardSize,
}

impl DomView {
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("Failed to get window")?;
        let document = window.document().ok_or("Failed to get document")?;
        Ok(Self {
            window,
            document,
            card_size: CardSize {
                width: MIN_CARD_SIZE,
                height: MIN_CARD_SIZE,
            },
        })
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            warn!("DomView: element #{} not found", id);
        }
        element
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id)?.dyn_into::<HtmlElement>().ok()
    }

    fn set_button_enabled(&self, id: &str, enabled: bool) {
        if let Some(button) = self
            .element(id)
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(!enabled);
        }
    }

    /// Creates the `div.card` for `pos` the first time it is drawn.
    fn card_element(&self, pos: CellPos) -> Result<Element, JsValue> {
        let id = pos.to_string();
        if let Some(existing) = self.document.get_element_by_id(&id) {
            return Ok(existing);
        }
        let container = self
            .element(GAME_CONTAINER_ID)
            .ok_or("game container is missing")?;
        let card = self.document.create_element("div")?;
        card.set_id(&id);
        card.set_class_name("card card-closed");

        let card = card.dyn_into::<HtmlElement>()?;
        let style = card.style();
        let column = (pos.column + 1).to_string();
        let row = (pos.row + 1).to_string();
        style.set_property("grid-column-start", &column)?;
        style.set_property("grid-column-end", &column)?;
        style.set_property("grid-row-start", &row)?;
        style.set_property("grid-row-end", &row)?;
        style.set_property("width", &format!("{}px", self.card_size.width))?;
        style.set_property("height", &format!("{}px", self.card_size.height))?;

        container.append_child(&card)?;
        Ok(card.into())
    }

    fn set_class(&self, id: &str, class: &str) {
        if let Some(element) = self.element(id) {
            element.set_class_name(class);
        }
    }
}

impl GameView for DomView {
    fn render_board(&mut self, _columns: u32, _rows: u32, card_size: CardSize) {
        self.card_size = card_size;
        if let Some(container) = self.element(GAME_CONTAINER_ID) {
            container.set_inner_html("");
        }
    }

    fn render_card(&mut self, pos: CellPos, state: CardState, glyph: Option<&str>) {
        let card = match self.card_element(pos) {
            Ok(card) => card,
            Err(e) => {
                error!("DomView: could not draw card {}: {:?}", pos, e);
                return;
            }
        };
        let class = match state {
            CardState::Hidden => "card card-closed",
            CardState::Revealed => "card card-opened",
            CardState::Matched => "card card-opened card-matched",
        };
        card.set_class_name(class);
        card.set_inner_html(glyph.unwrap_or(""));
    }

    fn render_timer(&mut self, seconds_left: Option<u32>) {
        if let Some(timer) = self.element(TIMER_ID) {
            let text = seconds_left.map_or_else(|| TIMER_PLACEHOLDER.to_string(), |s| s.to_string());
            timer.set_inner_html(&text);
        }
    }

    fn set_controls_enabled(&mut self, start: bool, stop: bool) {
        self.set_button_enabled(START_BUTTON_ID, start);
        self.set_button_enabled(STOP_BUTTON_ID, stop);
    }

    fn set_config_visible(&mut self, visible: bool) {
        for id in [CONFIG_SECTION_ID, FORM_LABEL_ID] {
            if let Some(element) = self.html_element(id) {
                element.set_hidden(!visible);
            }
        }
    }

    fn apply_theme(&mut self, theme: Theme) {
        // (ボタン/ヘッダー, 背景, 文字, 入力欄の色)
        let (accent, background, font, input_color) = match theme {
            Theme::Dark => ("light", "dark", "light-font", "rgb(255, 240, 240)"),
            Theme::Light => ("dark", "light", "dark-font", "rgb(175, 18, 18)"),
        };
        for id in [START_BUTTON_ID, STOP_BUTTON_ID, HEADER_ID] {
            self.set_class(id, accent);
        }
        self.set_class(MAIN_ID, background);
        for id in [FORM_LABEL_ID, CONFIG_FORM_ID, TIMER_CONTAINER_ID] {
            self.set_class(id, font);
        }

        let inputs = self.document.get_elements_by_class_name("input");
        for index in 0..inputs.length() {
            if let Some(input) = inputs
                .item(index)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                if let Err(e) = input.style().set_property("color", input_color) {
                    warn!("DomView: could not color input: {:?}", e);
                }
            }
        }
    }

    fn notify_win(&mut self) {
        if let Err(e) = self.window.alert_with_message(WIN_MESSAGE) {
            error!("DomView: alert failed: {:?}", e);
        }
    }
}
