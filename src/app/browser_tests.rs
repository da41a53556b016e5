// src/app/browser_tests.rs
// MatchGridApp をブラウザの中で動かすテスト！
// ページに HTML が無くても DomView は警告を出すだけで進むよ。

use wasm_bindgen_test::*;

use crate::MatchGridApp;

wasm_bindgen_test_configure!(run_in_browser);

fn state(app: &MatchGridApp) -> serde_json::Value {
    let json = app.state_json().expect("state_json should work");
    serde_json::from_str(&json).expect("state_json should be valid JSON")
}

#[wasm_bindgen_test]
fn new_app_is_idle() {
    let app = MatchGridApp::new().expect("app should construct in a browser");
    assert!(!app.is_playing().unwrap());
    assert_eq!(app.seconds_left().unwrap(), None);
    assert_eq!(state(&app)["phase"], "Idle");
}

#[wasm_bindgen_test]
fn start_with_json_begins_a_session() {
    let app = MatchGridApp::new().unwrap();
    app.start_with_json(r#"{"columns": 3, "rows": 3, "secondsLimit": 30, "theme": "dark"}"#)
        .expect("valid config should start");

    assert!(app.is_playing().unwrap());
    assert_eq!(app.seconds_left().unwrap(), Some(30));
    assert_eq!(app.theme().unwrap(), "dark");

    let value = state(&app);
    assert_eq!(value["phase"], "Playing");
    assert_eq!(value["session"]["cards"].as_array().map(Vec::len), Some(8));

    // 3x3 の右下は空きマス
    assert_eq!(app.reveal(2, 2).unwrap(), "Ignored");
}

#[wasm_bindgen_test]
fn bad_config_is_rejected_without_starting() {
    let app = MatchGridApp::new().unwrap();
    assert!(app.start_with_json(r#"{"secondsLimit": -1}"#).is_err());
    assert!(app.start_with_json("not json").is_err());
    assert!(!app.is_playing().unwrap());
}

#[wasm_bindgen_test]
fn stop_records_the_outcome() {
    let app = MatchGridApp::new().unwrap();
    app.start_with_json(r#"{"columns": 2, "rows": 2}"#).unwrap();
    app.stop().unwrap();

    let value = state(&app);
    assert!(!app.is_playing().unwrap());
    assert_eq!(value["phase"], "Configuring");
    assert_eq!(value["lastOutcome"], "Stopped");
    assert!(value["session"].is_null());
}

#[wasm_bindgen_test]
fn theme_names_fall_back_to_light() {
    let app = MatchGridApp::new().unwrap();
    app.set_theme("dark").unwrap();
    assert_eq!(app.theme().unwrap(), "dark");
    app.set_theme("sepia").unwrap();
    assert_eq!(app.theme().unwrap(), "light");
}

#[wasm_bindgen_test]
fn mismatch_schedules_a_revert_timeout() {
    let app = MatchGridApp::new().unwrap();
    app.start_with_json(r#"{"columns": 2, "rows": 2, "secondsLimit": 30}"#).unwrap();

    let value = state(&app);
    let cards = value["session"]["cards"].as_array().expect("cards").clone();
    let first = &cards[0];
    let other = cards
        .iter()
        .find(|c| c["symbol"] != first["symbol"])
        .expect("a card with another symbol");
    let cell = |c: &serde_json::Value| {
        (
            c["position"]["row"].as_u64().unwrap() as u32,
            c["position"]["column"].as_u64().unwrap() as u32,
        )
    };

    let (row, column) = cell(first);
    assert_eq!(app.reveal(row, column).unwrap(), "FirstRevealed");
    let (row, column) = cell(other);
    assert_eq!(app.reveal(row, column).unwrap(), "Mismatched");
    assert_eq!(state(&app)["session"]["inputLocked"], true);

    // setTimeout に登録した戻し処理はストップで片付く
    app.stop().unwrap();
    assert!(state(&app)["session"].is_null());
}
