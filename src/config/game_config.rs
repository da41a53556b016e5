// src/config/game_config.rs
//! 一回のゲームの設定。スタートのたびに丸ごと差し替えるよ。

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const DEFAULT_WIDTH: f64 = 600.0;
pub const DEFAULT_HEIGHT: f64 = 500.0;
pub const DEFAULT_COLUMNS: u32 = 5;
pub const DEFAULT_ROWS: u32 = 4;
pub const DEFAULT_SECONDS_LIMIT: i64 = 120;

/// 画面テーマ。見た目の切り替えはビュー側の仕事。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// `"dark"` (any case) selects the dark theme; every other value falls back to light.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Board dimensions, time limit and theme for one session.
///
/// `seconds_limit` is signed on purpose: the page hands over whatever the
/// form contained, and anything outside `0..=u32::MAX` must be rejected, not wrapped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub width: f64,
    pub height: f64,
    pub columns: u32,
    pub rows: u32,
    pub seconds_limit: i64,
    pub theme: Theme,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            seconds_limit: DEFAULT_SECONDS_LIMIT,
            theme: Theme::Light,
        }
    }
}

impl GameConfig {
    /// Reads a configuration from the page's JSON payload. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        serde_json::from_str(json).map_err(|e| GameError::InvalidConfig(e.to_string()))
    }

    /// Builds a configuration from the raw values of the settings form.
    ///
    /// `field` returns the text of a form control by name (`width`, `height`,
    /// `columns`, `rows`, `seconds`, `theme`). Blank or missing fields keep the
    /// default; sizes may carry a `px` suffix.
    pub fn from_form_fields<F>(field: F) -> Result<Self, GameError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let text = |name: &str| field(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        fn parse<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, GameError> {
            value
                .trim_end_matches("px")
                .trim()
                .parse()
                .map_err(|_| GameError::InvalidConfig(format!("{} is not a number: {:?}", name, value)))
        }

        Ok(Self {
            width: text("width").map(|v| parse("width", &v)).transpose()?.unwrap_or(defaults.width),
            height: text("height").map(|v| parse("height", &v)).transpose()?.unwrap_or(defaults.height),
            columns: text("columns").map(|v| parse("columns", &v)).transpose()?.unwrap_or(defaults.columns),
            rows: text("rows").map(|v| parse("rows", &v)).transpose()?.unwrap_or(defaults.rows),
            seconds_limit: text("seconds")
                .map(|v| parse("seconds", &v))
                .transpose()?
                .unwrap_or(defaults.seconds_limit),
            theme: text("theme").map(|v| Theme::from_name(&v)).unwrap_or(defaults.theme),
        })
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Number of symbol pairs the board needs; an odd cell count leaves one cell empty.
    pub fn pair_count(&self) -> usize {
        self.cell_count() / 2
    }

    /// Shape and duration checks. Palette capacity is checked by the grid.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.columns == 0 || self.rows == 0 {
            return Err(GameError::InvalidConfig(format!(
                "columns and rows must be > 0 (got {}x{})",
                self.columns, self.rows
            )));
        }
        if u32::try_from(self.seconds_limit).is_err() {
            return Err(GameError::InvalidDuration(self.seconds_limit));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_board() {
        let config = GameConfig::default();
        assert_eq!(config.columns, 5);
        assert_eq!(config.rows, 4);
        assert_eq!(config.seconds_limit, 120);
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.pair_count(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{"columns": 3, "rows": 3, "theme": "dark"}"#)
            .expect("valid json");
        assert_eq!(config.columns, 3);
        assert_eq!(config.rows, 3);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.seconds_limit, DEFAULT_SECONDS_LIMIT);
        assert_eq!(config.pair_count(), 4);
    }

    #[test]
    fn seconds_limit_uses_camel_case_key() {
        let config = GameConfig::from_json(r#"{"secondsLimit": 30}"#).expect("valid json");
        assert_eq!(config.seconds_limit, 30);
    }

    #[test]
    fn garbage_json_is_an_invalid_config() {
        let err = GameConfig::from_json("{columns:").unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(_)));
    }

    #[test]
    fn form_fields_are_parsed() {
        let config = GameConfig::from_form_fields(|name| {
            let value = match name {
                "width" => "800px",
                "height" => " 640 ",
                "columns" => "6",
                "rows" => "3",
                "seconds" => "45",
                "theme" => "Dark",
                _ => return None,
            };
            Some(value.to_string())
        })
        .expect("all fields are numbers");

        assert_eq!(config.width, 800.0);
        assert_eq!(config.height, 640.0);
        assert_eq!(config.columns, 6);
        assert_eq!(config.rows, 3);
        assert_eq!(config.seconds_limit, 45);
        assert_eq!(config.theme, Theme::Dark);
    }

    #[test]
    fn blank_form_fields_fall_back_to_defaults() {
        let config = GameConfig::from_form_fields(|name| match name {
            "columns" => Some(String::new()),
            _ => None,
        })
        .expect("nothing to parse");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn negative_seconds_survive_parsing_for_validation() {
        let config = GameConfig::from_form_fields(|name| (name == "seconds").then(|| "-3".to_string()))
            .expect("negative numbers still parse");
        assert_eq!(config.validate(), Err(GameError::InvalidDuration(-3)));
    }

    #[test]
    fn seconds_beyond_u32_are_rejected() {
        let config = GameConfig::from_json(r#"{"secondsLimit": 4294967296}"#).expect("valid json");
        assert_eq!(config.validate(), Err(GameError::InvalidDuration(4_294_967_296)));
        assert_eq!(config.cell_count(), 20);
    }

    #[test]
    fn non_numeric_form_field_is_rejected() {
        let err = GameConfig::from_form_fields(|name| (name == "rows").then(|| "four".to_string()))
            .unwrap_err();
        assert!(matches!(err, GameError::InvalidConfig(msg) if msg.contains("rows")));
    }

    #[test]
    fn zero_sized_board_is_rejected() {
        let config = GameConfig { columns: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
        let config = GameConfig { rows: 0, ..GameConfig::default() };
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn negative_seconds_are_rejected() {
        let config = GameConfig { seconds_limit: -1, ..GameConfig::default() };
        assert_eq!(config.validate(), Err(GameError::InvalidDuration(-1)));
    }

    #[test]
    fn theme_names_are_case_insensitive() {
        assert_eq!(Theme::from_name("dark"), Theme::Dark);
        assert_eq!(Theme::from_name("DARK"), Theme::Dark);
        assert_eq!(Theme::from_name("Light"), Theme::Light);
        assert_eq!(Theme::from_name("sepia"), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
