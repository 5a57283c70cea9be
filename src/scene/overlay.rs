use crate::config::model::StudioConfig;
use crate::scene::catalog::Backdrop;

/// Shortest ticker loop, in seconds.
pub const TICKER_MIN_LOOP_S: f64 = 8.0;
/// Shortest teleprompter pass, in seconds.
pub const TELEPROMPTER_MIN_LOOP_S: f64 = 10.0;
/// Off-screen run-in added to the measured content extent, in pixels.
pub const RUN_IN_PX: f64 = 800.0;

/// Hotkey hint shown under the control panel.
pub const HOTKEY_HINT: &str =
    "Hotkeys: 1\u{2013}4 scenes \u{2022} H UI \u{2022} F fullscreen \u{2022} G guides \u{2022} L logo \u{2022} T teleprompter \u{2022} [ ] ticker speed";

/// One compositing layer, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "layer", rename_all = "snake_case")]
pub enum Layer {
    Backdrop(Backdrop),
    Logo { accent: String },
    Guides,
    LowerThird {
        title: String,
        subtitle: Option<String>,
        accent: String,
    },
    Ticker { text: String, speed: i64 },
    Teleprompter { lines: Vec<String>, speed: i64 },
    ControlPanel,
    HotkeyHint { text: &'static str },
}

/// The visible layers for one state.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct OverlayPlan {
    pub layers: Vec<Layer>,
}

impl OverlayPlan {
    pub fn from_config(cfg: &StudioConfig) -> Self {
        let accent = cfg.accent_color.as_str().to_owned();
        let mut layers = vec![Layer::Backdrop(Backdrop::from_config(cfg))];

        if cfg.show_logo {
            layers.push(Layer::Logo {
                accent: accent.clone(),
            });
        }
        if cfg.show_guides {
            layers.push(Layer::Guides);
        }
        if cfg.show_lower_third {
            let subtitle = &cfg.lower_third.subtitle;
            layers.push(Layer::LowerThird {
                title: cfg.lower_third.title.clone(),
                subtitle: (!subtitle.is_empty()).then(|| subtitle.clone()),
                accent,
            });
        }
        if cfg.show_ticker {
            layers.push(Layer::Ticker {
                text: cfg.ticker_text.clone(),
                speed: cfg.ticker_speed,
            });
        }
        if cfg.show_teleprompter {
            layers.push(Layer::Teleprompter {
                lines: teleprompter_lines(&cfg.teleprompter_text),
                speed: cfg.teleprompter_speed,
            });
        }
        if cfg.show_ui {
            layers.push(Layer::ControlPanel);
            layers.push(Layer::HotkeyHint { text: HOTKEY_HINT });
        }

        Self { layers }
    }

    pub fn contains(&self, pred: impl Fn(&Layer) -> bool) -> bool {
        self.layers.iter().any(pred)
    }
}

/// Split teleprompter text into display lines (`\n` or `\r\n`).
pub fn teleprompter_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}

fn loop_seconds(extent_px: f64, speed: i64, min_s: f64) -> f64 {
    // Speeds are clamped to >= 10 on write; guard anyway so a bad value cannot divide by zero.
    let speed = speed.max(1) as f64;
    ((extent_px.max(0.0) + RUN_IN_PX) / speed).max(min_s)
}

/// Seconds for one ticker scroll across `content_width_px` at `speed` px/s.
pub fn ticker_loop_seconds(content_width_px: f64, speed: i64) -> f64 {
    loop_seconds(content_width_px, speed, TICKER_MIN_LOOP_S)
}

/// Seconds for one teleprompter pass over `content_height_px` at `speed` px/s.
pub fn teleprompter_loop_seconds(content_height_px: f64, speed: i64) -> f64 {
    loop_seconds(content_height_px, speed, TELEPROMPTER_MIN_LOOP_S)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/overlay.rs"]
mod tests;
