use std::fmt;

use crate::config::model::{SPEED_RANGE, StudioConfig};
use crate::config::patch::StudioPatch;
use crate::scene::Scene;
use crate::store::storage::Storage;
use crate::store::studio::StudioStore;

/// Ticker speed change per `[` / `]` press.
pub const TICKER_SPEED_STEP: i64 = 5;

/// What currently has keyboard focus in the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    None,
    TextInput,
    TextArea,
}

impl Focus {
    /// Text controls swallow shortcuts.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::TextInput | Self::TextArea)
    }
}

/// A bound shortcut action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleUi,
    ToggleFullscreen,
    ToggleGuides,
    ToggleLogo,
    ToggleTeleprompter,
    SelectScene(Scene),
    TickerSlower,
    TickerFaster,
}

/// Result of dispatching an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// The state was patched (and persisted).
    Patched,
    /// The host should toggle fullscreen; state is untouched.
    Fullscreen,
}

impl Action {
    /// Map a key (as reported by the host, e.g. `"h"`, `"H"`, `"["`, `"3"`) to an action.
    ///
    /// Returns `None` for unbound keys and for any key while a text control has focus.
    pub fn from_key(key: &str, focus: Focus) -> Option<Self> {
        if focus.is_text_entry() {
            return None;
        }
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        let action = match c.to_ascii_lowercase() {
            'h' => Self::ToggleUi,
            'f' => Self::ToggleFullscreen,
            'g' => Self::ToggleGuides,
            'l' => Self::ToggleLogo,
            't' => Self::ToggleTeleprompter,
            '[' => Self::TickerSlower,
            ']' => Self::TickerFaster,
            d @ '1'..='4' => Self::SelectScene(Scene::from_id(i64::from(d as u8 - b'0'))?),
            _ => return None,
        };
        Some(action)
    }

    /// The patch this action makes against `cfg`, if it touches state at all.
    pub fn patch_for(self, cfg: &StudioConfig) -> Option<StudioPatch> {
        let none = StudioPatch::default();
        let patch = match self {
            Self::ToggleFullscreen => return None,
            Self::ToggleUi => StudioPatch {
                show_ui: Some(!cfg.show_ui),
                ..none
            },
            Self::ToggleGuides => StudioPatch {
                show_guides: Some(!cfg.show_guides),
                ..none
            },
            Self::ToggleLogo => StudioPatch {
                show_logo: Some(!cfg.show_logo),
                ..none
            },
            Self::ToggleTeleprompter => StudioPatch {
                show_teleprompter: Some(!cfg.show_teleprompter),
                ..none
            },
            Self::SelectScene(scene) => StudioPatch {
                scene: Some(scene.id()),
                ..none
            },
            Self::TickerSlower => StudioPatch {
                ticker_speed: Some(step_speed(cfg.ticker_speed, -TICKER_SPEED_STEP)),
                ..none
            },
            Self::TickerFaster => StudioPatch {
                ticker_speed: Some(step_speed(cfg.ticker_speed, TICKER_SPEED_STEP)),
                ..none
            },
        };
        Some(patch)
    }

    /// Apply to `store`.
    pub fn apply<S: Storage>(self, store: &mut StudioStore<S>) -> Dispatch {
        match self.patch_for(store.current()) {
            Some(patch) => {
                tracing::debug!(action = %self, "shortcut");
                store.patch(&patch);
                Dispatch::Patched
            }
            None => Dispatch::Fullscreen,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ToggleUi => f.write_str("toggle-ui"),
            Self::ToggleFullscreen => f.write_str("toggle-fullscreen"),
            Self::ToggleGuides => f.write_str("toggle-guides"),
            Self::ToggleLogo => f.write_str("toggle-logo"),
            Self::ToggleTeleprompter => f.write_str("toggle-teleprompter"),
            Self::SelectScene(s) => write!(f, "scene-{}", s.id()),
            Self::TickerSlower => f.write_str("ticker-slower"),
            Self::TickerFaster => f.write_str("ticker-faster"),
        }
    }
}

fn step_speed(speed: i64, delta: i64) -> i64 {
    speed.saturating_add(delta).clamp(SPEED_RANGE.0, SPEED_RANGE.1)
}

/// Handle one key press end to end. `None` means the key was ignored.
pub fn handle_key<S: Storage>(
    store: &mut StudioStore<S>,
    key: &str,
    focus: Focus,
) -> Option<Dispatch> {
    Action::from_key(key, focus).map(|action| action.apply(store))
}

/// Control-panel "Close" on the teleprompter.
pub fn close_teleprompter<S: Storage>(store: &mut StudioStore<S>) {
    store.patch(&StudioPatch {
        show_teleprompter: Some(false),
        ..StudioPatch::default()
    });
}

/// Control-panel "Clean Output": hide the control surface.
pub fn hide_ui<S: Storage>(store: &mut StudioStore<S>) {
    store.patch(&StudioPatch {
        show_ui: Some(false),
        ..StudioPatch::default()
    });
}

/// Edit the caption title, keeping the subtitle.
pub fn set_lower_third_title<S: Storage>(store: &mut StudioStore<S>, title: &str) {
    store.update(|cfg| StudioPatch::lower_third_title(cfg, title));
}

/// Edit the caption subtitle, keeping the title.
pub fn set_lower_third_subtitle<S: Storage>(store: &mut StudioStore<S>, subtitle: &str) {
    store.update(|cfg| StudioPatch::lower_third_subtitle(cfg, subtitle));
}

#[cfg(test)]
#[path = "../../tests/unit/control/shortcuts.rs"]
mod tests;
