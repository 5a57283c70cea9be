use crate::foundation::color::HexColor;

/// Fixed storage key under which the full config is persisted.
pub const STORAGE_KEY: &str = "bnb-studio";

/// Inclusive bounds for `intensity`.
pub const INTENSITY_RANGE: (i64, i64) = (0, 100);
/// Inclusive bounds for `tickerSpeed` and `teleprompterSpeed`.
pub const SPEED_RANGE: (i64, i64) = (10, 200);

pub(crate) fn clamp_to(v: i64, (lo, hi): (i64, i64)) -> i64 {
    v.clamp(lo, hi)
}

/// The single configuration record behind the overlay.
///
/// `scene` is stored as the raw integer the user or a snapshot asked for; it is resolved to a
/// concrete [`Scene`](crate::scene::Scene) (with fallback) only at render time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioConfig {
    pub scene: i64,
    #[serde(alias = "accent")]
    pub accent_color: HexColor,
    #[serde(alias = "base")]
    pub base_color: HexColor,
    pub intensity: i64,
    #[serde(rename = "showUI")]
    pub show_ui: bool,
    pub show_logo: bool,
    pub show_guides: bool,
    pub show_lower_third: bool,
    pub lower_third: LowerThird,
    pub show_ticker: bool,
    pub ticker_text: String,
    pub ticker_speed: i64,
    pub show_teleprompter: bool,
    pub teleprompter_text: String,
    pub teleprompter_speed: i64,
    pub resolution: Resolution,
}

/// Lower-third caption. Always replaced as a whole by a patch.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LowerThird {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
}

impl LowerThird {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

/// Output resolution. Local to the device; never shared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Resolution {
    #[serde(alias = "w")]
    pub width: u32,
    #[serde(alias = "h")]
    pub height: u32,
}

impl Default for Resolution {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
        }
    }
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            scene: 1,
            accent_color: HexColor::trusted("#5AC8FA"),
            base_color: HexColor::trusted("#0B0C10"),
            intensity: 65,
            show_ui: true,
            show_logo: true,
            show_guides: false,
            show_lower_third: true,
            lower_third: LowerThird::new("Brains n Bots", "Solo Podcast with You"),
            show_ticker: false,
            ticker_text: "Welcome to Brains n Bots \u{2014} AI, research, and craft. New episodes weekly."
                .to_owned(),
            ticker_speed: 40,
            show_teleprompter: false,
            teleprompter_text: "Today on Brains n Bots: 1) Cold open. 2) Headline. 3) Deep dive. 4) Takeaways. 5) Call to action."
                .to_owned(),
            teleprompter_speed: 40,
            resolution: Resolution::default(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/model.rs"]
mod tests;
