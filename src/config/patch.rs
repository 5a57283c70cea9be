use serde_json::{Map, Value};

use crate::config::model::{
    INTENSITY_RANGE, LowerThird, Resolution, SPEED_RANGE, StudioConfig, clamp_to,
};
use crate::foundation::color::HexColor;
use crate::foundation::error::{StudioError, StudioResult};

/// A partial [`StudioConfig`].
///
/// Merge depth is one level: a present `lower_third` replaces the whole caption, it is never
/// merged field by field. Callers editing only the title must supply the current subtitle too
/// (see [`StudioPatch::lower_third_title`]).
///
/// The same type is the wire shape of persisted and shared snapshots. Reading one is lenient:
/// see [`StudioPatch::from_map`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudioPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_color: Option<HexColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<i64>,
    #[serde(rename = "showUI", skip_serializing_if = "Option::is_none")]
    pub show_ui: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_logo: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_guides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_lower_third: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_third: Option<LowerThird>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_ticker: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_teleprompter: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teleprompter_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teleprompter_speed: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolution: Option<Resolution>,
}

impl StudioPatch {
    /// Every field of `cfg` except `resolution`: the shareable snapshot.
    pub fn shareable(cfg: &StudioConfig) -> Self {
        Self {
            resolution: None,
            ..Self::full(cfg)
        }
    }

    /// Every field of `cfg`.
    pub fn full(cfg: &StudioConfig) -> Self {
        Self {
            scene: Some(cfg.scene),
            accent_color: Some(cfg.accent_color.clone()),
            base_color: Some(cfg.base_color.clone()),
            intensity: Some(cfg.intensity),
            show_ui: Some(cfg.show_ui),
            show_logo: Some(cfg.show_logo),
            show_guides: Some(cfg.show_guides),
            show_lower_third: Some(cfg.show_lower_third),
            lower_third: Some(cfg.lower_third.clone()),
            show_ticker: Some(cfg.show_ticker),
            ticker_text: Some(cfg.ticker_text.clone()),
            ticker_speed: Some(cfg.ticker_speed),
            show_teleprompter: Some(cfg.show_teleprompter),
            teleprompter_text: Some(cfg.teleprompter_text.clone()),
            teleprompter_speed: Some(cfg.teleprompter_speed),
            resolution: Some(cfg.resolution),
        }
    }

    /// Patch replacing the caption title while keeping `current`'s subtitle.
    pub fn lower_third_title(current: &StudioConfig, title: impl Into<String>) -> Self {
        Self {
            lower_third: Some(LowerThird::new(title, current.lower_third.subtitle.clone())),
            ..Self::default()
        }
    }

    /// Patch replacing the caption subtitle while keeping `current`'s title.
    pub fn lower_third_subtitle(current: &StudioConfig, subtitle: impl Into<String>) -> Self {
        Self {
            lower_third: Some(LowerThird::new(current.lower_third.title.clone(), subtitle)),
            ..Self::default()
        }
    }

    /// Parse a snapshot from JSON text. The text must hold a JSON object.
    pub fn from_json(text: &str) -> StudioResult<Self> {
        match serde_json::from_str::<Value>(text)? {
            Value::Object(map) => Ok(Self::from_map(&map)),
            _ => Err(StudioError::validation("snapshot is not a JSON object")),
        }
    }

    /// Read a snapshot object field by field.
    ///
    /// A field whose value has the wrong shape is dropped on its own and the others still
    /// apply. Bounded numbers take any JSON number, rounded here and clamped on apply. `scene`
    /// only takes whole numbers. The current key names win over the legacy `accent`/`base`.
    /// Unknown keys are ignored.
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let text = |v: &Value| v.as_str().map(str::to_owned);
        Self {
            scene: field(map, &["scene"], whole_number),
            accent_color: field(map, &["accentColor", "accent"], typed),
            base_color: field(map, &["baseColor", "base"], typed),
            intensity: field(map, &["intensity"], rounded_number),
            show_ui: field(map, &["showUI"], Value::as_bool),
            show_logo: field(map, &["showLogo"], Value::as_bool),
            show_guides: field(map, &["showGuides"], Value::as_bool),
            show_lower_third: field(map, &["showLowerThird"], Value::as_bool),
            lower_third: field(map, &["lowerThird"], typed),
            show_ticker: field(map, &["showTicker"], Value::as_bool),
            ticker_text: field(map, &["tickerText"], text),
            ticker_speed: field(map, &["tickerSpeed"], rounded_number),
            show_teleprompter: field(map, &["showTeleprompter"], Value::as_bool),
            teleprompter_text: field(map, &["teleprompterText"], text),
            teleprompter_speed: field(map, &["teleprompterSpeed"], rounded_number),
            resolution: field(map, &["resolution"], typed),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge into `cfg`, clamping bounded numeric fields.
    pub fn apply_to(&self, cfg: &mut StudioConfig) {
        fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
            if let Some(v) = src {
                *dst = v.clone();
            }
        }

        set(&mut cfg.scene, &self.scene);
        set(&mut cfg.accent_color, &self.accent_color);
        set(&mut cfg.base_color, &self.base_color);
        if let Some(v) = self.intensity {
            cfg.intensity = clamp_to(v, INTENSITY_RANGE);
        }
        set(&mut cfg.show_ui, &self.show_ui);
        set(&mut cfg.show_logo, &self.show_logo);
        set(&mut cfg.show_guides, &self.show_guides);
        set(&mut cfg.show_lower_third, &self.show_lower_third);
        set(&mut cfg.lower_third, &self.lower_third);
        set(&mut cfg.show_ticker, &self.show_ticker);
        set(&mut cfg.ticker_text, &self.ticker_text);
        if let Some(v) = self.ticker_speed {
            cfg.ticker_speed = clamp_to(v, SPEED_RANGE);
        }
        set(&mut cfg.show_teleprompter, &self.show_teleprompter);
        set(&mut cfg.teleprompter_text, &self.teleprompter_text);
        if let Some(v) = self.teleprompter_speed {
            cfg.teleprompter_speed = clamp_to(v, SPEED_RANGE);
        }
        set(&mut cfg.resolution, &self.resolution);
    }

    /// `base` with this patch applied.
    pub fn merged_over(&self, base: &StudioConfig) -> StudioConfig {
        let mut out = base.clone();
        self.apply_to(&mut out);
        out
    }
}

impl<'de> serde::Deserialize<'de> for StudioPatch {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = <Map<String, Value> as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Self::from_map(&map))
    }
}

/// First key in `keys` whose value `read` accepts.
fn field<T>(
    map: &Map<String, Value>,
    keys: &[&str],
    read: impl Fn(&Value) -> Option<T>,
) -> Option<T> {
    for key in keys {
        let Some(value) = map.get(*key) else {
            continue;
        };
        match read(value) {
            Some(v) => return Some(v),
            None => {
                tracing::warn!(field = *key, %value, "ignoring snapshot field with unexpected value")
            }
        }
    }
    None
}

fn typed<T: serde::de::DeserializeOwned>(value: &Value) -> Option<T> {
    serde::Deserialize::deserialize(value).ok()
}

// `as` saturates, so out-of-range numbers land on i64::MIN/MAX and clamp from there.
fn rounded_number(value: &Value) -> Option<i64> {
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.round() as i64))
}

fn whole_number(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/config/patch.rs"]
mod tests;
