use crate::config::model::StudioConfig;
use crate::foundation::color::{rgba_css, shade, tint};

/// Background treatments, by their persisted integer id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scene {
    #[default]
    MinimalSpotlight,
    HorizonGrid,
    NeonNoir,
    SoftOrbs,
}

impl Scene {
    /// All scenes in id order.
    pub const ALL: [Scene; 4] = [
        Scene::MinimalSpotlight,
        Scene::HorizonGrid,
        Scene::NeonNoir,
        Scene::SoftOrbs,
    ];

    /// Exact lookup.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::MinimalSpotlight),
            2 => Some(Self::HorizonGrid),
            3 => Some(Self::NeonNoir),
            4 => Some(Self::SoftOrbs),
            _ => None,
        }
    }

    /// Lookup with fallback to the default scene for unknown ids.
    pub fn resolve(id: i64) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!(id, "unknown scene id, using default scene");
            Self::default()
        })
    }

    pub fn id(self) -> i64 {
        match self {
            Self::MinimalSpotlight => 1,
            Self::HorizonGrid => 2,
            Self::NeonNoir => 3,
            Self::SoftOrbs => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::MinimalSpotlight => "Minimal Spotlight",
            Self::HorizonGrid => "Horizon Grid",
            Self::NeonNoir => "Neon Noir",
            Self::SoftOrbs => "Soft Orbs",
        }
    }

    /// Colors this scene derives from the accent and base colors.
    pub fn palette(self, accent: &str, base: &str) -> ScenePalette {
        let (top, glow) = match self {
            Self::MinimalSpotlight => (shade(base, 6.0), accent.to_owned()),
            Self::HorizonGrid => (tint(base, 8.0), rgba_css(accent, 0.5)),
            Self::NeonNoir => (shade(base, 4.0), rgba_css(accent, 0.8)),
            Self::SoftOrbs => (tint(base, 4.0), rgba_css(accent, 0.7)),
        };
        ScenePalette {
            top,
            bottom: base.to_owned(),
            glow,
        }
    }
}

/// Derived background colors, as CSS color strings.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ScenePalette {
    /// Gradient start.
    pub top: String,
    /// Gradient end (the base color).
    pub bottom: String,
    /// Accent glow.
    pub glow: String,
}

/// Ambient highlight alphas driven by `intensity` (0..=100).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Highlights {
    pub primary: f64,
    pub secondary: f64,
}

impl Highlights {
    pub fn from_intensity(intensity: i64) -> Self {
        let i = intensity as f64;
        Self {
            primary: i / 400.0,
            secondary: i / 650.0,
        }
    }
}

/// Everything needed to paint the background for `cfg`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Backdrop {
    pub scene: Scene,
    pub palette: ScenePalette,
    pub highlights: Highlights,
}

impl Backdrop {
    pub fn from_config(cfg: &StudioConfig) -> Self {
        let scene = Scene::resolve(cfg.scene);
        Self {
            scene,
            palette: scene.palette(cfg.accent_color.as_str(), cfg.base_color.as_str()),
            highlights: Highlights::from_intensity(cfg.intensity),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/catalog.rs"]
mod tests;
