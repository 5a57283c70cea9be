pub mod catalog;
pub mod overlay;

pub use catalog::{Backdrop, Highlights, Scene, ScenePalette};
pub use overlay::{Layer, OverlayPlan};
