//! vstudio is the state core of a livestream "virtual studio" overlay.
//!
//! A single [`StudioConfig`] describes everything the overlay shows: the animated background
//! scene, its colors and intensity, and which widgets (logo, presenter guides, lower third,
//! ticker, teleprompter, control panel) are visible. This crate owns that record and its
//! contracts; drawing it is left to the host.
//!
//! # Pieces
//!
//! - [`StudioStore`]: builds the initial state from a share-link fragment, else the persisted
//!   snapshot, else defaults; applies shallow-merge [`StudioPatch`]es and persists after each.
//! - [`codec`]: packs the shareable part of the state into a URL-fragment token and back.
//! - [`scene`]: resolves scene ids (with fallback) and derives palettes and the layer plan.
//! - [`control`]: keyboard shortcut bindings and control-panel helpers over the store.
//!
//! Nothing on the init/patch/encode/decode path panics or returns an error to the caller:
//! unusable input is logged through `tracing` and replaced by the next fallback.
#![forbid(unsafe_code)]

pub mod codec;
pub mod config;
pub mod control;
pub mod foundation;
pub mod scene;
pub mod store;

pub use crate::config::model::{LowerThird, Resolution, STORAGE_KEY, StudioConfig};
pub use crate::config::patch::StudioPatch;
pub use crate::foundation::color::{HexColor, Rgb};
pub use crate::foundation::error::{StudioError, StudioResult};
pub use crate::scene::{OverlayPlan, Scene};
pub use crate::store::storage::{FileStorage, MemoryStorage, Storage};
pub use crate::store::studio::{InitSource, StudioStore};
