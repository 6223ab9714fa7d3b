//! Outline module
//!
//! Per-camera recording of the selection outline: culling, silhouette
//! mask, separable blur, composite, and the camera hook state machine
//! that attaches the recorded sequence for exactly one camera at a time.

mod config;
mod passes;
mod culler;
mod mask_pass;
mod blur;
mod composite;
mod rebuild;
mod camera_hooks;
mod outline_renderer;

#[cfg(test)]
mod fixtures;

pub use config::{OutlineConfig, OutlinePrograms, MIN_VISIBLE_ALPHA};
pub use passes::*;
pub use culler::{VisibilityCuller, FrustumCuller, BruteForceCuller, VisibleObject, VisibleSelection};
pub use mask_pass::{object_id, MaskPassBuilder};
pub use blur::BlurStage;
pub use composite::CompositeStage;
pub use rebuild::{OutlinePipeline, OutlinePlan, RebuildOutcome, RebuildStats, SkipReason};
pub use camera_hooks::{CameraHookManager, CameraBinding, HookOutcome, OUTLINE_EVENT};
pub use outline_renderer::OutlineRenderer;
