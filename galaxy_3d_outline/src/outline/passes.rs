/// Pass indices and named properties shared with the outline shaders

use crate::renderer::PropertyId;

// ===== PASSES =====

/// Copy program: plain color copy
pub const PASS_COPY: u32 = 0;
/// Outline program: silhouette where the object is depth-visible
pub const PASS_MASK_VISIBLE: u32 = 1;
/// Outline program: silhouette where the object is occluded
pub const PASS_MASK_OCCLUDED: u32 = 3;
/// Outline program: blend the blurred mask onto the camera target
pub const PASS_COMPOSITE: u32 = 4;
/// Outline program: one direction of the separable blur
pub const PASS_BLUR: u32 = 5;
/// Outline program: edges between differing object IDs
pub const PASS_EXTRACT: u32 = 6;

// ===== GLOBALS =====

pub const OBJECT_ID: PropertyId = PropertyId::new("_ObjectId");
pub const BLUR_DIRECTION: PropertyId = PropertyId::new("_BlurDirection");
pub const OUTLINE_COLOR: PropertyId = PropertyId::new("_OutlineColor");
pub const OUTLINE_FADE: PropertyId = PropertyId::new("_OutlineFade");

// ===== TEMPORARY TARGETS =====

/// Copy of the camera color buffer taken before the mask is drawn
pub const MASK_COPY: PropertyId = PropertyId::new("_ObjectSelectedCopy");
/// Extracted edges, then the final blurred mask
pub const BLUR_PING: PropertyId = PropertyId::new("_RT1");
/// Horizontal blur result
pub const BLUR_PONG: PropertyId = PropertyId::new("_RT0");

/// Every temporary target, in allocation and release order
pub const TEMPORARY_TARGETS: [PropertyId; 3] = [MASK_COPY, BLUR_PING, BLUR_PONG];
