/// Separable blur of the extracted silhouette edges.
///
/// Extract camera → ping, horizontal ping → pong, vertical pong → ping.
/// The blurred result ends in `BLUR_PING`.

use glam::Vec4;
use crate::renderer::{CommandSequence, ProgramId, RenderTargetId};
use super::passes::{BLUR_DIRECTION, BLUR_PING, BLUR_PONG, PASS_BLUR, PASS_EXTRACT};

pub struct BlurStage {
    program: ProgramId,
}

impl BlurStage {
    pub fn new(program: ProgramId) -> Self {
        Self { program }
    }

    /// `pixel_width` is the blur radius along each axis
    pub fn record(&self, sequence: &mut CommandSequence, pixel_width: f32) {
        sequence.set_render_target(BLUR_PING);
        sequence.blit(RenderTargetId::CameraTarget, BLUR_PING, self.program, PASS_EXTRACT);

        sequence.set_render_target(BLUR_PONG);
        sequence.set_global_vector(BLUR_DIRECTION, Vec4::new(pixel_width, 0.0, 0.0, 0.0));
        sequence.blit(BLUR_PING, BLUR_PONG, self.program, PASS_BLUR);

        sequence.set_render_target(BLUR_PING);
        sequence.set_global_vector(BLUR_DIRECTION, Vec4::new(0.0, pixel_width, 0.0, 0.0));
        sequence.blit(BLUR_PONG, BLUR_PING, self.program, PASS_BLUR);
    }
}
