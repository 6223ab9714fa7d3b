/// Outline configuration and program handles

use crate::renderer::{Color, ProgramId};

/// Alpha at or below one 8-bit step draws nothing visible
pub const MIN_VISIBLE_ALPHA: f32 = 1.0 / 255.0;

/// Outline appearance, read fresh on every rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlineConfig {
    color: Color,
    pixel_width: f32,
    fade: f32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            color: Color::YELLOW,
            pixel_width: 2.0,
            fade: 1.0,
        }
    }
}

impl OutlineConfig {
    pub fn new(color: Color, pixel_width: f32, fade: f32) -> Self {
        Self {
            color,
            pixel_width: pixel_width.max(0.0),
            fade,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Blur radius in pixels; 0 disables the outline
    pub fn pixel_width(&self) -> f32 {
        self.pixel_width
    }

    pub fn fade(&self) -> f32 {
        self.fade
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Negative widths are clamped to 0
    pub fn set_pixel_width(&mut self, pixel_width: f32) {
        self.pixel_width = pixel_width.max(0.0);
    }

    pub fn set_fade(&mut self, fade: f32) {
        self.fade = fade;
    }

    /// True if the outline would produce visible pixels
    pub fn is_visible(&self) -> bool {
        self.color.a > MIN_VISIBLE_ALPHA && self.pixel_width > 0.0
    }
}

/// GPU programs used by the outline passes.
///
/// `outline` provides the mask, extract, blur and composite passes,
/// `copy` the plain copy used to preserve the camera color buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutlinePrograms {
    pub outline: ProgramId,
    pub copy: ProgramId,
}

impl OutlinePrograms {
    pub fn new(outline: ProgramId, copy: ProgramId) -> Self {
        Self { outline, copy }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
