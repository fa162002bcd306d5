use serde::{Deserialize, Serialize};

use crate::transform::MediaZoom;

/// Geometry of the stacked showcase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackingParams {
    /// Below this viewport width the showcase renders as a flat list.
    pub narrow_breakpoint_px: f32,
    /// Extra sticky offset per card, in pixels.
    pub stack_step_px: f32,
    /// Sticky offset of the first card, as a fraction of viewport height.
    pub base_offset_vh: f32,
    /// Start of card `i`'s scale range is `i * range_step`.
    pub range_step: f32,
    /// Card `i` settles at `1 - (n - i) * scale_step`.
    pub scale_step: f32,
    /// Media scale while a card is still entering.
    pub zoom_from: f32,
}

impl Default for StackingParams {
    fn default() -> Self {
        Self {
            narrow_breakpoint_px: 640.0,
            stack_step_px: 25.0,
            base_offset_vh: -0.05,
            range_step: 0.25,
            scale_step: 0.05,
            zoom_from: 2.0,
        }
    }
}

impl StackingParams {
    pub fn media_zoom(&self) -> MediaZoom {
        MediaZoom {
            from: self.zoom_from,
            to: 1.0,
        }
    }

    pub fn target_scale(&self, index: usize, count: usize) -> f32 {
        1.0 - count.saturating_sub(index) as f32 * self.scale_step
    }

    pub fn top_offset(&self, index: usize, viewport_height: f32) -> f32 {
        self.base_offset_vh * viewport_height + index as f32 * self.stack_step_px
    }
}
