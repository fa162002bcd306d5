/// Visible window onto the document, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Document offset of the viewport's top edge.
    pub scroll_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_y: f32, width: f32, height: f32) -> Self {
        Self {
            scroll_y,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.scroll_y + self.height
    }

    pub fn with_scroll(self, scroll_y: f32) -> Self {
        Self { scroll_y, ..self }
    }

    pub fn with_size(self, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..self
        }
    }
}

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub top: f32,
    pub height: f32,
}

impl Region {
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Fraction of this region inside `[view_top, view_bottom]`, in `[0, 1]`.
    ///
    /// A zero-height region counts as fully visible when its top lies inside
    /// the window.
    pub fn visible_fraction(&self, view_top: f32, view_bottom: f32) -> f32 {
        if self.height <= 0.0 {
            return if self.top >= view_top && self.top <= view_bottom {
                1.0
            } else {
                0.0
            };
        }
        let overlap =
            (self.bottom().min(view_bottom) - self.top.max(view_top)).max(0.0);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}
