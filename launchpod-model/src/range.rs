use crate::error::{ModelError, Result};

/// Sub-interval of a scroll progress signal over which one item animates.
///
/// `start` is always at or above zero and strictly below `end`. `end` may
/// exceed `1.0`, meaning the item never fully settles within the tracked
/// region.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f32; 2]", into = "[f32; 2]"))]
pub struct ScrollRange {
    start: f32,
    end: f32,
}

impl ScrollRange {
    /// The whole progress signal.
    pub const FULL: ScrollRange = ScrollRange {
        start: 0.0,
        end: 1.0,
    };

    pub fn new(start: f32, end: f32) -> Result<Self> {
        if start.is_nan() || end.is_nan() || start < 0.0 {
            return Err(ModelError::NegativeRange { start, end });
        }
        if start >= end {
            return Err(ModelError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    pub fn end(&self) -> f32 {
        self.end
    }

    pub fn span(&self) -> f32 {
        self.end - self.start
    }

    /// Position of `progress` inside the range, clamped to `[0, 1]`.
    pub fn local(&self, progress: f32) -> f32 {
        if progress <= self.start {
            return 0.0;
        }
        if progress >= self.end {
            return 1.0;
        }
        (progress - self.start) / self.span()
    }
}

impl TryFrom<[f32; 2]> for ScrollRange {
    type Error = ModelError;

    fn try_from(value: [f32; 2]) -> Result<Self> {
        ScrollRange::new(value[0], value[1])
    }
}

impl From<ScrollRange> for [f32; 2] {
    fn from(range: ScrollRange) -> Self {
        [range.start, range.end]
    }
}
