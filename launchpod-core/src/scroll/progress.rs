//! Normalized scroll progress over a region.

use tokio::sync::watch;

use super::geometry::{Region, Viewport};
use super::offset::{OffsetRule, ScrollOffset};

/// Scroll offset at which `rule` holds for `region` in a viewport of
/// `viewport_height`.
fn scroll_at(rule: OffsetRule, region: Region, viewport_height: f32) -> f32 {
    region.top + rule.target.fraction() * region.height
        - rule.container.fraction() * viewport_height
}

/// Progress of `viewport` through `region` under `offset`, clamped to `[0, 1]`.
///
/// When the two rules collapse onto the same scroll position (or invert,
/// e.g. a region shorter than the viewport under
/// [`ScrollOffset::TRAVERSE`]) there is no interval to divide by: the result
/// is `1.0` once the first rule has been reached and `0.0` before.
pub fn progress(region: Region, viewport: Viewport, offset: ScrollOffset) -> f32 {
    let s0 = scroll_at(offset.from, region, viewport.height);
    let s1 = scroll_at(offset.to, region, viewport.height);
    let span = s1 - s0;
    if span.is_nan() || span <= f32::EPSILON {
        return if viewport.scroll_y >= s0 { 1.0 } else { 0.0 };
    }
    ((viewport.scroll_y - s0) / span).clamp(0.0, 1.0)
}

/// Read side of a [`ProgressSource`]; many readers may share one source.
#[derive(Debug, Clone)]
pub struct ProgressReader {
    rx: watch::Receiver<f32>,
}

impl ProgressReader {
    /// Latest published progress.
    pub fn get(&self) -> f32 {
        *self.rx.borrow()
    }

    /// Whether a value was published since the last [`ProgressReader::mark_seen`].
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    pub fn mark_seen(&mut self) -> f32 {
        *self.rx.borrow_and_update()
    }
}

/// The single writer of a scroll progress signal.
///
/// Holds the tracked region and offset rules; every scroll or resize event
/// is pushed through [`ProgressSource::update`], which republishes the value
/// to readers only when it changed.
#[derive(Debug)]
pub struct ProgressSource {
    region: Region,
    offset: ScrollOffset,
    tx: watch::Sender<f32>,
}

impl ProgressSource {
    pub fn new(region: Region, offset: ScrollOffset) -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { region, offset, tx }
    }

    pub fn reader(&self) -> ProgressReader {
        ProgressReader {
            rx: self.tx.subscribe(),
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset
    }

    /// Layout changed (resize, content reflow); takes effect on next update.
    pub fn set_region(&mut self, region: Region) {
        self.region = region;
    }

    pub fn value(&self) -> f32 {
        *self.tx.borrow()
    }

    /// Recompute for `viewport` and publish; returns the new value.
    pub fn update(&mut self, viewport: Viewport) -> f32 {
        let next = progress(self.region, viewport, self.offset);
        self.tx.send_if_modified(|current| {
            if (*current - next).abs() > f32::EPSILON {
                *current = next;
                true
            } else {
                false
            }
        });
        next
    }
}
