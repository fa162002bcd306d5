use launchpod_model::{EventContent, ModelError, ScrollRange, ShowcaseItem};

use crate::scroll::{ProgressReader, ProgressSource, Region, ScrollOffset, Viewport};
use crate::transform;

use super::params::StackingParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Sticky cascading cards driven by scroll.
    Stacked,
    /// Plain document-order list for narrow screens.
    Flat,
}

impl LayoutMode {
    pub fn for_width(width: f32, params: &StackingParams) -> Self {
        if width < params.narrow_breakpoint_px {
            LayoutMode::Flat
        } else {
            LayoutMode::Stacked
        }
    }
}

/// Everything the renderer needs to place one card for the current frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardFrame {
    pub index: usize,
    /// Sticky top offset in pixels.
    pub top_offset_px: f32,
    pub scale: f32,
    pub image_scale: f32,
    /// Later cards paint over earlier ones.
    pub z_index: usize,
}

impl CardFrame {
    fn flat(index: usize) -> Self {
        Self {
            index,
            top_offset_px: 0.0,
            scale: 1.0,
            image_scale: 1.0,
            z_index: index,
        }
    }
}

/// Composes showcase items into cascading sticky cards.
///
/// The section is `n` viewport heights tall; card `i` sticks inside its own
/// viewport-high container starting at `container_top + i * vh`. The
/// sequence progress runs over the whole section, and every card owns a
/// second progress source over its container that drives the media zoom.
#[derive(Debug)]
pub struct StackedLayout {
    params: StackingParams,
    items: Vec<ShowcaseItem>,
    sequence: ProgressSource,
    cards: Vec<ProgressSource>,
    mode: LayoutMode,
    container_top: f32,
    viewport_height: f32,
}

impl StackedLayout {
    /// Derive each item's range and target scale from its position.
    ///
    /// Ranges start at `i * range_step` and end at 1, or one step later for
    /// cards that start at or beyond 1.
    pub fn build_items(
        contents: Vec<EventContent>,
        params: &StackingParams,
    ) -> Result<Vec<ShowcaseItem>, ModelError> {
        let count = contents.len();
        contents
            .into_iter()
            .enumerate()
            .map(|(index, content)| {
                let start = index as f32 * params.range_step;
                let range = ScrollRange::new(start, (start + params.range_step).max(1.0))?;
                Ok(ShowcaseItem::new(
                    index,
                    range,
                    params.target_scale(index, count),
                    content,
                ))
            })
            .collect()
    }

    pub fn new(
        contents: Vec<EventContent>,
        params: StackingParams,
        container_top: f32,
        viewport: Viewport,
    ) -> Result<Self, ModelError> {
        let items = Self::build_items(contents, &params)?;
        let count = items.len();
        let vh = viewport.height;

        let sequence = ProgressSource::new(
            Self::section_region(container_top, count, vh),
            ScrollOffset::TRAVERSE,
        );
        let cards = (0..count)
            .map(|i| {
                ProgressSource::new(
                    Self::card_region(container_top, i, vh),
                    ScrollOffset::ENTER_TO_TOP,
                )
            })
            .collect();

        let mut layout = Self {
            params,
            items,
            sequence,
            cards,
            mode: LayoutMode::for_width(viewport.width, &params),
            container_top,
            viewport_height: vh,
        };
        layout.update(viewport);
        tracing::debug!(cards = count, mode = ?layout.mode, "showcase layout built");
        Ok(layout)
    }

    fn section_region(container_top: f32, count: usize, vh: f32) -> Region {
        Region::new(container_top, count as f32 * vh)
    }

    fn card_region(container_top: f32, index: usize, vh: f32) -> Region {
        Region::new(container_top + index as f32 * vh, vh)
    }

    pub fn items(&self) -> &[ShowcaseItem] {
        &self.items
    }

    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    pub fn params(&self) -> &StackingParams {
        &self.params
    }

    /// Document region of the whole section.
    pub fn region(&self) -> Region {
        self.sequence.region()
    }

    /// Background video only runs in the stacked layout.
    pub fn plays_background_video(&self) -> bool {
        self.mode == LayoutMode::Stacked
    }

    pub fn sequence_progress(&self) -> ProgressReader {
        self.sequence.reader()
    }

    /// Move the section (layout above it changed height).
    pub fn relayout(&mut self, container_top: f32, viewport_height: f32) {
        self.container_top = container_top;
        self.viewport_height = viewport_height;
        self.sequence.set_region(Self::section_region(
            container_top,
            self.items.len(),
            viewport_height,
        ));
        for (i, card) in self.cards.iter_mut().enumerate() {
            card.set_region(Self::card_region(container_top, i, viewport_height));
        }
    }

    /// Push a scroll or resize through every progress source and return the
    /// resulting frames.
    pub fn update(&mut self, viewport: Viewport) -> Vec<CardFrame> {
        let mode = LayoutMode::for_width(viewport.width, &self.params);
        if mode != self.mode {
            tracing::debug!(
                from = ?self.mode,
                to = ?mode,
                width = viewport.width,
                "showcase layout mode changed"
            );
            self.mode = mode;
        }
        if viewport.height != self.viewport_height {
            self.relayout(self.container_top, viewport.height);
        }
        if self.mode == LayoutMode::Stacked {
            self.sequence.update(viewport);
            for card in &mut self.cards {
                card.update(viewport);
            }
        }
        self.frames()
    }

    /// Frames for the last published progress values.
    pub fn frames(&self) -> Vec<CardFrame> {
        match self.mode {
            LayoutMode::Flat => (0..self.items.len()).map(CardFrame::flat).collect(),
            LayoutMode::Stacked => {
                let progress = self.sequence.value();
                let zoom = self.params.media_zoom();
                self.items
                    .iter()
                    .zip(&self.cards)
                    .map(|(item, card)| CardFrame {
                        index: item.index,
                        top_offset_px: self.params.top_offset(item.index, self.viewport_height),
                        scale: transform::scale(progress, item.range, item.target_scale),
                        image_scale: zoom.at(card.value()),
                        z_index: item.index,
                    })
                    .collect()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VH: f32 = 800.0;
    const TOP: f32 = 1000.0;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    fn contents(n: usize) -> Vec<EventContent> {
        (0..n)
            .map(|i| EventContent {
                title: format!("Event {i}"),
                ..EventContent::default()
            })
            .collect()
    }

    fn layout(n: usize, width: f32) -> StackedLayout {
        StackedLayout::new(
            contents(n),
            StackingParams::default(),
            TOP,
            Viewport::new(0.0, width, VH),
        )
        .unwrap()
    }

    #[test]
    fn items_get_positional_ranges_and_scales() {
        let items = StackedLayout::build_items(contents(4), &StackingParams::default()).unwrap();
        let starts: Vec<f32> = items.iter().map(|i| i.range.start()).collect();
        assert_eq!(starts, vec![0.0, 0.25, 0.5, 0.75]);
        assert!(items.iter().all(|i| i.range.end() == 1.0));
        let scales: Vec<f32> = items.iter().map(|i| i.target_scale).collect();
        assert!(approx(scales[0], 0.8));
        assert!(approx(scales[3], 0.95));
    }

    #[test]
    fn long_lists_still_get_valid_ranges() {
        let items = StackedLayout::build_items(contents(6), &StackingParams::default()).unwrap();
        assert_eq!(items[4].range.start(), 1.0);
        assert_eq!(items[4].range.end(), 1.25);
    }

    #[test]
    fn stacked_frames_mid_section() {
        let mut layout = layout(3, 1280.0);
        // Section traverses from 1000 to 1000 + 3*800 - 800.
        let frames = layout.update(Viewport::new(1800.0, 1280.0, VH));
        assert!(approx(layout.sequence_progress().get(), 0.5));

        assert!(approx(frames[0].scale, 0.925));
        assert!(approx(frames[1].scale, 1.0 - 0.1 / 3.0));
        assert!(approx(frames[2].scale, 1.0));

        assert!(approx(frames[0].image_scale, 1.0));
        assert!(approx(frames[1].image_scale, 1.0));
        assert!(approx(frames[2].image_scale, 2.0));

        let offsets: Vec<f32> = frames.iter().map(|f| f.top_offset_px).collect();
        assert!(approx(offsets[0], -40.0) && approx(offsets[1], -15.0) && approx(offsets[2], 10.0));
        assert!(frames.windows(2).all(|w| w[0].z_index < w[1].z_index));
    }

    #[test]
    fn media_zooms_out_while_card_enters() {
        let mut layout = layout(2, 1280.0);
        // Card 1 container starts at 1800; entering from 1000 to 1800.
        let frames = layout.update(Viewport::new(1400.0, 1280.0, VH));
        assert!(approx(frames[1].image_scale, 1.5));
    }

    #[test]
    fn narrow_viewport_is_flat() {
        let mut layout = layout(4, 390.0);
        assert_eq!(layout.mode(), LayoutMode::Flat);
        assert!(!layout.plays_background_video());
        let frames = layout.update(Viewport::new(2600.0, 390.0, VH));
        for (i, frame) in frames.iter().enumerate() {
            assert_eq!(*frame, CardFrame::flat(i));
        }
    }

    #[test]
    fn widening_switches_back_to_stacked() {
        let mut layout = layout(2, 600.0);
        layout.update(Viewport::new(0.0, 1024.0, VH));
        assert_eq!(layout.mode(), LayoutMode::Stacked);
        assert!(layout.plays_background_video());
    }

    #[test]
    fn resize_moves_card_regions() {
        let mut layout = layout(2, 1280.0);
        layout.update(Viewport::new(0.0, 1280.0, 400.0));
        assert_eq!(layout.region(), Region::new(TOP, 800.0));
    }

    #[test]
    fn single_card_section_does_not_divide_by_zero() {
        let mut layout = layout(1, 1280.0);
        let before = layout.update(Viewport::new(900.0, 1280.0, VH));
        assert_eq!(before[0].scale, 1.0);
        let after = layout.update(Viewport::new(1000.0, 1280.0, VH));
        assert!(approx(after[0].scale, 0.95));
    }
}
