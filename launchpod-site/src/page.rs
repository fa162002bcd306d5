//! Document geometry of the single page.

use launchpod_core::scroll::{Region, Viewport};
use launchpod_model::Anchor;

/// Page sections in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    EventCards,
    Hero,
    About,
    Showcase,
    PastEvents,
    Testimonials,
    Faq,
    Contact,
    Footer,
}

impl Section {
    pub const ORDER: [Section; 10] = [
        Section::Header,
        Section::EventCards,
        Section::Hero,
        Section::About,
        Section::Showcase,
        Section::PastEvents,
        Section::Testimonials,
        Section::Faq,
        Section::Contact,
        Section::Footer,
    ];

    /// In-page anchor the section registers under, if any.
    pub fn anchor(self) -> Option<Anchor> {
        match self {
            Section::About => Some(Anchor::About),
            Section::Showcase => Some(Anchor::Events),
            Section::PastEvents => Some(Anchor::PastEvents),
            Section::Testimonials => Some(Anchor::Testimonials),
            Section::Contact => Some(Anchor::Contact),
            _ => None,
        }
    }

    pub fn for_anchor(anchor: Anchor) -> Section {
        match anchor {
            Anchor::About => Section::About,
            Anchor::Events => Section::Showcase,
            Anchor::PastEvents => Section::PastEvents,
            Anchor::Testimonials => Section::Testimonials,
            Anchor::Contact => Section::Contact,
        }
    }
}

/// Vertical placement of every section.
///
/// The renderer measures real heights and reports them with
/// [`PageLayout::from_heights`]; [`PageLayout::estimate`] gives viewport-
/// relative defaults for headless runs.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    regions: Vec<(Section, Region)>,
}

impl PageLayout {
    /// Stack sections top to bottom. Missing sections get zero height.
    pub fn from_heights(heights: impl IntoIterator<Item = (Section, f32)>) -> Self {
        let heights: Vec<(Section, f32)> = heights.into_iter().collect();
        let mut top = 0.0;
        let regions = Section::ORDER
            .iter()
            .map(|section| {
                let height = heights
                    .iter()
                    .find(|(s, _)| s == section)
                    .map(|(_, h)| *h)
                    .unwrap_or(0.0);
                let region = Region::new(top, height);
                top += region.height;
                (*section, region)
            })
            .collect();
        Self { regions }
    }

    /// Default proportions for a viewport. The stacked showcase takes one
    /// viewport height per card; the flat list is shorter.
    pub fn estimate(viewport: Viewport, showcase_cards: usize, stacked: bool) -> Self {
        let vh = viewport.height;
        let showcase = if stacked {
            showcase_cards as f32 * vh
        } else {
            showcase_cards as f32 * 0.75 * vh
        };
        Self::from_heights([
            (Section::Header, 80.0),
            (Section::EventCards, 0.8 * vh),
            (Section::Hero, 0.9 * vh),
            (Section::About, 0.8 * vh),
            (Section::Showcase, showcase),
            (Section::PastEvents, vh),
            (Section::Testimonials, 0.8 * vh),
            (Section::Faq, 0.9 * vh),
            (Section::Contact, 0.7 * vh),
            (Section::Footer, 0.5 * vh),
        ])
    }

    pub fn region(&self, section: Section) -> Region {
        self.regions
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| *r)
            .unwrap_or_default()
    }

    pub fn anchor_top(&self, anchor: Anchor) -> f32 {
        self.region(Section::for_anchor(anchor)).top
    }

    pub fn document_height(&self) -> f32 {
        self.regions.last().map(|(_, r)| r.bottom()).unwrap_or(0.0)
    }

    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.document_height() - viewport_height).max(0.0)
    }
}
