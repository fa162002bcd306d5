//! Past-events gallery, revealed once when it scrolls into view.

use launchpod_core::activation::{GateEvent, GateParams, Observation, ViewportObserver};
use launchpod_core::scroll::Region;
use launchpod_model::GalleryImage;

#[derive(Debug)]
pub struct PastEventsSection {
    images: Vec<GalleryImage>,
    reveal: Observation,
    revealed: bool,
}

impl PastEventsSection {
    pub fn new(
        observer: &ViewportObserver,
        images: Vec<GalleryImage>,
        region: Region,
        gate: GateParams,
    ) -> Self {
        let reveal = observer.observe(region, gate);
        Self {
            revealed: reveal.is_active(),
            images,
            reveal,
        }
    }

    pub fn images(&self) -> &[GalleryImage] {
        &self.images
    }

    /// Stays true once the gallery has been on screen.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn observation(&self) -> &Observation {
        &self.reveal
    }

    pub fn set_region(&self, region: Region) {
        self.reveal.set_region(region);
    }

    pub fn on_gate(&mut self, event: GateEvent) {
        if event == GateEvent::Activated && !self.revealed {
            self.revealed = true;
            tracing::debug!(images = self.images.len(), "gallery revealed");
        }
    }
}
