//! Headless scroll sweep used by `launchpod preview`.

use std::time::{Duration, Instant};

use launchpod_config::SiteConfig;
use launchpod_core::scroll::Viewport;
use launchpod_core::showcase::CardFrame;
use launchpod_model::Catalog;

use crate::error::SiteResult;
use crate::page::Section;
use crate::runtime::{EventLoop, PlatformEvent};

const FRAME: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewOptions {
    pub width: f32,
    pub height: f32,
    /// Scroll positions sampled between the top and the bottom of the page.
    pub steps: usize,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            steps: 24,
        }
    }
}

/// Page state at one scroll position.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewSample {
    pub scroll_y: f32,
    pub showcase_progress: f32,
    pub frames: Vec<CardFrame>,
    pub hero_revealed: bool,
    pub gallery_revealed: bool,
    pub testimonials_autoplay: bool,
    pub video_started: bool,
}

/// Scroll from top to bottom in `steps` even increments, one frame apart.
pub fn sweep(
    config: &SiteConfig,
    catalog: Catalog,
    options: PreviewOptions,
) -> SiteResult<Vec<PreviewSample>> {
    let start = Instant::now();
    let viewport = Viewport::new(0.0, options.width, options.height);
    let mut events = EventLoop::from_config(config, catalog, viewport, start)?;
    let max_scroll = events.state().page.max_scroll(options.height);
    let steps = options.steps.max(1);

    let mut samples = Vec::with_capacity(steps + 1);
    for step in 0..=steps {
        let now = start + FRAME * step as u32;
        let scroll_y = max_scroll * step as f32 / steps as f32;
        let mut effects = events.dispatch(PlatformEvent::Scroll(scroll_y), now);
        effects.extend(events.dispatch(PlatformEvent::Tick, now));
        for effect in &effects {
            tracing::debug!(?effect, scroll_y, "preview effect");
        }

        let state = events.state();
        let sample = PreviewSample {
            scroll_y,
            showcase_progress: state.showcase.layout().sequence_progress().get(),
            frames: state.showcase.frames().to_vec(),
            hero_revealed: state.hero.is_revealed(),
            gallery_revealed: state.past_events.is_revealed(),
            testimonials_autoplay: state.testimonials.is_autoplaying(),
            video_started: state.showcase.video_started(),
        };
        log_sample(&sample, state.page.region(Section::Showcase).top);
        samples.push(sample);
    }
    Ok(samples)
}

fn log_sample(sample: &PreviewSample, showcase_top: f32) {
    let scales: Vec<String> = sample
        .frames
        .iter()
        .map(|frame| format!("{:.3}", frame.scale))
        .collect();
    tracing::info!(
        scroll_y = sample.scroll_y,
        showcase_top,
        progress = sample.showcase_progress,
        scales = %scales.join(" "),
        hero = sample.hero_revealed,
        gallery = sample.gallery_revealed,
        testimonials = sample.testimonials_autoplay,
        video = sample.video_started,
        "preview frame"
    );
}
