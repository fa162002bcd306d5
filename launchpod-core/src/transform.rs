//! Range-mapped transforms: continuous progress in, visual scalar out.
//!
//! All mappings clamp; nothing is ever extrapolated past its output bounds.

pub use launchpod_model::ScrollRange;

/// Linear map of `value` from `input` onto `output`, clamped to the output
/// interval. `output` may be descending.
pub fn map_range(value: f32, input: [f32; 2], output: [f32; 2]) -> f32 {
    let [in0, in1] = input;
    let [out0, out1] = output;
    if value.is_nan() {
        return out0;
    }
    let span = in1 - in0;
    if span.abs() <= f32::EPSILON {
        return if value >= in1 { out1 } else { out0 };
    }
    let t = ((value - in0) / span).clamp(0.0, 1.0);
    out0 + (out1 - out0) * t
}

/// Scale of an item whose animation runs over `range`: `1.0` up to
/// `range.start()`, `target_scale` from `range.end()` on, linear between.
pub fn scale(progress: f32, range: ScrollRange, target_scale: f32) -> f32 {
    map_range(progress, [range.start(), range.end()], [1.0, target_scale])
}

/// Zoom-out applied to a card's media as the card scrolls into place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaZoom {
    /// Scale while the card is still below the fold.
    pub from: f32,
    /// Scale once the card reaches the top of the viewport.
    pub to: f32,
}

impl MediaZoom {
    pub const NONE: MediaZoom = MediaZoom { from: 1.0, to: 1.0 };

    pub fn at(&self, local_progress: f32) -> f32 {
        map_range(local_progress, [0.0, 1.0], [self.from, self.to])
    }
}

impl Default for MediaZoom {
    fn default() -> Self {
        Self { from: 2.0, to: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn range_mapping_scenario() {
        let range = ScrollRange::new(0.25, 1.0).unwrap();
        assert_eq!(scale(0.0, range, 0.85), 1.0);
        assert_eq!(scale(0.25, range, 0.85), 1.0);
        assert!(approx(scale(0.625, range, 0.85), 0.925));
        assert!(approx(scale(1.0, range, 0.85), 0.85));
        assert!(approx(scale(1.5, range, 0.85), 0.85));
    }

    #[test]
    fn scale_is_monotonic_and_linear_inside_range() {
        let range = ScrollRange::new(0.2, 0.6).unwrap();
        let target = 0.8;
        let mut last = f32::INFINITY;
        for step in 0..=100 {
            let p = step as f32 / 100.0;
            let s = scale(p, range, target);
            assert!(s <= last + 1e-6, "not monotonic at {p}");
            assert!((target..=1.0).contains(&s));
            if p <= 0.2 {
                assert_eq!(s, 1.0);
            } else if p >= 0.6 {
                assert!(approx(s, target));
            } else {
                let expected = 1.0 + (target - 1.0) * (p - 0.2) / 0.4;
                assert!(approx(s, expected));
            }
            last = s;
        }
    }

    #[test]
    fn negative_progress_is_clamped() {
        let range = ScrollRange::new(0.0, 1.0).unwrap();
        assert_eq!(scale(-3.0, range, 0.5), 1.0);
        assert_eq!(scale(f32::NAN, range, 0.5), 1.0);
    }

    #[test]
    fn media_zoom_runs_from_two_to_one() {
        let zoom = MediaZoom::default();
        assert_eq!(zoom.at(0.0), 2.0);
        assert_eq!(zoom.at(0.5), 1.5);
        assert_eq!(zoom.at(1.0), 1.0);
        assert_eq!(MediaZoom::NONE.at(0.3), 1.0);
    }
}
