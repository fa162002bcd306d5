use serde::{Deserialize, Serialize};

/// Whether a gate can switch off again after activating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retrigger {
    /// Latch on the first activation and stop observing.
    #[default]
    Once,
    /// Follow the element in and out of the viewport.
    Always,
}

/// Visibility rule for one gate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateParams {
    /// Fraction of the element that must be visible, in `[0, 1]`. Zero means
    /// "any pixel".
    pub threshold: f32,
    /// Grows (positive) or shrinks (negative) the viewport at top and bottom,
    /// as a fraction of its height.
    pub root_margin: f32,
    pub retrigger: Retrigger,
}

impl Default for GateParams {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: 0.0,
            retrigger: Retrigger::Once,
        }
    }
}

impl GateParams {
    pub const fn new(threshold: f32, root_margin: f32, retrigger: Retrigger) -> Self {
        Self {
            threshold,
            root_margin,
            retrigger,
        }
    }

    /// Threshold in `(0, 1]` and a margin that leaves some viewport behind.
    pub fn is_valid(&self) -> bool {
        self.threshold > 0.0
            && self.threshold <= 1.0
            && self.root_margin.is_finite()
            && self.root_margin > -0.5
    }

    fn satisfied_by(&self, ratio: f32) -> bool {
        if self.threshold <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.threshold
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateEvent {
    Activated,
    Deactivated,
}

/// Boolean derived from an element's intersection ratio with the viewport.
#[derive(Debug, Clone)]
pub struct ActivationGate {
    params: GateParams,
    active: bool,
    released: bool,
}

impl ActivationGate {
    pub fn new(params: GateParams) -> Self {
        Self {
            params,
            active: false,
            released: false,
        }
    }

    pub fn params(&self) -> GateParams {
        self.params
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A `Once` gate that already fired no longer needs observing.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Feed the latest intersection ratio; returns the edge crossed, if any.
    pub fn observe_ratio(&mut self, ratio: f32) -> Option<GateEvent> {
        if self.released {
            return None;
        }
        let visible = self.params.satisfied_by(ratio);
        match (self.active, visible) {
            (false, true) => {
                self.active = true;
                if self.params.retrigger == Retrigger::Once {
                    self.released = true;
                }
                Some(GateEvent::Activated)
            }
            (true, false) if self.params.retrigger == Retrigger::Always => {
                self.active = false;
                Some(GateEvent::Deactivated)
            }
            _ => None,
        }
    }
}
