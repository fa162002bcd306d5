//! Viewport observer with scoped observations.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::scroll::{Region, Viewport};

use super::gate::{ActivationGate, GateEvent, GateParams};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObservationId(u64);

struct Entry {
    id: ObservationId,
    region: Region,
    gate: Rc<RefCell<ActivationGate>>,
}

#[derive(Default)]
struct ObserverInner {
    next_id: u64,
    entries: Vec<Entry>,
    last_viewport: Option<Viewport>,
}

impl ObserverInner {
    fn drain_released(&mut self, shared: &Shared) {
        let released: Vec<ObservationId> =
            shared.pending_release.borrow_mut().drain(..).collect();
        if !released.is_empty() {
            self.entries.retain(|entry| !released.contains(&entry.id));
        }
    }
}

/// Releases that arrive while the registry is borrowed are queued in
/// `pending_release` and applied on the next borrow.
#[derive(Default)]
struct Shared {
    registry: RefCell<ObserverInner>,
    pending_release: RefCell<Vec<ObservationId>>,
}

/// Intersection ratio of `region` with `viewport`, after applying the gate's
/// root margin.
pub fn intersection_ratio(region: Region, viewport: Viewport, root_margin: f32) -> f32 {
    let margin = root_margin * viewport.height;
    region.visible_fraction(viewport.scroll_y - margin, viewport.bottom() + margin)
}

/// Tracks registered elements and drives their activation gates from
/// viewport updates.
///
/// Registrations are owned by the returned [`Observation`] handles. A handle
/// dropped for any reason (view torn down, early unmount) unregisters its
/// element; `Once` gates are additionally unregistered as soon as they fire.
#[derive(Clone, Default)]
pub struct ViewportObserver {
    shared: Rc<Shared>,
}

impl ViewportObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start observing `region`. If a viewport is already known the gate is
    /// evaluated immediately, so an element mounted on screen starts active.
    pub fn observe(&self, region: Region, params: GateParams) -> Observation {
        let mut inner = self.shared.registry.borrow_mut();
        inner.drain_released(&self.shared);
        let id = ObservationId(inner.next_id);
        inner.next_id += 1;

        let gate = Rc::new(RefCell::new(ActivationGate::new(params)));
        if let Some(viewport) = inner.last_viewport {
            gate.borrow_mut().observe_ratio(intersection_ratio(
                region,
                viewport,
                params.root_margin,
            ));
        }
        if !gate.borrow().is_released() {
            inner.entries.push(Entry {
                id,
                region,
                gate: gate.clone(),
            });
        }
        tracing::trace!(
            id = id.0,
            top = region.top,
            height = region.height,
            "observation registered"
        );

        Observation {
            id,
            gate,
            observer: Rc::downgrade(&self.shared),
        }
    }

    /// Re-evaluate every registered gate against `viewport`.
    pub fn update(&self, viewport: Viewport) -> Vec<(ObservationId, GateEvent)> {
        let mut inner = self.shared.registry.borrow_mut();
        inner.drain_released(&self.shared);
        inner.last_viewport = Some(viewport);

        let mut events = Vec::new();
        inner.entries.retain(|entry| {
            let mut gate = entry.gate.borrow_mut();
            let ratio = intersection_ratio(entry.region, viewport, gate.params().root_margin);
            if let Some(event) = gate.observe_ratio(ratio) {
                tracing::debug!(id = entry.id.0, ?event, ratio, "activation gate crossed");
                events.push((entry.id, event));
            }
            !gate.is_released()
        });
        events
    }

    /// Number of live registrations.
    pub fn len(&self) -> usize {
        let mut inner = self.shared.registry.borrow_mut();
        inner.drain_released(&self.shared);
        inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn set_region(&self, id: ObservationId, region: Region) {
        let mut inner = self.shared.registry.borrow_mut();
        if let Some(entry) = inner.entries.iter_mut().find(|e| e.id == id) {
            entry.region = region;
        }
    }

    fn release(shared: &Shared, id: ObservationId) {
        match shared.registry.try_borrow_mut() {
            Ok(mut inner) => inner.entries.retain(|entry| entry.id != id),
            Err(_) => {
                tracing::trace!(id = id.0, "observer busy, release queued");
                shared.pending_release.borrow_mut().push(id);
            }
        }
    }
}

impl fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.registry.borrow();
        f.debug_struct("ViewportObserver")
            .field("observations", &inner.entries.len())
            .field("last_viewport", &inner.last_viewport)
            .finish()
    }
}

/// Handle owning one registration on a [`ViewportObserver`].
#[must_use = "dropping an Observation stops observing immediately"]
pub struct Observation {
    id: ObservationId,
    gate: Rc<RefCell<ActivationGate>>,
    observer: Weak<Shared>,
}

impl Observation {
    pub fn id(&self) -> ObservationId {
        self.id
    }

    pub fn is_active(&self) -> bool {
        self.gate.borrow().is_active()
    }

    /// Whether the observer still evaluates this gate.
    pub fn is_observing(&self) -> bool {
        self.observer.upgrade().is_some_and(|shared| {
            !shared.pending_release.borrow().contains(&self.id)
                && shared.registry.borrow().entries.iter().any(|e| e.id == self.id)
        })
    }

    /// Move the observed element (layout changed).
    pub fn set_region(&self, region: Region) {
        if let Some(shared) = self.observer.upgrade() {
            ViewportObserver { shared }.set_region(self.id, region);
        }
    }
}

impl fmt::Debug for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observation")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        if let Some(shared) = self.observer.upgrade() {
            ViewportObserver::release(&shared, self.id);
        }
    }
}
