//! Observable state with explicit subscriptions.
//!
//! A [`Notifier`] fans an event out to registered callbacks; an
//! [`Observable`] pairs a value with a notifier and only notifies when the
//! value actually changes. Subscriptions are RAII guards: dropping one
//! removes the callback, including from inside a running notification.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); the engine runs on the
//! UI event loop.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<E> = Box<dyn FnMut(&E)>;

struct Registry<E> {
    next_id: Cell<u64>,
    callbacks: RefCell<Vec<(u64, Callback<E>)>>,
    // Mutations requested while `callbacks` is borrowed by `emit`.
    pending_add: RefCell<Vec<(u64, Callback<E>)>>,
    pending_remove: RefCell<Vec<u64>>,
}

impl<E> Registry<E> {
    fn new() -> Self {
        Self {
            next_id: Cell::new(0),
            callbacks: RefCell::new(Vec::new()),
            pending_add: RefCell::new(Vec::new()),
            pending_remove: RefCell::new(Vec::new()),
        }
    }

    fn flush_pending(&self) {
        let Ok(mut callbacks) = self.callbacks.try_borrow_mut() else {
            return;
        };
        callbacks.append(&mut self.pending_add.borrow_mut());
        let removed: Vec<u64> = self.pending_remove.borrow_mut().drain(..).collect();
        if !removed.is_empty() {
            callbacks.retain(|(id, _)| !removed.contains(id));
        }
    }
}

trait Detach {
    fn detach(&self, id: u64);
}

impl<E> Detach for Registry<E> {
    fn detach(&self, id: u64) {
        match self.callbacks.try_borrow_mut() {
            Ok(mut callbacks) => {
                callbacks.retain(|(cb_id, _)| *cb_id != id);
                self.pending_add.borrow_mut().retain(|(cb_id, _)| *cb_id != id);
            }
            Err(_) => self.pending_remove.borrow_mut().push(id),
        }
    }
}

/// Guard returned by `subscribe`; the callback stays registered while it lives.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<dyn Detach>,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.registry.strong_count() > 0))
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry.detach(self.id);
        }
    }
}

/// Event broadcaster for view-update callbacks.
pub struct Notifier<E> {
    registry: Rc<Registry<E>>,
}

impl<E: 'static> Notifier<E> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry::new()),
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&E) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        let entry: (u64, Callback<E>) = (id, Box::new(callback));
        match self.registry.callbacks.try_borrow_mut() {
            Ok(mut callbacks) => callbacks.push(entry),
            Err(_) => self.registry.pending_add.borrow_mut().push(entry),
        }
        let registry: Rc<dyn Detach> = self.registry.clone();
        Subscription {
            id,
            registry: Rc::downgrade(&registry),
        }
    }

    /// Call every registered callback with `event`.
    ///
    /// Re-entrant emits (a callback emitting on the same notifier) are
    /// dropped with a warning rather than recursing.
    pub fn emit(&self, event: &E) {
        match self.registry.callbacks.try_borrow_mut() {
            Ok(mut callbacks) => {
                for (_, callback) in callbacks.iter_mut() {
                    callback(event);
                }
            }
            Err(_) => {
                tracing::warn!("re-entrant notification dropped");
                return;
            }
        }
        self.registry.flush_pending();
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.flush_pending();
        self.registry.callbacks.borrow().len()
    }
}

impl<E: 'static> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Notifier<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field(
                "subscribers",
                &self.registry.callbacks.try_borrow().map(|c| c.len()).ok(),
            )
            .finish()
    }
}

/// A value holder that notifies subscribers when it changes.
#[derive(Debug)]
pub struct Observable<T> {
    value: T,
    notifier: Notifier<T>,
}

impl<T: PartialEq + 'static> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            notifier: Notifier::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value; returns `true` and notifies when it differs.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.notifier.emit(&self.value);
        true
    }

    /// Mutate in place; notifies only if the result differs from before.
    pub fn update(&mut self, f: impl FnOnce(&mut T))
    where
        T: Clone,
    {
        let before = self.value.clone();
        f(&mut self.value);
        if self.value != before {
            self.notifier.emit(&self.value);
        }
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        self.notifier.subscribe(callback)
    }
}

impl<T: PartialEq + Default + 'static> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_only_on_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut value = Observable::new(1);
        let sink = seen.clone();
        let _sub = value.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(value.set(2));
        assert!(!value.set(2));
        value.update(|v| *v += 1);
        value.update(|_| {});

        assert_eq!(*seen.borrow(), vec![2, 3]);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let count = Rc::new(Cell::new(0));
        let notifier = Notifier::<()>::new();
        let c = count.clone();
        let sub = notifier.subscribe(move |_| c.set(c.get() + 1));

        notifier.emit(&());
        drop(sub);
        notifier.emit(&());

        assert_eq!(count.get(), 1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn subscription_dropped_inside_callback_is_removed_after_emit() {
        let notifier = Notifier::<u32>::new();
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let inner = slot.clone();
        let sub = notifier.subscribe(move |_| {
            inner.borrow_mut().take();
        });
        *slot.borrow_mut() = Some(sub);

        notifier.emit(&1);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn subscription_outliving_notifier_is_harmless() {
        let notifier = Notifier::<u32>::new();
        let sub = notifier.subscribe(|_| {});
        drop(notifier);
        drop(sub);
    }
}
