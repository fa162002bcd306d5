//! IndexCarousel: wraparound index over a fixed, ordered list of items

use crate::error::CarouselError;
use crate::observable::{Notifier, Subscription};

/// Which way the active item moved; drives the slide direction of the
/// outgoing/incoming card animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Emitted once for every navigation that actually changed the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexChange {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
}

/// Current index into `len` items; `current < len` holds at all times.
///
/// Navigation is synchronous and immediate. Rapid calls are not queued:
/// each one applies on top of the previous, so the last call wins.
#[derive(Debug)]
pub struct IndexCarousel {
    current: usize,
    len: usize,
    changes: Notifier<IndexChange>,
}

impl IndexCarousel {
    pub fn new(len: usize) -> Result<Self, CarouselError> {
        if len == 0 {
            return Err(CarouselError::Empty);
        }
        Ok(Self {
            current: 0,
            len,
            changes: Notifier::new(),
        })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; an empty carousel cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Register a view-update callback for index changes.
    pub fn subscribe(
        &self,
        callback: impl FnMut(&IndexChange) + 'static,
    ) -> Subscription {
        self.changes.subscribe(callback)
    }

    /// `current = (current + 1) mod len`.
    pub fn next(&mut self) -> Option<IndexChange> {
        let to = (self.current + 1) % self.len;
        self.apply(to, Direction::Forward)
    }

    /// `current = (current + len - 1) mod len`.
    pub fn prev(&mut self) -> Option<IndexChange> {
        let to = (self.current + self.len - 1) % self.len;
        self.apply(to, Direction::Backward)
    }

    /// Jump straight to `index`.
    ///
    /// Out-of-range indices (including negative ones) are rejected and leave
    /// the carousel untouched. Jumping to the current index is a no-op that
    /// emits nothing.
    pub fn jump_to(
        &mut self,
        index: isize,
    ) -> Result<Option<IndexChange>, CarouselError> {
        let target = usize::try_from(index)
            .ok()
            .filter(|i| *i < self.len)
            .ok_or(CarouselError::IndexOutOfRange {
                index,
                len: self.len,
            })?;
        let direction = if target >= self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        Ok(self.apply(target, direction))
    }

    fn apply(&mut self, to: usize, direction: Direction) -> Option<IndexChange> {
        if to == self.current {
            return None;
        }
        let change = IndexChange {
            from: self.current,
            to,
            direction,
        };
        self.current = to;
        tracing::debug!(
            from = change.from,
            to = change.to,
            len = self.len,
            "carousel index changed"
        );
        self.changes.emit(&change);
        Some(change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn empty_carousel_is_rejected() {
        assert_eq!(IndexCarousel::new(0).unwrap_err(), CarouselError::Empty);
    }

    #[test]
    fn wraparound_in_both_directions() {
        let mut carousel = IndexCarousel::new(5).unwrap();
        carousel.prev();
        assert_eq!(carousel.current(), 4);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn next_cycles_back_to_start() {
        for len in 1..=7 {
            let mut carousel = IndexCarousel::new(len).unwrap();
            carousel.jump_to((len / 2) as isize).unwrap();
            let start = carousel.current();
            for _ in 0..len {
                carousel.next();
            }
            assert_eq!(carousel.current(), start, "len {len}");
        }
    }

    #[test]
    fn prev_inverts_next() {
        for len in 1..=6 {
            for start in 0..len {
                let mut carousel = IndexCarousel::new(len).unwrap();
                carousel.jump_to(start as isize).unwrap();
                carousel.next();
                carousel.prev();
                assert_eq!(carousel.current(), start);
            }
        }
    }

    #[test]
    fn single_item_navigation_is_a_no_op() {
        let mut carousel = IndexCarousel::new(1).unwrap();
        assert_eq!(carousel.next(), None);
        assert_eq!(carousel.prev(), None);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn jump_out_of_range_leaves_state_unchanged() {
        let mut carousel = IndexCarousel::new(4).unwrap();
        carousel.jump_to(2).unwrap();
        for bad in [-1, -10, 4, 99] {
            assert_eq!(
                carousel.jump_to(bad),
                Err(CarouselError::IndexOutOfRange { index: bad, len: 4 })
            );
            assert_eq!(carousel.current(), 2);
        }
    }

    #[test]
    fn jump_to_current_emits_nothing() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut carousel = IndexCarousel::new(3).unwrap();
        let sink = events.clone();
        let _sub = carousel.subscribe(move |change| sink.borrow_mut().push(*change));

        assert_eq!(carousel.jump_to(0), Ok(None));
        carousel.jump_to(2).unwrap();
        carousel.next();

        assert_eq!(
            *events.borrow(),
            vec![
                IndexChange {
                    from: 0,
                    to: 2,
                    direction: Direction::Forward
                },
                IndexChange {
                    from: 2,
                    to: 0,
                    direction: Direction::Forward
                },
            ]
        );
    }

    #[test]
    fn rapid_calls_apply_in_order_last_wins() {
        let mut carousel = IndexCarousel::new(6).unwrap();
        carousel.next();
        carousel.next();
        carousel.jump_to(5).unwrap();
        carousel.prev();
        assert_eq!(carousel.current(), 4);
    }
}
