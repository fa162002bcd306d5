use std::hash::Hash;

/// At most one expanded entry at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion<K> {
    expanded: Option<K>,
}

impl<K> Default for Accordion<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<K: Eq + Hash + Clone> Accordion<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    /// Expand `key`, or collapse it if it already was. Returns whether it is
    /// expanded afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        if self.is_expanded(&key) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(key);
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_switches_and_collapses() {
        let mut faq = Accordion::new();
        assert!(faq.toggle(2u32));
        assert!(faq.toggle(4));
        assert!(!faq.is_expanded(&2));
        assert!(!faq.toggle(4));
        assert_eq!(faq.expanded(), None);
    }
}
