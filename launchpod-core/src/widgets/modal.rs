/// Open/closed flag for a dialog whose close can be locked by a pending
/// operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modal {
    open: bool,
    locked: bool,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close unless locked. Returns whether the modal is closed afterwards.
    pub fn close(&mut self) -> bool {
        if self.locked {
            tracing::debug!("modal close refused while locked");
            return false;
        }
        self.open = false;
        true
    }

    /// Lock while a submission runs.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_modal_stays_open() {
        let mut modal = Modal::default();
        modal.open();
        modal.set_locked(true);
        assert!(!modal.close());
        assert!(modal.is_open());
        modal.set_locked(false);
        assert!(modal.close());
        assert!(!modal.is_open());
    }
}
