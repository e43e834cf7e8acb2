//! Scoped ownership of global event listeners.
//!
//! A [`ListenerSet`] owns every listener one component registered.
//! Acquisition is all-or-nothing, and every listener is detached exactly
//! once when the set is dropped, whether that happens on unmount, on an
//! error partway through acquisition, or when the component replaces its
//! registration.

/// A registered listener that can be removed from its target.
pub trait Detach {
    /// Remove the listener from whatever it was registered on.
    fn detach(self);
}

/// Listeners registered by one owner, detached together on drop.
#[derive(Debug)]
#[must_use = "dropping a ListenerSet detaches its listeners immediately"]
pub struct ListenerSet<L: Detach> {
    active: Vec<L>,
}

impl<L: Detach> ListenerSet<L> {
    /// Register one listener per item.
    ///
    /// If `attach` fails for any item, the listeners registered so far
    /// are detached before the error is returned.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `attach`.
    pub fn acquire<T, E>(
        items: impl IntoIterator<Item = T>,
        mut attach: impl FnMut(T) -> Result<L, E>,
    ) -> Result<Self, E> {
        let mut set = Self { active: Vec::new() };
        for item in items {
            set.active.push(attach(item)?);
        }
        Ok(set)
    }

    /// Number of listeners currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` if the set holds no listeners.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Detach every listener now.
    pub fn release(self) {
        drop(self);
    }
}

impl<L: Detach> Drop for ListenerSet<L> {
    fn drop(&mut self) {
        // Reverse registration order.
        while let Some(listener) = self.active.pop() {
            listener.detach();
        }
    }
}
