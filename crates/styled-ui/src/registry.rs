use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Tracks which generated classes already have a stylesheet in the document.
///
/// Provided by [`ThemeProvider`](crate::theme::ThemeProvider). The first
/// component to claim a class becomes its owner and is the only one that
/// emits the `<style>` for it; every other instance just uses the class.
#[derive(Clone, Default)]
pub struct StyleRegistry {
    owners: Rc<RefCell<HashMap<String, u64>>>,
    next_owner: Rc<Cell<u64>>,
}

impl StyleRegistry {
    /// Hand out an id for a component instance.
    pub fn register(&self) -> u64 {
        let id = self.next_owner.get();
        self.next_owner.set(id + 1);
        id
    }

    /// Returns true when `owner` is responsible for emitting `class`.
    pub fn claim(&self, class: &str, owner: u64) -> bool {
        let mut owners = self.owners.borrow_mut();
        *owners.entry(class.to_string()).or_insert(owner) == owner
    }

    /// Forget every class owned by `owner` so the next claimant emits it.
    pub fn release(&self, owner: u64) {
        self.owners.borrow_mut().retain(|_, o| *o != owner);
    }

    pub fn len(&self) -> usize {
        self.owners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.owners.borrow().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_claimant_owns_the_class() {
        let registry = StyleRegistry::default();
        let a = registry.register();
        let b = registry.register();
        assert_ne!(a, b);

        assert!(registry.claim("btn-blue-medium-solid-1", a));
        assert!(!registry.claim("btn-blue-medium-solid-1", b));
        // the owner keeps emitting on re-render
        assert!(registry.claim("btn-blue-medium-solid-1", a));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn release_hands_classes_to_the_next_claimant() {
        let registry = StyleRegistry::default();
        let a = registry.register();
        let b = registry.register();
        registry.claim("x", a);
        registry.claim("y", a);
        registry.claim("z", b);

        registry.release(a);
        assert_eq!(registry.len(), 1);
        assert!(registry.claim("x", b));
    }

    #[test]
    fn clones_share_state() {
        let registry = StyleRegistry::default();
        let other = registry.clone();
        let owner = registry.register();
        registry.claim("x", owner);
        assert!(!other.claim("x", other.register()));
        assert!(!other.is_empty());
    }
}
