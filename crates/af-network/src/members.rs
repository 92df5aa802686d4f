use std::ptr;
use std::rc::Rc;

/// Insertion-ordered set of shared nodes, keyed by allocation identity.
pub(crate) struct Members<T: ?Sized> {
    items: Vec<Rc<T>>,
}

impl<T: ?Sized> Members<T> {
    pub(crate) fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub(crate) fn contains<U: ?Sized>(&self, node: &Rc<U>) -> bool {
        self.position(node).is_some()
    }

    /// Hands `node` back and leaves the set untouched if it is already present.
    pub(crate) fn insert(&mut self, node: Rc<T>) -> Result<(), Rc<T>> {
        if self.contains(&node) {
            return Err(node);
        }
        self.items.push(node);
        Ok(())
    }

    pub(crate) fn remove<U: ?Sized>(&mut self, node: &Rc<U>) -> bool {
        match self.position(node) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    pub(crate) fn as_slice(&self) -> &[Rc<T>] {
        &self.items
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position<U: ?Sized>(&self, node: &Rc<U>) -> Option<usize> {
        self.items
            .iter()
            .position(|m| ptr::addr_eq(Rc::as_ptr(m), Rc::as_ptr(node)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_not_equality() {
        let a = Rc::new(1_u8);
        let b = Rc::new(1_u8);
        let mut set: Members<u8> = Members::new();

        assert!(set.insert(a.clone()).is_ok());
        let rejected = set.insert(a.clone()).unwrap_err();
        assert!(Rc::ptr_eq(&rejected, &a));
        assert!(set.insert(b.clone()).is_ok());
        assert_eq!(set.len(), 2);

        assert!(set.remove(&a));
        assert!(!set.remove(&a));
        assert!(set.contains(&b));
        assert!(!set.is_empty());
    }

    #[test]
    fn remove_keeps_order() {
        let nodes: Vec<Rc<u8>> = (0..4).map(Rc::new).collect();
        let mut set: Members<u8> = Members::new();
        for n in &nodes {
            set.insert(n.clone()).unwrap();
        }
        set.remove(&nodes[1]);
        let order: Vec<u8> = set.as_slice().iter().map(|n| **n).collect();
        assert_eq!(order, vec![0, 2, 3]);
    }
}
