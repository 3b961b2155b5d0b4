//! Fresh identifier generation.
//!
//! Every [`ValidationResult`](crate::ValidationResult) carries a freshly minted
//! identifier. Generation is an injected capability so tests can swap the
//! random default for a deterministic sequence.

use std::sync::atomic::{AtomicUsize, Ordering};

use uuid::Uuid;

use crate::term::Term;

/// A source of fresh, unique blank nodes.
///
/// Implementations must be safe to call from several validation workers at once.
pub trait IdGenerator: Send + Sync {
    /// Returns a node not returned before by this generator.
    fn fresh(&self) -> Term;
}

/// Mints blank nodes labelled with random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn fresh(&self) -> Term {
        Term::blank(format!("r{}", Uuid::new_v4().simple()))
    }
}

/// Mints blank nodes `<prefix>0`, `<prefix>1`, ... in call order.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicUsize,
}

impl SequentialIds {
    /// Creates a generator whose labels start with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicUsize::new(0),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("b")
    }
}

impl IdGenerator for SequentialIds {
    fn fresh(&self) -> Term {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        Term::blank(format!("{}{}", self.prefix, n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_ids_are_unique_blank_nodes() {
        let ids = UuidIds;
        let minted: HashSet<Term> = (0..100).map(|_| ids.fresh()).collect();
        assert_eq!(minted.len(), 100);
        assert!(minted.iter().all(Term::is_blank_node));
    }

    #[test]
    fn test_sequential_ids_are_deterministic() {
        let ids = SequentialIds::new("res");
        assert_eq!(ids.fresh(), Term::blank("res0"));
        assert_eq!(ids.fresh(), Term::blank("res1"));
        assert_eq!(ids.fresh(), Term::blank("res2"));
    }
}
