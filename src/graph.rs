//! Triples, graph fragments and the data-graph lookup contract.
//!
//! [`Graph`] is a small in-memory, insertion-ordered triple set. It serves both
//! as the data graph being validated and as the graph fragment produced when a
//! constraint, shape or report is written back to RDF.

use std::collections::HashSet;

use indexmap::IndexSet;

use crate::ids::IdGenerator;
use crate::shape::Shape;
use crate::term::{Iri, Term};
use crate::vocabulary::{rdf, rdfs};

/// A subject-predicate-object statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triple {
    pub subject: Term,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    /// Creates a triple.
    pub fn new(subject: impl Into<Term>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

/// Read-only lookups a constraint needs from the graph under validation.
///
/// Implementations must be deterministic for a fixed graph snapshot. The
/// `Send + Sync` bounds let one data graph be shared by parallel workers.
pub trait DataGraph: Send + Sync {
    /// Resolves the value nodes of `shape` at `focus`.
    ///
    /// For a node shape this is the focus node itself; for a property shape
    /// it is every node reachable from the focus node along the shape's path.
    fn value_nodes(&self, shape: &Shape, focus: &Term) -> IndexSet<Term>;

    /// Resolves the focus nodes selected by the shape's declared targets.
    fn focus_nodes(&self, shape: &Shape) -> IndexSet<Term>;
}

/// An insertion-ordered set of triples.
///
/// Equality is set equality: two graphs holding the same triples are equal
/// regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    triples: IndexSet<Triple>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a triple. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Adds a triple built from its parts.
    pub fn add(&mut self, subject: impl Into<Term>, predicate: Iri, object: impl Into<Term>) {
        self.insert(Triple::new(subject, predicate, object));
    }

    /// Adds every triple of `other`, keeping this graph's triples first.
    pub fn merge(&mut self, other: Graph) {
        self.triples.extend(other.triples);
    }

    /// Returns the number of triples.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph holds no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns true if the graph holds the given triple.
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterates triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Iterates objects of triples matching `(subject, predicate, ?)`.
    pub fn objects<'g: 'q, 'q>(
        &'g self,
        subject: &'q Term,
        predicate: &'q Iri,
    ) -> impl Iterator<Item = &'g Term> + 'q {
        self.triples
            .iter()
            .filter(move |t| &t.subject == subject && &t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Returns the first object of `(subject, predicate, ?)`.
    pub fn object(&self, subject: &Term, predicate: &Iri) -> Option<&Term> {
        self.objects(subject, predicate).next()
    }

    /// Iterates subjects of triples matching `(?, predicate, object)`.
    pub fn subjects<'g: 'q, 'q>(
        &'g self,
        predicate: &'q Iri,
        object: &'q Term,
    ) -> impl Iterator<Item = &'g Term> + 'q {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate && &t.object == object)
            .map(|t| &t.subject)
    }

    /// Iterates subjects of every triple with the given predicate.
    pub fn subjects_with<'g: 'q, 'q>(
        &'g self,
        predicate: &'q Iri,
    ) -> impl Iterator<Item = &'g Term> + 'q {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate)
            .map(|t| &t.subject)
    }

    /// Iterates objects of every triple with the given predicate.
    pub fn objects_with<'g: 'q, 'q>(
        &'g self,
        predicate: &'q Iri,
    ) -> impl Iterator<Item = &'g Term> + 'q {
        self.triples
            .iter()
            .filter(move |t| &t.predicate == predicate)
            .map(|t| &t.object)
    }

    /// Returns the SHACL instances of `class`: nodes typed with the class or
    /// with any of its transitive `rdfs:subClassOf` descendants.
    pub fn instances_of(&self, class: &Iri) -> IndexSet<Term> {
        let mut classes: IndexSet<Term> = IndexSet::new();
        classes.insert(Term::Iri(class.clone()));

        let mut i = 0;
        while i < classes.len() {
            let current = classes[i].clone();
            let subclasses: Vec<Term> = self
                .subjects(&rdfs::SUB_CLASS_OF, &current)
                .cloned()
                .collect();
            classes.extend(subclasses);
            i += 1;
        }

        let rdf_type = rdf::TYPE;
        classes
            .iter()
            .flat_map(|class| self.subjects(&rdf_type, class))
            .cloned()
            .collect()
    }

    /// Reads the members of the RDF list starting at `head`.
    ///
    /// Returns `None` if the list is malformed: a missing `rdf:first` or
    /// `rdf:rest`, or a cycle.
    pub fn list_items(&self, head: &Term) -> Option<Vec<Term>> {
        let nil = Term::Iri(rdf::NIL);
        let mut items = Vec::new();
        let mut seen = HashSet::new();
        let mut node = head.clone();

        while node != nil {
            if !seen.insert(node.clone()) {
                return None;
            }
            items.push(self.object(&node, &rdf::FIRST)?.clone());
            node = self.object(&node, &rdf::REST)?.clone();
        }
        Some(items)
    }

    /// Writes `items` as an RDF list and returns its head (`rdf:nil` when empty).
    pub fn insert_list(&mut self, items: Vec<Term>, ids: &dyn IdGenerator) -> Term {
        let nodes: Vec<Term> = items.iter().map(|_| ids.fresh()).collect();
        for (i, item) in items.into_iter().enumerate() {
            let rest = nodes
                .get(i + 1)
                .cloned()
                .unwrap_or(Term::Iri(rdf::NIL));
            self.add(nodes[i].clone(), rdf::FIRST, item);
            self.add(nodes[i].clone(), rdf::REST, rest);
        }
        nodes.into_iter().next().unwrap_or(Term::Iri(rdf::NIL))
    }
}

impl DataGraph for Graph {
    fn value_nodes(&self, shape: &Shape, focus: &Term) -> IndexSet<Term> {
        match shape {
            Shape::Node(_) => IndexSet::from([focus.clone()]),
            Shape::Property(property) => property.path().evaluate(self, focus),
        }
    }

    fn focus_nodes(&self, shape: &Shape) -> IndexSet<Term> {
        shape
            .targets()
            .iter()
            .flat_map(|target| target.resolve(self))
            .collect()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(iter: I) -> Self {
        Self {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = indexmap::set::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn ex_iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{}", local))
    }

    #[test]
    fn test_insert_deduplicates() {
        let mut graph = Graph::new();
        assert!(graph.insert(Triple::new(ex("a"), ex_iri("p"), ex("b"))));
        assert!(!graph.insert(Triple::new(ex("a"), ex_iri("p"), ex("b"))));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_graph_equality_ignores_order() {
        let t1 = Triple::new(ex("a"), ex_iri("p"), ex("b"));
        let t2 = Triple::new(ex("a"), ex_iri("p"), ex("c"));
        let g1: Graph = [t1.clone(), t2.clone()].into_iter().collect();
        let g2: Graph = [t2, t1].into_iter().collect();
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_objects_and_subjects() {
        let mut graph = Graph::new();
        graph.add(ex("alice"), ex_iri("knows"), ex("bob"));
        graph.add(ex("alice"), ex_iri("knows"), ex("carol"));
        graph.add(ex("dave"), ex_iri("knows"), ex("bob"));

        let p = ex_iri("knows");
        let alice = ex("alice");
        let objects: Vec<_> = graph.objects(&alice, &p).collect();
        assert_eq!(objects, vec![&ex("bob"), &ex("carol")]);

        let bob = ex("bob");
        let subjects: Vec<_> = graph.subjects(&p, &bob).collect();
        assert_eq!(subjects, vec![&ex("alice"), &ex("dave")]);
    }

    #[test]
    fn test_instances_of_follows_subclasses() {
        let mut graph = Graph::new();
        graph.add(ex("Dog"), rdfs::SUB_CLASS_OF, ex("Animal"));
        graph.add(ex("Puppy"), rdfs::SUB_CLASS_OF, ex("Dog"));
        graph.add(ex("rex"), rdf::TYPE, ex("Dog"));
        graph.add(ex("bit"), rdf::TYPE, ex("Puppy"));
        graph.add(ex("tom"), rdf::TYPE, ex("Cat"));

        let animals = graph.instances_of(&ex_iri("Animal"));
        assert_eq!(animals.len(), 2);
        assert!(animals.contains(&ex("rex")));
        assert!(animals.contains(&ex("bit")));
    }

    #[test]
    fn test_list_round_trip() {
        let ids = SequentialIds::new("l");
        let mut graph = Graph::new();
        let head = graph.insert_list(vec![ex("a"), ex("b"), ex("c")], &ids);

        assert_eq!(graph.list_items(&head), Some(vec![ex("a"), ex("b"), ex("c")]));
    }

    #[test]
    fn test_empty_list_is_nil() {
        let ids = SequentialIds::default();
        let mut graph = Graph::new();
        let head = graph.insert_list(Vec::new(), &ids);
        assert_eq!(head, Term::Iri(rdf::NIL));
        assert!(graph.is_empty());
        assert_eq!(graph.list_items(&head), Some(Vec::new()));
    }

    #[test]
    fn test_malformed_list() {
        let mut graph = Graph::new();
        let head = Term::blank("l0");
        graph.add(head.clone(), rdf::FIRST, ex("a"));
        assert_eq!(graph.list_items(&head), None);

        // rdf:rest pointing back at itself
        graph.add(head.clone(), rdf::REST, head.clone());
        assert_eq!(graph.list_items(&head), None);
    }
}
