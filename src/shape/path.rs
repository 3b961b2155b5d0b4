//! SHACL property paths.

use std::fmt::{self, Display};

use indexmap::IndexSet;

use crate::graph::Graph;
use crate::ids::IdGenerator;
use crate::term::{Iri, Term};
use crate::vocabulary::sh;

/// A property path: how a property shape reaches its value nodes from a
/// focus node.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyPath {
    /// A single predicate, e.g. `ex:hasChild`.
    Predicate(Iri),
    /// The inverse of a path, e.g. `^ex:hasChild`.
    Inverse(Box<PropertyPath>),
    /// Paths followed one after another.
    Sequence(Vec<PropertyPath>),
    /// The union of several paths.
    Alternative(Vec<PropertyPath>),
}

impl PropertyPath {
    /// Creates a predicate path.
    pub fn predicate(iri: impl Into<String>) -> Self {
        PropertyPath::Predicate(Iri::new(iri))
    }

    /// Wraps a path in an inverse.
    pub fn inverse(path: PropertyPath) -> Self {
        PropertyPath::Inverse(Box::new(path))
    }

    /// Evaluates the path starting at `focus`.
    pub fn evaluate(&self, graph: &Graph, focus: &Term) -> IndexSet<Term> {
        match self {
            PropertyPath::Predicate(p) => graph.objects(focus, p).cloned().collect(),
            PropertyPath::Inverse(inner) => inner.evaluate_inverse(graph, focus),
            PropertyPath::Sequence(steps) => steps.iter().fold(
                IndexSet::from([focus.clone()]),
                |current, step| {
                    current
                        .iter()
                        .flat_map(|node| step.evaluate(graph, node))
                        .collect()
                },
            ),
            PropertyPath::Alternative(paths) => paths
                .iter()
                .flat_map(|path| path.evaluate(graph, focus))
                .collect(),
        }
    }

    /// Evaluates the path backwards: every node from which `target` is reachable.
    fn evaluate_inverse(&self, graph: &Graph, target: &Term) -> IndexSet<Term> {
        match self {
            PropertyPath::Predicate(p) => graph.subjects(p, target).cloned().collect(),
            PropertyPath::Inverse(inner) => inner.evaluate(graph, target),
            PropertyPath::Sequence(steps) => steps.iter().rev().fold(
                IndexSet::from([target.clone()]),
                |current, step| {
                    current
                        .iter()
                        .flat_map(|node| step.evaluate_inverse(graph, node))
                        .collect()
                },
            ),
            PropertyPath::Alternative(paths) => paths
                .iter()
                .flat_map(|path| path.evaluate_inverse(graph, target))
                .collect(),
        }
    }

    /// Writes the SHACL encoding of this path into `graph` and returns the
    /// node that represents it.
    ///
    /// Predicate paths are represented by the predicate IRI itself and add
    /// no triples.
    pub fn to_graph(&self, graph: &mut Graph, ids: &dyn IdGenerator) -> Term {
        match self {
            PropertyPath::Predicate(p) => Term::Iri(p.clone()),
            PropertyPath::Inverse(inner) => {
                let node = ids.fresh();
                let inner = inner.to_graph(graph, ids);
                graph.add(node.clone(), sh::INVERSE_PATH, inner);
                node
            }
            PropertyPath::Sequence(steps) => {
                let items = steps.iter().map(|step| step.to_graph(graph, ids)).collect();
                graph.insert_list(items, ids)
            }
            PropertyPath::Alternative(paths) => {
                let node = ids.fresh();
                let items = paths.iter().map(|path| path.to_graph(graph, ids)).collect();
                let list = graph.insert_list(items, ids);
                graph.add(node.clone(), sh::ALTERNATIVE_PATH, list);
                node
            }
        }
    }

    /// Reads the path represented by `node`.
    ///
    /// Returns `None` when `node` is not a well-formed SHACL path.
    pub fn from_graph(graph: &Graph, node: &Term) -> Option<Self> {
        match node {
            Term::Iri(iri) => Some(PropertyPath::Predicate(iri.clone())),
            Term::BlankNode(_) => {
                if let Some(inner) = graph.object(node, &sh::INVERSE_PATH) {
                    return Self::from_graph(graph, inner).map(Self::inverse);
                }
                if let Some(list) = graph.object(node, &sh::ALTERNATIVE_PATH) {
                    let paths = Self::list_from_graph(graph, list)?;
                    return (paths.len() >= 2).then_some(PropertyPath::Alternative(paths));
                }
                let steps = Self::list_from_graph(graph, node)?;
                (steps.len() >= 2).then_some(PropertyPath::Sequence(steps))
            }
            Term::Literal(_) => None,
        }
    }

    fn list_from_graph(graph: &Graph, head: &Term) -> Option<Vec<Self>> {
        graph
            .list_items(head)?
            .iter()
            .map(|item| Self::from_graph(graph, item))
            .collect()
    }
}

impl Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyPath::Predicate(p) => write!(f, "{}", p),
            PropertyPath::Inverse(inner) => write!(f, "^{}", inner),
            PropertyPath::Sequence(steps) => write_joined(f, steps, " / "),
            PropertyPath::Alternative(paths) => write_joined(f, paths, " | "),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, paths: &[PropertyPath], sep: &str) -> fmt::Result {
    write!(f, "(")?;
    for (i, path) in paths.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", path)?;
    }
    write!(f, ")")
}
