//! Shape targets: how a shape selects its focus nodes.

use indexmap::IndexSet;

use crate::graph::Graph;
use crate::term::{Iri, Term};
use crate::vocabulary::sh;

/// A target declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    /// `sh:targetNode`: the given node.
    Node(Term),
    /// `sh:targetClass`: every SHACL instance of the class.
    Class(Iri),
    /// `sh:targetSubjectsOf`: every subject of a triple with the predicate.
    SubjectsOf(Iri),
    /// `sh:targetObjectsOf`: every object of a triple with the predicate.
    ObjectsOf(Iri),
}

impl Target {
    /// Returns the focus nodes this target selects in `graph`.
    ///
    /// A `sh:targetNode` selects its node whether or not the graph mentions it.
    pub fn resolve(&self, graph: &Graph) -> IndexSet<Term> {
        match self {
            Target::Node(node) => IndexSet::from([node.clone()]),
            Target::Class(class) => graph.instances_of(class),
            Target::SubjectsOf(p) => graph.subjects_with(p).cloned().collect(),
            Target::ObjectsOf(p) => graph.objects_with(p).cloned().collect(),
        }
    }

    /// Returns the predicate that declares this target on a shape.
    pub fn predicate(&self) -> Iri {
        match self {
            Target::Node(_) => sh::TARGET_NODE,
            Target::Class(_) => sh::TARGET_CLASS,
            Target::SubjectsOf(_) => sh::TARGET_SUBJECTS_OF,
            Target::ObjectsOf(_) => sh::TARGET_OBJECTS_OF,
        }
    }

    /// Returns the object of the declaring triple.
    pub fn object(&self) -> Term {
        match self {
            Target::Node(node) => node.clone(),
            Target::Class(iri) | Target::SubjectsOf(iri) | Target::ObjectsOf(iri) => {
                Term::Iri(iri.clone())
            }
        }
    }

    /// Reads every target declared on `shape`.
    ///
    /// Class, subjects-of and objects-of targets whose object is not an IRI
    /// are skipped.
    pub fn from_graph(graph: &Graph, shape: &Term) -> Vec<Target> {
        let mut targets: Vec<Target> = graph
            .objects(shape, &sh::TARGET_NODE)
            .cloned()
            .map(Target::Node)
            .collect();

        let declarations: [(Iri, fn(Iri) -> Target); 3] = [
            (sh::TARGET_CLASS, Target::Class),
            (sh::TARGET_SUBJECTS_OF, Target::SubjectsOf),
            (sh::TARGET_OBJECTS_OF, Target::ObjectsOf),
        ];
        for (predicate, make) in &declarations {
            for object in graph.objects(shape, predicate) {
                match object.as_iri() {
                    Some(iri) => targets.push(make(iri.clone())),
                    None => tracing::warn!(
                        shape = %shape,
                        predicate = %predicate,
                        object = %object,
                        "ignoring target whose object is not an IRI"
                    ),
                }
            }
        }
        targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::rdf;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn ex_iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{}", local))
    }

    fn data() -> Graph {
        let mut graph = Graph::new();
        graph.add(ex("alice"), rdf::TYPE, ex("Person"));
        graph.add(ex("bob"), rdf::TYPE, ex("Person"));
        graph.add(ex("alice"), ex_iri("knows"), ex("bob"));
        graph.add(ex("carol"), ex_iri("knows"), ex("dave"));
        graph
    }

    #[test]
    fn test_target_node_selects_unmentioned_node() {
        let target = Target::Node(ex("nobody"));
        assert_eq!(
            target.resolve(&data()).into_iter().collect::<Vec<_>>(),
            vec![ex("nobody")]
        );
    }

    #[test]
    fn test_target_class() {
        let nodes = Target::Class(ex_iri("Person")).resolve(&data());
        assert_eq!(nodes.into_iter().collect::<Vec<_>>(), vec![ex("alice"), ex("bob")]);
    }

    #[test]
    fn test_target_subjects_and_objects_of() {
        let graph = data();
        let subjects = Target::SubjectsOf(ex_iri("knows")).resolve(&graph);
        assert_eq!(subjects.into_iter().collect::<Vec<_>>(), vec![ex("alice"), ex("carol")]);

        let objects = Target::ObjectsOf(ex_iri("knows")).resolve(&graph);
        assert_eq!(objects.into_iter().collect::<Vec<_>>(), vec![ex("bob"), ex("dave")]);
    }

    #[test]
    fn test_from_graph_reads_all_kinds() {
        let shape = ex("PersonShape");
        let mut graph = Graph::new();
        graph.add(shape.clone(), sh::TARGET_NODE, ex("alice"));
        graph.add(shape.clone(), sh::TARGET_CLASS, ex("Person"));
        graph.add(shape.clone(), sh::TARGET_SUBJECTS_OF, ex("knows"));
        graph.add(shape.clone(), sh::TARGET_OBJECTS_OF, ex("knows"));

        let targets = Target::from_graph(&graph, &shape);
        assert_eq!(
            targets,
            vec![
                Target::Node(ex("alice")),
                Target::Class(ex_iri("Person")),
                Target::SubjectsOf(ex_iri("knows")),
                Target::ObjectsOf(ex_iri("knows")),
            ]
        );
    }
}
