//! Cardinality constraints (`sh:maxCount`, `sh:minCount`).
//!
//! Both apply to property shapes only and report at most one result per focus
//! node, without a value node, however far the bound is missed.

use crate::context::ValidationContext;
use crate::error::ShapeError;
use crate::graph::Graph;
use crate::report::ValidationReport;
use crate::shape::Shape;
use crate::term::{Iri, Literal, Term};
use crate::vocabulary::sh;

use super::ConstraintComponent;

/// Upper bound on the number of value nodes per focus node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaxCountConstraint {
    max_count: u64,
}

impl MaxCountConstraint {
    /// Creates the constraint. Negative bounds are clamped to 0.
    pub fn new(max_count: i64) -> Self {
        Self {
            max_count: clamp(max_count),
        }
    }

    /// Returns the bound.
    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    /// Reads every `sh:maxCount` declared on `shape`.
    pub fn from_graph(graph: &Graph, shape: &Term) -> Result<Vec<Self>, ShapeError> {
        counts(graph, shape, &sh::MAX_COUNT).map(|counts| counts.into_iter().map(Self::new).collect())
    }
}

impl ConstraintComponent for MaxCountConstraint {
    fn component(&self) -> Iri {
        sh::MAX_COUNT_CONSTRAINT_COMPONENT
    }

    fn evaluate(&self, context: &ValidationContext<'_>) -> ValidationReport {
        let mut report = ValidationReport::new();

        match context.shape() {
            // Cardinality is only meaningful along a path
            Shape::Node(_) => {}

            Shape::Property(_) => {
                for focus in context.foci() {
                    if focus.value_count() as u64 > self.max_count {
                        report.push(context.result(&focus, self.component()));
                    }
                }
            }
        }

        report
    }

    fn to_graph(&self, shape: Option<&Term>) -> Graph {
        count_graph(shape, sh::MAX_COUNT, self.max_count)
    }
}

/// Lower bound on the number of value nodes per focus node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MinCountConstraint {
    min_count: u64,
}

impl MinCountConstraint {
    /// Creates the constraint. Negative bounds are clamped to 0.
    pub fn new(min_count: i64) -> Self {
        Self {
            min_count: clamp(min_count),
        }
    }

    /// Returns the bound.
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// Reads every `sh:minCount` declared on `shape`.
    pub fn from_graph(graph: &Graph, shape: &Term) -> Result<Vec<Self>, ShapeError> {
        counts(graph, shape, &sh::MIN_COUNT).map(|counts| counts.into_iter().map(Self::new).collect())
    }
}

impl ConstraintComponent for MinCountConstraint {
    fn component(&self) -> Iri {
        sh::MIN_COUNT_CONSTRAINT_COMPONENT
    }

    fn evaluate(&self, context: &ValidationContext<'_>) -> ValidationReport {
        let mut report = ValidationReport::new();

        if let Shape::Property(_) = context.shape() {
            for focus in context.foci() {
                if (focus.value_count() as u64) < self.min_count {
                    report.push(context.result(&focus, self.component()));
                }
            }
        }

        report
    }

    fn to_graph(&self, shape: Option<&Term>) -> Graph {
        count_graph(shape, sh::MIN_COUNT, self.min_count)
    }
}

fn clamp(count: i64) -> u64 {
    u64::try_from(count).unwrap_or(0)
}

fn count_graph(shape: Option<&Term>, predicate: Iri, count: u64) -> Graph {
    let mut graph = Graph::new();
    if let Some(shape) = shape {
        graph.add(
            shape.clone(),
            predicate,
            Literal::typed(count.to_string(), crate::vocabulary::xsd::INTEGER),
        );
    }
    graph
}

fn counts(graph: &Graph, shape: &Term, predicate: &Iri) -> Result<Vec<i64>, ShapeError> {
    graph
        .objects(shape, predicate)
        .map(|object| parse_count(shape, predicate, object))
        .collect()
}

/// Reads one count parameter value.
pub(super) fn parse_count(shape: &Term, predicate: &Iri, object: &Term) -> Result<i64, ShapeError> {
    object
        .as_literal()
        .and_then(Literal::as_integer)
        .ok_or_else(|| {
            ShapeError::invalid_constraint(
                shape,
                predicate,
                format!("expected an integer literal, found {}", object),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use crate::vocabulary::xsd;

    fn shape_id() -> Term {
        Term::iri("http://example.org/ChildShape")
    }

    #[test]
    fn test_negative_bounds_clamp_to_zero() {
        assert_eq!(MaxCountConstraint::new(-1).max_count(), 0);
        assert_eq!(MaxCountConstraint::new(i64::MIN).max_count(), 0);
        assert_eq!(MinCountConstraint::new(-5).min_count(), 0);
    }

    #[test]
    fn test_non_negative_bounds_are_kept() {
        assert_eq!(MaxCountConstraint::new(0).max_count(), 0);
        assert_eq!(MaxCountConstraint::new(3).max_count(), 3);
        assert_eq!(MaxCountConstraint::new(i64::MAX).max_count(), i64::MAX as u64);
    }

    #[test]
    fn test_max_count_to_graph_emits_one_integer_triple() {
        let graph = MaxCountConstraint::new(2).to_graph(Some(&shape_id()));

        assert_eq!(graph.len(), 1);
        assert!(graph.contains(&Triple::new(
            shape_id(),
            sh::MAX_COUNT,
            Literal::typed("2", xsd::INTEGER)
        )));
    }

    #[test]
    fn test_to_graph_without_subject_is_empty() {
        assert!(MaxCountConstraint::new(2).to_graph(None).is_empty());
        assert!(MinCountConstraint::new(2).to_graph(None).is_empty());
    }

    #[test]
    fn test_clamped_bound_serializes_as_zero() {
        let graph = MaxCountConstraint::new(-4).to_graph(Some(&shape_id()));
        assert!(graph.contains(&Triple::new(shape_id(), sh::MAX_COUNT, Literal::integer(0))));
    }

    #[test]
    fn test_from_graph_round_trip() {
        let original = MaxCountConstraint::new(7);
        let graph = original.to_graph(Some(&shape_id()));
        assert_eq!(
            MaxCountConstraint::from_graph(&graph, &shape_id()).unwrap(),
            vec![original]
        );
    }

    #[test]
    fn test_from_graph_clamps_negative_literal() {
        let mut graph = Graph::new();
        graph.add(shape_id(), sh::MIN_COUNT, Literal::integer(-2));
        assert_eq!(
            MinCountConstraint::from_graph(&graph, &shape_id()).unwrap(),
            vec![MinCountConstraint::new(0)]
        );
    }

    #[test]
    fn test_from_graph_rejects_non_integer() {
        let mut graph = Graph::new();
        graph.add(shape_id(), sh::MAX_COUNT, Literal::string("two"));

        let error = MaxCountConstraint::from_graph(&graph, &shape_id()).unwrap_err();
        assert!(matches!(error, ShapeError::InvalidConstraint { .. }));
        assert!(error.to_string().contains("maxCount"));
    }

    #[test]
    fn test_from_graph_without_declaration() {
        assert!(MaxCountConstraint::from_graph(&Graph::new(), &shape_id())
            .unwrap()
            .is_empty());
    }
}
