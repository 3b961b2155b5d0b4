//! Tests for sh:minCount and sh:pattern, and for mixing constraints on one shape.

use proptest::prelude::*;
use shapecheck::vocabulary::sh;
use shapecheck::{
    Constraint, ConstraintComponent, Graph, Iri, Literal, MinCountConstraint, NodeShape,
    PatternConstraint, PropertyPath, PropertyShape, Shape, ShapeError, Target, Term,
    ValidationContext, ValidationReport,
};
use stillwater::Semigroup;

fn ex(local: &str) -> Term {
    Term::iri(format!("http://example.org/{}", local))
}

fn people() -> Graph {
    let name = Iri::new("http://example.org/name");
    let email = Iri::new("http://example.org/email");

    let mut graph = Graph::new();
    graph.add(ex("alice"), name.clone(), Literal::string("Alice"));
    graph.add(ex("alice"), email.clone(), Literal::string("alice@example.org"));
    graph.add(ex("alice"), email.clone(), Literal::string("not-an-email"));
    graph.add(ex("bob"), name, Literal::string("bob"));
    graph.add(ex("bob"), email, Term::blank("e0"));
    graph
}

fn property_shape(id: &str, path: &str) -> PropertyShape {
    PropertyShape::new(ex(id), PropertyPath::predicate(format!("http://example.org/{}", path)))
        .target(Target::Node(ex("alice")))
        .target(Target::Node(ex("bob")))
        .target(Target::Node(ex("carol")))
}

#[test]
fn test_min_count_reports_missing_values() {
    let graph = people();
    let shape: Shape = property_shape("NameShape", "name").into();
    let context = ValidationContext::new(&graph, &shape);

    let report = MinCountConstraint::new(1).evaluate(&context);

    assert_eq!(report.len(), 1);
    assert_eq!(report.results()[0].focus_node(), &ex("carol"));
    assert_eq!(
        report.results()[0].source_constraint_component(),
        &sh::MIN_COUNT_CONSTRAINT_COMPONENT
    );
    assert!(report.results()[0].value().is_none());
}

#[test]
fn test_min_count_zero_always_conforms() {
    let graph = people();
    let shape: Shape = property_shape("NameShape", "name").into();
    let context = ValidationContext::new(&graph, &shape);

    assert!(MinCountConstraint::new(-1).evaluate(&context).conforms());
    assert!(MinCountConstraint::new(0).evaluate(&context).conforms());
}

#[test]
fn test_min_count_ignores_node_shapes() {
    let graph = people();
    let shape: Shape = NodeShape::new(ex("PersonShape"))
        .target(Target::Node(ex("carol")))
        .into();
    let context = ValidationContext::new(&graph, &shape);

    assert!(MinCountConstraint::new(5).evaluate(&context).is_empty());
}

#[test]
fn test_pattern_reports_each_failing_value() {
    let graph = people();
    let shape: Shape = property_shape("EmailShape", "email").into();
    let context = ValidationContext::new(&graph, &shape);

    let constraint = PatternConstraint::new("^[^@]+@[^@]+$", None).unwrap();
    let report = constraint.evaluate(&context);

    assert_eq!(report.len(), 2);
    assert_eq!(report.results()[0].focus_node(), &ex("alice"));
    assert_eq!(
        report.results()[0].value(),
        Some(&Term::Literal(Literal::string("not-an-email")))
    );
    assert_eq!(report.results()[1].focus_node(), &ex("bob"));
    assert_eq!(report.results()[1].value(), Some(&Term::blank("e0")));
    assert!(report
        .iter()
        .all(|r| r.source_constraint_component() == &sh::PATTERN_CONSTRAINT_COMPONENT));
}

#[test]
fn test_pattern_on_node_shape_checks_focus_node() {
    let graph = people();
    let shape: Shape = NodeShape::new(ex("PersonShape"))
        .target(Target::Node(ex("alice")))
        .target(Target::Node(ex("bob")))
        .into();
    let context = ValidationContext::new(&graph, &shape);

    let report = Constraint::pattern("alice$", None)
        .unwrap()
        .evaluate(&context);

    assert_eq!(report.len(), 1);
    assert_eq!(report.results()[0].value(), Some(&ex("bob")));
    assert!(report.results()[0].result_path().is_none());
}

#[test]
fn test_pattern_flags() {
    let graph = people();
    let shape: Shape = property_shape("NameShape", "name").into();
    let context = ValidationContext::new(&graph, &shape);

    let strict = Constraint::pattern("^[A-Z]", None).unwrap();
    let relaxed = Constraint::pattern("^[A-Z]", Some("i")).unwrap();

    assert_eq!(strict.evaluate(&context).len(), 1);
    assert!(relaxed.evaluate(&context).conforms());
}

#[test]
fn test_invalid_pattern_is_a_shape_error() {
    let error = Constraint::pattern("(", None).unwrap_err();
    assert!(matches!(error, ShapeError::InvalidPattern { .. }));
}

#[test]
fn test_constraints_accumulate_in_declaration_order() {
    let graph = people();
    let shape = property_shape("EmailShape", "email")
        .constraint(Constraint::max_count(1))
        .constraint(Constraint::min_count(1))
        .constraint(Constraint::pattern("@", None).unwrap());
    let shape: Shape = shape.into();
    let context = ValidationContext::new(&graph, &shape);

    let report = shape
        .constraints()
        .iter()
        .map(|c| c.evaluate(&context))
        .fold(ValidationReport::new(), Semigroup::combine);

    let components: Vec<_> = report
        .iter()
        .map(|r| r.source_constraint_component().clone())
        .collect();
    assert_eq!(
        components,
        vec![
            sh::MAX_COUNT_CONSTRAINT_COMPONENT,
            sh::MIN_COUNT_CONSTRAINT_COMPONENT,
            sh::PATTERN_CONSTRAINT_COMPONENT,
            sh::PATTERN_CONSTRAINT_COMPONENT,
        ]
    );
}

#[test]
fn test_every_result_has_a_distinct_id() {
    let graph = people();
    let shape: Shape = property_shape("EmailShape", "email").into();
    let context = ValidationContext::new(&graph, &shape);

    let report = Constraint::pattern("^$", None).unwrap().evaluate(&context);
    assert_eq!(report.len(), 3);
    assert_ne!(report.results()[0].id(), report.results()[1].id());
    assert_ne!(report.results()[1].id(), report.results()[2].id());
}

proptest! {
    #[test]
    fn prop_one_result_per_short_focus_node(
        counts in prop::collection::vec(0usize..6, 1..8),
        min in 0i64..6,
    ) {
        let has_child = Iri::new("http://example.org/hasChild");
        let names: Vec<String> = (0..counts.len()).map(|i| format!("p{}", i)).collect();

        let mut graph = Graph::new();
        let mut shape = PropertyShape::new(
            ex("ChildShape"),
            PropertyPath::predicate("http://example.org/hasChild"),
        );
        for (name, &count) in names.iter().zip(&counts) {
            for i in 0..count {
                graph.add(ex(name), has_child.clone(), ex(&format!("{}-child{}", name, i)));
            }
            shape = shape.target(Target::Node(ex(name)));
        }
        let shape: Shape = shape.into();
        let context = ValidationContext::new(&graph, &shape);

        let report = MinCountConstraint::new(min).evaluate(&context);
        let short = counts.iter().filter(|&&c| (c as i64) < min).count();

        prop_assert_eq!(report.len(), short);
        for name in &names {
            prop_assert!(report.for_focus_node(&ex(name)).len() <= 1);
        }
    }
}
