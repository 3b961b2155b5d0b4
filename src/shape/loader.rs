//! Reading shapes back from a shapes graph.

use indexmap::IndexSet;

use crate::constraint::Constraint;
use crate::error::ShapeError;
use crate::graph::Graph;
use crate::term::{Literal, Term};
use crate::vocabulary::{rdf, sh};

use super::{NodeShape, PropertyPath, PropertyShape, Severity, Shape, Target};

/// Loads every top-level shape declared in `graph`, in the order their
/// subjects first appear.
///
/// A subject is a property shape if it has an `sh:path` or is typed
/// `sh:PropertyShape`, and a node shape if it is typed `sh:NodeShape` or
/// declares targets or `sh:property` links. Property shapes referenced with
/// `sh:property` are nested under their node shape instead of being returned
/// at the top level.
///
/// # Errors
///
/// Returns the first malformed declaration found: a property shape without
/// a usable path, an unknown severity, an ill-typed constraint parameter or
/// a repeated `sh:flags`.
pub fn load(graph: &Graph) -> Result<Vec<Shape>, ShapeError> {
    let nested: IndexSet<&Term> = graph.objects_with(&sh::PROPERTY).collect();
    let subjects: IndexSet<&Term> = graph.iter().map(|t| &t.subject).collect();

    let mut shapes = Vec::new();
    for subject in subjects {
        let shape = if is_property_shape(graph, subject) {
            if nested.contains(subject) {
                continue;
            }
            Shape::Property(load_property_shape(graph, subject)?)
        } else if is_node_shape(graph, subject) {
            Shape::Node(load_node_shape(graph, subject)?)
        } else {
            continue;
        };
        shape.check()?;
        shapes.push(shape);
    }

    tracing::debug!(shapes = shapes.len(), triples = graph.len(), "loaded shapes graph");
    Ok(shapes)
}

fn has_type(graph: &Graph, subject: &Term, class: Term) -> bool {
    graph.objects(subject, &rdf::TYPE).any(|t| t == &class)
}

fn is_property_shape(graph: &Graph, subject: &Term) -> bool {
    graph.object(subject, &sh::PATH).is_some()
        || has_type(graph, subject, Term::Iri(sh::PROPERTY_SHAPE))
}

fn is_node_shape(graph: &Graph, subject: &Term) -> bool {
    has_type(graph, subject, Term::Iri(sh::NODE_SHAPE))
        || graph.object(subject, &sh::PROPERTY).is_some()
        || !Target::from_graph(graph, subject).is_empty()
}

/// Declarations shared by node and property shapes.
struct Common {
    targets: Vec<Target>,
    constraints: Vec<Constraint>,
    severity: Severity,
    messages: Vec<Literal>,
    deactivated: bool,
}

fn load_common(graph: &Graph, id: &Term) -> Result<Common, ShapeError> {
    let severity = match graph.object(id, &sh::SEVERITY) {
        None => Severity::default(),
        Some(Term::Iri(iri)) => Severity::from_iri(iri)
            .ok_or_else(|| ShapeError::UnknownSeverity(Term::Iri(iri.clone())))?,
        Some(other) => return Err(ShapeError::UnknownSeverity(other.clone())),
    };

    let mut messages = Vec::new();
    for message in graph.objects(id, &sh::MESSAGE) {
        match message.as_literal() {
            Some(literal) => messages.push(literal.clone()),
            None => tracing::warn!(shape = %id, message = %message, "ignoring non-literal sh:message"),
        }
    }

    let deactivated = graph
        .object(id, &sh::DEACTIVATED)
        .and_then(Term::as_literal)
        .and_then(Literal::as_boolean)
        .unwrap_or(false);

    Ok(Common {
        targets: Target::from_graph(graph, id),
        constraints: Constraint::from_graph(graph, id)?,
        severity,
        messages,
        deactivated,
    })
}

fn load_node_shape(graph: &Graph, id: &Term) -> Result<NodeShape, ShapeError> {
    let common = load_common(graph, id)?;

    let mut shape = NodeShape::new(id.clone())
        .with_severity(common.severity)
        .deactivated(common.deactivated);
    for target in common.targets {
        shape = shape.target(target);
    }
    for message in common.messages {
        shape = shape.message(message);
    }
    for constraint in common.constraints {
        shape = shape.constraint(constraint);
    }
    for property in graph.objects(id, &sh::PROPERTY) {
        shape = shape.property(load_property_shape(graph, property)?);
    }
    Ok(shape)
}

fn load_property_shape(graph: &Graph, id: &Term) -> Result<PropertyShape, ShapeError> {
    let path_node = graph
        .object(id, &sh::PATH)
        .ok_or_else(|| ShapeError::MissingPath { shape: id.clone() })?;
    let path = PropertyPath::from_graph(graph, path_node).ok_or_else(|| ShapeError::InvalidPath {
        shape: id.clone(),
        message: format!("{} is not a well-formed SHACL path", path_node),
    })?;

    let common = load_common(graph, id)?;

    let mut shape = PropertyShape::new(id.clone(), path)
        .with_severity(common.severity)
        .deactivated(common.deactivated);
    for target in common.targets {
        shape = shape.target(target);
    }
    for message in common.messages {
        shape = shape.message(message);
    }
    for constraint in common.constraints {
        shape = shape.constraint(constraint);
    }
    Ok(shape)
}
