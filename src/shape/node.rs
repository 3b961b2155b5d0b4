//! Node shapes.

use crate::constraint::Constraint;
use crate::term::{Literal, Term};

use super::{PropertyShape, Severity, Shape, Target};

/// A shape whose constraints apply to the focus node itself.
///
/// Property shapes attached with [`NodeShape::property`] are validated against
/// the node shape's focus nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShape {
    id: Term,
    targets: Vec<Target>,
    constraints: Vec<Constraint>,
    properties: Vec<Shape>,
    severity: Severity,
    messages: Vec<Literal>,
    deactivated: bool,
}

impl NodeShape {
    /// Creates a node shape with no targets or constraints.
    pub fn new(id: impl Into<Term>) -> Self {
        Self {
            id: id.into(),
            targets: Vec::new(),
            constraints: Vec::new(),
            properties: Vec::new(),
            severity: Severity::default(),
            messages: Vec::new(),
            deactivated: false,
        }
    }

    /// Adds a target.
    pub fn target(mut self, target: Target) -> Self {
        self.targets.push(target);
        self
    }

    /// Adds a constraint.
    pub fn constraint(mut self, constraint: impl Into<Constraint>) -> Self {
        self.constraints.push(constraint.into());
        self
    }

    /// Nests a property shape (`sh:property`).
    pub fn property(mut self, shape: PropertyShape) -> Self {
        self.properties.push(Shape::Property(shape));
        self
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Adds a message.
    pub fn message(mut self, message: Literal) -> Self {
        self.messages.push(message);
        self
    }

    /// Switches the shape on or off.
    pub fn deactivated(mut self, deactivated: bool) -> Self {
        self.deactivated = deactivated;
        self
    }

    pub fn id(&self) -> &Term {
        &self.id
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Returns the nested property shapes, each wrapped as a [`Shape`].
    pub fn properties(&self) -> &[Shape] {
        &self.properties
    }

    pub fn messages(&self) -> &[Literal] {
        &self.messages
    }

    pub fn is_deactivated(&self) -> bool {
        self.deactivated
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }
}
