//! Property shapes.

use crate::constraint::Constraint;
use crate::term::{Literal, Term};

use super::{PropertyPath, Severity, Target};

/// A shape whose constraints apply to the value nodes reached from each
/// focus node along `path`.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyShape {
    id: Term,
    path: PropertyPath,
    targets: Vec<Target>,
    constraints: Vec<Constraint>,
    severity: Severity,
    messages: Vec<Literal>,
    deactivated: bool,
}

impl PropertyShape {
    /// Creates a property shape with no targets or constraints.
    pub fn new(id: impl Into<Term>, path: PropertyPath) -> Self {
        Self {
            id: id.into(),
            path,
            targets: Vec::new(),
            constraints: Vec::new(),
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

    pub fn path(&self) -> &PropertyPath {
        &self.path
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn messages(&self) -> &[Literal] {
        &self.messages
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn is_deactivated(&self) -> bool {
        self.deactivated
    }
}
