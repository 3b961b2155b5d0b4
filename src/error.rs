//! Error types.
//!
//! Failing a constraint is not an error: non-conformance is reported through
//! [`ValidationReport`](crate::ValidationReport) entries. The types here cover
//! malformed shape declarations and broken caller contracts.

use std::fmt::Display;

use thiserror::Error;

use crate::term::{Iri, Term};

/// A shape or constraint declaration that cannot be read or built.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// A constraint parameter has the wrong kind of value.
    #[error("invalid constraint on shape {shape}: {message}")]
    InvalidConstraint { shape: Term, message: String },

    /// An `sh:pattern` (with its `sh:flags`) does not compile.
    #[error("invalid regex pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The `sh:path` of a property shape is not a well-formed path.
    #[error("invalid path on shape {shape}: {message}")]
    InvalidPath { shape: Term, message: String },

    /// A property shape declares no `sh:path`.
    #[error("property shape {shape} has no sh:path")]
    MissingPath { shape: Term },

    /// `sh:severity` names something other than Violation, Warning or Info.
    #[error("unknown severity {0}")]
    UnknownSeverity(Term),
}

/// A validation context built without a required field.
///
/// This is a caller bug, distinct from a constraint violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    #[error("validation context requires a data graph")]
    MissingDataGraph,

    #[error("validation context requires a shape")]
    MissingShape,
}

impl ShapeError {
    pub(crate) fn invalid_constraint(shape: &Term, predicate: &Iri, message: impl Display) -> Self {
        ShapeError::InvalidConstraint {
            shape: shape.clone(),
            message: format!("{}: {}", predicate.local_name(), message),
        }
    }
}
