//! # Shapecheck
//!
//! SHACL constraint evaluation over RDF graphs that accumulates ALL
//! violations into a report, rather than stopping at the first failure.
//!
//! ## Overview
//!
//! A [`Shape`] selects focus nodes in a data graph through its targets and
//! declares constraints about them. Each constraint evaluates against a
//! [`ValidationContext`] and returns a [`ValidationReport`]; reports combine
//! with stillwater's `Semigroup`, so the final report holds every result
//! from every constraint of every shape.
//!
//! Constraints, shapes and reports can all be written back as RDF triples,
//! and shapes can be loaded from a shapes graph.
//!
//! ## Core Types
//!
//! - [`Graph`]: An in-memory triple set used both as data graph and as
//!   serialized output
//! - [`Shape`]: A [`NodeShape`] or a [`PropertyShape`] with its constraints
//! - [`Constraint`]: `sh:maxCount`, `sh:minCount` and `sh:pattern`
//! - [`ValidationContext`]: The data graph, shape and focus nodes under
//!   evaluation
//! - [`ValidationReport`]: The ordered results of a validation run
//! - [`ShapeRegistry`]: Stores shapes and validates data graphs against them
//!
//! ## Example
//!
//! ```rust
//! use shapecheck::{
//!     Constraint, ConstraintComponent, Graph, PropertyPath, PropertyShape, Shape, Target, Term,
//!     ValidationContext,
//! };
//! use shapecheck::term::Iri;
//!
//! let has_child = Iri::new("http://example.org/hasChild");
//! let mut data = Graph::new();
//! for child in ["Bob", "Carol", "Dan"] {
//!     data.add(
//!         Term::iri("http://example.org/Alice"),
//!         has_child.clone(),
//!         Term::iri(format!("http://example.org/{}", child)),
//!     );
//! }
//!
//! let shape: Shape = PropertyShape::new(
//!     Term::iri("http://example.org/ChildShape"),
//!     PropertyPath::predicate("http://example.org/hasChild"),
//! )
//! .target(Target::Node(Term::iri("http://example.org/Alice")))
//! .into();
//!
//! let context = ValidationContext::new(&data, &shape);
//!
//! // Alice has three children, one more than allowed
//! let report = Constraint::max_count(2).evaluate(&context);
//! assert_eq!(report.len(), 1);
//! assert!(report.results()[0].value().is_none());
//!
//! // Three is within bounds
//! let report = Constraint::max_count(3).evaluate(&context);
//! assert!(report.conforms());
//! ```

pub mod constraint;
pub mod context;
pub mod error;
pub mod graph;
pub mod ids;
pub mod registry;
pub mod report;
pub mod shape;
pub mod term;
pub mod vocabulary;

pub use constraint::{
    Constraint, ConstraintComponent, MaxCountConstraint, MinCountConstraint, PatternConstraint,
};
pub use context::{ContextBuilder, Focus, ValidationContext};
pub use error::{ContextError, ShapeError};
pub use graph::{DataGraph, Graph, Triple};
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use registry::{RegistryError, ShapeRegistry};
pub use report::{ValidationReport, ValidationResult};
pub use shape::{NodeShape, PropertyPath, PropertyShape, Severity, Shape, Target};
pub use term::{BlankNode, Iri, Literal, Term};

/// Type alias for a report converted into a stillwater `Validation`.
pub type Conformance = stillwater::Validation<(), ValidationReport>;
