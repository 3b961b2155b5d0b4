//! Shape model.
//!
//! A [`Shape`] is either a [`NodeShape`], whose constraints apply to the focus
//! node itself, or a [`PropertyShape`], whose constraints apply to the values
//! reached from the focus node along a [`PropertyPath`].
//!
//! # Example
//!
//! ```rust
//! use shapecheck::{Constraint, PropertyPath, PropertyShape, Severity, Shape, Target, Term};
//!
//! let shape: Shape = PropertyShape::new(
//!     Term::iri("http://example.org/ChildrenShape"),
//!     PropertyPath::predicate("http://example.org/hasChild"),
//! )
//! .target(Target::Node(Term::iri("http://example.org/Alice")))
//! .constraint(Constraint::max_count(2))
//! .with_severity(Severity::Warning)
//! .into();
//!
//! assert!(shape.path().is_some());
//! assert_eq!(shape.severity(), Severity::Warning);
//! ```

mod loader;
mod node;
mod path;
mod property;
mod target;

pub use loader::load;
pub use node::NodeShape;
pub use path::PropertyPath;
pub use property::PropertyShape;
pub use target::Target;

use std::fmt::{self, Display};

use crate::constraint::{self, Constraint, ConstraintComponent};
use crate::error::ShapeError;
use crate::graph::Graph;
use crate::ids::IdGenerator;
use crate::term::{Iri, Literal, Term};
use crate::vocabulary::{rdf, sh};

/// The configured importance of a shape's results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// `sh:Violation`, the default.
    #[default]
    Violation,
    /// `sh:Warning`
    Warning,
    /// `sh:Info`
    Info,
}

impl Severity {
    /// Returns the SHACL IRI for this severity.
    pub fn iri(&self) -> Iri {
        match self {
            Severity::Violation => sh::VIOLATION,
            Severity::Warning => sh::WARNING,
            Severity::Info => sh::INFO,
        }
    }

    /// Maps a SHACL severity IRI back to a severity.
    pub fn from_iri(iri: &Iri) -> Option<Self> {
        [Severity::Violation, Severity::Warning, Severity::Info]
            .into_iter()
            .find(|severity| &severity.iri() == iri)
    }
}

impl Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Violation => "Violation",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        };
        write!(f, "{}", name)
    }
}

/// A node shape or a property shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Node(NodeShape),
    Property(PropertyShape),
}

impl Shape {
    /// Returns the node identifying this shape.
    pub fn id(&self) -> &Term {
        match self {
            Shape::Node(s) => s.id(),
            Shape::Property(s) => s.id(),
        }
    }

    /// Returns the path of a property shape. Node shapes have none.
    pub fn path(&self) -> Option<&PropertyPath> {
        match self {
            Shape::Node(_) => None,
            Shape::Property(s) => Some(s.path()),
        }
    }

    /// Returns the declared targets.
    pub fn targets(&self) -> &[Target] {
        match self {
            Shape::Node(s) => s.targets(),
            Shape::Property(s) => s.targets(),
        }
    }

    /// Returns the declared constraints, in declaration order.
    pub fn constraints(&self) -> &[Constraint] {
        match self {
            Shape::Node(s) => s.constraints(),
            Shape::Property(s) => s.constraints(),
        }
    }

    /// Returns the configured messages.
    pub fn messages(&self) -> &[Literal] {
        match self {
            Shape::Node(s) => s.messages(),
            Shape::Property(s) => s.messages(),
        }
    }

    /// Returns the configured severity.
    pub fn severity(&self) -> Severity {
        match self {
            Shape::Node(s) => s.severity(),
            Shape::Property(s) => s.severity(),
        }
    }

    /// Returns true if the shape is switched off with `sh:deactivated true`.
    pub fn is_deactivated(&self) -> bool {
        match self {
            Shape::Node(s) => s.is_deactivated(),
            Shape::Property(s) => s.is_deactivated(),
        }
    }

    /// Returns the property shapes nested under a node shape with `sh:property`.
    pub fn nested(&self) -> &[Shape] {
        match self {
            Shape::Node(s) => s.properties(),
            Shape::Property(_) => &[],
        }
    }

    /// Checks that this shape and its nested shapes can be written with
    /// [`Shape::to_graph`] and loaded back unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidPattern`] when patterns on one shape
    /// disagree on `sh:flags`.
    pub fn check(&self) -> Result<(), ShapeError> {
        constraint::shared_flags(self.constraints())?;
        self.nested().iter().try_for_each(Shape::check)
    }

    /// Writes this shape, its full constraint set and any nested property
    /// shapes as triples.
    ///
    /// Only shapes that pass [`Shape::check`] load back unchanged.
    pub fn to_graph(&self, ids: &dyn IdGenerator) -> Graph {
        let id = self.id();
        let mut graph = Graph::new();

        let class = match self {
            Shape::Node(_) => sh::NODE_SHAPE,
            Shape::Property(_) => sh::PROPERTY_SHAPE,
        };
        graph.add(id.clone(), rdf::TYPE, class);

        if let Some(path) = self.path() {
            let node = path.to_graph(&mut graph, ids);
            graph.add(id.clone(), sh::PATH, node);
        }
        for target in self.targets() {
            graph.add(id.clone(), target.predicate(), target.object());
        }
        graph.add(id.clone(), sh::SEVERITY, self.severity().iri());
        for message in self.messages() {
            graph.add(id.clone(), sh::MESSAGE, message.clone());
        }
        if self.is_deactivated() {
            graph.add(id.clone(), sh::DEACTIVATED, Literal::boolean(true));
        }
        for constraint in self.constraints() {
            graph.merge(constraint.to_graph(Some(id)));
        }
        for nested in self.nested() {
            graph.add(id.clone(), sh::PROPERTY, nested.id().clone());
            graph.merge(nested.to_graph(ids));
        }
        graph
    }
}

impl From<NodeShape> for Shape {
    fn from(shape: NodeShape) -> Self {
        Shape::Node(shape)
    }
}

impl From<PropertyShape> for Shape {
    fn from(shape: PropertyShape) -> Self {
        Shape::Property(shape)
    }
}

// Shapes are shared read-only across validation workers.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Shape>();
    assert_sync::<Shape>();
};
