//! Shape registry and validation driver.
//!
//! This module provides the [`ShapeRegistry`] type that stores shapes by id
//! and validates data graphs against all of them.

use std::sync::Arc;

use indexmap::{IndexMap, IndexSet};
use parking_lot::RwLock;
use rayon::prelude::*;
use stillwater::prelude::*;

use crate::constraint::ConstraintComponent;
use crate::context::ValidationContext;
use crate::error::ShapeError;
use crate::graph::{DataGraph, Graph};
use crate::ids::{IdGenerator, UuidIds};
use crate::report::ValidationReport;
use crate::shape::{self, Shape};
use crate::term::Term;

/// Type alias for the shape storage map.
type ShapeMap = Arc<RwLock<IndexMap<Term, Arc<Shape>>>>;

/// A thread-safe registry of shapes, kept in registration order.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can validate concurrently (read-only access)
/// - Registration operations are serialized (write access)
///
/// Clones share the same shape storage.
///
/// # Example
///
/// ```rust
/// use shapecheck::{Constraint, Graph, PropertyPath, PropertyShape, ShapeRegistry, Target, Term};
/// use shapecheck::term::Iri;
///
/// let registry = ShapeRegistry::new();
/// registry
///     .register(
///         PropertyShape::new(
///             Term::iri("http://example.org/ChildShape"),
///             PropertyPath::predicate("http://example.org/hasChild"),
///         )
///         .target(Target::Node(Term::iri("http://example.org/Alice")))
///         .constraint(Constraint::max_count(2)),
///     )
///     .unwrap();
///
/// let has_child = Iri::new("http://example.org/hasChild");
/// let mut data = Graph::new();
/// for child in ["Bob", "Carol", "Dan"] {
///     data.add(
///         Term::iri("http://example.org/Alice"),
///         has_child.clone(),
///         Term::iri(format!("http://example.org/{}", child)),
///     );
/// }
///
/// let report = registry.validate(&data);
/// assert_eq!(report.len(), 1);
/// assert!(!report.conforms());
/// ```
pub struct ShapeRegistry {
    shapes: ShapeMap,
    parallel: bool,
    ids: Arc<dyn IdGenerator>,
}

impl ShapeRegistry {
    /// Creates an empty registry that validates shapes in parallel and mints
    /// UUID-labelled result ids.
    pub fn new() -> Self {
        Self {
            shapes: Arc::new(RwLock::new(IndexMap::new())),
            parallel: true,
            ids: Arc::new(UuidIds),
        }
    }

    /// Creates a registry holding every shape declared in a shapes graph.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Shape` for a malformed declaration and
    /// `RegistryError::DuplicateShape` if two top-level shapes share an id.
    pub fn from_graph(graph: &Graph) -> Result<Self, RegistryError> {
        let registry = Self::new();
        for shape in shape::load(graph)? {
            registry.register(shape)?;
        }
        Ok(registry)
    }

    /// Turns parallel evaluation of independent shapes on or off.
    ///
    /// Report order is registration order either way.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the generator used for result identifiers and serialized paths.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Registers a shape under its id.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateShape` if the id is already registered,
    /// or `RegistryError::Shape` if the shape fails [`Shape::check`].
    pub fn register(&self, shape: impl Into<Shape>) -> Result<(), RegistryError> {
        let shape = shape.into();
        shape.check()?;
        let mut shapes = self.shapes.write();

        if shapes.contains_key(shape.id()) {
            return Err(RegistryError::DuplicateShape(shape.id().to_string()));
        }

        shapes.insert(shape.id().clone(), Arc::new(shape));
        Ok(())
    }

    /// Retrieves a shape by id.
    pub fn get(&self, id: &Term) -> Option<Arc<Shape>> {
        self.shapes.read().get(id).cloned()
    }

    pub fn len(&self) -> usize {
        self.shapes.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.read().is_empty()
    }

    /// Returns the registered shape ids in registration order.
    pub fn ids(&self) -> Vec<Term> {
        self.shapes.read().keys().cloned().collect()
    }

    /// Validates `data` against every registered shape.
    ///
    /// Deactivated shapes are skipped. Results are ordered by shape
    /// registration order, then by constraint declaration order, with nested
    /// property shapes after their parent's own constraints.
    pub fn validate(&self, data: &dyn DataGraph) -> ValidationReport {
        let shapes: Vec<Arc<Shape>> = self.shapes.read().values().cloned().collect();

        let reports: Vec<ValidationReport> = if self.parallel {
            shapes
                .par_iter()
                .map(|shape| self.validate_top_level(data, shape))
                .collect()
        } else {
            shapes
                .iter()
                .map(|shape| self.validate_top_level(data, shape))
                .collect()
        };

        let report = reports
            .into_iter()
            .fold(ValidationReport::new(), Semigroup::combine);

        tracing::debug!(
            shapes = shapes.len(),
            results = report.len(),
            conforms = report.conforms(),
            parallel = self.parallel,
            "validated data graph"
        );
        report
    }

    /// Validates `data` against a single registered shape.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ShapeNotFound` if no shape has the given id.
    pub fn validate_shape(
        &self,
        id: &Term,
        data: &dyn DataGraph,
    ) -> Result<ValidationReport, RegistryError> {
        let shape = self
            .get(id)
            .ok_or_else(|| RegistryError::ShapeNotFound(id.to_string()))?;

        Ok(self.validate_top_level(data, &shape))
    }

    /// Writes every registered shape as triples.
    pub fn to_graph(&self) -> Graph {
        let shapes = self.shapes.read();
        let mut graph = Graph::new();
        for shape in shapes.values() {
            graph.merge(shape.to_graph(self.ids.as_ref()));
        }
        graph
    }

    fn validate_top_level(&self, data: &dyn DataGraph, shape: &Shape) -> ValidationReport {
        self.validate_with_focus(data, shape, data.focus_nodes(shape))
    }

    fn validate_with_focus(
        &self,
        data: &dyn DataGraph,
        shape: &Shape,
        focus_nodes: IndexSet<Term>,
    ) -> ValidationReport {
        if shape.is_deactivated() {
            tracing::debug!(shape = %shape.id(), "skipping deactivated shape");
            return ValidationReport::new();
        }

        let context = ValidationContext::new(data, shape)
            .with_focus_nodes(focus_nodes)
            .with_id_generator(Arc::clone(&self.ids));

        let own = shape
            .constraints()
            .iter()
            .map(|constraint| constraint.evaluate(&context))
            .fold(ValidationReport::new(), Semigroup::combine);

        let report = shape.nested().iter().fold(own, |report, nested| {
            let mut focus_nodes = context.focus_nodes().clone();
            focus_nodes.extend(data.focus_nodes(nested));
            report.combine(self.validate_with_focus(data, nested, focus_nodes))
        });

        tracing::trace!(
            shape = %shape.id(),
            focus_nodes = context.focus_nodes().len(),
            results = report.len(),
            "validated shape"
        );
        report
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for ShapeRegistry {
    fn clone(&self) -> Self {
        Self {
            shapes: Arc::clone(&self.shapes),
            parallel: self.parallel,
            ids: Arc::clone(&self.ids),
        }
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a shape with an id that already exists.
    #[error("shape '{0}' already registered")]
    DuplicateShape(String),

    /// Attempted to validate with a shape id that doesn't exist.
    #[error("shape '{0}' not found")]
    ShapeNotFound(String),

    /// A shapes graph held a malformed declaration.
    #[error(transparent)]
    Shape(#[from] ShapeError),
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ShapeRegistry>();
    assert_sync::<ShapeRegistry>();
};
