//! Validation context for constraint evaluation.
//!
//! This module provides the [`ValidationContext`] type that carries the data
//! graph, the shape under evaluation and its focus nodes through a
//! constraint's `evaluate` call.
//!
//! The context itself never changes while constraints run. Focusing on a
//! node produces a separate [`Focus`] value that already holds the value
//! nodes resolved for that node, so a constraint cannot observe value nodes
//! that belong to a different focus node.

use std::sync::Arc;

use indexmap::IndexSet;

use crate::error::ContextError;
use crate::graph::DataGraph;
use crate::ids::{IdGenerator, UuidIds};
use crate::report::ValidationResult;
use crate::shape::Shape;
use crate::term::{Iri, Term};

/// The data graph, shape and focus nodes a constraint evaluates against.
///
/// Build one with [`ValidationContext::new`], which resolves focus nodes from
/// the shape's targets, or with [`ValidationContext::builder`] when the
/// driver supplies the focus nodes itself.
#[derive(Clone)]
pub struct ValidationContext<'a> {
    data_graph: &'a dyn DataGraph,
    shape: &'a Shape,
    focus_nodes: IndexSet<Term>,
    ids: Arc<dyn IdGenerator>,
}

impl<'a> ValidationContext<'a> {
    /// Creates a context whose focus nodes are the shape's target nodes in
    /// `data_graph`.
    pub fn new(data_graph: &'a dyn DataGraph, shape: &'a Shape) -> Self {
        Self {
            focus_nodes: data_graph.focus_nodes(shape),
            data_graph,
            shape,
            ids: Arc::new(UuidIds),
        }
    }

    /// Starts building a context field by field.
    pub fn builder() -> ContextBuilder<'a> {
        ContextBuilder::default()
    }

    /// Replaces the focus nodes.
    pub fn with_focus_nodes(mut self, focus_nodes: impl IntoIterator<Item = Term>) -> Self {
        self.focus_nodes = focus_nodes.into_iter().collect();
        self
    }

    /// Replaces the generator used for result identifiers.
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub fn data_graph(&self) -> &'a dyn DataGraph {
        self.data_graph
    }

    pub fn shape(&self) -> &'a Shape {
        self.shape
    }

    pub fn focus_nodes(&self) -> &IndexSet<Term> {
        &self.focus_nodes
    }

    /// Focuses on `node`, resolving its value nodes for the current shape.
    pub fn focus<'c>(&'c self, node: &'c Term) -> Focus<'c> {
        Focus {
            value_nodes: self.data_graph.value_nodes(self.shape, node),
            focus_node: node,
        }
    }

    /// Focuses on every focus node in turn, in focus-node order.
    pub fn foci(&self) -> impl Iterator<Item = Focus<'_>> + '_ {
        self.focus_nodes.iter().map(move |node| self.focus(node))
    }

    /// Mints a fresh identifier from the context's generator.
    pub fn fresh_id(&self) -> Term {
        self.ids.fresh()
    }

    /// Starts a result for `focus` reported by `component`.
    ///
    /// The result is prefilled from the shape: its id as source shape, its
    /// path (property shapes only), its messages and its severity. No value
    /// node is set.
    pub fn result(&self, focus: &Focus<'_>, component: Iri) -> ValidationResult {
        let mut result = ValidationResult::new(
            self.fresh_id(),
            self.shape.id().clone(),
            component,
            focus.focus_node().clone(),
        )
        .with_messages(self.shape.messages().to_vec())
        .with_severity(self.shape.severity());

        if let Some(path) = self.shape.path() {
            result = result.with_path(path.clone());
        }
        result
    }
}

impl std::fmt::Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidationContext")
            .field("shape", &self.shape.id())
            .field("focus_nodes", &self.focus_nodes)
            .finish_non_exhaustive()
    }
}

/// One focus node together with its value nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Focus<'c> {
    focus_node: &'c Term,
    value_nodes: IndexSet<Term>,
}

impl<'c> Focus<'c> {
    pub fn focus_node(&self) -> &'c Term {
        self.focus_node
    }

    pub fn value_nodes(&self) -> &IndexSet<Term> {
        &self.value_nodes
    }

    /// Returns the number of distinct value nodes.
    pub fn value_count(&self) -> usize {
        self.value_nodes.len()
    }
}

/// Builder for [`ValidationContext`].
///
/// `build` fails if the data graph or shape was never set. Focus nodes
/// default to the shape's targets and the id generator to [`UuidIds`].
#[derive(Default)]
pub struct ContextBuilder<'a> {
    data_graph: Option<&'a dyn DataGraph>,
    shape: Option<&'a Shape>,
    focus_nodes: Option<IndexSet<Term>>,
    ids: Option<Arc<dyn IdGenerator>>,
}

impl<'a> ContextBuilder<'a> {
    pub fn data_graph(mut self, data_graph: &'a dyn DataGraph) -> Self {
        self.data_graph = Some(data_graph);
        self
    }

    pub fn shape(mut self, shape: &'a Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn focus_nodes(mut self, focus_nodes: impl IntoIterator<Item = Term>) -> Self {
        self.focus_nodes = Some(focus_nodes.into_iter().collect());
        self
    }

    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// Builds the context.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingDataGraph`] or
    /// [`ContextError::MissingShape`] when a required field is unset.
    pub fn build(self) -> Result<ValidationContext<'a>, ContextError> {
        let data_graph = self.data_graph.ok_or(ContextError::MissingDataGraph)?;
        let shape = self.shape.ok_or(ContextError::MissingShape)?;

        let focus_nodes = self
            .focus_nodes
            .unwrap_or_else(|| data_graph.focus_nodes(shape));
        let ids = self.ids.unwrap_or_else(|| Arc::new(UuidIds));

        Ok(ValidationContext {
            data_graph,
            shape,
            focus_nodes,
            ids,
        })
    }
}

// Contexts are handed to rayon workers.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationContext<'static>>();
    assert_sync::<ValidationContext<'static>>();
};
