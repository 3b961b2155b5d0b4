//! Constraint components.
//!
//! Every constraint evaluates against a [`ValidationContext`] and returns a
//! [`ValidationReport`] holding one result per violation it finds. Reports
//! from different constraints combine with [`Semigroup::combine`], so
//! evaluation never stops at the first failure.
//!
//! A constraint also knows how to write itself back to RDF, and
//! [`Constraint::from_graph`] reads it again, so a shape can be serialized
//! and reloaded without loss.
//!
//! [`Semigroup::combine`]: stillwater::Semigroup::combine

mod cardinality;
mod pattern;

pub use cardinality::{MaxCountConstraint, MinCountConstraint};
pub use pattern::PatternConstraint;

use crate::context::ValidationContext;
use crate::error::ShapeError;
use crate::graph::Graph;
use crate::report::ValidationReport;
use crate::term::{Iri, Term};
use crate::vocabulary::sh;

/// The contract shared by every constraint.
///
/// Implementations must be `Send + Sync` so shapes can be evaluated on
/// parallel workers.
pub trait ConstraintComponent: Send + Sync {
    /// Returns the SHACL constraint-component IRI reported in results.
    fn component(&self) -> Iri;

    /// Evaluates the constraint for every focus node of the context.
    ///
    /// A conforming graph yields an empty report.
    fn evaluate(&self, context: &ValidationContext<'_>) -> ValidationReport;

    /// Writes the constraint's declaration triples with `shape` as subject.
    ///
    /// Returns an empty graph when `shape` is `None`.
    fn to_graph(&self, shape: Option<&Term>) -> Graph;
}

/// Every constraint kind a shape can declare.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    MaxCount(MaxCountConstraint),
    MinCount(MinCountConstraint),
    Pattern(PatternConstraint),
}

impl Constraint {
    /// `sh:maxCount`. Negative bounds are clamped to 0.
    pub fn max_count(max_count: i64) -> Self {
        Constraint::MaxCount(MaxCountConstraint::new(max_count))
    }

    /// `sh:minCount`. Negative bounds are clamped to 0.
    pub fn min_count(min_count: i64) -> Self {
        Constraint::MinCount(MinCountConstraint::new(min_count))
    }

    /// `sh:pattern` with optional `sh:flags`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidPattern`] if the pattern does not compile.
    pub fn pattern(pattern: impl Into<String>, flags: Option<&str>) -> Result<Self, ShapeError> {
        PatternConstraint::new(pattern, flags).map(Constraint::Pattern)
    }

    /// Reads every supported constraint declared on `shape`, in the order
    /// their triples appear in `graph`.
    ///
    /// `sh:flags` is only read when the shape declares an `sh:pattern`.
    pub fn from_graph(graph: &Graph, shape: &Term) -> Result<Vec<Self>, ShapeError> {
        graph
            .iter()
            .filter(|t| &t.subject == shape)
            .filter_map(|t| {
                let (predicate, object) = (&t.predicate, &t.object);
                if *predicate == sh::MAX_COUNT {
                    Some(cardinality::parse_count(shape, predicate, object).map(Self::max_count))
                } else if *predicate == sh::MIN_COUNT {
                    Some(cardinality::parse_count(shape, predicate, object).map(Self::min_count))
                } else if *predicate == sh::PATTERN {
                    Some(
                        pattern::declared_flags(graph, shape)
                            .and_then(|flags| PatternConstraint::from_object(shape, object, flags))
                            .map(Self::Pattern),
                    )
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns a short human-readable description.
    pub fn description(&self) -> String {
        match self {
            Constraint::MaxCount(c) => format!("at most {} value(s)", c.max_count()),
            Constraint::MinCount(c) => format!("at least {} value(s)", c.min_count()),
            Constraint::Pattern(c) => match c.flags() {
                Some(flags) => format!("matches /{}/{}", c.pattern(), flags),
                None => format!("matches /{}/", c.pattern()),
            },
        }
    }

    fn inner(&self) -> &dyn ConstraintComponent {
        match self {
            Constraint::MaxCount(c) => c,
            Constraint::MinCount(c) => c,
            Constraint::Pattern(c) => c,
        }
    }
}

/// Returns the `sh:flags` shared by every pattern in `constraints`.
///
/// `sh:flags` is declared once per shape, so all patterns of a shape must
/// carry the same flags.
///
/// # Errors
///
/// Returns [`ShapeError::InvalidPattern`] naming the first pattern whose
/// flags differ from those of the shape's first pattern.
pub fn shared_flags(constraints: &[Constraint]) -> Result<Option<&str>, ShapeError> {
    let mut patterns = constraints.iter().filter_map(|c| match c {
        Constraint::Pattern(p) => Some(p),
        _ => None,
    });
    let Some(first) = patterns.next() else {
        return Ok(None);
    };

    let show = |flags: Option<&str>| flags.map_or_else(|| "none".to_string(), |f| format!("'{}'", f));
    for other in patterns {
        if other.flags() != first.flags() {
            return Err(ShapeError::InvalidPattern {
                pattern: other.pattern().to_string(),
                message: format!(
                    "flags {} conflict with flags {} of pattern '{}' on the same shape",
                    show(other.flags()),
                    show(first.flags()),
                    first.pattern()
                ),
            });
        }
    }
    Ok(first.flags())
}

impl ConstraintComponent for Constraint {
    fn component(&self) -> Iri {
        self.inner().component()
    }

    fn evaluate(&self, context: &ValidationContext<'_>) -> ValidationReport {
        let report = self.inner().evaluate(context);
        tracing::trace!(
            shape = %context.shape().id(),
            component = %self.component(),
            focus_nodes = context.focus_nodes().len(),
            results = report.len(),
            "evaluated constraint"
        );
        report
    }

    fn to_graph(&self, shape: Option<&Term>) -> Graph {
        self.inner().to_graph(shape)
    }
}

impl From<MaxCountConstraint> for Constraint {
    fn from(c: MaxCountConstraint) -> Self {
        Constraint::MaxCount(c)
    }
}

impl From<MinCountConstraint> for Constraint {
    fn from(c: MinCountConstraint) -> Self {
        Constraint::MinCount(c)
    }
}

impl From<PatternConstraint> for Constraint {
    fn from(c: PatternConstraint) -> Self {
        Constraint::Pattern(c)
    }
}
