//! Validation results and reports.
//!
//! This module provides [`ValidationResult`] for a single constraint
//! violation and [`ValidationReport`] for accumulating them.
//!
//! A report is a monoid: the empty report is the identity and
//! `combine` appends the right-hand results after the left-hand ones. Every
//! level of evaluation (constraint, shape, whole graph) folds its reports
//! together this way, so all violations are kept.

mod result;

pub use result::ValidationResult;

use std::fmt::{self, Display};

use serde_json::{json, Value};
use stillwater::prelude::*;
use stillwater::Monoid;

use crate::graph::Graph;
use crate::ids::IdGenerator;
use crate::shape::Severity;
use crate::term::{Iri, Literal, Term};
use crate::vocabulary::{rdf, sh};

/// An ordered collection of validation results.
///
/// An empty report means the data conforms.
///
/// # Combining Reports
///
/// ```rust
/// use shapecheck::{Term, ValidationReport, ValidationResult};
/// use shapecheck::vocabulary::sh;
/// use stillwater::prelude::*;
///
/// let result = |focus: &str| {
///     ValidationResult::new(
///         Term::blank(format!("r-{}", focus)),
///         Term::iri("http://example.org/ChildShape"),
///         sh::MAX_COUNT_CONSTRAINT_COMPONENT,
///         Term::iri(focus),
///     )
/// };
///
/// let first: ValidationReport = [result("http://example.org/Alice")].into_iter().collect();
/// let second: ValidationReport = [result("http://example.org/Dave")].into_iter().collect();
///
/// let combined = first.combine(second);
/// assert_eq!(combined.len(), 2);
/// assert!(!combined.conforms());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Creates an empty, conforming report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: ValidationResult) {
        self.results.push(result);
    }

    /// Returns the number of results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the report holds no results.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns true if the report holds no results of any severity.
    pub fn conforms(&self) -> bool {
        self.results.is_empty()
    }

    /// Returns an iterator over the results, in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter()
    }

    pub fn results(&self) -> &[ValidationResult] {
        &self.results
    }

    /// Returns all results with the given severity.
    pub fn with_severity(&self, severity: Severity) -> Vec<&ValidationResult> {
        self.results
            .iter()
            .filter(|r| r.severity() == severity)
            .collect()
    }

    /// Returns all results reported for `focus_node`.
    pub fn for_focus_node(&self, focus_node: &Term) -> Vec<&ValidationResult> {
        self.results
            .iter()
            .filter(|r| r.focus_node() == focus_node)
            .collect()
    }

    /// Returns all results reported by the given constraint component.
    pub fn for_component(&self, component: &Iri) -> Vec<&ValidationResult> {
        self.results
            .iter()
            .filter(|r| r.source_constraint_component() == component)
            .collect()
    }

    /// Returns the number of `sh:Violation` results.
    pub fn violation_count(&self) -> usize {
        self.with_severity(Severity::Violation).len()
    }

    /// Converts the report into a stillwater `Validation`.
    ///
    /// A conforming report becomes `Success(())`; otherwise the report itself
    /// is the failure.
    pub fn into_validation(self) -> crate::Conformance {
        if self.conforms() {
            Validation::Success(())
        } else {
            Validation::Failure(self)
        }
    }

    /// Writes the report as an `sh:ValidationReport` node named `subject`,
    /// linked to every result with `sh:result`.
    pub fn to_graph(&self, subject: &Term, ids: &dyn IdGenerator) -> Graph {
        let mut graph = Graph::new();

        graph.add(subject.clone(), rdf::TYPE, sh::VALIDATION_REPORT);
        graph.add(subject.clone(), sh::CONFORMS, Literal::boolean(self.conforms()));
        for result in &self.results {
            graph.add(subject.clone(), sh::RESULT, result.id().clone());
            graph.merge(result.to_graph(ids));
        }

        tracing::debug!(
            results = self.len(),
            triples = graph.len(),
            "serialized validation report"
        );
        graph
    }

    /// Renders the report as a JSON object with `conforms` and `results`.
    pub fn to_json(&self) -> Value {
        json!({
            "conforms": self.conforms(),
            "results": self.results.iter().map(ValidationResult::to_json).collect::<Vec<_>>(),
        })
    }
}

impl Semigroup for ValidationReport {
    fn combine(mut self, other: Self) -> Self {
        self.results.extend(other.results);
        self
    }
}

impl Monoid for ValidationReport {
    fn empty() -> Self {
        Self::new()
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.conforms() {
            return writeln!(f, "Validation passed: data conforms");
        }

        writeln!(f, "Validation failed with {} result(s):", self.len())?;
        for (i, result) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, result)?;
        }
        Ok(())
    }
}

impl FromIterator<ValidationResult> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        Self {
            results: iter.into_iter().collect(),
        }
    }
}

impl Extend<ValidationResult> for ValidationReport {
    fn extend<I: IntoIterator<Item = ValidationResult>>(&mut self, iter: I) {
        self.results.extend(iter);
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationResult;
    type IntoIter = std::vec::IntoIter<ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationResult;
    type IntoIter = std::slice::Iter<'a, ValidationResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

// Reports are produced on rayon workers and combined on the caller's thread.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationReport>();
    assert_sync::<ValidationReport>();
};
