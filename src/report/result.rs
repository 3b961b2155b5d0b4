//! A single validation result.

use std::fmt::{self, Display};

use serde_json::{json, Value};

use crate::graph::Graph;
use crate::ids::IdGenerator;
use crate::shape::{PropertyPath, Severity};
use crate::term::{Iri, Literal, Term};
use crate::vocabulary::{rdf, sh};

/// One constraint violation with full context.
///
/// `ValidationResult` records where the failure happened and what reported it:
/// - **focus_node**: the node the shape was validating
/// - **result_path**: the path followed, for property shapes
/// - **value**: the offending value node, when there is a single one
/// - **source_shape** / **source_constraint_component**: what reported it
/// - **messages** and **severity**: copied from the shape
///
/// Results are built by constraints through
/// [`ValidationContext::result`](crate::ValidationContext::result) and are not
/// changed afterwards.
///
/// # Example
///
/// ```rust
/// use shapecheck::{PropertyPath, Severity, Term, ValidationResult};
/// use shapecheck::vocabulary::sh;
///
/// let result = ValidationResult::new(
///     Term::blank("r0"),
///     Term::iri("http://example.org/ChildShape"),
///     sh::MAX_COUNT_CONSTRAINT_COMPONENT,
///     Term::iri("http://example.org/Alice"),
/// )
/// .with_path(PropertyPath::predicate("http://example.org/hasChild"))
/// .with_severity(Severity::Warning);
///
/// assert_eq!(result.severity(), Severity::Warning);
/// assert!(result.value().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationResult {
    id: Term,
    source_shape: Term,
    source_constraint_component: Iri,
    focus_node: Term,
    result_path: Option<PropertyPath>,
    value: Option<Term>,
    messages: Vec<Literal>,
    severity: Severity,
}

impl ValidationResult {
    /// Creates a result with no path, value or messages and the default
    /// severity.
    pub fn new(id: Term, source_shape: Term, component: Iri, focus_node: Term) -> Self {
        Self {
            id,
            source_shape,
            source_constraint_component: component,
            focus_node,
            result_path: None,
            value: None,
            messages: Vec::new(),
            severity: Severity::default(),
        }
    }

    pub fn with_path(mut self, path: PropertyPath) -> Self {
        self.result_path = Some(path);
        self
    }

    pub fn with_value(mut self, value: Term) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_messages(mut self, messages: Vec<Literal>) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the fresh node identifying this result.
    pub fn id(&self) -> &Term {
        &self.id
    }

    pub fn source_shape(&self) -> &Term {
        &self.source_shape
    }

    pub fn source_constraint_component(&self) -> &Iri {
        &self.source_constraint_component
    }

    pub fn focus_node(&self) -> &Term {
        &self.focus_node
    }

    pub fn result_path(&self) -> Option<&PropertyPath> {
        self.result_path.as_ref()
    }

    pub fn value(&self) -> Option<&Term> {
        self.value.as_ref()
    }

    pub fn messages(&self) -> &[Literal] {
        &self.messages
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Writes the result as an `sh:ValidationResult` node.
    ///
    /// `ids` mints the blank nodes of complex result paths.
    pub fn to_graph(&self, ids: &dyn IdGenerator) -> Graph {
        let id = &self.id;
        let mut graph = Graph::new();

        graph.add(id.clone(), rdf::TYPE, sh::VALIDATION_RESULT);
        graph.add(id.clone(), sh::FOCUS_NODE, self.focus_node.clone());
        if let Some(path) = &self.result_path {
            let node = path.to_graph(&mut graph, ids);
            graph.add(id.clone(), sh::RESULT_PATH, node);
        }
        if let Some(value) = &self.value {
            graph.add(id.clone(), sh::VALUE, value.clone());
        }
        for message in &self.messages {
            graph.add(id.clone(), sh::RESULT_MESSAGE, message.clone());
        }
        graph.add(id.clone(), sh::RESULT_SEVERITY, self.severity.iri());
        graph.add(id.clone(), sh::SOURCE_SHAPE, self.source_shape.clone());
        graph.add(
            id.clone(),
            sh::SOURCE_CONSTRAINT_COMPONENT,
            self.source_constraint_component.clone(),
        );
        graph
    }

    /// Renders the result as a JSON object.
    pub fn to_json(&self) -> Value {
        json!({
            "focusNode": self.focus_node.to_string(),
            "resultPath": self.result_path.as_ref().map(ToString::to_string),
            "value": self.value.as_ref().map(ToString::to_string),
            "messages": self.messages.iter().map(Literal::lexical).collect::<Vec<_>>(),
            "severity": self.severity.to_string(),
            "sourceShape": self.source_shape.to_string(),
            "sourceConstraintComponent": self.source_constraint_component.as_str(),
        })
    }
}

impl Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.focus_node)?;
        if let Some(ref path) = self.result_path {
            write!(f, " {}", path)?;
        }

        match self.messages.first() {
            Some(message) => write!(f, ": {}", message.lexical())?,
            None => write!(f, ": {}", self.source_constraint_component.local_name())?,
        }

        if let Some(ref value) = self.value {
            write!(f, " (value: {})", value)?;
        }
        write!(f, " (shape: {})", self.source_shape)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationResult>();
    assert_sync::<ValidationResult>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Triple;
    use crate::ids::SequentialIds;

    fn ex(local: &str) -> Term {
        Term::iri(format!("http://example.org/{}", local))
    }

    fn max_count_result() -> ValidationResult {
        ValidationResult::new(
            Term::blank("r0"),
            ex("ChildShape"),
            sh::MAX_COUNT_CONSTRAINT_COMPONENT,
            ex("Alice"),
        )
        .with_path(PropertyPath::predicate("http://example.org/hasChild"))
    }

    #[test]
    fn test_new_has_defaults() {
        let result = max_count_result();

        assert_eq!(result.id(), &Term::blank("r0"));
        assert_eq!(result.source_shape(), &ex("ChildShape"));
        assert_eq!(result.source_constraint_component(), &sh::MAX_COUNT_CONSTRAINT_COMPONENT);
        assert!(result.value().is_none());
        assert!(result.messages().is_empty());
        assert_eq!(result.severity(), Severity::Violation);
    }

    #[test]
    fn test_display_without_message_names_component() {
        let display = max_count_result().to_string();

        assert!(display.starts_with("[Violation] <http://example.org/Alice>"));
        assert!(display.contains("<http://example.org/hasChild>"));
        assert!(display.contains("MaxCountConstraintComponent"));
        assert!(display.contains("(shape: <http://example.org/ChildShape>)"));
    }

    #[test]
    fn test_display_with_message_and_value() {
        let display = max_count_result()
            .with_messages(vec![Literal::lang_string("too many children", "en")])
            .with_value(ex("Bob"))
            .to_string();

        assert!(display.contains(": too many children"));
        assert!(display.contains("(value: <http://example.org/Bob>)"));
    }

    #[test]
    fn test_to_graph() {
        let ids = SequentialIds::default();
        let graph = max_count_result().to_graph(&ids);
        let id = Term::blank("r0");

        assert!(graph.contains(&Triple::new(id.clone(), rdf::TYPE, sh::VALIDATION_RESULT)));
        assert!(graph.contains(&Triple::new(id.clone(), sh::FOCUS_NODE, ex("Alice"))));
        assert!(graph.contains(&Triple::new(id.clone(), sh::RESULT_PATH, ex("hasChild"))));
        assert!(graph.contains(&Triple::new(id.clone(), sh::RESULT_SEVERITY, sh::VIOLATION)));
        assert!(graph.contains(&Triple::new(id.clone(), sh::SOURCE_SHAPE, ex("ChildShape"))));
        assert!(graph.contains(&Triple::new(
            id.clone(),
            sh::SOURCE_CONSTRAINT_COMPONENT,
            sh::MAX_COUNT_CONSTRAINT_COMPONENT
        )));
        assert!(graph.object(&id, &sh::VALUE).is_none());
        assert_eq!(graph.len(), 6);
    }

    #[test]
    fn test_to_json() {
        let json = max_count_result().to_json();

        assert_eq!(json["focusNode"], "<http://example.org/Alice>");
        assert_eq!(json["resultPath"], "<http://example.org/hasChild>");
        assert!(json["value"].is_null());
        assert_eq!(json["severity"], "Violation");
        assert_eq!(
            json["sourceConstraintComponent"],
            "http://www.w3.org/ns/shacl#MaxCountConstraintComponent"
        );
    }
}
