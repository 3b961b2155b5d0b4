//! `sh:pattern` constraint.

use regex::{Regex, RegexBuilder};

use crate::context::ValidationContext;
use crate::error::ShapeError;
use crate::graph::Graph;
use crate::report::ValidationReport;
use crate::term::{Iri, Literal, Term};
use crate::vocabulary::sh;

use super::ConstraintComponent;

/// Requires the string form of every value node to match a regular
/// expression.
///
/// IRIs are matched on the IRI string and literals on their lexical form.
/// Blank nodes never match.
#[derive(Debug, Clone)]
pub struct PatternConstraint {
    pattern: String,
    flags: Option<String>,
    regex: Regex,
}

impl PatternConstraint {
    /// Compiles `pattern` with the optional SHACL `flags` string.
    ///
    /// Supported flags are `i` (case-insensitive), `m` (multi-line), `s`
    /// (dot matches newline) and `x` (ignore whitespace).
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::InvalidPattern`] for an unknown flag or a
    /// pattern that does not compile.
    pub fn new(pattern: impl Into<String>, flags: Option<&str>) -> Result<Self, ShapeError> {
        let pattern = pattern.into();
        let mut builder = RegexBuilder::new(&pattern);

        for flag in flags.unwrap_or_default().chars() {
            match flag {
                'i' => builder.case_insensitive(true),
                'm' => builder.multi_line(true),
                's' => builder.dot_matches_new_line(true),
                'x' => builder.ignore_whitespace(true),
                other => {
                    return Err(ShapeError::InvalidPattern {
                        pattern,
                        message: format!("unsupported flag '{}'", other),
                    })
                }
            };
        }

        let regex = builder.build().map_err(|e| ShapeError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern,
            flags: flags.map(str::to_string),
            regex,
        })
    }

    /// Returns the source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the flags string, if any.
    pub fn flags(&self) -> Option<&str> {
        self.flags.as_deref()
    }

    /// Returns true if `value` satisfies the pattern.
    pub fn matches(&self, value: &Term) -> bool {
        value
            .lexical_form()
            .is_some_and(|form| self.regex.is_match(form))
    }

    /// Reads every `sh:pattern` declared on `shape`, paired with the
    /// shape's `sh:flags`.
    pub fn from_graph(graph: &Graph, shape: &Term) -> Result<Vec<Self>, ShapeError> {
        let flags = declared_flags(graph, shape)?;
        graph
            .objects(shape, &sh::PATTERN)
            .map(|object| Self::from_object(shape, object, flags))
            .collect()
    }

    pub(super) fn from_object(
        shape: &Term,
        object: &Term,
        flags: Option<&str>,
    ) -> Result<Self, ShapeError> {
        match object {
            Term::Literal(literal) => Self::new(literal.lexical(), flags),
            other => Err(ShapeError::invalid_constraint(
                shape,
                &sh::PATTERN,
                format!("expected a string literal, found {}", other),
            )),
        }
    }
}

/// Reads the `sh:flags` shared by every pattern of `shape`.
///
/// A shape carries at most one `sh:flags` value.
pub(super) fn declared_flags<'g>(graph: &'g Graph, shape: &Term) -> Result<Option<&'g str>, ShapeError> {
    let predicate = sh::FLAGS;
    let mut declared = graph.objects(shape, &predicate);
    let flags = declared.next();
    if let Some(extra) = declared.next() {
        return Err(ShapeError::invalid_constraint(
            shape,
            &sh::FLAGS,
            format!("declared more than once, also as {}", extra),
        ));
    }

    match flags {
        None => Ok(None),
        Some(Term::Literal(literal)) => Ok(Some(literal.lexical())),
        Some(other) => Err(ShapeError::invalid_constraint(
            shape,
            &sh::FLAGS,
            format!("expected a string literal, found {}", other),
        )),
    }
}

impl PartialEq for PatternConstraint {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern && self.flags == other.flags
    }
}

impl ConstraintComponent for PatternConstraint {
    fn component(&self) -> Iri {
        sh::PATTERN_CONSTRAINT_COMPONENT
    }

    fn evaluate(&self, context: &ValidationContext<'_>) -> ValidationReport {
        let mut report = ValidationReport::new();

        for focus in context.foci() {
            for value in focus.value_nodes() {
                if !self.matches(value) {
                    report.push(
                        context
                            .result(&focus, self.component())
                            .with_value(value.clone()),
                    );
                }
            }
        }

        report
    }

    fn to_graph(&self, shape: Option<&Term>) -> Graph {
        let mut graph = Graph::new();
        if let Some(shape) = shape {
            graph.add(shape.clone(), sh::PATTERN, Literal::string(self.pattern.as_str()));
            if let Some(flags) = &self.flags {
                graph.add(shape.clone(), sh::FLAGS, Literal::string(flags.as_str()));
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shape_id() -> Term {
        Term::iri("http://example.org/CodeShape")
    }

    #[test]
    fn test_matches_literals_and_iris() {
        let constraint = PatternConstraint::new("^[A-Z]{3}$", None).unwrap();

        assert!(constraint.matches(&Literal::string("ABC").into()));
        assert!(!constraint.matches(&Literal::string("abcd").into()));
        assert!(!constraint.matches(&Term::iri("http://example.org/ABC")));
        assert!(!constraint.matches(&Term::blank("ABC")));
    }

    #[test]
    fn test_case_insensitive_flag() {
        let constraint = PatternConstraint::new("^abc$", Some("i")).unwrap();
        assert!(constraint.matches(&Literal::string("ABC").into()));
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let error = PatternConstraint::new("abc", Some("g")).unwrap_err();
        assert!(matches!(error, ShapeError::InvalidPattern { .. }));
        assert!(error.to_string().contains("unsupported flag 'g'"));
    }

    #[test]
    fn test_invalid_regex_is_rejected() {
        let error = PatternConstraint::new("[unclosed", None).unwrap_err();
        assert!(matches!(error, ShapeError::InvalidPattern { ref pattern, .. } if pattern == "[unclosed"));
    }

    #[test]
    fn test_to_graph_writes_pattern_and_flags() {
        let graph = PatternConstraint::new("^a", Some("i"))
            .unwrap()
            .to_graph(Some(&shape_id()));

        assert_eq!(graph.len(), 2);
        assert_eq!(
            graph.object(&shape_id(), &sh::PATTERN),
            Some(&Term::Literal(Literal::string("^a")))
        );
        assert_eq!(
            graph.object(&shape_id(), &sh::FLAGS),
            Some(&Term::Literal(Literal::string("i")))
        );
    }

    #[test]
    fn test_from_graph_round_trip() {
        let original = PatternConstraint::new("^[0-9]+$", Some("m")).unwrap();
        let graph = original.to_graph(Some(&shape_id()));

        assert_eq!(
            PatternConstraint::from_graph(&graph, &shape_id()).unwrap(),
            vec![original]
        );
    }

    #[test]
    fn test_from_graph_rejects_repeated_flags() {
        let mut graph = Graph::new();
        graph.add(shape_id(), sh::PATTERN, Literal::string("^a"));
        graph.add(shape_id(), sh::FLAGS, Literal::string("i"));
        graph.add(shape_id(), sh::FLAGS, Literal::string("m"));

        let error = PatternConstraint::from_graph(&graph, &shape_id()).unwrap_err();
        assert!(matches!(error, ShapeError::InvalidConstraint { .. }));
        assert!(error.to_string().contains("declared more than once"));
    }

    #[test]
    fn test_from_graph_rejects_iri_pattern() {
        let mut graph = Graph::new();
        graph.add(shape_id(), sh::PATTERN, Term::iri("http://example.org/p"));

        let error = PatternConstraint::from_graph(&graph, &shape_id()).unwrap_err();
        assert!(matches!(error, ShapeError::InvalidConstraint { .. }));
    }
}
