//! RDF term model.
//!
//! This module provides [`Iri`], [`BlankNode`], [`Literal`] and the [`Term`]
//! sum type used for subjects, objects, focus nodes and value nodes.

use std::borrow::Cow;
use std::fmt::{self, Display};

use crate::vocabulary::{rdf, xsd};

/// An absolute IRI.
///
/// Vocabulary constants are built with [`Iri::from_static`] so they can live
/// in `const` items without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Iri(Cow<'static, str>);

impl Iri {
    /// Creates an IRI from an owned or borrowed string.
    pub fn new(iri: impl Into<String>) -> Self {
        Self(Cow::Owned(iri.into()))
    }

    /// Creates an IRI from a static string, usable in constant position.
    pub const fn from_static(iri: &'static str) -> Self {
        Self(Cow::Borrowed(iri))
    }

    /// Returns the IRI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after the last `#` or `/`, e.g. `maxCount` for `sh:maxCount`.
    pub fn local_name(&self) -> &str {
        let s = self.as_str();
        s.rfind(['#', '/']).map_or(s, |i| &s[i + 1..])
    }
}

impl Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node, identified by its label within one graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(String);

impl BlankNode {
    /// Creates a blank node with the given label (without the `_:` prefix).
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Returns the label.
    pub fn label(&self) -> &str {
        &self.0
    }
}

impl Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A literal: a lexical form paired with a datatype and, for
/// `rdf:langString`, a language tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Literal {
    lexical: String,
    datatype: Iri,
    language: Option<String>,
}

/// Datatypes whose lexical space is a subset of `xsd:integer`.
const INTEGER_DATATYPES: &[&str] = &[
    "integer",
    "long",
    "int",
    "short",
    "byte",
    "nonNegativeInteger",
    "positiveInteger",
    "nonPositiveInteger",
    "negativeInteger",
    "unsignedLong",
    "unsignedInt",
    "unsignedShort",
    "unsignedByte",
];

impl Literal {
    /// Creates a typed literal.
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self {
            lexical: lexical.into(),
            datatype,
            language: None,
        }
    }

    /// Creates an `xsd:string` literal.
    pub fn string(lexical: impl Into<String>) -> Self {
        Self::typed(lexical, xsd::STRING)
    }

    /// Creates a language-tagged string. Tags are normalised to lowercase.
    pub fn lang_string(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            lexical: lexical.into(),
            datatype: rdf::LANG_STRING,
            language: Some(language.into().to_ascii_lowercase()),
        }
    }

    /// Creates an `xsd:integer` literal.
    pub fn integer(value: i64) -> Self {
        Self::typed(value.to_string(), xsd::INTEGER)
    }

    /// Creates an `xsd:boolean` literal.
    pub fn boolean(value: bool) -> Self {
        Self::typed(value.to_string(), xsd::BOOLEAN)
    }

    /// Returns the lexical form.
    pub fn lexical(&self) -> &str {
        &self.lexical
    }

    /// Returns the datatype IRI.
    pub fn datatype(&self) -> &Iri {
        &self.datatype
    }

    /// Returns the language tag, if any.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Returns true if the datatype is `xsd:integer` or derived from it.
    pub fn is_integer(&self) -> bool {
        self.datatype
            .as_str()
            .strip_prefix(xsd::NAMESPACE)
            .is_some_and(|local| INTEGER_DATATYPES.contains(&local))
    }

    /// Parses the lexical form of an integer-typed literal.
    ///
    /// Returns `None` for non-integer datatypes, ill-typed lexical forms and
    /// values outside the `i64` range.
    pub fn as_integer(&self) -> Option<i64> {
        if !self.is_integer() {
            return None;
        }
        self.lexical.trim().parse().ok()
    }

    /// Parses the lexical form of an `xsd:boolean` literal.
    pub fn as_boolean(&self) -> Option<bool> {
        if self.datatype != xsd::BOOLEAN {
            return None;
        }
        match self.lexical.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"")?;
        for c in self.lexical.chars() {
            match c {
                '"' => write!(f, "\\\"")?,
                '\\' => write!(f, "\\\\")?,
                '\n' => write!(f, "\\n")?,
                '\r' => write!(f, "\\r")?,
                _ => write!(f, "{}", c)?,
            }
        }
        write!(f, "\"")?;

        if let Some(ref language) = self.language {
            write!(f, "@{}", language)
        } else if self.datatype == xsd::STRING {
            Ok(())
        } else {
            write!(f, "^^{}", self.datatype)
        }
    }
}

/// An RDF term: IRI, blank node or literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Term {
    /// A named resource.
    Iri(Iri),
    /// An anonymous resource.
    BlankNode(BlankNode),
    /// A literal value.
    Literal(Literal),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(Iri::new(iri))
    }

    /// Creates a blank node term.
    pub fn blank(label: impl Into<String>) -> Self {
        Term::BlankNode(BlankNode::new(label))
    }

    /// Returns the IRI if this term is one.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Term::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// Returns the literal if this term is one.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    /// Returns true for blank nodes.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Returns the string that `sh:pattern` style checks match against:
    /// the IRI for IRIs, the lexical form for literals, nothing for blank nodes.
    pub fn lexical_form(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri.as_str()),
            Term::Literal(literal) => Some(literal.lexical()),
            Term::BlankNode(_) => None,
        }
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => iri.fmt(f),
            Term::BlankNode(node) => node.fmt(f),
            Term::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Term::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iri_local_name() {
        assert_eq!(Iri::new("http://www.w3.org/ns/shacl#maxCount").local_name(), "maxCount");
        assert_eq!(Iri::new("http://example.org/people/alice").local_name(), "alice");
        assert_eq!(Iri::new("urn-no-separator").local_name(), "urn-no-separator");
    }

    #[test]
    fn test_static_and_owned_iris_are_equal() {
        let owned = Iri::new(xsd::INTEGER.as_str());
        assert_eq!(owned, xsd::INTEGER);
    }

    #[test]
    fn test_integer_literal() {
        let literal = Literal::integer(42);
        assert_eq!(literal.lexical(), "42");
        assert_eq!(literal.datatype(), &xsd::INTEGER);
        assert_eq!(literal.as_integer(), Some(42));
    }

    #[test]
    fn test_derived_integer_datatypes_parse() {
        let literal = Literal::typed(
            "+7",
            Iri::new("http://www.w3.org/2001/XMLSchema#nonNegativeInteger"),
        );
        assert_eq!(literal.as_integer(), Some(7));

        let literal = Literal::typed("-3", Iri::new("http://www.w3.org/2001/XMLSchema#int"));
        assert_eq!(literal.as_integer(), Some(-3));
    }

    #[test]
    fn test_non_integer_literals_do_not_parse() {
        assert_eq!(Literal::string("5").as_integer(), None);
        assert_eq!(
            Literal::typed("five", xsd::INTEGER).as_integer(),
            None
        );
        assert_eq!(
            Literal::typed("1.5", Iri::new("http://www.w3.org/2001/XMLSchema#decimal")).as_integer(),
            None
        );
    }

    #[test]
    fn test_boolean_literal() {
        assert_eq!(Literal::boolean(true).as_boolean(), Some(true));
        assert_eq!(Literal::typed("0", xsd::BOOLEAN).as_boolean(), Some(false));
        assert_eq!(Literal::string("true").as_boolean(), None);
    }

    #[test]
    fn test_lang_string_normalises_tag() {
        let literal = Literal::lang_string("Bonjour", "FR");
        assert_eq!(literal.language(), Some("fr"));
        assert_eq!(literal.datatype(), &rdf::LANG_STRING);
    }

    #[test]
    fn test_display_ntriples_syntax() {
        assert_eq!(Term::iri("http://example.org/a").to_string(), "<http://example.org/a>");
        assert_eq!(Term::blank("b0").to_string(), "_:b0");
        assert_eq!(Term::from(Literal::string("hi")).to_string(), "\"hi\"");
        assert_eq!(Term::from(Literal::lang_string("hi", "en")).to_string(), "\"hi\"@en");
        assert_eq!(
            Term::from(Literal::integer(3)).to_string(),
            "\"3\"^^<http://www.w3.org/2001/XMLSchema#integer>"
        );
        assert_eq!(
            Term::from(Literal::string("say \"x\"")).to_string(),
            "\"say \\\"x\\\"\""
        );
    }

    #[test]
    fn test_lexical_form() {
        assert_eq!(Term::iri("http://example.org/a").lexical_form(), Some("http://example.org/a"));
        assert_eq!(Term::from(Literal::integer(1)).lexical_form(), Some("1"));
        assert_eq!(Term::blank("x").lexical_form(), None);
    }
}
