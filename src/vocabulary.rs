//! Fixed vocabulary identifiers.
//!
//! SHACL predicates, classes and constraint-component identifiers, plus the
//! handful of RDF, RDFS and XSD terms the crate reads or writes.

/// SHACL vocabulary (`http://www.w3.org/ns/shacl#`).
pub mod sh {
    use crate::term::Iri;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/shacl#";

    // Shape classes
    pub const NODE_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#NodeShape");
    pub const PROPERTY_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#PropertyShape");

    // Shape structure
    pub const PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#path");
    pub const PROPERTY: Iri = Iri::from_static("http://www.w3.org/ns/shacl#property");
    pub const INVERSE_PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#inversePath");
    pub const ALTERNATIVE_PATH: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#alternativePath");
    pub const SEVERITY: Iri = Iri::from_static("http://www.w3.org/ns/shacl#severity");
    pub const MESSAGE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#message");
    pub const DEACTIVATED: Iri = Iri::from_static("http://www.w3.org/ns/shacl#deactivated");

    // Targets
    pub const TARGET_NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#targetNode");
    pub const TARGET_CLASS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#targetClass");
    pub const TARGET_SUBJECTS_OF: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#targetSubjectsOf");
    pub const TARGET_OBJECTS_OF: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#targetObjectsOf");

    // Constraint parameters
    pub const MAX_COUNT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#maxCount");
    pub const MIN_COUNT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#minCount");
    pub const PATTERN: Iri = Iri::from_static("http://www.w3.org/ns/shacl#pattern");
    pub const FLAGS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#flags");

    // Constraint components
    pub const MAX_COUNT_CONSTRAINT_COMPONENT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#MaxCountConstraintComponent");
    pub const MIN_COUNT_CONSTRAINT_COMPONENT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#MinCountConstraintComponent");
    pub const PATTERN_CONSTRAINT_COMPONENT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#PatternConstraintComponent");

    // Severities
    pub const VIOLATION: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Violation");
    pub const WARNING: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Warning");
    pub const INFO: Iri = Iri::from_static("http://www.w3.org/ns/shacl#Info");

    // Validation report vocabulary
    pub const VALIDATION_REPORT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#ValidationReport");
    pub const VALIDATION_RESULT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#ValidationResult");
    pub const CONFORMS: Iri = Iri::from_static("http://www.w3.org/ns/shacl#conforms");
    pub const RESULT: Iri = Iri::from_static("http://www.w3.org/ns/shacl#result");
    pub const FOCUS_NODE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#focusNode");
    pub const RESULT_PATH: Iri = Iri::from_static("http://www.w3.org/ns/shacl#resultPath");
    pub const VALUE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#value");
    pub const RESULT_MESSAGE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#resultMessage");
    pub const RESULT_SEVERITY: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#resultSeverity");
    pub const SOURCE_SHAPE: Iri = Iri::from_static("http://www.w3.org/ns/shacl#sourceShape");
    pub const SOURCE_CONSTRAINT_COMPONENT: Iri =
        Iri::from_static("http://www.w3.org/ns/shacl#sourceConstraintComponent");
}

/// RDF vocabulary.
pub mod rdf {
    use crate::term::Iri;

    pub const TYPE: Iri = Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#type");
    pub const FIRST: Iri = Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#first");
    pub const REST: Iri = Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#rest");
    pub const NIL: Iri = Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#nil");
    pub const LANG_STRING: Iri =
        Iri::from_static("http://www.w3.org/1999/02/22-rdf-syntax-ns#langString");
}

/// RDFS vocabulary.
pub mod rdfs {
    use crate::term::Iri;

    pub const SUB_CLASS_OF: Iri =
        Iri::from_static("http://www.w3.org/2000/01/rdf-schema#subClassOf");
}

/// XML Schema datatypes.
pub mod xsd {
    use crate::term::Iri;

    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

    pub const STRING: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#string");
    pub const INTEGER: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#integer");
    pub const BOOLEAN: Iri = Iri::from_static("http://www.w3.org/2001/XMLSchema#boolean");
}
