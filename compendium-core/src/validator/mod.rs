//! Component Validator - property and styling checks
//!
//! Two independent checks that are never mixed:
//! - [`validate_props`] compares supplied props against a schema's declarations
//! - [`validate_tokens`] scans a class string for values that bypass design tokens

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

pub mod tokens;


pub use tokens::{
    validate_tokens, ArbitraryValueRule, HardCodedColorRule, TokenFinding, TokenRule,
    TokenValidation, TokenValidator,
};

use crate::catalog::Catalog;
use crate::error::RegistryError;

/// Declared type of a schema prop
#[derive(Debug, Clone, PartialEq)]
pub enum PropKind {
    /// Value must equal one of these
    Enum(Vec<Value>),
    Boolean,
    Number,
    String,
    /// Declared but not checked
    Other(String),
}

impl PropKind {
    fn from_declaration(declaration: &Map<String, Value>) -> Self {
        let type_name = declaration
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default();

        match type_name {
            "enum" => match declaration.get("values") {
                Some(Value::Array(values)) => PropKind::Enum(values.clone()),
                _ => PropKind::Other(type_name.to_string()),
            },
            "boolean" => PropKind::Boolean,
            "number" => PropKind::Number,
            "string" => PropKind::String,
            other => PropKind::Other(other.to_string()),
        }
    }

    /// Primitive kind name, for primitives only
    fn primitive_name(&self) -> Option<&'static str> {
        match self {
            PropKind::Boolean => Some("boolean"),
            PropKind::Number => Some("number"),
            PropKind::String => Some("string"),
            _ => None,
        }
    }

    fn accepts_primitive(&self, value: &Value) -> bool {
        match self {
            PropKind::Boolean => value.is_boolean(),
            PropKind::Number => value.is_number(),
            PropKind::String => value.is_string(),
            _ => true,
        }
    }
}

/// One prop declared by a schema document
#[derive(Debug, Clone, PartialEq)]
pub struct PropDeclaration {
    pub name: String,
    pub kind: PropKind,
    pub required: bool,
}

/// Read the `props` object of a schema document, in declaration order.
///
/// Anything that is not an object is ignored; the loader hands schemas over
/// unchecked, so this is where shape is interpreted.
pub fn declared_props(schema: &Value) -> Vec<PropDeclaration> {
    let Some(props) = schema.get("props").and_then(Value::as_object) else {
        return Vec::new();
    };

    props
        .iter()
        .filter_map(|(name, declaration)| {
            let declaration = declaration.as_object()?;
            Some(PropDeclaration {
                name: name.clone(),
                kind: PropKind::from_declaration(declaration),
                required: declaration
                    .get("required")
                    .and_then(Value::as_bool)
                    .unwrap_or(false),
            })
        })
        .collect()
}

/// A single finding against one prop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropIssue {
    pub prop: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<Value>,
}

/// Outcome of prop validation. `valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropValidation {
    pub valid: bool,
    pub errors: Vec<PropIssue>,
    pub warnings: Vec<PropIssue>,
}

impl PropValidation {
    /// Result used when no schema is loaded
    pub fn passed() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validate supplied props against a schema.
///
/// Without a schema the props trivially pass. Props the schema does not
/// declare only produce warnings.
pub fn validate_props(schema: Option<&Value>, props: &Map<String, Value>) -> PropValidation {
    let Some(schema) = schema else {
        return PropValidation::passed();
    };

    let declarations = declared_props(schema);
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for declaration in &declarations {
        let Some(value) = props.get(&declaration.name) else {
            if declaration.required {
                errors.push(PropIssue {
                    prop: declaration.name.clone(),
                    message: format!("Missing required prop '{}'", declaration.name),
                    expected: None,
                });
            }
            continue;
        };

        match &declaration.kind {
            PropKind::Enum(values) => {
                if !values.contains(value) {
                    errors.push(PropIssue {
                        prop: declaration.name.clone(),
                        message: format!(
                            "Invalid value {} for prop '{}'",
                            value, declaration.name
                        ),
                        expected: Some(Value::Array(values.clone())),
                    });
                }
            }
            kind => {
                if let Some(primitive) = kind.primitive_name() {
                    if !kind.accepts_primitive(value) {
                        errors.push(PropIssue {
                            prop: declaration.name.clone(),
                            message: format!(
                                "Prop '{}' must be a {}",
                                declaration.name, primitive
                            ),
                            expected: Some(Value::String(primitive.to_string())),
                        });
                    }
                }
            }
        }
    }

    for name in props.keys() {
        if !declarations.iter().any(|d| &d.name == name) {
            warnings.push(PropIssue {
                prop: name.clone(),
                message: format!("Prop '{}' is not declared in the schema", name),
                expected: None,
            });
        }
    }

    PropValidation {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}

impl Catalog {
    /// Validate props for a cataloged component.
    ///
    /// A component without a loadable schema passes trivially; an unknown
    /// component is still an error.
    pub fn validate_component_props(
        &self,
        name: &str,
        props: &Map<String, Value>,
    ) -> Result<PropValidation, RegistryError> {
        let schema = match self.schema(name) {
            Ok(schema) => Some(schema),
            Err(RegistryError::SchemaNotAvailable { .. }) => {
                debug!(component = name, "No schema loaded, skipping prop validation");
                None
            }
            Err(e) => return Err(e),
        };

        Ok(validate_props(schema.as_ref(), props))
    }
}
