use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Name of the `void` pseudo-type.
pub const VOID: &str = "void";

const BOXED_PRIMITIVES: &[(&str, &str)] = &[
    ("int", "java.lang.Integer"),
    ("double", "java.lang.Double"),
    ("long", "java.lang.Long"),
    ("byte", "java.lang.Byte"),
    ("float", "java.lang.Float"),
    ("char", "java.lang.Character"),
    ("short", "java.lang.Short"),
    ("boolean", "java.lang.Boolean"),
];

/// Reference to a declared type, e.g. `java.util.List<java.lang.String>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct TypeRef {
    /// Fully qualified type name, or a primitive keyword such as `int`.
    pub name: String,
    /// Generic type arguments, outermost first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    pub fn generic(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    pub fn void() -> Self {
        Self::new(VOID)
    }

    pub fn is_void(&self) -> bool {
        self.name == VOID
    }

    pub fn is_primitive(&self) -> bool {
        BOXED_PRIMITIVES
            .iter()
            .any(|(primitive, _)| *primitive == self.name)
    }

    /// Boxed counterpart of a primitive type; any other type is returned as is.
    pub fn boxed(&self) -> TypeRef {
        TypeRef::new(primitive_to_boxed_type(&self.name))
            .with_args(self.args.clone())
    }

    fn with_args(mut self, args: Vec<TypeRef>) -> Self {
        self.args = args;
        self
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            f.write_str("<")?;
            for (idx, arg) in self.args.iter().enumerate() {
                if idx > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}

/// Finds the boxed type name for a primitive type name.
///
/// Non-primitive names are returned unchanged.
pub fn primitive_to_boxed_type(type_name: &str) -> &str {
    BOXED_PRIMITIVES
        .iter()
        .find(|(primitive, _)| *primitive == type_name)
        .map(|(_, boxed)| *boxed)
        .unwrap_or(type_name)
}

/// Member modifiers relevant to attribute discovery.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct Modifiers {
    pub is_static: bool,
    /// Generated by the compiler rather than declared in source.
    pub is_synthetic: bool,
    /// Compiler-generated bridge for erased or covariant signatures.
    pub is_bridge: bool,
    pub is_native: bool,
}

impl Modifiers {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// An annotation instance declared on a class, field, method or parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnnotationMeta {
    /// Annotation type identifier, e.g. `javax.validation.constraints.NotNull`.
    pub type_name: String,
    /// Element values keyed by element name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub values: BTreeMap<String, serde_json::Value>,
}

impl AnnotationMeta {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            values: BTreeMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn value(&self, key: &str) -> Option<&serde_json::Value> {
        self.values.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boxes_every_primitive() {
        assert_eq!(primitive_to_boxed_type("int"), "java.lang.Integer");
        assert_eq!(primitive_to_boxed_type("boolean"), "java.lang.Boolean");
        assert_eq!(primitive_to_boxed_type("char"), "java.lang.Character");
        assert_eq!(primitive_to_boxed_type("java.lang.String"), "java.lang.String");
        assert!(TypeRef::new("short").is_primitive());
        assert!(!TypeRef::new("java.lang.Short").is_primitive());
    }

    #[test]
    fn displays_generic_arguments() {
        let ty = TypeRef::generic(
            "java.util.Map",
            vec![
                TypeRef::new("java.lang.String"),
                TypeRef::generic("java.util.List", vec![TypeRef::new("java.lang.Long")]),
            ],
        );
        assert_eq!(
            ty.to_string(),
            "java.util.Map<java.lang.String, java.util.List<java.lang.Long>>"
        );
        assert_eq!(ty.boxed(), ty);
    }
}
