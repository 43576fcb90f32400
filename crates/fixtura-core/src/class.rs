use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{AnnotationMeta, Modifiers, TypeRef};

/// Kind of type described by a [`ClassMeta`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClassKind {
    #[default]
    Class,
    Interface,
    Enum,
    Record,
    Annotation,
}

/// Immutable metadata for one loaded type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ClassMeta {
    /// Fully qualified name, unique within a catalog.
    pub name: String,
    #[serde(default)]
    pub kind: ClassKind,
    /// Direct superclass; `None` for the root type and for interfaces.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superclass: Option<String>,
    /// Directly implemented (or, for interfaces, extended) interfaces.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,
    /// Declared fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldMeta>,
    /// Declared methods in declaration order.
    #[serde(default)]
    pub methods: Vec<MethodMeta>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationMeta>,
    /// Members of an opaque type cannot be reflected into.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub opaque: bool,
}

impl ClassMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Class,
            superclass: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            annotations: Vec::new(),
            opaque: false,
        }
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self {
            kind: ClassKind::Interface,
            ..Self::new(name)
        }
    }

    pub fn extends(mut self, superclass: impl Into<String>) -> Self {
        self.superclass = Some(superclass.into());
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.interfaces.push(interface.into());
        self
    }

    pub fn field(mut self, field: FieldMeta) -> Self {
        self.fields.push(field);
        self
    }

    pub fn method(mut self, method: MethodMeta) -> Self {
        self.methods.push(method);
        self
    }

    pub fn annotated(mut self, annotation: AnnotationMeta) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn opaque(mut self) -> Self {
        self.opaque = true;
        self
    }

    pub fn is_interface(&self) -> bool {
        self.kind == ClassKind::Interface || self.kind == ClassKind::Annotation
    }

    /// Field declared directly on this type (superclasses are not searched).
    pub fn declared_field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Methods declared directly on this type with the given name.
    pub fn declared_methods<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a MethodMeta> {
        self.methods.iter().filter(move |method| method.name == name)
    }
}

/// A declared field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FieldMeta {
    pub name: String,
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Modifiers::is_default")]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationMeta>,
}

impl FieldMeta {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: AnnotationMeta) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn is_instance_field(&self) -> bool {
        !self.modifiers.is_static && !self.modifiers.is_synthetic
    }
}

/// A declared method parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ParamMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub ty: TypeRef,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationMeta>,
}

impl ParamMeta {
    pub fn new(ty: TypeRef) -> Self {
        Self {
            name: None,
            ty,
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: AnnotationMeta) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A declared method.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MethodMeta {
    pub name: String,
    #[serde(default)]
    pub params: Vec<ParamMeta>,
    /// Return type; `None` means `void`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Modifiers::is_default")]
    pub modifiers: Modifiers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<AnnotationMeta>,
}

impl MethodMeta {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            returns: None,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
        }
    }

    /// A no-argument method returning `ty`.
    pub fn getter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name).returning(ty)
    }

    /// A single-argument `void` method taking `ty`.
    pub fn setter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self::new(name).param(ParamMeta::new(ty))
    }

    pub fn param(mut self, param: ParamMeta) -> Self {
        self.params.push(param);
        self
    }

    pub fn returning(mut self, ty: TypeRef) -> Self {
        self.returns = if ty.is_void() { None } else { Some(ty) };
        self
    }

    pub fn annotated(mut self, annotation: AnnotationMeta) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn returns_void(&self) -> bool {
        self.returns.as_ref().is_none_or(TypeRef::is_void)
    }

    /// Parameter type names, used to match a method signature.
    pub fn param_types(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|param| param.ty.name.as_str())
    }
}
