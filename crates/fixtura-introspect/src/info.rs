use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use fixtura_core::{AnnotationMeta, ClassMeta, FieldMeta, MethodMeta, TypeRef};

/// Borrowed handle to a field together with the class that declares it.
#[derive(Clone, Copy)]
pub struct FieldRef<'c> {
    pub declaring: &'c ClassMeta,
    pub field: &'c FieldMeta,
}

impl<'c> FieldRef<'c> {
    pub fn new(declaring: &'c ClassMeta, field: &'c FieldMeta) -> Self {
        Self { declaring, field }
    }

    pub fn name(&self) -> &'c str {
        &self.field.name
    }

    pub fn declaring_class(&self) -> &'c str {
        &self.declaring.name
    }
}

/// Borrowed handle to a method together with the class that declares it.
#[derive(Clone, Copy)]
pub struct MethodRef<'c> {
    pub declaring: &'c ClassMeta,
    pub method: &'c MethodMeta,
}

impl<'c> MethodRef<'c> {
    pub fn new(declaring: &'c ClassMeta, method: &'c MethodMeta) -> Self {
        Self { declaring, method }
    }

    pub fn name(&self) -> &'c str {
        &self.method.name
    }

    pub fn declaring_class(&self) -> &'c str {
        &self.declaring.name
    }
}

// Handles compare by identity of the metadata record they point at.
impl PartialEq for FieldRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.declaring, other.declaring) && std::ptr::eq(self.field, other.field)
    }
}

impl Eq for FieldRef<'_> {}

impl PartialEq for MethodRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.declaring, other.declaring) && std::ptr::eq(self.method, other.method)
    }
}

impl Eq for MethodRef<'_> {}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}: {}", self.declaring.name, self.field.name, self.field.ty)
    }
}

impl fmt::Debug for MethodRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}(", self.declaring.name, self.method.name)?;
        for (idx, param) in self.method.params.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param.ty)?;
        }
        f.write_str(")")
    }
}

impl Serialize for FieldRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("FieldRef", 3)?;
        state.serialize_field("declaring_class", &self.declaring.name)?;
        state.serialize_field("name", &self.field.name)?;
        state.serialize_field("ty", &self.field.ty)?;
        state.end()
    }
}

impl Serialize for MethodRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let params: Vec<&TypeRef> = self.method.params.iter().map(|param| &param.ty).collect();
        let mut state = serializer.serialize_struct("MethodRef", 4)?;
        state.serialize_field("declaring_class", &self.declaring.name)?;
        state.serialize_field("name", &self.method.name)?;
        state.serialize_field("params", &params)?;
        state.serialize_field("returns", &self.method.returns)?;
        state.end()
    }
}

/// One discovered attribute of a class.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClassAttribute<'c> {
    name: String,
    ty: &'c TypeRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<FieldRef<'c>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    getter: Option<MethodRef<'c>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    setter: Option<MethodRef<'c>>,
    annotations: Vec<&'c AnnotationMeta>,
}

impl<'c> ClassAttribute<'c> {
    /// Assemble an attribute from its resolved handles.
    ///
    /// Returns `None` when no handle is present. The semantic type is the
    /// field's type, else the getter's return type, else the setter's first
    /// parameter type.
    pub fn new(
        name: impl Into<String>,
        field: Option<FieldRef<'c>>,
        getter: Option<MethodRef<'c>>,
        setter: Option<MethodRef<'c>>,
        annotations: Vec<&'c AnnotationMeta>,
    ) -> Option<Self> {
        let ty = field
            .map(|field| &field.field.ty)
            .or_else(|| getter.and_then(|getter| getter.method.returns.as_ref()))
            .or_else(|| setter.and_then(|setter| setter.method.params.first().map(|p| &p.ty)))?;

        Some(Self {
            name: name.into(),
            ty,
            field,
            getter,
            setter,
            annotations,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &'c TypeRef {
        self.ty
    }

    pub fn field(&self) -> Option<FieldRef<'c>> {
        self.field
    }

    pub fn getter(&self) -> Option<MethodRef<'c>> {
        self.getter
    }

    pub fn setter(&self) -> Option<MethodRef<'c>> {
        self.setter
    }

    /// Merged annotations: field first, then getter, then setter parameter.
    pub fn annotations(&self) -> &[&'c AnnotationMeta] {
        &self.annotations
    }

    /// First merged annotation of the given type.
    pub fn annotation(&self, type_name: &str) -> Option<&'c AnnotationMeta> {
        self.annotations
            .iter()
            .copied()
            .find(|annotation| annotation.type_name == type_name)
    }

    pub fn has_annotation(&self, type_name: &str) -> bool {
        self.annotation(type_name).is_some()
    }
}

/// Immutable descriptor of an introspected class.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ClassInfo<'c> {
    #[serde(rename = "class_name", serialize_with = "serialize_class_name")]
    class: &'c ClassMeta,
    attributes: Vec<ClassAttribute<'c>>,
}

fn serialize_class_name<S: Serializer>(class: &&ClassMeta, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&class.name)
}

impl<'c> ClassInfo<'c> {
    pub(crate) fn new(class: &'c ClassMeta, attributes: Vec<ClassAttribute<'c>>) -> Self {
        Self { class, attributes }
    }

    pub fn class(&self) -> &'c ClassMeta {
        self.class
    }

    pub fn class_name(&self) -> &'c str {
        &self.class.name
    }

    /// Attributes in discovery order.
    pub fn attributes(&self) -> &[ClassAttribute<'c>] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&ClassAttribute<'c>> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
    }

    pub fn attribute_names(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl<'a, 'c> IntoIterator for &'a ClassInfo<'c> {
    type Item = &'a ClassAttribute<'c>;
    type IntoIter = std::slice::Iter<'a, ClassAttribute<'c>>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}
