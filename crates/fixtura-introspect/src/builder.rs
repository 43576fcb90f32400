use std::collections::HashSet;

use tracing::{debug, trace};

use fixtura_core::{ClassCatalog, MethodMeta};

use crate::accessors::AccessorIndex;
use crate::annotations::attribute_annotations;
use crate::errors::{IntrospectError, IntrospectResult};
use crate::exclusion::ExclusionSpec;
use crate::hierarchy::ClassHierarchy;
use crate::info::{ClassAttribute, ClassInfo};
use crate::strategy::{DefaultStrategy, IntrospectionStrategy};

/// Build the descriptor of `class_name`.
///
/// When `strategy` is `None` a fresh [`DefaultStrategy`] is used. Fails only
/// when the class is missing from the catalog or is opaque; every other
/// problem (unknown supertypes, unmatched accessors, excluded attributes)
/// just shrinks the result.
pub fn build_class_info<'c>(
    catalog: &'c ClassCatalog,
    class_name: &str,
    strategy: Option<&dyn IntrospectionStrategy>,
    exclusions: &ExclusionSpec,
) -> IntrospectResult<ClassInfo<'c>> {
    let default_strategy = DefaultStrategy;
    let strategy = strategy.unwrap_or(&default_strategy);

    let class = catalog
        .get(class_name)
        .ok_or_else(|| IntrospectError::ClassNotFound(class_name.to_string()))?;
    if class.opaque {
        return Err(IntrospectError::Inaccessible(class_name.to_string()));
    }

    let hierarchy = ClassHierarchy::walk(catalog, class);
    let accessors = AccessorIndex::build(&hierarchy, strategy.naming_policy());

    let mut seen = HashSet::new();
    let mut names: Vec<&str> = Vec::new();
    let field_names = hierarchy.instance_fields().map(|field| field.name());
    let accessor_names = accessors.names().iter().map(String::as_str);
    for name in field_names.chain(accessor_names) {
        if seen.insert(name) {
            names.push(name);
        }
    }

    let mut attributes = Vec::with_capacity(names.len());
    for name in names {
        let field = hierarchy.find_instance_field(name);
        let getter = accessors.getter(catalog, name);
        let setter = accessors.setter(catalog, name);

        let methods: Vec<&MethodMeta> = getter
            .iter()
            .chain(setter.iter())
            .map(|method| method.method)
            .collect();
        let annotations = attribute_annotations(field.map(|field| field.field), &methods);

        if let Some(reason) = exclusions.exclusion_reason(name, &annotations) {
            trace!(class = %class_name, attribute = %name, ?reason, "attribute excluded");
            continue;
        }

        let Some(attribute) = ClassAttribute::new(name, field, getter, setter, annotations) else {
            trace!(class = %class_name, attribute = %name, "attribute has no resolvable handle");
            continue;
        };

        if !strategy.approve(&attribute) {
            trace!(class = %class_name, attribute = %name, "attribute not approved by strategy");
            continue;
        }

        attributes.push(attribute);
    }

    debug!(
        class = %class_name,
        chain = hierarchy.chain().len(),
        attributes = attributes.len(),
        "class info built"
    );

    Ok(ClassInfo::new(class, attributes))
}

/// Reusable introspection policy: a strategy plus an exclusion spec.
pub struct ClassInfoBuilder {
    strategy: Box<dyn IntrospectionStrategy>,
    exclusions: ExclusionSpec,
}

impl Default for ClassInfoBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassInfoBuilder {
    pub fn new() -> Self {
        Self {
            strategy: Box::new(DefaultStrategy),
            exclusions: ExclusionSpec::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: impl IntrospectionStrategy + 'static) -> Self {
        self.strategy = Box::new(strategy);
        self
    }

    pub fn with_exclusions(mut self, exclusions: ExclusionSpec) -> Self {
        self.exclusions = exclusions;
        self
    }

    pub fn exclude_field(mut self, name: impl Into<String>) -> Self {
        self.exclusions.fields.insert(name.into());
        self
    }

    pub fn exclude_annotation(mut self, type_name: impl Into<String>) -> Self {
        self.exclusions.annotations.insert(type_name.into());
        self
    }

    pub fn exclusions(&self) -> &ExclusionSpec {
        &self.exclusions
    }

    pub fn build<'c>(&self, catalog: &'c ClassCatalog, class_name: &str) -> IntrospectResult<ClassInfo<'c>> {
        build_class_info(catalog, class_name, Some(self.strategy.as_ref()), &self.exclusions)
    }
}

impl std::fmt::Debug for ClassInfoBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassInfoBuilder")
            .field("getter_pattern", &self.strategy.getter_pattern().as_str())
            .field("setter_pattern", &self.strategy.setter_pattern().as_str())
            .field("exclusions", &self.exclusions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtura_core::{AnnotationMeta, ClassMeta, FieldMeta, MethodMeta, OBJECT_CLASS, TypeRef};

    use crate::strategy::PatternStrategy;

    fn string() -> TypeRef {
        TypeRef::new("java.lang.String")
    }

    fn catalog() -> ClassCatalog {
        ClassCatalog::new()
            .with(ClassMeta::new(OBJECT_CLASS))
            .with(ClassMeta::new("a.Empty").extends(OBJECT_CLASS))
            .with(
                ClassMeta::new("a.Person")
                    .extends(OBJECT_CLASS)
                    .field(FieldMeta::new("name", string()))
                    .field(FieldMeta::new("secret", string()).annotated(AnnotationMeta::new("a.Hidden")))
                    .method(MethodMeta::getter("getName", string()))
                    .method(MethodMeta::setter("setName", string()))
                    .method(MethodMeta::getter("getDisplayName", string())),
            )
            .with(ClassMeta::new("a.Sealed").opaque())
    }

    #[test]
    fn empty_class_has_no_attributes() {
        let catalog = catalog();
        let info = build_class_info(&catalog, "a.Empty", None, &ExclusionSpec::default()).unwrap();
        assert!(info.is_empty());
        assert_eq!(info.class_name(), "a.Empty");
    }

    #[test]
    fn fields_come_before_accessor_only_attributes() {
        let catalog = catalog();
        let info = build_class_info(&catalog, "a.Person", None, &ExclusionSpec::default()).unwrap();
        assert_eq!(info.attribute_names(), vec!["name", "secret", "displayName"]);

        let name = info.attribute("name").unwrap();
        assert!(name.field().is_some());
        assert_eq!(name.getter().map(|m| m.name()), Some("getName"));
        assert_eq!(name.setter().map(|m| m.name()), Some("setName"));

        let display = info.attribute("displayName").unwrap();
        assert!(display.field().is_none());
        assert_eq!(display.ty().name, "java.lang.String");
    }

    #[test]
    fn exclusions_drop_attributes() {
        let catalog = catalog();
        let exclusions = ExclusionSpec::new()
            .exclude_field("displayName")
            .exclude_annotation("a.Hidden");
        let info = build_class_info(&catalog, "a.Person", None, &exclusions).unwrap();
        assert_eq!(info.attribute_names(), vec!["name"]);
    }

    #[test]
    fn missing_and_opaque_classes_fail() {
        let catalog = catalog();
        let spec = ExclusionSpec::default();
        assert!(matches!(
            build_class_info(&catalog, "a.Missing", None, &spec),
            Err(IntrospectError::ClassNotFound(name)) if name == "a.Missing"
        ));
        assert!(matches!(
            build_class_info(&catalog, "a.Sealed", None, &spec),
            Err(IntrospectError::Inaccessible(_))
        ));
    }

    #[test]
    fn builder_applies_strategy_approval() {
        let catalog = catalog();
        let builder = ClassInfoBuilder::new()
            .with_strategy(PatternStrategy::default().with_approval(crate::strategy::Approval::RequireSetter));
        let info = builder.build(&catalog, "a.Person").unwrap();
        assert_eq!(info.attribute_names(), vec!["name"]);
    }
}
