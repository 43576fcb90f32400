use std::collections::BTreeSet;

use fixtura_core::{AnnotationMeta, FieldMeta, MethodMeta};

/// Combine the annotations declared for one attribute.
///
/// Field annotations come first, in declaration order. Each method then
/// contributes its first parameter's annotations when it has parameters, or
/// its own annotations when it has none. Nothing is de-duplicated: an
/// annotation present on both the field and the setter appears twice.
pub fn attribute_annotations<'c>(
    field: Option<&'c FieldMeta>,
    methods: &[&'c MethodMeta],
) -> Vec<&'c AnnotationMeta> {
    let mut annotations: Vec<&'c AnnotationMeta> = Vec::new();

    if let Some(field) = field {
        annotations.extend(field.annotations.iter());
    }

    for method in methods {
        match method.params.first() {
            Some(param) => annotations.extend(param.annotations.iter()),
            None => annotations.extend(method.annotations.iter()),
        }
    }

    annotations
}

/// Whether any annotation has a type listed in `types`.
pub fn contains_any_annotation(annotations: &[&AnnotationMeta], types: &BTreeSet<String>) -> bool {
    annotations
        .iter()
        .any(|annotation| types.contains(&annotation.type_name))
}
