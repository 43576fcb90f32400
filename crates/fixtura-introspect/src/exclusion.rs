use std::collections::BTreeSet;

use fixtura_core::AnnotationMeta;

use crate::annotations::contains_any_annotation;

/// Why an attribute was left out of a class descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExclusionReason {
    /// The attribute name is in the excluded-name set.
    Name,
    /// A merged annotation has an excluded type.
    Annotation(String),
}

/// Attribute names and annotation types to leave out of a descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSpec {
    pub fields: BTreeSet<String>,
    pub annotations: BTreeSet<String>,
}

impl ExclusionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_sets(annotations: BTreeSet<String>, fields: BTreeSet<String>) -> Self {
        Self { fields, annotations }
    }

    pub fn exclude_field(mut self, name: impl Into<String>) -> Self {
        self.fields.insert(name.into());
        self
    }

    pub fn exclude_annotation(mut self, type_name: impl Into<String>) -> Self {
        self.annotations.insert(type_name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.annotations.is_empty()
    }

    /// The first rule that excludes the attribute, if any.
    pub fn exclusion_reason(
        &self,
        name: &str,
        annotations: &[&AnnotationMeta],
    ) -> Option<ExclusionReason> {
        if self.fields.contains(name) {
            return Some(ExclusionReason::Name);
        }
        annotations
            .iter()
            .find(|annotation| self.annotations.contains(&annotation.type_name))
            .map(|annotation| ExclusionReason::Annotation(annotation.type_name.clone()))
    }

    pub fn is_excluded(&self, name: &str, annotations: &[&AnnotationMeta]) -> bool {
        self.fields.contains(name) || contains_any_annotation(annotations, &self.annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_match_excludes_regardless_of_annotations() {
        let spec = ExclusionSpec::new().exclude_field("secret");
        let keep = AnnotationMeta::new("Keep");
        assert_eq!(
            spec.exclusion_reason("secret", &[&keep]),
            Some(ExclusionReason::Name)
        );
        assert!(!spec.is_excluded("public", &[&keep]));
    }

    #[test]
    fn annotation_match_excludes() {
        let spec = ExclusionSpec::new().exclude_annotation("com.acme.Hidden");
        let hidden = AnnotationMeta::new("com.acme.Hidden");
        let other = AnnotationMeta::new("com.acme.Other");
        assert_eq!(
            spec.exclusion_reason("name", &[&other, &hidden]),
            Some(ExclusionReason::Annotation("com.acme.Hidden".to_string()))
        );
        assert!(!spec.is_excluded("name", &[&other]));
    }

    #[test]
    fn empty_spec_excludes_nothing() {
        let spec = ExclusionSpec::default();
        assert!(spec.is_empty());
        assert!(!spec.is_excluded("anything", &[]));
    }
}
