use std::collections::HashMap;

use regex::Regex;

use fixtura_core::{ClassCatalog, MethodMeta};

use crate::hierarchy::ClassHierarchy;
use crate::info::MethodRef;
use crate::strategy::NamingPolicy;

/// Role an accessor plays for its attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorKind {
    Getter,
    Setter,
}

/// A method classified as a getter or setter of a named attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor<'c> {
    pub attribute: String,
    pub kind: AccessorKind,
    pub method: MethodRef<'c>,
}

/// Strip the first match of `pattern` from `method_name` and lower-case the
/// first remaining character.
///
/// Returns `None` when the pattern removes nothing or leaves nothing.
pub fn attribute_name(pattern: &Regex, method_name: &str) -> Option<String> {
    let stripped = pattern.replacen(method_name, 1, "");
    if stripped == method_name || stripped.is_empty() {
        return None;
    }

    let mut chars = stripped.chars();
    let first = chars.next()?;
    Some(first.to_lowercase().chain(chars).collect())
}

fn is_candidate(method: &MethodMeta) -> bool {
    let modifiers = method.modifiers;
    !(modifiers.is_static || modifiers.is_synthetic || modifiers.is_bridge || modifiers.is_native)
}

/// Classify a method as an accessor under `policy`.
///
/// Getters take no parameters and return a value of any type, whatever
/// prefix matched; setters take exactly one parameter. Static, synthetic,
/// bridge and native methods never qualify.
pub fn classify<'c>(method: MethodRef<'c>, policy: NamingPolicy<'_>) -> Option<Accessor<'c>> {
    let meta = method.method;
    if !is_candidate(meta) {
        return None;
    }

    let (kind, pattern) = match meta.params.len() {
        0 if !meta.returns_void() => (AccessorKind::Getter, policy.getter),
        1 => (AccessorKind::Setter, policy.setter),
        _ => return None,
    };

    attribute_name(pattern, &meta.name).map(|attribute| Accessor {
        attribute,
        kind,
        method,
    })
}

/// Select the method declared in the most specific class of the hierarchy.
///
/// The current selection is replaced whenever its declaring class is
/// assignable from the candidate's declaring class, so overrides win over the
/// methods they override regardless of iteration order. Among methods of the
/// same declaring class the last one wins.
pub fn select_latest_method<'c>(
    catalog: &ClassCatalog,
    methods: impl IntoIterator<Item = MethodRef<'c>>,
) -> Option<MethodRef<'c>> {
    let mut selected: Option<MethodRef<'c>> = None;
    for method in methods {
        let replace = match selected {
            None => true,
            Some(current) => {
                catalog.is_assignable_from(current.declaring_class(), method.declaring_class())
            }
        };
        if replace {
            selected = Some(method);
        }
    }
    selected
}

/// Getter and setter candidates of a hierarchy, grouped by attribute name.
#[derive(Debug, Clone, Default)]
pub struct AccessorIndex<'c> {
    names: Vec<String>,
    getters: HashMap<String, Vec<MethodRef<'c>>>,
    setters: HashMap<String, Vec<MethodRef<'c>>>,
}

impl<'c> AccessorIndex<'c> {
    pub fn build(hierarchy: &ClassHierarchy<'c>, policy: NamingPolicy<'_>) -> Self {
        let mut index = Self::default();
        for accessor in hierarchy.methods().filter_map(|method| classify(method, policy)) {
            index.insert(accessor);
        }
        index
    }

    fn insert(&mut self, accessor: Accessor<'c>) {
        if !self.getters.contains_key(&accessor.attribute)
            && !self.setters.contains_key(&accessor.attribute)
        {
            self.names.push(accessor.attribute.clone());
        }

        let bucket = match accessor.kind {
            AccessorKind::Getter => &mut self.getters,
            AccessorKind::Setter => &mut self.setters,
        };
        bucket
            .entry(accessor.attribute)
            .or_default()
            .push(accessor.method);
    }

    /// Attribute names in the order their first accessor was seen.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn getter_candidates(&self, attribute: &str) -> &[MethodRef<'c>] {
        self.getters.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn setter_candidates(&self, attribute: &str) -> &[MethodRef<'c>] {
        self.setters.get(attribute).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Most specific getter for `attribute`.
    pub fn getter(&self, catalog: &ClassCatalog, attribute: &str) -> Option<MethodRef<'c>> {
        select_latest_method(catalog, self.getter_candidates(attribute).iter().copied())
    }

    /// Most specific setter for `attribute`.
    pub fn setter(&self, catalog: &ClassCatalog, attribute: &str) -> Option<MethodRef<'c>> {
        select_latest_method(catalog, self.setter_candidates(attribute).iter().copied())
    }
}
