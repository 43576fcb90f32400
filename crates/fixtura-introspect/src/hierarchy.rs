use std::collections::{BTreeSet, VecDeque};

use tracing::debug;

use fixtura_core::{ClassCatalog, ClassMeta};

use crate::info::{FieldRef, MethodRef};

/// Precomputed type hierarchy of one class.
///
/// `chain` runs from the class itself up to, but not including, the catalog's
/// root type, most-derived first. `interfaces` holds every interface reachable
/// from the chain in breadth-first order, each once.
#[derive(Debug, Clone)]
pub struct ClassHierarchy<'c> {
    chain: Vec<&'c ClassMeta>,
    interfaces: Vec<&'c ClassMeta>,
}

impl<'c> ClassHierarchy<'c> {
    pub fn walk(catalog: &'c ClassCatalog, class: &'c ClassMeta) -> Self {
        let mut chain = Vec::new();
        let mut visited = BTreeSet::new();
        let mut current = Some(class);

        while let Some(class) = current {
            if catalog.is_root(&class.name) || !visited.insert(class.name.as_str()) {
                break;
            }
            chain.push(class);

            current = match class.superclass.as_deref() {
                Some(parent) if catalog.is_root(parent) => None,
                Some(parent) => {
                    let next = catalog.get(parent);
                    if next.is_none() {
                        debug!(class = %class.name, superclass = %parent, "superclass not in catalog; chain ends");
                    }
                    next
                }
                None => None,
            };
        }

        let interfaces = collect_interfaces(catalog, &chain);
        Self { chain, interfaces }
    }

    /// Classes from most-derived to least-derived.
    pub fn chain(&self) -> &[&'c ClassMeta] {
        &self.chain
    }

    pub fn interfaces(&self) -> &[&'c ClassMeta] {
        &self.interfaces
    }

    /// Every field declared along the chain, most-derived class first.
    ///
    /// Members of opaque classes are skipped.
    pub fn fields(&self) -> impl Iterator<Item = FieldRef<'c>> + '_ {
        self.chain
            .iter()
            .copied()
            .filter(|class| readable(class))
            .flat_map(|class| class.fields.iter().map(move |field| FieldRef::new(class, field)))
    }

    /// Non-static, non-synthetic fields along the chain.
    pub fn instance_fields(&self) -> impl Iterator<Item = FieldRef<'c>> + '_ {
        self.fields().filter(|field| field.field.is_instance_field())
    }

    /// Every method declared along the chain, then on the interfaces.
    pub fn methods(&self) -> impl Iterator<Item = MethodRef<'c>> + '_ {
        self.chain
            .iter()
            .chain(self.interfaces.iter())
            .copied()
            .filter(|class| readable(class))
            .flat_map(|class| {
                class
                    .methods
                    .iter()
                    .map(move |method| MethodRef::new(class, method))
            })
    }

    /// First field named `name` along the chain; subclass declarations
    /// shadow superclass ones.
    pub fn find_field(&self, name: &str) -> Option<FieldRef<'c>> {
        self.chain
            .iter()
            .copied()
            .filter(|class| readable(class))
            .find_map(|class| class.declared_field(name).map(|field| FieldRef::new(class, field)))
    }

    /// Methods named `name` along the chain, then on the interfaces.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = MethodRef<'c>> + 'a {
        self.chain
            .iter()
            .chain(self.interfaces.iter())
            .copied()
            .filter(|class| readable(class))
            .flat_map(move |class| {
                class
                    .declared_methods(name)
                    .map(move |method| MethodRef::new(class, method))
            })
    }

    /// Like [`ClassHierarchy::find_field`] but ignores static and synthetic
    /// fields.
    pub fn find_instance_field(&self, name: &str) -> Option<FieldRef<'c>> {
        self.instance_fields().find(|field| field.field.name == name)
    }
}

fn readable(class: &ClassMeta) -> bool {
    if class.opaque {
        debug!(class = %class.name, "skipping members of opaque supertype");
    }
    !class.opaque
}

fn collect_interfaces<'c>(catalog: &'c ClassCatalog, chain: &[&'c ClassMeta]) -> Vec<&'c ClassMeta> {
    let mut seen: BTreeSet<&str> = chain.iter().map(|class| class.name.as_str()).collect();
    let mut queue: VecDeque<&str> = chain
        .iter()
        .flat_map(|class| class.interfaces.iter().map(String::as_str))
        .collect();
    let mut interfaces = Vec::new();

    while let Some(name) = queue.pop_front() {
        if !seen.insert(name) {
            continue;
        }
        match catalog.get(name) {
            Some(interface) => {
                interfaces.push(interface);
                queue.extend(interface.interfaces.iter().map(String::as_str));
            }
            None => debug!(interface = %name, "interface not in catalog; skipped"),
        }
    }

    interfaces
}

/// Look up a field by name on `class_name` or any of its superclasses.
///
/// Returns `None`, never an error, when neither the class nor the field can
/// be found.
pub fn find_field<'c>(catalog: &'c ClassCatalog, class_name: &str, field: &str) -> Option<FieldRef<'c>> {
    let Some(class) = catalog.get(class_name) else {
        debug!(class = %class_name, "class not in catalog");
        return None;
    };

    let found = ClassHierarchy::walk(catalog, class).find_field(field);
    if found.is_none() {
        debug!(class = %class_name, attribute = %field, "a field could not be found for attribute");
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixtura_core::{FieldMeta, MethodMeta, Modifiers, OBJECT_CLASS, TypeRef};

    fn catalog() -> ClassCatalog {
        ClassCatalog::new()
            .with(ClassMeta::new(OBJECT_CLASS).field(FieldMeta::new("hidden", TypeRef::new("int"))))
            .with(ClassMeta::interface("a.Root"))
            .with(ClassMeta::interface("a.Named").implements("a.Root"))
            .with(
                ClassMeta::new("a.Base")
                    .extends(OBJECT_CLASS)
                    .implements("a.Named")
                    .field(FieldMeta::new("x", TypeRef::new("long")))
                    .field(FieldMeta::new("base", TypeRef::new("int"))),
            )
            .with(
                ClassMeta::new("a.Child")
                    .extends("a.Base")
                    .implements("a.Root")
                    .implements("java.io.Serializable")
                    .field(FieldMeta::new("x", TypeRef::new("int")))
                    .field(
                        FieldMeta::new("COUNT", TypeRef::new("int")).with_modifiers(Modifiers {
                            is_static: true,
                            ..Modifiers::default()
                        }),
                    ),
            )
    }

    #[test]
    fn chain_is_most_derived_first_and_excludes_root() {
        let catalog = catalog();
        let child = catalog.require("a.Child").unwrap();
        let hierarchy = ClassHierarchy::walk(&catalog, child);
        let names: Vec<&str> = hierarchy.chain().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["a.Child", "a.Base"]);
        let interfaces: Vec<&str> = hierarchy.interfaces().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(interfaces, vec!["a.Root", "a.Named"]);
    }

    #[test]
    fn subclass_field_shadows_superclass_field() {
        let catalog = catalog();
        let field = find_field(&catalog, "a.Child", "x").expect("field x");
        assert_eq!(field.declaring_class(), "a.Child");
        assert_eq!(field.field.ty.name, "int");

        let inherited = find_field(&catalog, "a.Child", "base").expect("field base");
        assert_eq!(inherited.declaring_class(), "a.Base");
    }

    #[test]
    fn missing_field_is_none() {
        let catalog = catalog();
        assert!(find_field(&catalog, "a.Child", "hidden").is_none());
        assert!(find_field(&catalog, "a.Child", "nope").is_none());
        assert!(find_field(&catalog, "a.Missing", "x").is_none());
    }

    #[test]
    fn instance_fields_skip_static_fields() {
        let catalog = catalog();
        let child = catalog.require("a.Child").unwrap();
        let hierarchy = ClassHierarchy::walk(&catalog, child);
        assert!(hierarchy.find_field("COUNT").is_some());
        assert!(hierarchy.find_instance_field("COUNT").is_none());
        let names: Vec<&str> = hierarchy.instance_fields().map(|f| f.name()).collect();
        assert_eq!(names, vec!["x", "x", "base"]);
    }

    #[test]
    fn methods_named_spans_chain_then_interfaces() {
        let catalog = ClassCatalog::new()
            .with(
                ClassMeta::interface("a.Named")
                    .method(MethodMeta::getter("getName", TypeRef::new("java.lang.String"))),
            )
            .with(
                ClassMeta::new("a.Base")
                    .implements("a.Named")
                    .method(MethodMeta::getter("getName", TypeRef::new("java.lang.Object")))
                    .method(MethodMeta::getter("getId", TypeRef::new("long"))),
            )
            .with(
                ClassMeta::new("a.Child")
                    .extends("a.Base")
                    .method(MethodMeta::getter("getName", TypeRef::new("java.lang.String"))),
            );
        let child = catalog.require("a.Child").unwrap();
        let hierarchy = ClassHierarchy::walk(&catalog, child);
        let owners: Vec<&str> = hierarchy
            .methods_named("getName")
            .map(|m| m.declaring_class())
            .collect();
        assert_eq!(owners, vec!["a.Child", "a.Base", "a.Named"]);
        assert_eq!(hierarchy.methods_named("getId").count(), 1);
        assert_eq!(hierarchy.methods_named("getAge").count(), 0);
    }

    #[test]
    fn walk_of_root_type_is_empty() {
        let catalog = catalog();
        let root = catalog.require(OBJECT_CLASS).unwrap();
        let hierarchy = ClassHierarchy::walk(&catalog, root);
        assert!(hierarchy.chain().is_empty());
        assert_eq!(hierarchy.fields().count(), 0);
    }

    #[test]
    fn walk_stops_at_unknown_superclass() {
        let catalog = ClassCatalog::new()
            .with(ClassMeta::new("a.Pojo").extends("vendor.Base"));
        let pojo = catalog.require("a.Pojo").unwrap();
        let hierarchy = ClassHierarchy::walk(&catalog, pojo);
        assert_eq!(hierarchy.chain().len(), 1);
    }
}
