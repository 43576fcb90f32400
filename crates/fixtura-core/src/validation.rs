use std::collections::BTreeSet;

use crate::catalog::{CatalogFile, ClassCatalog};
use crate::error::{Error, Result};

/// Validate a catalog file before it is indexed by name.
///
/// This checks:
/// - duplicate class names (indexing would silently keep the last one)
/// - everything [`validate_catalog`] checks
pub fn validate_catalog_file(file: &CatalogFile) -> Result<()> {
    let mut names = BTreeSet::new();
    for class in &file.classes {
        if !names.insert(class.name.as_str()) {
            return Err(Error::InvalidCatalog(format!(
                "duplicate class name: {}",
                class.name
            )));
        }
    }

    validate_catalog(&ClassCatalog::from(file.clone()))
}

/// Validate internal consistency of a class catalog.
///
/// This checks:
/// - duplicate field names within a class
/// - superclass references that name an interface
/// - cycles in the superclass chain
///
/// Supertypes missing from the catalog are allowed; hierarchy walks simply
/// stop at them.
pub fn validate_catalog(catalog: &ClassCatalog) -> Result<()> {
    for class in catalog.iter() {
        let mut fields = BTreeSet::new();
        for field in &class.fields {
            if !fields.insert(field.name.as_str()) {
                return Err(Error::InvalidCatalog(format!(
                    "duplicate field name: {}.{}",
                    class.name, field.name
                )));
            }
        }

        if let Some(parent) = class
            .superclass
            .as_deref()
            .and_then(|name| catalog.get(name))
        {
            if parent.is_interface() {
                return Err(Error::InvalidCatalog(format!(
                    "superclass of {} is an interface: {}",
                    class.name, parent.name
                )));
            }
        }

        let mut chain = vec![class.name.as_str()];
        let mut current = class;
        while let Some(parent_name) = current.superclass.as_deref() {
            if chain.contains(&parent_name) {
                chain.push(parent_name);
                return Err(Error::InvalidCatalog(format!(
                    "superclass cycle: {}",
                    chain.join(" -> ")
                )));
            }
            chain.push(parent_name);
            match catalog.get(parent_name) {
                Some(parent) => current = parent,
                None => break,
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ClassMeta, FieldMeta};
    use crate::types::TypeRef;

    #[test]
    fn accepts_unknown_supertypes() {
        let catalog = ClassCatalog::new().with(
            ClassMeta::new("com.acme.Pojo")
                .extends("com.vendor.Base")
                .implements("java.io.Serializable"),
        );
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn rejects_duplicate_fields() {
        let catalog = ClassCatalog::new().with(
            ClassMeta::new("com.acme.Pojo")
                .field(FieldMeta::new("id", TypeRef::new("long")))
                .field(FieldMeta::new("id", TypeRef::new("int"))),
        );
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("duplicate field name: com.acme.Pojo.id"));
    }

    #[test]
    fn rejects_superclass_cycles() {
        let catalog = ClassCatalog::new()
            .with(ClassMeta::new("a.A").extends("a.B"))
            .with(ClassMeta::new("a.B").extends("a.C"))
            .with(ClassMeta::new("a.C").extends("a.A"));
        let err = validate_catalog(&catalog).unwrap_err();
        assert!(err.to_string().contains("superclass cycle"));
    }

    #[test]
    fn rejects_interface_superclass() {
        let catalog = ClassCatalog::new()
            .with(ClassMeta::interface("a.Named"))
            .with(ClassMeta::new("a.Pojo").extends("a.Named"));
        assert!(matches!(
            validate_catalog(&catalog),
            Err(Error::InvalidCatalog(_))
        ));
    }

    #[test]
    fn rejects_duplicate_classes_in_file() {
        let file = CatalogFile {
            catalog_version: "0.1".to_string(),
            root_type: "java.lang.Object".to_string(),
            classes: vec![ClassMeta::new("a.Pojo"), ClassMeta::new("a.Pojo")],
        };
        let err = validate_catalog_file(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate class name: a.Pojo"));
    }
}
