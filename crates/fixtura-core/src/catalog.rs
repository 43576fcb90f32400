use std::collections::{BTreeMap, BTreeSet, VecDeque};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::CATALOG_VERSION;
use crate::class::ClassMeta;
use crate::error::{Error, Result};

/// Name of the universal root type every class implicitly extends.
pub const OBJECT_CLASS: &str = "java.lang.Object";

/// Name-indexed store of class metadata.
///
/// A catalog is built once and then only read; it is `Send + Sync` and can be
/// shared by any number of concurrent introspection calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "CatalogFile", into = "CatalogFile")]
pub struct ClassCatalog {
    root_type: String,
    classes: BTreeMap<String, ClassMeta>,
}

/// On-disk representation of a catalog.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogFile {
    /// Contract version of the file format.
    #[serde(default = "default_catalog_version")]
    pub catalog_version: String,
    /// Root type excluded from hierarchy walks (defaults to `java.lang.Object`).
    #[serde(default = "default_root_type")]
    pub root_type: String,
    pub classes: Vec<ClassMeta>,
}

fn default_catalog_version() -> String {
    CATALOG_VERSION.to_string()
}

fn default_root_type() -> String {
    OBJECT_CLASS.to_string()
}

impl From<CatalogFile> for ClassCatalog {
    fn from(file: CatalogFile) -> Self {
        let mut catalog = ClassCatalog::with_root_type(file.root_type);
        catalog.extend(file.classes);
        catalog
    }
}

impl From<ClassCatalog> for CatalogFile {
    fn from(catalog: ClassCatalog) -> Self {
        CatalogFile {
            catalog_version: CATALOG_VERSION.to_string(),
            root_type: catalog.root_type,
            classes: catalog.classes.into_values().collect(),
        }
    }
}

impl Default for ClassCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassCatalog {
    pub fn new() -> Self {
        Self::with_root_type(OBJECT_CLASS)
    }

    pub fn with_root_type(root_type: impl Into<String>) -> Self {
        Self {
            root_type: root_type.into(),
            classes: BTreeMap::new(),
        }
    }

    /// Parse a catalog from its JSON representation.
    ///
    /// Later duplicates of a class name replace earlier ones; use
    /// [`crate::validate_catalog_file`] first to reject them instead.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(file.into())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn root_type(&self) -> &str {
        &self.root_type
    }

    pub fn is_root(&self, name: &str) -> bool {
        self.root_type == name
    }

    /// Insert or replace a class, returning the previous definition.
    pub fn insert(&mut self, class: ClassMeta) -> Option<ClassMeta> {
        self.classes.insert(class.name.clone(), class)
    }

    /// Builder-style insert.
    pub fn with(mut self, class: ClassMeta) -> Self {
        self.insert(class);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ClassMeta> {
        self.classes.get(name)
    }

    /// Like [`ClassCatalog::get`] but reports a missing class as an error.
    pub fn require(&self, name: &str) -> Result<&ClassMeta> {
        self.get(name)
            .ok_or_else(|| Error::ClassNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassMeta> {
        self.classes.values()
    }

    /// Direct supertypes of `name`: superclass first, then interfaces.
    pub fn direct_supertypes<'a>(&'a self, name: &str) -> Vec<&'a str> {
        let Some(class) = self.get(name) else {
            return Vec::new();
        };
        class
            .superclass
            .iter()
            .chain(class.interfaces.iter())
            .map(String::as_str)
            .collect()
    }

    /// Whether a value of type `candidate` can be assigned to type `target`.
    ///
    /// True when the names are equal, when `target` is the root type, or when
    /// `target` is reachable from `candidate` through superclass/interface
    /// edges. Supertypes missing from the catalog are matched by name but not
    /// followed further.
    pub fn is_assignable_from(&self, target: &str, candidate: &str) -> bool {
        if target == candidate || self.is_root(target) {
            return true;
        }

        let mut seen = BTreeSet::new();
        let mut queue = VecDeque::from([candidate]);
        while let Some(current) = queue.pop_front() {
            if !seen.insert(current) {
                continue;
            }
            for parent in self.direct_supertypes(current) {
                if parent == target {
                    return true;
                }
                queue.push_back(parent);
            }
        }
        false
    }
}

impl Extend<ClassMeta> for ClassCatalog {
    fn extend<T: IntoIterator<Item = ClassMeta>>(&mut self, iter: T) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl FromIterator<ClassMeta> for ClassCatalog {
    fn from_iter<T: IntoIterator<Item = ClassMeta>>(iter: T) -> Self {
        let mut catalog = ClassCatalog::new();
        catalog.extend(iter);
        catalog
    }
}
