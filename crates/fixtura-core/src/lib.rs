//! Core contracts and helpers for fixtura.
//!
//! This crate defines the class metadata model, the catalog that stands in for
//! a runtime's reflective type information, catalog validation, and the
//! dynamic instance model used when reading values back out of objects.

pub mod catalog;
pub mod class;
pub mod error;
pub mod object;
pub mod types;
pub mod validation;

pub use catalog::{CatalogFile, ClassCatalog, OBJECT_CLASS};
pub use class::{ClassKind, ClassMeta, FieldMeta, MethodMeta, ParamMeta};
pub use error::{AccessError, Error, Result};
pub use object::{DynamicObject, MethodBinding, Value};
pub use types::{AnnotationMeta, Modifiers, TypeRef, primitive_to_boxed_type};
pub use validation::{validate_catalog, validate_catalog_file};

/// Current contract version for catalog JSON artifacts.
pub const CATALOG_VERSION: &str = "0.1";
