//! Attribute discovery over a class catalog.
//!
//! [`build_class_info`] walks a class hierarchy, pairs fields with their
//! accessors, merges annotations and applies exclusion rules, producing an
//! immutable [`ClassInfo`].

pub mod accessors;
pub mod annotations;
pub mod builder;
pub mod errors;
pub mod exclusion;
pub mod hierarchy;
pub mod info;
pub mod options;
pub mod strategy;

pub use accessors::{Accessor, AccessorIndex, AccessorKind, attribute_name, select_latest_method};
pub use annotations::attribute_annotations;
pub use builder::{ClassInfoBuilder, build_class_info};
pub use errors::{IntrospectError, IntrospectResult};
pub use exclusion::{ExclusionReason, ExclusionSpec};
pub use hierarchy::{ClassHierarchy, find_field};
pub use info::{ClassAttribute, ClassInfo, FieldRef, MethodRef};
pub use options::{ExcludeOptions, IntrospectOptions, NamingOptions};
pub use strategy::{
    Approval, DEFAULT_GETTER_PATTERN, DEFAULT_SETTER_PATTERN, DefaultStrategy, IntrospectionStrategy,
    NamingPolicy, PatternStrategy,
};

pub use fixtura_core::ClassCatalog;
