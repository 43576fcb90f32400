//! Best-effort reads of attribute values from [`DynamicObject`]s.
//!
//! Every function here returns `None` instead of failing: a member that does
//! not exist is logged at info level, a member that cannot be read is logged
//! as a warning.

use tracing::{info, warn};

use fixtura_core::{ClassCatalog, DynamicObject, Value};
use fixtura_introspect::{ClassHierarchy, MethodRef, find_field, select_latest_method};

/// Value of the field backing `attribute`, looked up along the object's
/// class hierarchy.
pub fn field_value(catalog: &ClassCatalog, object: &DynamicObject, attribute: &str) -> Option<Value> {
    let Some(field) = find_field(catalog, object.class_name(), attribute) else {
        info!(class = %object.class_name(), attribute = %attribute, "the field did not exist");
        return None;
    };

    match object.read_field(field.declaring_class(), field.name()) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                class = %object.class_name(),
                attribute = %attribute,
                error = %err,
                "could not read field value"
            );
            None
        }
    }
}

/// Invoke the no-argument method `method_name` whose declared parameter types
/// are exactly `param_types`.
///
/// The declaration is resolved on the object's class hierarchy; the most
/// derived declaration is the one reported in logs.
pub fn value_with_method(
    catalog: &ClassCatalog,
    object: &DynamicObject,
    method_name: &str,
    param_types: &[&str],
) -> Option<Value> {
    let Some(method) = resolve_method(catalog, object.class_name(), method_name, param_types) else {
        info!(class = %object.class_name(), method = %method_name, "the method did not exist");
        return None;
    };

    match object.invoke(method.name(), &[]) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(
                class = %object.class_name(),
                method = %method_name,
                declaring_class = %method.declaring_class(),
                error = %err,
                "could not invoke method"
            );
            None
        }
    }
}

/// Read `attribute` through its conventional `get` accessor.
pub fn field_value_with_getter(
    catalog: &ClassCatalog,
    object: &DynamicObject,
    attribute: &str,
) -> Option<Value> {
    let mut chars = attribute.chars();
    let Some(first) = chars.next() else {
        info!(class = %object.class_name(), "empty attribute name");
        return None;
    };
    let getter: String = format!("get{}{}", first.to_uppercase(), chars.as_str());
    value_with_method(catalog, object, &getter, &[])
}

fn resolve_method<'c>(
    catalog: &'c ClassCatalog,
    class_name: &str,
    method_name: &str,
    param_types: &[&str],
) -> Option<MethodRef<'c>> {
    let class = catalog.get(class_name)?;
    let hierarchy = ClassHierarchy::walk(catalog, class);
    let candidates = hierarchy
        .methods_named(method_name)
        .filter(|method| method.method.param_types().eq(param_types.iter().copied()));
    select_latest_method(catalog, candidates)
}
