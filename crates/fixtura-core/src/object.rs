use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use crate::error::AccessError;

/// A value held by a field or returned by a method.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Char(char),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(value) => Some(*value as f64),
            Value::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

/// Behaviour bound to a method name on a [`DynamicObject`].
pub type MethodBinding =
    Arc<dyn Fn(&DynamicObject, &[Value]) -> Result<Value, AccessError> + Send + Sync>;

/// An instance of a catalog class.
///
/// Field slots are keyed by declaring class and field name so that a shadowed
/// superclass field keeps its own value.
#[derive(Clone)]
pub struct DynamicObject {
    class_name: String,
    slots: BTreeMap<(String, String), Value>,
    denied: BTreeSet<(String, String)>,
    methods: BTreeMap<String, MethodBinding>,
}

impl DynamicObject {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            slots: BTreeMap::new(),
            denied: BTreeSet::new(),
            methods: BTreeMap::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn set_field(
        &mut self,
        declaring_class: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.slots
            .insert((declaring_class.into(), field.into()), value.into());
    }

    pub fn with_field(
        mut self,
        declaring_class: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.set_field(declaring_class, field, value);
        self
    }

    /// Mark a field as unreadable; reads fail with [`AccessError::Denied`].
    pub fn deny_field(mut self, declaring_class: impl Into<String>, field: impl Into<String>) -> Self {
        self.denied.insert((declaring_class.into(), field.into()));
        self
    }

    pub fn bind_method<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&DynamicObject, &[Value]) -> Result<Value, AccessError> + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Read the slot for `field` as declared by `declaring_class`.
    ///
    /// A declared field that was never assigned reads as [`Value::Null`]; use
    /// [`DynamicObject::has_slot`] to tell the two apart.
    pub fn read_field(&self, declaring_class: &str, field: &str) -> Result<Value, AccessError> {
        let key = (declaring_class.to_string(), field.to_string());
        if self.denied.contains(&key) {
            return Err(AccessError::Denied(format!("{declaring_class}.{field}")));
        }
        Ok(self.slots.get(&key).cloned().unwrap_or(Value::Null))
    }

    pub fn has_slot(&self, declaring_class: &str, field: &str) -> bool {
        self.slots
            .contains_key(&(declaring_class.to_string(), field.to_string()))
    }

    pub fn invoke(&self, method: &str, args: &[Value]) -> Result<Value, AccessError> {
        let binding = self
            .methods
            .get(method)
            .ok_or_else(|| AccessError::NoSuchMethod {
                class: self.class_name.clone(),
                method: method.to_string(),
            })?;
        binding(self, args)
    }
}

impl fmt::Debug for DynamicObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicObject")
            .field("class_name", &self.class_name)
            .field("slots", &self.slots)
            .field("denied", &self.denied)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}
