//! Value-side helpers used while populating introspected classes.
//!
//! `random` holds range-bounded and identifier-string generators backed by a
//! thread-local RNG; `access` reads attribute values from dynamic objects
//! without ever failing the caller.

pub mod access;
pub mod random;

pub use access::{field_value, field_value_with_getter, value_with_method};
pub use random::{
    NICE_ASCII_CHARACTERS, double_in_range, double_in_range_with, integer_in_range,
    integer_in_range_with, long_in_range, long_in_range_with, nice_character, nice_character_with,
    nice_string, nice_string_with,
};
