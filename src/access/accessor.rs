//! The `FieldAccessor` trait and its provided implementations

use super::types::{FieldNaming, FieldValue};
use crate::error::{Error, Result};
use serde_json::Value;
use std::sync::Arc;

/// Named-field access on a single structured record
pub trait FieldAccessor {
    /// Naming convention of this record's fields
    fn naming(&self) -> FieldNaming {
        FieldNaming::Snake
    }

    /// Check if the record has a field.
    ///
    /// Returns `Error::NotAStruct` when the value is not a single structured
    /// record.
    fn has_field(&self, name: &str) -> Result<bool>;

    /// Read a field, `None` if it does not exist
    fn field(&self, name: &str) -> Result<Option<FieldValue>>;

    /// Field name a column maps to on this record
    fn field_name(&self, column: &str) -> String {
        self.naming().apply(column)
    }
}

/// Short type name of a JSON value
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl FieldAccessor for Value {
    fn naming(&self) -> FieldNaming {
        FieldNaming::AsIs
    }

    fn has_field(&self, name: &str) -> Result<bool> {
        match self {
            Value::Object(map) => Ok(map.contains_key(name)),
            other => Err(Error::not_a_struct(json_kind(other))),
        }
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        match self {
            Value::Object(map) => Ok(map.get(name).map(FieldValue::from)),
            other => Err(Error::not_a_struct(json_kind(other))),
        }
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for &T {
    fn naming(&self) -> FieldNaming {
        (**self).naming()
    }

    fn has_field(&self, name: &str) -> Result<bool> {
        (**self).has_field(name)
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        (**self).field(name)
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for Box<T> {
    fn naming(&self) -> FieldNaming {
        (**self).naming()
    }

    fn has_field(&self, name: &str) -> Result<bool> {
        (**self).has_field(name)
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        (**self).field(name)
    }
}

impl<T: FieldAccessor + ?Sized> FieldAccessor for Arc<T> {
    fn naming(&self) -> FieldNaming {
        (**self).naming()
    }

    fn has_field(&self, name: &str) -> Result<bool> {
        (**self).has_field(name)
    }

    fn field(&self, name: &str) -> Result<Option<FieldValue>> {
        (**self).field(name)
    }
}

/// Implement [`FieldAccessor`] for a struct with a fixed list of fields.
///
/// Field values are cloned and converted with `FieldValue::from`. The
/// naming convention defaults to snake case; pass `naming = ...` to override.
///
/// ```
/// use solidafy_pager::access::{FieldAccessor, FieldValue};
/// use solidafy_pager::field_accessor;
///
/// struct Goods {
///     auto_id: i64,
///     title: String,
/// }
///
/// field_accessor!(Goods { auto_id, title });
///
/// let goods = Goods { auto_id: 7, title: "pen".into() };
/// assert!(goods.has_field("auto_id").unwrap());
/// assert_eq!(goods.field("auto_id").unwrap(), Some(FieldValue::Int(7)));
/// ```
#[macro_export]
macro_rules! field_accessor {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        $crate::field_accessor!($ty, naming = Snake { $($field),+ });
    };
    ($ty:ty, naming = $naming:ident { $($field:ident),+ $(,)? }) => {
        impl $crate::access::FieldAccessor for $ty {
            fn naming(&self) -> $crate::access::FieldNaming {
                $crate::access::FieldNaming::$naming
            }

            fn has_field(&self, name: &str) -> $crate::Result<bool> {
                Ok([$(stringify!($field)),+].contains(&name))
            }

            fn field(&self, name: &str) -> $crate::Result<Option<$crate::access::FieldValue>> {
                $(
                    if name == stringify!($field) {
                        return Ok(Some($crate::access::FieldValue::from(
                            ::core::clone::Clone::clone(&self.$field),
                        )));
                    }
                )+
                Ok(None)
            }
        }
    };
}
