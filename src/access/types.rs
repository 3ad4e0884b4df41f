//! Field values and naming conventions

use convert_case::{Boundary, Case, Casing};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Value of a single record field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Signed integer of any width
    Int(i64),
    /// Unsigned integer of any width
    UInt(u64),
    /// Single precision float, kept apart so the cursor keeps its precision
    Float32(f32),
    /// Double precision float
    Float64(f64),
    /// Text, parsed as a decimal number when used as a cursor
    Str(String),
    /// Boolean
    Bool(bool),
    /// Missing or null value
    Null,
    /// Any other shape, carrying its type name
    Other(String),
}

impl FieldValue {
    /// Type name used in error messages
    pub fn kind(&self) -> &str {
        match self {
            Self::Int(_) => "integer",
            Self::UInt(_) => "unsigned integer",
            Self::Float32(_) => "f32",
            Self::Float64(_) => "f64",
            Self::Str(_) => "string",
            Self::Bool(_) => "bool",
            Self::Null => "null",
            Self::Other(name) => name,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($ty:ty),+) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(v: $ty) -> Self {
                    Self::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64, isize);
impl_from_int!(UInt, u64, u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float32(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Float64(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<&Value> for FieldValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Self::UInt(u)
                } else {
                    n.as_f64().map_or_else(|| Self::Other("number".into()), Self::Float64)
                }
            }
            Value::String(s) => Self::Str(s.clone()),
            Value::Array(_) => Self::Other("array".into()),
            Value::Object(_) => Self::Other("object".into()),
        }
    }
}

/// How a column name maps to a record's field name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldNaming {
    /// Field names equal column names
    AsIs,
    /// `user_id`
    #[default]
    Snake,
    /// `userId`
    Camel,
    /// `UserId`
    Pascal,
}

impl FieldNaming {
    /// Map a column name to a field name
    ///
    /// Digits stay attached to the word they follow or precede, so `col2`
    /// and `item_v2` keep their shape.
    pub fn apply(self, column: &str) -> String {
        let case = match self {
            Self::AsIs => return column.to_string(),
            Self::Snake => Case::Snake,
            Self::Camel => Case::Camel,
            Self::Pascal => Case::Pascal,
        };
        column
            .remove_boundaries(&Boundary::digits())
            .to_case(case)
    }
}
