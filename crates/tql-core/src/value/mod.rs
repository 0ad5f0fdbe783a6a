mod kind;
mod opaque;


use std::fmt;

// re-exports
pub use kind::ValueKind;
pub use opaque::{OpaquePayload, OpaqueValue};

///
/// Value
///
/// Dynamically-typed operand handed to the comparison engine by the
/// value-extraction layer (record fields, attributes, literals).
///
/// Absent      → no value present (a nil / none marker).
/// Bytes(None) → a byte sequence with unset storage; classifies as `Absent`.
/// Opaque      → anything outside the primitive set; equality only.
///
/// `==` is structural equality of the representation, not comparison
/// equality: `Absent != Bytes(None)` and `Int(1) != Float(1.0)` here, while
/// `compare(.., CompareOp::Eq)` holds for both pairs.
///

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Byte sequence with optional backing storage.
    /// `Some(vec![])` is an empty but present sequence and is NOT absent.
    Bytes(Option<Vec<u8>>),
    Opaque(OpaqueValue),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a present byte sequence (possibly empty).
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(Some(bytes.into()))
    }

    /// Build a byte sequence with no underlying storage.
    #[must_use]
    pub const fn unset_bytes() -> Self {
        Self::Bytes(None)
    }

    /// Build an opaque value under an explicit declared type.
    pub fn opaque<P: OpaquePayload>(
        type_name: impl Into<std::borrow::Cow<'static, str>>,
        payload: P,
    ) -> Self {
        Self::Opaque(OpaqueValue::new(type_name, payload))
    }

    ///
    /// TYPES
    ///

    /// Classify this value into its comparison kind.
    ///
    /// Unset byte storage normalizes to `ValueKind::Absent` here so that no
    /// comparator has to special-case it.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        kind::classify(self)
    }

    /// Returns true if the value carries no data (`Absent` or unset bytes).
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self.kind(), ValueKind::Absent)
    }

    /// Returns true for `Int` and `Float`.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    ///
    /// ACCESSORS
    ///

    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric view with integers widened to `f64`.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Present byte storage, if any.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(Some(bytes)) => Some(bytes),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent | Self::Bytes(None) => f.write_str("nil"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Bytes(Some(bytes)) => {
                f.write_str("0x")?;
                for byte in bytes {
                    write!(f, "{byte:02x}")?;
                }
                Ok(())
            }
            Self::Opaque(opaque) => write!(f, "{opaque:?}"),
        }
    }
}

///
/// CONVERSIONS
///

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(Some(value))
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Some(value.to_vec()))
    }
}

impl From<OpaqueValue> for Value {
    fn from(value: OpaqueValue) -> Self {
        Self::Opaque(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}
