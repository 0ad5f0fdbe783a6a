use crate::value::Value;
use serde::{Deserialize, Serialize};

///
/// ValueKind
///
/// Closed classification of a `Value` for comparison routing.
///
/// IMPORTANT:
/// Every variant must be handled explicitly wherever kinds are matched.
/// Wildcard arms would let a new kind fall through to "incomparable" silently.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum ValueKind {
    Absent,
    Bool,
    Int,
    Float,
    Str,
    Bytes,
    Opaque,
}

impl ValueKind {
    pub const ALL: [Self; 7] = [
        Self::Absent,
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::Str,
        Self::Bytes,
        Self::Opaque,
    ];

    /// Stable human-readable kind label for diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "Absent",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Str => "Str",
            Self::Bytes => "Bytes",
            Self::Opaque => "Opaque",
        }
    }

    /// Int and Float share the numeric comparison path.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        match self {
            Self::Int | Self::Float => true,
            Self::Absent | Self::Bool | Self::Str | Self::Bytes | Self::Opaque => false,
        }
    }

    /// Kinds that carry a total order under same-kind comparison.
    #[must_use]
    pub const fn is_ordered(self) -> bool {
        match self {
            Self::Bool | Self::Int | Self::Float | Self::Str | Self::Bytes => true,
            Self::Absent | Self::Opaque => false,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify a value, folding unset byte storage into `Absent`.
#[must_use]
pub(super) const fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Absent | Value::Bytes(None) => ValueKind::Absent,
        Value::Bool(_) => ValueKind::Bool,
        Value::Int(_) => ValueKind::Int,
        Value::Float(_) => ValueKind::Float,
        Value::Str(_) => ValueKind::Str,
        Value::Bytes(Some(_)) => ValueKind::Bytes,
        Value::Opaque(_) => ValueKind::Opaque,
    }
}
