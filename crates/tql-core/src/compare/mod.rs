//! Total cross-type comparison over `Value`.
//!
//! Every `(Value, Value, CompareOp)` triple yields a boolean. Ill-typed or
//! incomparable pairings degrade to defined booleans, never to an error.
//! Nothing in this module reads or writes shared state.

mod op;

#[cfg(test)]
mod tests;

use crate::value::{OpaqueValue, Value, ValueKind};
use serde::Serialize;
use std::{cmp::Ordering, fmt};

// re-exports
pub use op::CompareOp;

///
/// ComparePath
///
/// Resolution path selected for a pair of operand kinds.
/// Paths are listed in priority order.
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum ComparePath {
    /// At least one side is absent.
    Absent,
    /// Both sides are Int or Float.
    Numeric,
    /// Both sides share an ordered kind (Bool, Str, Bytes).
    SameKind,
    /// Both sides are opaque.
    Opaque,
    /// Anything else.
    Incomparable,
}

impl ComparePath {
    pub const ALL: [Self; 5] = [
        Self::Absent,
        Self::Numeric,
        Self::SameKind,
        Self::Opaque,
        Self::Incomparable,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Numeric => "numeric",
            Self::SameKind => "same_kind",
            Self::Opaque => "opaque",
            Self::Incomparable => "incomparable",
        }
    }
}

impl fmt::Display for ComparePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

///
/// Outcome
///
/// Resolved comparison result before operator dispatch.
///
/// Ordered   → three-way result; equality implies both non-strict orderings.
/// Unordered → two-way result; no ordering operator ever holds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Ordered(Ordering),
    Unordered { equal: bool },
}

impl Outcome {
    pub const INCOMPARABLE: Self = Self::Unordered { equal: false };
}

///
/// Resolution
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Resolution {
    pub path: ComparePath,
    pub outcome: Outcome,
}

impl Resolution {
    const fn new(path: ComparePath, outcome: Outcome) -> Self {
        Self { path, outcome }
    }
}

/// Compare two values under a relational operator.
#[must_use]
pub fn compare(left: &Value, right: &Value, op: CompareOp) -> bool {
    op.apply(resolve(left, right).outcome)
}

/// Resolve the comparison path and outcome for a pair of values.
#[must_use]
pub fn resolve(left: &Value, right: &Value) -> Resolution {
    let path = select_path(left.kind(), right.kind());

    let outcome = match path {
        ComparePath::Absent => cmp_absent(left, right),
        ComparePath::Numeric => cmp_numeric(left, right),
        ComparePath::SameKind => cmp_same_kind(left, right),
        ComparePath::Opaque => match (left, right) {
            (Value::Opaque(left), Value::Opaque(right)) => cmp_opaque(left, right),
            (
                Value::Absent
                | Value::Bool(_)
                | Value::Int(_)
                | Value::Float(_)
                | Value::Str(_)
                | Value::Bytes(_)
                | Value::Opaque(_),
                _,
            ) => Outcome::INCOMPARABLE,
        },
        ComparePath::Incomparable => Outcome::INCOMPARABLE,
    };

    Resolution::new(path, outcome)
}

/// Select the resolution path for two operand kinds.
///
/// The final arm names every non-absent kind so that adding a kind
/// fails to compile until it is routed here.
#[must_use]
pub const fn select_path(left: ValueKind, right: ValueKind) -> ComparePath {
    use ValueKind as K;

    match (left, right) {
        (K::Absent, _) | (_, K::Absent) => ComparePath::Absent,
        (K::Int | K::Float, K::Int | K::Float) => ComparePath::Numeric,
        (K::Bool, K::Bool) | (K::Str, K::Str) | (K::Bytes, K::Bytes) => ComparePath::SameKind,
        (K::Opaque, K::Opaque) => ComparePath::Opaque,
        (K::Bool | K::Int | K::Float | K::Str | K::Bytes | K::Opaque, _) => {
            ComparePath::Incomparable
        }
    }
}

// Absent equals only absent. Absent/absent behaves as an ordered identity.
const fn cmp_absent(left: &Value, right: &Value) -> Outcome {
    if left.is_absent() && right.is_absent() {
        Outcome::Ordered(Ordering::Equal)
    } else {
        Outcome::INCOMPARABLE
    }
}

// Int/Int compares exactly; any Float side widens the other to f64.
// NaN has no ordering and is incomparable, including against itself.
fn cmp_numeric(left: &Value, right: &Value) -> Outcome {
    if let (Value::Int(left), Value::Int(right)) = (left, right) {
        return Outcome::Ordered(left.cmp(right));
    }

    match (left.as_f64(), right.as_f64()) {
        (Some(left), Some(right)) => left
            .partial_cmp(&right)
            .map_or(Outcome::INCOMPARABLE, Outcome::Ordered),
        (None, _) | (_, None) => Outcome::INCOMPARABLE,
    }
}

fn cmp_same_kind(left: &Value, right: &Value) -> Outcome {
    let ordering = match (left, right) {
        (Value::Bool(left), Value::Bool(right)) => left.cmp(right),
        (Value::Str(left), Value::Str(right)) => {
            cmp_lexicographic(left.as_bytes(), right.as_bytes())
        }
        (Value::Bytes(Some(left)), Value::Bytes(Some(right))) => cmp_lexicographic(left, right),
        // Unreachable under select_path; mismatches stay incomparable.
        (
            Value::Absent
            | Value::Bool(_)
            | Value::Int(_)
            | Value::Float(_)
            | Value::Str(_)
            | Value::Bytes(_)
            | Value::Opaque(_),
            _,
        ) => return Outcome::INCOMPARABLE,
    };

    Outcome::Ordered(ordering)
}

// Unsigned byte order; a strict prefix sorts first.
fn cmp_lexicographic(left: &[u8], right: &[u8]) -> Ordering {
    left.cmp(right)
}

// Opaque values never order, even when equal.
fn cmp_opaque(left: &OpaqueValue, right: &OpaqueValue) -> Outcome {
    Outcome::Unordered {
        equal: left == right,
    }
}
