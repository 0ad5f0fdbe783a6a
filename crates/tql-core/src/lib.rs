//! Core runtime for the telemetry query language comparison engine: the
//! dynamic `Value` model, the total cross-type comparator, and the condition
//! layer that feeds it.
#![warn(unreachable_pub)]

// public exports are one module level down
pub mod compare;
pub mod condition;
pub mod error;
pub mod obs;
pub mod value;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors, sinks, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        compare::{CompareOp, compare},
        value::{OpaqueValue, Value, ValueKind},
    };
}
