//! Condition trees evaluated by the surrounding filter/transform language.
//!
//! This layer sits between the value-extraction boundary (`Getter`) and the
//! comparison engine. It is schema-agnostic and grammar-agnostic: conditions
//! are built programmatically or from already-parsed operator tokens.

mod comparison;
mod getter;


use crate::{
    compare::CompareOp,
    error::ConditionError,
    obs::sink::{self, MetricsEvent},
};
use std::ops::{BitAnd, BitOr};

// re-exports
pub use comparison::Comparison;
pub use getter::{Getter, Literal};

///
/// Condition
///
/// Boolean expression over comparisons.
///
/// And([]) → true
/// Or([])  → false
///
/// Children are evaluated left to right and short-circuit.
///

pub enum Condition<C: ?Sized> {
    True,
    False,
    Compare(Comparison<C>),
    And(Vec<Self>),
    Or(Vec<Self>),
    Not(Box<Self>),
}

impl<C: ?Sized> Condition<C> {
    #[must_use]
    pub const fn and(conditions: Vec<Self>) -> Self {
        Self::And(conditions)
    }

    #[must_use]
    pub const fn or(conditions: Vec<Self>) -> Self {
        Self::Or(conditions)
    }

    #[must_use]
    pub fn not(condition: Self) -> Self {
        Self::Not(Box::new(condition))
    }

    pub fn compare(
        left: impl Getter<C> + Send + Sync + 'static,
        op: CompareOp,
        right: impl Getter<C> + Send + Sync + 'static,
    ) -> Self {
        Self::Compare(Comparison::new(left, op, right))
    }

    /// Build a comparison leaf from a parser operator token.
    pub fn parse_compare(
        left: impl Getter<C> + Send + Sync + 'static,
        token: &str,
        right: impl Getter<C> + Send + Sync + 'static,
    ) -> Result<Self, ConditionError> {
        Comparison::parse(left, token, right).map(Self::Compare)
    }

    /// Evaluate the whole tree against a context.
    ///
    /// Records one condition event plus one compare event per comparison
    /// actually evaluated.
    #[must_use]
    pub fn matches(&self, ctx: &C) -> bool {
        let matched = self.eval(ctx);
        sink::record(MetricsEvent::ConditionEval { matched });

        matched
    }

    fn eval(&self, ctx: &C) -> bool {
        match self {
            Self::True => true,
            Self::False => false,
            Self::Compare(cmp) => cmp.evaluate(ctx),
            Self::And(children) => children.iter().all(|child| child.eval(ctx)),
            Self::Or(children) => children.iter().any(|child| child.eval(ctx)),
            Self::Not(inner) => !inner.eval(ctx),
        }
    }
}

impl<C: ?Sized> Clone for Condition<C> {
    fn clone(&self) -> Self {
        match self {
            Self::True => Self::True,
            Self::False => Self::False,
            Self::Compare(cmp) => Self::Compare(cmp.clone()),
            Self::And(children) => Self::And(children.clone()),
            Self::Or(children) => Self::Or(children.clone()),
            Self::Not(inner) => Self::Not(inner.clone()),
        }
    }
}

impl<C: ?Sized> std::fmt::Debug for Condition<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::True => f.write_str("True"),
            Self::False => f.write_str("False"),
            Self::Compare(cmp) => f.debug_tuple("Compare").field(cmp).finish(),
            Self::And(children) => f.debug_tuple("And").field(children).finish(),
            Self::Or(children) => f.debug_tuple("Or").field(children).finish(),
            Self::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
        }
    }
}

impl<C: ?Sized> BitAnd for Condition<C> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}

impl<C: ?Sized> BitAnd for &Condition<C> {
    type Output = Condition<C>;

    fn bitand(self, rhs: Self) -> Self::Output {
        Condition::And(vec![self.clone(), rhs.clone()])
    }
}

impl<C: ?Sized> BitOr for Condition<C> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::Or(vec![self, rhs])
    }
}

impl<C: ?Sized> BitOr for &Condition<C> {
    type Output = Condition<C>;

    fn bitor(self, rhs: Self) -> Self::Output {
        Condition::Or(vec![self.clone(), rhs.clone()])
    }
}
