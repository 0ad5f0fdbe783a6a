use crate::value::Value;
use derive_more::Deref;

///
/// Getter
///
/// Boundary to the value-extraction layer: produces one operand from an
/// evaluation context (a span, log record, metric point, or anything else).
/// Missing fields are reported as `Value::Absent`, never as an error.
///

pub trait Getter<C: ?Sized> {
    fn get(&self, ctx: &C) -> Value;
}

impl<C, F> Getter<C> for F
where
    C: ?Sized,
    F: Fn(&C) -> Value,
{
    fn get(&self, ctx: &C) -> Value {
        self(ctx)
    }
}

///
/// Literal
///
/// Constant operand that ignores the context.
/// `==` on literals is structural; use `compare` for comparison equality.
///

#[derive(Clone, Debug, Deref, PartialEq)]
pub struct Literal(pub Value);

impl Literal {
    pub fn new(value: impl Into<Value>) -> Self {
        Self(value.into())
    }
}

impl<C: ?Sized> Getter<C> for Literal {
    fn get(&self, _ctx: &C) -> Value {
        self.0.clone()
    }
}

impl From<Value> for Literal {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
