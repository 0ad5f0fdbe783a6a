use crate::{
    compare::{CompareOp, Resolution, resolve},
    condition::Getter,
    error::ConditionError,
    obs::sink::{self, MetricsEvent},
};
use std::{fmt, sync::Arc};

type SharedGetter<C> = Arc<dyn Getter<C> + Send + Sync>;

///
/// Comparison
///
/// Binary relational test between two getters.
/// Evaluation never fails; incomparable operands evaluate per `CompareOp::apply`.
///

pub struct Comparison<C: ?Sized> {
    left: SharedGetter<C>,
    op: CompareOp,
    right: SharedGetter<C>,
}

impl<C: ?Sized> Comparison<C> {
    pub fn new(
        left: impl Getter<C> + Send + Sync + 'static,
        op: CompareOp,
        right: impl Getter<C> + Send + Sync + 'static,
    ) -> Self {
        Self {
            left: Arc::new(left),
            op,
            right: Arc::new(right),
        }
    }

    /// Build a comparison from an operator token as produced by the parser.
    pub fn parse(
        left: impl Getter<C> + Send + Sync + 'static,
        token: &str,
        right: impl Getter<C> + Send + Sync + 'static,
    ) -> Result<Self, ConditionError> {
        let op = token.parse::<CompareOp>()?;

        Ok(Self::new(left, op, right))
    }

    #[must_use]
    pub const fn op(&self) -> CompareOp {
        self.op
    }

    /// Extract both operands and resolve them, without recording metrics.
    #[must_use]
    pub fn resolve(&self, ctx: &C) -> Resolution {
        let left = self.left.get(ctx);
        let right = self.right.get(ctx);

        resolve(&left, &right)
    }

    /// Evaluate against a context, recording one compare event.
    #[must_use]
    pub fn evaluate(&self, ctx: &C) -> bool {
        let resolution = self.resolve(ctx);
        sink::record(MetricsEvent::Compare {
            op: self.op,
            path: resolution.path,
        });

        self.op.apply(resolution.outcome)
    }
}

impl<C: ?Sized> Clone for Comparison<C> {
    fn clone(&self) -> Self {
        Self {
            left: Arc::clone(&self.left),
            op: self.op,
            right: Arc::clone(&self.right),
        }
    }
}

impl<C: ?Sized> fmt::Debug for Comparison<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparison")
            .field("op", &self.op)
            .finish_non_exhaustive()
    }
}
