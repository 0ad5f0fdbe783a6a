use crate::{compare::Outcome, error::ParseCompareOpError};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

///
/// CompareOp
///
/// Closed set of relational operators. The set is total over all value
/// pairs: every operator yields a defined boolean for every pair.
///
/// Serialized as its source token (`==`, `!=`, `<`, `<=`, `>=`, `>`).
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gte,
    Gt,
}

impl CompareOp {
    pub const ALL: [Self; 6] = [Self::Eq, Self::Ne, Self::Lt, Self::Lte, Self::Gte, Self::Gt];

    /// Source token for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gte => ">=",
            Self::Gt => ">",
        }
    }

    /// Operator that holds for `(b, a)` exactly when `self` holds for `(a, b)`.
    #[must_use]
    pub const fn mirror(self) -> Self {
        match self {
            Self::Eq => Self::Eq,
            Self::Ne => Self::Ne,
            Self::Lt => Self::Gt,
            Self::Lte => Self::Gte,
            Self::Gte => Self::Lte,
            Self::Gt => Self::Lt,
        }
    }

    #[must_use]
    pub const fn is_ordering(self) -> bool {
        match self {
            Self::Lt | Self::Lte | Self::Gte | Self::Gt => true,
            Self::Eq | Self::Ne => false,
        }
    }

    /// Dispatch a resolved outcome onto this operator.
    ///
    /// Unordered outcomes answer only `Eq`/`Ne`; every ordering
    /// operator is `false` for them, even when the operands are equal.
    #[must_use]
    pub const fn apply(self, outcome: Outcome) -> bool {
        match outcome {
            Outcome::Ordered(ordering) => match self {
                Self::Eq => ordering.is_eq(),
                Self::Ne => ordering.is_ne(),
                Self::Lt => ordering.is_lt(),
                Self::Lte => ordering.is_le(),
                Self::Gte => ordering.is_ge(),
                Self::Gt => ordering.is_gt(),
            },
            Outcome::Unordered { equal } => match self {
                Self::Eq => equal,
                Self::Ne => !equal,
                Self::Lt | Self::Lte | Self::Gte | Self::Gt => false,
            },
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = ParseCompareOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.is_empty() {
            return Err(ParseCompareOpError::Empty);
        }

        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == token)
            .ok_or_else(|| ParseCompareOpError::Unknown {
                token: token.to_string(),
            })
    }
}

impl TryFrom<String> for CompareOp {
    type Error = ParseCompareOpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CompareOp> for &'static str {
    fn from(op: CompareOp) -> Self {
        op.symbol()
    }
}
