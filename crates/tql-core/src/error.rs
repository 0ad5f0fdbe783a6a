use thiserror::Error as ThisError;

///
/// ParseCompareOpError
///
/// Raised when an operator token from the parser names no known operator.
/// The comparison engine itself never fails; this exists only at the token
/// boundary.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ParseCompareOpError {
    #[error("comparison operator token is empty")]
    Empty,

    #[error("unknown comparison operator `{token}`")]
    Unknown { token: String },
}

///
/// ConditionError
///
/// Construction-time errors for conditions built from parser tokens.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConditionError {
    #[error("invalid comparison operator: {0}")]
    Operator(#[from] ParseCompareOpError),
}
