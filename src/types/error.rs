use thiserror::Error;

/// Criterion content errors, detected when a criteria tree is serialized.
///
/// Criteria are validated lazily: constructing a criterion with an empty
/// field never fails, rendering it does.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("field can not be empty")]
    EmptyField,

    #[error("method can not be empty")]
    EmptyMethod,
}

/// Token-sequence errors, detected while query text is assembled.
///
/// A well-formed query alternates criteria/groups with operators; these cover
/// every way a caller can break that alternation through the low-level
/// [`QueryBuilder`](crate::QueryBuilder) API.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StructuralError {
    #[error("operator is not expected at this position")]
    UnexpectedOperator,

    #[error("criterion is not expected at this position")]
    UnexpectedCriterion,

    #[error("expression group is not expected at this position")]
    UnexpectedGroup,

    #[error("empty expression group")]
    EmptyGroup,

    #[error("expression can not end with an operator")]
    TrailingOperator,

    #[error("unmatched expression group close")]
    UnmatchedGroupClose,

    #[error("unclosed expression group")]
    UnclosedGroup,
}
