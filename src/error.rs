use thiserror::Error;

use crate::types::{StructuralError, ValidationError};

/// Unified error type covering criterion validation and token-sequence
/// structure.
///
/// Returned by [`Criteria::to_query()`](crate::Criteria::to_query) and
/// [`QueryBuilder::build()`](crate::QueryBuilder::build). Composing criteria
/// never fails; only serialization does, and a failed serialization produces
/// no partial output.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Structural(#[from] StructuralError),
}
