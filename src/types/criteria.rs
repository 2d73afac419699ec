use std::fmt;
use std::ops::Not;

use super::method::Method;
use super::value::{Number, Value};
use crate::QueryError;

/// Binary composition operators.
///
/// Precedence is a static property of the operator: OR binds looser than AND,
/// so an OR child under an AND parent needs parentheses while the reverse
/// does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    And,
    Or,
}

impl Op {
    /// Lower value = binds looser = needs parentheses more readily.
    pub(crate) const fn precedence(self) -> u8 {
        match self {
            Op::Or => 1,
            Op::And => 2,
        }
    }
}

/// An immutable filter expression: a single field test or a boolean
/// composition of two sub-expressions.
///
/// Trees never mutate after construction. [`and`](Criteria::and),
/// [`or`](Criteria::or) and `!` consume their operands and allocate a new
/// root, so a cloned subtree can appear in any number of parent trees.
/// Negation only flips the root's flag; it never rewrites children
/// (`!(a & b)` stays a negated AND rather than being pushed down).
///
/// # Example
///
/// ```
/// use dquel::{Criteria, Method};
///
/// let admin = Criteria::string("type", Method::Eq, "ADMIN");
/// let enabled = Criteria::unary("enabled", Method::IsTrue);
/// assert_eq!(admin.and(enabled).to_query().unwrap(), "type:eq:\"ADMIN\"&enabled:isTrue");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Criteria {
    Criterion {
        field: String,
        method: Method,
        value: Option<Value>,
        negated: bool,
    },
    Composite {
        left: Box<Criteria>,
        op: Op,
        right: Box<Criteria>,
        negated: bool,
    },
}

impl Criteria {
    /// A criterion with no value payload (`isNull`, `isTrue`, ...).
    #[must_use]
    pub fn unary(field: impl Into<String>, method: Method) -> Self {
        Criteria::Criterion {
            field: field.into(),
            method,
            value: None,
            negated: false,
        }
    }

    /// A criterion testing against a single string value.
    #[must_use]
    pub fn string(field: impl Into<String>, method: Method, value: impl Into<String>) -> Self {
        Criteria::Criterion {
            field: field.into(),
            method,
            value: Some(Value::String(value.into())),
            negated: false,
        }
    }

    /// A criterion testing against a single numeric value.
    #[must_use]
    pub fn number(field: impl Into<String>, method: Method, value: impl Into<Number>) -> Self {
        Criteria::Criterion {
            field: field.into(),
            method,
            value: Some(Value::Number(value.into())),
            negated: false,
        }
    }

    /// A criterion testing against a list of string values.
    #[must_use]
    pub fn string_list(
        field: impl Into<String>,
        method: Method,
        values: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Criteria::Criterion {
            field: field.into(),
            method,
            value: Some(Value::StringList(values.into_iter().map(Into::into).collect())),
            negated: false,
        }
    }

    /// A criterion testing against a list of numeric values.
    #[must_use]
    pub fn number_list(
        field: impl Into<String>,
        method: Method,
        values: impl IntoIterator<Item = impl Into<Number>>,
    ) -> Self {
        Criteria::Criterion {
            field: field.into(),
            method,
            value: Some(Value::NumberList(values.into_iter().map(Into::into).collect())),
            negated: false,
        }
    }

    #[must_use]
    pub fn and(self, right: impl Into<Criteria>) -> Self {
        Criteria::Composite {
            left: Box::new(self),
            op: Op::And,
            right: Box::new(right.into()),
            negated: false,
        }
    }

    #[must_use]
    pub fn or(self, right: impl Into<Criteria>) -> Self {
        Criteria::Composite {
            left: Box::new(self),
            op: Op::Or,
            right: Box::new(right.into()),
            negated: false,
        }
    }

    /// Whether this node's rendered form is prefixed with `!`.
    #[must_use]
    pub const fn negated(&self) -> bool {
        match self {
            Criteria::Criterion { negated, .. } | Criteria::Composite { negated, .. } => *negated,
        }
    }

    /// Serialize this tree to its DQL text form.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] if a criterion carries an empty field name.
    pub fn to_query(&self) -> Result<String, QueryError> {
        crate::render::render(self)
    }
}

impl Not for Criteria {
    type Output = Criteria;

    /// Flips the negation flag on the root node only.
    fn not(mut self) -> Criteria {
        match &mut self {
            Criteria::Criterion { negated, .. } | Criteria::Composite { negated, .. } => {
                *negated = !*negated;
            }
        }
        self
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::And => f.write_str("&"),
            Op::Or => f.write_str("|"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unary_constructor() {
        let c = Criteria::unary("enabled", Method::IsTrue);
        assert_eq!(
            c,
            Criteria::Criterion {
                field: "enabled".to_owned(),
                method: Method::IsTrue,
                value: None,
                negated: false,
            }
        );
    }

    #[test]
    fn string_constructor() {
        let c = Criteria::string("name", Method::Eq, "a");
        assert_eq!(
            c,
            Criteria::Criterion {
                field: "name".to_owned(),
                method: Method::Eq,
                value: Some(Value::String("a".to_owned())),
                negated: false,
            }
        );
    }

    #[test]
    fn number_list_constructor() {
        let c = Criteria::number_list("id", Method::MemberOf, [1_i64, 2]);
        match c {
            Criteria::Criterion { value: Some(Value::NumberList(v)), .. } => {
                assert_eq!(v, vec![Number::Int(1), Number::Int(2)]);
            }
            other => panic!("expected number list criterion, got {other:?}"),
        }
    }

    #[test]
    fn and_allocates_new_root() {
        let a = Criteria::unary("a", Method::IsTrue);
        let b = Criteria::unary("b", Method::IsTrue);
        let composite = a.clone().and(b.clone());
        match composite {
            Criteria::Composite { left, op, right, negated } => {
                assert_eq!(*left, a);
                assert_eq!(op, Op::And);
                assert_eq!(*right, b);
                assert!(!negated);
            }
            other => panic!("expected composite, got {other:?}"),
        }
    }

    #[test]
    fn not_flips_flag_without_descending() {
        let a = Criteria::unary("a", Method::IsTrue);
        let b = Criteria::unary("b", Method::IsTrue);
        let negated = !a.clone().and(b.clone());
        match &negated {
            Criteria::Composite { left, right, negated, .. } => {
                assert!(*negated);
                assert!(!left.negated());
                assert!(!right.negated());
            }
            other => panic!("expected composite, got {other:?}"),
        }
    }

    #[test]
    fn double_not_is_identity() {
        let a = Criteria::string("name", Method::Eq, "a");
        assert_eq!(!!a.clone(), a);
    }

    #[test]
    fn subtree_reuse_across_parents() {
        let shared = Criteria::unary("x", Method::IsNull);
        let left_tree = shared.clone().and(Criteria::unary("y", Method::IsTrue));
        let right_tree = Criteria::unary("z", Method::IsFalse).or(shared.clone());
        // The shared subtree is unchanged in both parents.
        match (&left_tree, &right_tree) {
            (
                Criteria::Composite { left, .. },
                Criteria::Composite { right, .. },
            ) => {
                assert_eq!(**left, shared);
                assert_eq!(**right, shared);
            }
            other => panic!("expected two composites, got {other:?}"),
        }
    }

    #[test]
    fn precedence_ranks() {
        assert!(Op::Or.precedence() < Op::And.precedence());
    }
}
