use std::ops::Not;

use crate::types::{Criteria, Method};

/// Typed accessor for a boolean field.
///
/// Wherever an expression is expected, a `&BooleanField` coerces to its
/// [`is_true()`](Self::is_true) criterion, so `admins.and(&enabled)` reads
/// like the predicate it builds. `!&field` is [`is_false()`](Self::is_false).
#[derive(Debug, Clone)]
pub struct BooleanField {
    field: String,
}

impl BooleanField {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    #[must_use]
    pub fn is_null(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsNull)
    }

    #[must_use]
    pub fn is_not_null(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsNotNull)
    }

    #[must_use]
    pub fn is_true(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsTrue)
    }

    #[must_use]
    pub fn is_false(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsFalse)
    }
}

impl From<&BooleanField> for Criteria {
    fn from(field: &BooleanField) -> Criteria {
        field.is_true()
    }
}

impl Not for &BooleanField {
    type Output = Criteria;

    fn not(self) -> Criteria {
        self.is_false()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_true_and_is_false() {
        let f = BooleanField::new("enabled");
        assert_eq!(f.is_true().to_query().unwrap(), "enabled:isTrue");
        assert_eq!(f.is_false().to_query().unwrap(), "enabled:isFalse");
    }

    #[test]
    fn coerces_to_is_true_in_expression_position() {
        let enabled = BooleanField::new("enabled");
        let c = Criteria::string("name", Method::Eq, "a").and(&enabled);
        assert_eq!(c.to_query().unwrap(), "name:eq:\"a\"&enabled:isTrue");
    }

    #[test]
    fn logical_not_is_is_false() {
        let enabled = BooleanField::new("enabled");
        assert_eq!((!&enabled).to_query().unwrap(), "enabled:isFalse");
    }
}
