use crate::types::{Criteria, Method, Number};

/// Typed accessor for a numeric field.
#[derive(Debug, Clone)]
pub struct NumberField {
    field: String,
}

impl NumberField {
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
    pub fn eq(&self, right: impl Into<Number>) -> Criteria {
        Criteria::number(self.field.clone(), Method::Eq, right)
    }

    #[must_use]
    pub fn gt(&self, right: impl Into<Number>) -> Criteria {
        Criteria::number(self.field.clone(), Method::Gt, right)
    }

    #[must_use]
    pub fn lt(&self, right: impl Into<Number>) -> Criteria {
        Criteria::number(self.field.clone(), Method::Lt, right)
    }

    #[must_use]
    pub fn goe(&self, right: impl Into<Number>) -> Criteria {
        Criteria::number(self.field.clone(), Method::Goe, right)
    }

    #[must_use]
    pub fn loe(&self, right: impl Into<Number>) -> Criteria {
        Criteria::number(self.field.clone(), Method::Loe, right)
    }

    #[must_use]
    pub fn member_of(&self, rights: impl IntoIterator<Item = impl Into<Number>>) -> Criteria {
        Criteria::number_list(self.field.clone(), Method::MemberOf, rights)
    }
}
