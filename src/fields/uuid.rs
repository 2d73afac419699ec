use uuid::Uuid;

use crate::types::{Criteria, Method};

/// Typed accessor for a UUID field. Values render as canonical hyphenated
/// lowercase text, quoted.
#[derive(Debug, Clone)]
pub struct UuidField {
    field: String,
}

impl UuidField {
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
    pub fn eq(&self, right: Uuid) -> Criteria {
        Criteria::string(self.field.clone(), Method::Eq, right.to_string())
    }

    #[must_use]
    pub fn member_of(&self, rights: impl IntoIterator<Item = Uuid>) -> Criteria {
        Criteria::string_list(
            self.field.clone(),
            Method::MemberOf,
            rights.into_iter().map(|u| u.to_string()),
        )
    }
}
