use crate::types::{Criteria, Method};

/// Typed accessor for a string-valued field.
///
/// Every method constructs a leaf [`Criteria`]; the field itself is reusable
/// and can seed any number of criteria.
///
/// # Example
///
/// ```
/// use dquel::StringField;
///
/// let name = StringField::new("name");
/// let c = name.contains_ignore_case("a").and(name.is_not_empty());
/// assert_eq!(c.to_query().unwrap(), "name:containsIgnoreCase:\"a\"&name:isNotEmpty");
/// ```
#[derive(Debug, Clone)]
pub struct StringField {
    field: String,
}

impl StringField {
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
    pub fn is_empty(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsEmpty)
    }

    #[must_use]
    pub fn is_not_empty(&self) -> Criteria {
        Criteria::unary(self.field.clone(), Method::IsNotEmpty)
    }

    #[must_use]
    pub fn eq(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::Eq, right)
    }

    #[must_use]
    pub fn equals_ignore_case(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::EqualsIgnoreCase, right)
    }

    #[must_use]
    pub fn contains(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::Contains, right)
    }

    #[must_use]
    pub fn contains_ignore_case(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::ContainsIgnoreCase, right)
    }

    #[must_use]
    pub fn starts_with(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::StartsWith, right)
    }

    #[must_use]
    pub fn starts_with_ignore_case(&self, right: impl Into<String>) -> Criteria {
        Criteria::string(self.field.clone(), Method::StartsWithIgnoreCase, right)
    }

    #[must_use]
    pub fn member_of(&self, rights: impl IntoIterator<Item = impl Into<String>>) -> Criteria {
        Criteria::string_list(self.field.clone(), Method::MemberOf, rights)
    }
}
