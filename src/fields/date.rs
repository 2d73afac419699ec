use chrono::{DateTime, SecondsFormat, Utc};

use crate::types::{Criteria, Method};

/// Typed accessor for a UTC datetime field.
///
/// Values serialize as ISO-8601 with millisecond precision and a `Z` suffix
/// (`2020-01-01T00:00:00.000Z`) and are compared as quoted strings, which is
/// the form the query backend expects for temporal fields.
#[derive(Debug, Clone)]
pub struct DateField {
    field: String,
}

impl DateField {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self { field: field.into() }
    }

    fn serialize(value: DateTime<Utc>) -> String {
        value.to_rfc3339_opts(SecondsFormat::Millis, true)
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
    pub fn eq(&self, right: DateTime<Utc>) -> Criteria {
        Criteria::string(self.field.clone(), Method::Eq, Self::serialize(right))
    }

    #[must_use]
    pub fn before(&self, right: DateTime<Utc>) -> Criteria {
        Criteria::string(self.field.clone(), Method::Before, Self::serialize(right))
    }

    #[must_use]
    pub fn after(&self, right: DateTime<Utc>) -> Criteria {
        Criteria::string(self.field.clone(), Method::After, Self::serialize(right))
    }

    #[must_use]
    pub fn member_of(&self, rights: impl IntoIterator<Item = DateTime<Utc>>) -> Criteria {
        Criteria::string_list(
            self.field.clone(),
            Method::MemberOf,
            rights.into_iter().map(Self::serialize),
        )
    }
}
