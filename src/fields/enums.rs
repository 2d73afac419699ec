use std::fmt::Display;
use std::marker::PhantomData;

use crate::types::{Criteria, Method};

/// Typed accessor for an enum-valued field.
///
/// `T` supplies its own wire form through [`Display`]; values render as
/// quoted strings (`type:eq:"ADMIN"`).
///
/// # Example
///
/// ```
/// use std::fmt;
/// use dquel::EnumField;
///
/// enum UserType { Admin, General }
///
/// impl fmt::Display for UserType {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             UserType::Admin => "ADMIN",
///             UserType::General => "GENERAL",
///         })
///     }
/// }
///
/// let kind = EnumField::new("type");
/// assert_eq!(kind.eq(&UserType::Admin).to_query().unwrap(), "type:eq:\"ADMIN\"");
/// ```
#[derive(Debug, Clone)]
pub struct EnumField<T> {
    field: String,
    _kind: PhantomData<fn(T) -> T>,
}

impl<T: Display> EnumField<T> {
    #[must_use]
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            _kind: PhantomData,
        }
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
    pub fn eq(&self, right: &T) -> Criteria {
        Criteria::string(self.field.clone(), Method::Eq, right.to_string())
    }

    #[must_use]
    pub fn member_of<'a>(&self, rights: impl IntoIterator<Item = &'a T>) -> Criteria
    where
        T: 'a,
    {
        Criteria::string_list(
            self.field.clone(),
            Method::MemberOf,
            rights.into_iter().map(ToString::to_string),
        )
    }
}
