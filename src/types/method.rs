use std::fmt;

/// The fixed operator vocabulary a criterion can test a field with.
///
/// The wire token for each method is its camelCase form (e.g.
/// `containsIgnoreCase`), matching what the query backend expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Method {
    Eq,
    Gt,
    Lt,
    Goe,
    Loe,
    Before,
    After,
    MemberOf,
    IsNull,
    IsNotNull,
    IsTrue,
    IsFalse,
    Contains,
    ContainsIgnoreCase,
    StartsWith,
    StartsWithIgnoreCase,
    EqualsIgnoreCase,
    IsEmpty,
    IsNotEmpty,
}

impl Method {
    /// The token this method serializes to.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Method::Eq => "eq",
            Method::Gt => "gt",
            Method::Lt => "lt",
            Method::Goe => "goe",
            Method::Loe => "loe",
            Method::Before => "before",
            Method::After => "after",
            Method::MemberOf => "memberOf",
            Method::IsNull => "isNull",
            Method::IsNotNull => "isNotNull",
            Method::IsTrue => "isTrue",
            Method::IsFalse => "isFalse",
            Method::Contains => "contains",
            Method::ContainsIgnoreCase => "containsIgnoreCase",
            Method::StartsWith => "startsWith",
            Method::StartsWithIgnoreCase => "startsWithIgnoreCase",
            Method::EqualsIgnoreCase => "equalsIgnoreCase",
            Method::IsEmpty => "isEmpty",
            Method::IsNotEmpty => "isNotEmpty",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
