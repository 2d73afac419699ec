use crate::types::{Criteria, Number};
use crate::QueryError;

/// AND together a collection of criteria, left-associatively.
/// Returns `None` for an empty input.
pub fn all_of(criterias: impl IntoIterator<Item = Criteria>) -> Option<Criteria> {
    criterias.into_iter().reduce(|left, right| left.and(right))
}

/// OR together a collection of criteria, left-associatively.
/// Returns `None` for an empty input.
pub fn any_of(criterias: impl IntoIterator<Item = Criteria>) -> Option<Criteria> {
    criterias.into_iter().reduce(|left, right| left.or(right))
}

/// Apply an optional filter closure to a field set and render the result.
///
/// The host passes its filter fields and whatever filter function the request
/// carried; an absent filter yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`QueryError`] if rendering the produced criteria fails.
pub fn to_optional_filter<F, C>(
    fields: &F,
    filter: Option<impl FnOnce(&F) -> C>,
) -> Result<Option<String>, QueryError>
where
    C: Into<Criteria>,
{
    match filter {
        Some(filter) => filter(fields).into().to_query().map(Some),
        None => Ok(None),
    }
}

/// Accumulates criteria from optional request inputs, skipping absent ones.
///
/// `None` values never contribute a criterion; the string add also skips
/// empty strings, and the list adds skip empty lists (dropping empty string
/// elements first). [`build`](Self::build) ANDs whatever was collected.
///
/// # Example
///
/// ```
/// use dquel::{FilterBuilder, NumberField, StringField};
///
/// let name = StringField::new("name");
/// let age = NumberField::new("age");
/// let query = FilterBuilder::new()
///     .string(|v| name.contains(v), Some("an".to_owned()))
///     .string(|v| name.starts_with(v), None)
///     .add(|v| age.goe(v), Some(21))
///     .build()
///     .expect("two criteria were added")
///     .to_query()
///     .unwrap();
/// assert_eq!(query, "name:contains:\"an\"&age:goe:21");
/// ```
#[derive(Debug, Default)]
pub struct FilterBuilder {
    filters: Vec<Criteria>,
}

impl FilterBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a criterion built from a present value.
    #[must_use]
    pub fn add<T>(mut self, make: impl FnOnce(T) -> Criteria, value: Option<T>) -> Self {
        if let Some(value) = value {
            self.filters.push(make(value));
        }
        self
    }

    /// Add a string criterion. Absent and empty strings are skipped.
    #[must_use]
    pub fn string(mut self, make: impl FnOnce(String) -> Criteria, value: Option<String>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.filters.push(make(value));
            }
        }
        self
    }

    /// Add a string-list criterion. Empty elements are dropped first; an
    /// absent or (then) empty list is skipped.
    #[must_use]
    pub fn string_list(
        mut self,
        make: impl FnOnce(Vec<String>) -> Criteria,
        values: Option<Vec<String>>,
    ) -> Self {
        if let Some(values) = values {
            let values: Vec<String> = values.into_iter().filter(|v| !v.is_empty()).collect();
            if !values.is_empty() {
                self.filters.push(make(values));
            }
        }
        self
    }

    /// Add a number-list criterion. Absent and empty lists are skipped.
    #[must_use]
    pub fn number_list(
        mut self,
        make: impl FnOnce(Vec<Number>) -> Criteria,
        values: Option<Vec<Number>>,
    ) -> Self {
        if let Some(values) = values {
            if !values.is_empty() {
                self.filters.push(make(values));
            }
        }
        self
    }

    /// AND the collected criteria together; `None` if nothing was added.
    #[must_use]
    pub fn build(self) -> Option<Criteria> {
        all_of(self.filters)
    }
}
