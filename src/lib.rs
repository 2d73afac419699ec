mod buffer;
mod error;
mod fields;
mod render;
mod types;

pub use buffer::QueryBuilder;
pub use error::QueryError;
pub use fields::{
    BooleanField, DateField, EnumField, FilterBuilder, NumberField, StringField, UuidField,
    all_of, any_of, to_optional_filter,
};
pub use types::{Criteria, Method, Number, Op, StructuralError, ValidationError, Value};
