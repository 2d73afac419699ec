mod boolean;
mod date;
mod enums;
mod filter;
mod number;
mod string;
mod uuid;

pub use boolean::BooleanField;
pub use date::DateField;
pub use enums::EnumField;
pub use filter::{FilterBuilder, all_of, any_of, to_optional_filter};
pub use number::NumberField;
pub use string::StringField;
pub use uuid::UuidField;
