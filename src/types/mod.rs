mod criteria;
mod error;
mod method;
mod value;

pub use criteria::{Criteria, Op};
pub use error::{StructuralError, ValidationError};
pub use method::Method;
pub use value::{Number, Value};
