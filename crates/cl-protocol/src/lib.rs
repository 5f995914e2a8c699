pub mod error;
pub mod query;
pub mod validate;

pub use error::*;
pub use query::*;
pub use validate::*;
