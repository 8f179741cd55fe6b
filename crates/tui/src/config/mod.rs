mod schema;
mod validate;

pub use validate::{validate_session_config, ValidationError};
