pub mod status;

pub use status::registry::{is_valid_name, lookup, Registry, REGISTRY};
pub use status::{Error, StatusName};
