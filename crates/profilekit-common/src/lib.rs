pub mod errors;
pub mod types;

pub use errors::{ConfigError, ProfileKitError};
pub use types::{Bounds, ViewId};

pub type Result<T> = std::result::Result<T, ProfileKitError>;
