pub mod errors;
pub mod types;

pub use errors::{ConfigError, SashError};
pub use types::{Color, PaneId, PixelRect};

pub type Result<T> = std::result::Result<T, SashError>;
