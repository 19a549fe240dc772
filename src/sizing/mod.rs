mod error;
mod search;

pub use error::SizingError;
pub use search::{find_best_configuration, TERTIARY_HEIGHT_PREFERENCES_IN};
