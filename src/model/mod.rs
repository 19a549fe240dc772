mod catalog;
mod changer_type;
mod configuration;
mod dimension_range;
mod search_flags;

pub use catalog::DigitCatalog;
pub use changer_type::ChangerType;
pub use configuration::{CabinetDimensions, CandidateConfiguration, INCHES_PER_FOOT};
pub use dimension_range::DimensionRange;
pub use search_flags::SearchFlags;
