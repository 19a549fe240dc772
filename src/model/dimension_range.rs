use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Allowed primary-cabinet dimensions for one digit size, in whole inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionRange {
    pub min_width: u32,
    pub max_width: u32,
    pub min_height: u32,
    pub max_height: u32,
}

impl DimensionRange {
    pub const fn new(min_width: u32, max_width: u32, min_height: u32, max_height: u32) -> Self {
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    pub fn widths(&self) -> RangeInclusive<u32> {
        self.min_width..=self.max_width
    }

    pub fn heights(&self) -> RangeInclusive<u32> {
        self.min_height..=self.max_height
    }

    /// Range with the height bounds scaled by the changer's multiplier.
    /// Widths are never affected by the changer fixture.
    pub fn scaled_height(&self, multiplier: u32) -> DimensionRange {
        DimensionRange {
            min_width: self.min_width,
            max_width: self.max_width,
            min_height: self.min_height * multiplier,
            max_height: self.max_height * multiplier,
        }
    }
}
