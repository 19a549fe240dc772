use serde::{Deserialize, Serialize};

pub const INCHES_PER_FOOT: f64 = 12.0;

/// One cabinet's footprint. Stored in inches; areas are always square feet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetDimensions {
    pub width_in: f64,
    pub height_in: f64,
}

impl CabinetDimensions {
    pub fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    pub fn width_ft(&self) -> f64 {
        self.width_in / INCHES_PER_FOOT
    }

    pub fn height_ft(&self) -> f64 {
        self.height_in / INCHES_PER_FOOT
    }

    pub fn area_sq_ft(&self) -> f64 {
        self.width_ft() * self.height_ft()
    }
}

/// The best feasible configuration found by a sizing search. Tertiary is
/// `None` when the third cabinet was not requested or did not fit at any
/// candidate height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateConfiguration {
    pub digit_size: u32,
    pub primary: CabinetDimensions,
    pub secondary: CabinetDimensions,
    pub tertiary: Option<CabinetDimensions>,
    pub total_sq_ft: f64,
    pub leftover_sq_ft: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_sq_ft() {
        let cabinet = CabinetDimensions::new(120.0, 96.0);
        assert_eq!(cabinet.width_ft(), 10.0);
        assert_eq!(cabinet.height_ft(), 8.0);
        assert_eq!(cabinet.area_sq_ft(), 80.0);
    }
}
