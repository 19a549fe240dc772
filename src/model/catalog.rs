use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::sizing::SizingError;

use super::{ChangerType, DimensionRange};

/// The shipped table of digit sizes and their cabinet dimension ranges.
/// Widths run roughly 5.6x-6x the digit size, heights 2.2x-2.4x.
const STANDARD_ENTRIES: [(u32, DimensionRange); 14] = [
    (10, DimensionRange::new(56, 60, 22, 24)),
    (13, DimensionRange::new(72, 78, 28, 31)),
    (16, DimensionRange::new(89, 96, 35, 38)),
    (20, DimensionRange::new(112, 120, 44, 48)),
    (24, DimensionRange::new(134, 144, 52, 57)),
    (28, DimensionRange::new(156, 168, 61, 67)),
    (36, DimensionRange::new(201, 216, 79, 86)),
    (40, DimensionRange::new(224, 240, 88, 96)),
    (48, DimensionRange::new(268, 288, 105, 115)),
    (61, DimensionRange::new(341, 366, 134, 146)),
    (76, DimensionRange::new(425, 456, 167, 182)),
    (88, DimensionRange::new(492, 528, 193, 211)),
    (101, DimensionRange::new(565, 606, 222, 242)),
    (114, DimensionRange::new(638, 684, 250, 273)),
];

/// Immutable mapping from nominal digit size (inches) to the allowed
/// primary-cabinet dimension range. The search never mutates a catalog;
/// changer adjustment produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitCatalog {
    entries: BTreeMap<u32, DimensionRange>,
}

impl DigitCatalog {
    pub fn new(entries: BTreeMap<u32, DimensionRange>) -> Self {
        Self { entries }
    }

    /// The fixed 14-entry production table, 10" through 114" digits.
    pub fn standard() -> Self {
        STANDARD_ENTRIES.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, digit_size: u32) -> Option<&DimensionRange> {
        self.entries.get(&digit_size)
    }

    /// Caller contract check: every digit size and dimension positive,
    /// every min bound at or below its max bound.
    pub fn validate(&self) -> Result<(), SizingError> {
        for (&digit_size, range) in &self.entries {
            if digit_size == 0 {
                return Err(SizingError::ZeroDigitSize);
            }
            if range.min_width == 0 || range.min_height == 0 {
                return Err(SizingError::ZeroDimension { digit_size });
            }
            if range.min_width > range.max_width || range.min_height > range.max_height {
                return Err(SizingError::InvertedRange { digit_size });
            }
        }
        Ok(())
    }

    /// Catalog with every height range scaled for the changer fixture.
    /// Pure and total; type "2" returns an identical catalog.
    pub fn adjusted_for(&self, changer_type: ChangerType) -> DigitCatalog {
        let multiplier = changer_type.height_multiplier();
        self.entries
            .iter()
            .map(|(&digit_size, range)| (digit_size, range.scaled_height(multiplier)))
            .collect()
    }

    /// Digit sizes in search order: biggest legible digit first.
    pub fn iter_largest_first(&self) -> impl Iterator<Item = (u32, &DimensionRange)> + '_ {
        self.entries.iter().rev().map(|(&digit_size, range)| (digit_size, range))
    }
}

impl FromIterator<(u32, DimensionRange)> for DigitCatalog {
    fn from_iter<T: IntoIterator<Item = (u32, DimensionRange)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_shape() {
        let catalog = DigitCatalog::standard();
        assert_eq!(catalog.len(), 14);
        let sizes: Vec<u32> = catalog.iter_largest_first().map(|(size, _)| size).collect();
        assert_eq!(sizes.first(), Some(&114));
        assert_eq!(sizes.last(), Some(&10));
        assert!(catalog.validate().is_ok());
    }

    #[test]
    fn test_iter_largest_first_is_descending() {
        let catalog = DigitCatalog::standard();
        let sizes: Vec<u32> = catalog.iter_largest_first().map(|(size, _)| size).collect();
        let mut sorted = sizes.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(sizes, sorted);
    }

    #[test]
    fn test_adjusted_for_changer_four_doubles_heights_only() {
        let catalog = DigitCatalog::standard();
        let adjusted = catalog.adjusted_for(ChangerType::Four);
        for (digit_size, range) in catalog.iter_largest_first() {
            let doubled = adjusted.get(digit_size).unwrap();
            assert_eq!(doubled.min_width, range.min_width);
            assert_eq!(doubled.max_width, range.max_width);
            assert_eq!(doubled.min_height, range.min_height * 2);
            assert_eq!(doubled.max_height, range.max_height * 2);
        }
    }

    #[test]
    fn test_adjusted_for_changer_two_is_identity() {
        let catalog = DigitCatalog::standard();
        assert_eq!(catalog.adjusted_for(ChangerType::Two), catalog);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let catalog: DigitCatalog = [(10, DimensionRange::new(60, 56, 22, 24))]
            .into_iter()
            .collect();
        assert_eq!(
            catalog.validate(),
            Err(SizingError::InvertedRange { digit_size: 10 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_dimension() {
        let catalog: DigitCatalog = [(10, DimensionRange::new(0, 60, 22, 24))]
            .into_iter()
            .collect();
        assert_eq!(
            catalog.validate(),
            Err(SizingError::ZeroDimension { digit_size: 10 })
        );
    }

    #[test]
    fn test_validate_rejects_zero_digit_size() {
        let catalog: DigitCatalog = [(0, DimensionRange::new(56, 60, 22, 24))]
            .into_iter()
            .collect();
        assert_eq!(catalog.validate(), Err(SizingError::ZeroDigitSize));
    }

    #[test]
    fn test_serde_round_trip() {
        let catalog = DigitCatalog::standard();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: DigitCatalog = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, catalog);
    }
}
