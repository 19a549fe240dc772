use itertools::iproduct;
use log::trace;

use crate::model::{
    CabinetDimensions, CandidateConfiguration, DigitCatalog, SearchFlags, INCHES_PER_FOOT,
};

use super::SizingError;

/// Width ratio of the secondary cabinet to the primary when the two are
/// built as separate physical units rather than a shared enclosure.
const SEPARATE_SECONDARY_WIDTH_RATIO: f64 = 13.0 / 11.0;

/// Heights tried for the optional third cabinet, tallest first. The
/// first height that still fits the budget wins; if neither fits the
/// candidate simply goes without the third cabinet.
pub const TERTIARY_HEIGHT_PREFERENCES_IN: [u32; 2] = [30, 18];

/// Finds the feasible configuration with the largest digit size, and
/// among ties at that digit size, the smallest leftover area.
///
/// Digit sizes are scanned largest first; within a digit size the full
/// integer width/height grid is scanned exhaustively, so the first digit
/// size that yields any feasible candidate is the answer. `Ok(None)`
/// means the budget is too small for the smallest catalog entry, a
/// normal outcome the caller reports to the end user.
pub fn find_best_configuration(
    allowed_sq_ft: f64,
    catalog: &DigitCatalog,
    flags: &SearchFlags,
) -> Result<Option<CandidateConfiguration>, SizingError> {
    if !(allowed_sq_ft > 0.0) {
        return Err(SizingError::NonPositiveArea(allowed_sq_ft));
    }
    if !(flags.maverik_height_ratio > 0.0) {
        return Err(SizingError::NonPositiveRatio(flags.maverik_height_ratio));
    }
    catalog.validate()?;

    let adjusted = catalog.adjusted_for(flags.changer_type);
    for (digit_size, range) in adjusted.iter_largest_first() {
        let mut best: Option<CandidateConfiguration> = None;
        for (width, height) in iproduct!(range.widths(), range.heights()) {
            let candidate = evaluate_candidate(allowed_sq_ft, digit_size, width, height, flags);
            let Some(candidate) = candidate else {
                continue;
            };
            trace!(
                target: "sizing_search",
                "digit {} at {}x{}: total {:.3} sq ft, leftover {:.3}",
                digit_size,
                width,
                height,
                candidate.total_sq_ft,
                candidate.leftover_sq_ft
            );
            let tighter = best
                .as_ref()
                .map(|b| candidate.leftover_sq_ft < b.leftover_sq_ft)
                .unwrap_or(true);
            if tighter {
                best = Some(candidate);
            }
        }
        // Larger digit sizes were exhausted already, so the first size
        // with any feasible pair is the answer.
        if best.is_some() {
            return Ok(best);
        }
        trace!(target: "sizing_search", "digit {} infeasible at every grid point", digit_size);
    }
    Ok(None)
}

/// Derives the dependent cabinet geometry for one (width, height) grid
/// point and checks it against the budget. Returns `None` when the
/// mandatory cabinets alone exceed the allowed area.
fn evaluate_candidate(
    allowed_sq_ft: f64,
    digit_size: u32,
    width_in: u32,
    height_in: u32,
    flags: &SearchFlags,
) -> Option<CandidateConfiguration> {
    let primary = CabinetDimensions::new(width_in as f64, height_in as f64);

    let secondary_width_ft = if flags.separate_cabinets {
        primary.width_ft() * SEPARATE_SECONDARY_WIDTH_RATIO
    } else {
        primary.width_ft()
    };
    let secondary_height_ft = secondary_width_ft * flags.maverik_height_ratio;
    let secondary = CabinetDimensions::new(
        secondary_width_ft * INCHES_PER_FOOT,
        secondary_height_ft * INCHES_PER_FOOT,
    );

    let mut total_sq_ft = primary.area_sq_ft() + secondary.area_sq_ft();
    if total_sq_ft > allowed_sq_ft {
        return None;
    }

    let mut tertiary = None;
    if flags.include_third_cabinet {
        for &height in &TERTIARY_HEIGHT_PREFERENCES_IN {
            let cabinet = CabinetDimensions::new(primary.width_in, height as f64);
            if total_sq_ft + cabinet.area_sq_ft() <= allowed_sq_ft {
                total_sq_ft += cabinet.area_sq_ft();
                tertiary = Some(cabinet);
                break;
            }
        }
    }

    Some(CandidateConfiguration {
        digit_size,
        primary,
        secondary,
        tertiary,
        total_sq_ft,
        leftover_sq_ft: allowed_sq_ft - total_sq_ft,
    })
}
