use serde::{Deserialize, Serialize};

use super::ChangerType;

/// Caller-supplied configuration for one sizing search. Defaults match
/// the production calculator: type "4" changer, shared enclosure, no
/// third cabinet, secondary height at half its width.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchFlags {
    #[serde(default)]
    pub changer_type: ChangerType,

    #[serde(default)]
    pub include_third_cabinet: bool,

    #[serde(default)]
    pub separate_cabinets: bool,

    #[serde(default = "default_height_ratio")]
    pub maverik_height_ratio: f64,
}

fn default_height_ratio() -> f64 {
    0.5
}

impl Default for SearchFlags {
    fn default() -> Self {
        SearchFlags {
            changer_type: ChangerType::default(),
            include_third_cabinet: false,
            separate_cabinets: false,
            maverik_height_ratio: default_height_ratio(),
        }
    }
}
