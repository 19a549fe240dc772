use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Physical price-changer variant. The "4" fixture needs twice the
/// vertical digit-display range of the "2" fixture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChangerType {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "4")]
    Four,
}

impl Default for ChangerType {
    fn default() -> Self {
        ChangerType::Four
    }
}

impl ChangerType {
    pub fn height_multiplier(&self) -> u32 {
        match self {
            ChangerType::Two => 1,
            ChangerType::Four => 2,
        }
    }
}

impl FromStr for ChangerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "2" => Ok(ChangerType::Two),
            "4" => Ok(ChangerType::Four),
            other => Err(format!("unknown changer type {:?} (expected 2 or 4)", other)),
        }
    }
}

impl std::fmt::Display for ChangerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangerType::Two => write!(f, "2"),
            ChangerType::Four => write!(f, "4"),
        }
    }
}
