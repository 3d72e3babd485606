use std::fmt;

use serde::{Deserialize, Serialize};

/// Which anchor cascade located a series entry in its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifiedBy {
    /// A whole-season marker: "Season 2", "S02", "3xAll".
    SeasonPack,
    /// A season/episode marker: "S02E05", "1x05", "Part Three".
    Episode,
    /// An air date: "2015-03-21", "21 March 2015".
    Date,
}

impl fmt::Display for IdentifiedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeasonPack => write!(f, "season pack"),
            Self::Episode => write!(f, "episode"),
            Self::Date => write!(f, "date"),
        }
    }
}
