use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PcbSide {
    Top,
    Bottom,
}

impl PcbSide {
    /// The side a mounted item ends up on; mirrored items are on the bottom.
    pub fn from_mirrored(mirrored: bool) -> Self {
        match mirrored {
            true => PcbSide::Bottom,
            false => PcbSide::Top,
        }
    }
}

impl Display for PcbSide {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Top => write!(f, "top"),
            Self::Bottom => write!(f, "bottom"),
        }
    }
}

impl FromStr for PcbSide {
    type Err = PcbSideError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "top" => Ok(PcbSide::Top),
            "bottom" => Ok(PcbSide::Bottom),
            _ => Err(PcbSideError::Unknown(value.to_string())),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum PcbSideError {
    #[error("Unknown PCB side. value: '{0:}'")]
    Unknown(String),
}
