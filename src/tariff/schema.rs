use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Material {
    #[serde(rename = "uPVC")]
    Upvc,
    Aluminum,
}

impl Material {
    pub const ALL: [Material; 2] = [Material::Upvc, Material::Aluminum];
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Upvc => "uPVC",
            Self::Aluminum => "Aluminum",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown material: {0}")]
pub struct MaterialParseError(pub String);

impl FromStr for Material {
    type Err = MaterialParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "upvc" | "u-pvc" | "pvc" => Ok(Self::Upvc),
            "aluminum" | "aluminium" | "al" => Ok(Self::Aluminum),
            _ => Err(MaterialParseError(s.to_string())),
        }
    }
}

/// Shipment origin. Declaration order is the fixed enumeration order used for
/// display and for breaking ties between equal totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Origin {
    Bahrain,
    China,
    Poland,
    Mexico,
}

impl Origin {
    pub const ALL: [Origin; 4] = [
        Origin::Bahrain,
        Origin::China,
        Origin::Poland,
        Origin::Mexico,
    ];
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::Bahrain => "Bahrain",
            Self::China => "China",
            Self::Poland => "Poland",
            Self::Mexico => "Mexico",
        };
        write!(f, "{display}")
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown origin: {0}")]
pub struct OriginParseError(pub String);

impl FromStr for Origin {
    type Err = OriginParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "bahrain" | "bh" => Ok(Self::Bahrain),
            "china" | "cn" => Ok(Self::China),
            "poland" | "pl" => Ok(Self::Poland),
            "mexico" | "mx" => Ok(Self::Mexico),
            _ => Err(OriginParseError(s.to_string())),
        }
    }
}
