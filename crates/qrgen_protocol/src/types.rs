use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error-correction level of a QR symbol.
///
/// Higher levels trade capacity for the amount of damage a symbol can
/// absorb and still decode (roughly 7%, 15%, 25% and 30%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EccLevel {
    #[default]
    Low,
    Medium,
    Quartile,
    High,
}

impl EccLevel {
    pub const ALL: [EccLevel; 4] = [
        EccLevel::Low,
        EccLevel::Medium,
        EccLevel::Quartile,
        EccLevel::High,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EccLevel::Low => "LOW",
            EccLevel::Medium => "MEDIUM",
            EccLevel::Quartile => "QUARTILE",
            EccLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for EccLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EccLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" | "L" => Ok(EccLevel::Low),
            "MEDIUM" | "M" => Ok(EccLevel::Medium),
            "QUARTILE" | "Q" => Ok(EccLevel::Quartile),
            "HIGH" | "H" => Ok(EccLevel::High),
            _ => Err(format!(
                "Invalid error correction level: '{}'. Expected: LOW, MEDIUM, QUARTILE, or HIGH",
                s
            )),
        }
    }
}
