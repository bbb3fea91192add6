//! ABO group enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use bloodlink_core::error::AppError;

/// ABO blood group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AboGroup {
    /// Group O (no A or B antigen).
    O,
    /// Group A.
    A,
    /// Group B.
    B,
    /// Group AB (both antigens).
    AB,
}

impl AboGroup {
    /// All groups in display order.
    pub const ALL: [Self; 4] = [Self::O, Self::A, Self::B, Self::AB];

    /// Return the group as its canonical string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::O => "O",
            Self::A => "A",
            Self::B => "B",
            Self::AB => "AB",
        }
    }
}

impl fmt::Display for AboGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AboGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "O" => Ok(Self::O),
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "AB" => Ok(Self::AB),
            other => Err(AppError::validation(format!(
                "Unknown blood group '{other}'"
            ))),
        }
    }
}
