use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three dimensions the questionnaire measures.
///
/// Declaration order is the presentation order: every table, chart and
/// export lists Depression, then Anxiety, then Stress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscale {
    #[serde(alias = "D", alias = "d")]
    Depression,
    #[serde(alias = "A", alias = "a")]
    Anxiety,
    #[serde(alias = "S", alias = "s")]
    Stress,
}

impl Subscale {
    pub const ALL: [Subscale; 3] = [Subscale::Depression, Subscale::Anxiety, Subscale::Stress];

    pub fn name(self) -> &'static str {
        match self {
            Subscale::Depression => "Depression",
            Subscale::Anxiety => "Anxiety",
            Subscale::Stress => "Stress",
        }
    }

    /// Position in [`Subscale::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in instrument definitions.
    pub fn code(self) -> char {
        match self {
            Subscale::Depression => 'D',
            Subscale::Anxiety => 'A',
            Subscale::Stress => 'S',
        }
    }
}

impl fmt::Display for Subscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Subscale {
    type Err = CoreError;

    /// Accepts the full name or the single-letter code, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Subscale::ALL
            .into_iter()
            .find(|sub| {
                sub.name().eq_ignore_ascii_case(trimmed)
                    || trimmed.eq_ignore_ascii_case(&sub.code().to_string())
            })
            .ok_or_else(|| CoreError::UnknownSubscale(s.to_string()))
    }
}
