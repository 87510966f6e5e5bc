use std::{fmt, str::FromStr};

use serde::Deserialize;

/// Which subset of the integer catalog a build covers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Selection {
    /// Every kind.
    #[default]
    All,
    /// Kinds of the signed family.
    Signed,
    /// Kinds of the unsigned family.
    Unsigned,
}

impl Selection {
    /// All selections, in display order.
    pub const ALL: [Selection; 3] = [Selection::All, Selection::Signed, Selection::Unsigned];

    pub fn as_str(&self) -> &'static str {
        match self {
            Selection::All => "all",
            Selection::Signed => "signed",
            Selection::Unsigned => "unsigned",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Selection::All),
            "signed" => Ok(Selection::Signed),
            "unsigned" => Ok(Selection::Unsigned),
            other => Err(format!(
                "invalid selection '{other}', expected one of: all, signed, unsigned"
            )),
        }
    }
}
