//! Gymnast-facing classification types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The competitive program a gymnast is scored under.
///
/// Serialized with capitalised names because hub threshold tables are keyed
/// by `Male` / `Female`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Men's artistic program.
    #[serde(alias = "male")]
    Male,
    /// Women's artistic program.
    #[serde(alias = "female")]
    Female,
}

impl Gender {
    /// Returns the table key for this gender.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
