//! Mode-of-mobility enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Mode of mobility used to derive a sales territory.
///
/// The Atlas API accepts these values lowercase on the wire
/// (`"driving"` / `"walking"`); the serde representation matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mobility {
    Driving,
    Walking,
}

impl Mobility {
    /// The wire representation of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mobility::Driving => "driving",
            Mobility::Walking => "walking",
        }
    }
}

impl fmt::Display for Mobility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
