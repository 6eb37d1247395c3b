use serde::{Deserialize, Serialize};
use std::fmt;

/// An airport as it appears on a boarding pass.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Airport {
    code: String,
    city: String,
}

impl Airport {
    pub fn new(code: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            city: city.into(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Renders as `City (CODE)`.
impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.city, self.code)
    }
}
