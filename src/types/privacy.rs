use std::fmt;

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};

/// Team visibility within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Privacy {
    /// Only visible to organization owners and team members
    Secret,
    /// Visible to every member of the organization
    Closed,
}

impl Privacy {
    /// Value sent to the API.
    pub fn as_str(self) -> &'static str {
        match self {
            Privacy::Secret => "secret",
            Privacy::Closed => "closed",
        }
    }

    /// Get the colored label for terminal output.
    pub fn colored(self) -> String {
        match self {
            Privacy::Secret => self.as_str().yellow().bold().to_string(),
            Privacy::Closed => self.as_str().blue().to_string(),
        }
    }
}

impl fmt::Display for Privacy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
