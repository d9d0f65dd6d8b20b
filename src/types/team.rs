use serde::{Deserialize, Serialize};

use super::Privacy;

/// A team as sent to and read back from the API.
///
/// Empty fields are left out of the serialized payload so that an update
/// only touches what the caller set.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "no_description")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<String>,
    #[serde(rename = "repo_names", default, skip_serializing_if = "Vec::is_empty")]
    pub repos: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy: Option<Privacy>,
    #[serde(default, skip_serializing_if = "no_parent")]
    pub parent_team_id: Option<u64>,
}

fn no_description(description: &Option<String>) -> bool {
    description.as_deref().map_or(true, str::is_empty)
}

// Zero is how callers spell "no parent".
fn no_parent(id: &Option<u64>) -> bool {
    matches!(id, None | Some(0))
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
