use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Role a user holds within a team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Maintainer,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Member => write!(f, "member"),
            Role::Maintainer => write!(f, "maintainer"),
        }
    }
}

/// Body of an add-membership request.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MembershipRole {
    pub role: Role,
}

impl From<Option<Role>> for MembershipRole {
    fn from(role: Option<Role>) -> Self {
        Self {
            role: role.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_defaults_to_member() {
        let body = serde_json::to_string(&MembershipRole::from(None)).unwrap();
        assert_eq!(body, r#"{"role":"member"}"#);
    }

    #[test]
    fn test_explicit_role() {
        let body = serde_json::to_string(&MembershipRole::from(Some(Role::Maintainer))).unwrap();
        assert_eq!(body, r#"{"role":"maintainer"}"#);
    }
}
