use std::fmt;
use std::path::PathBuf;

use reqwest::{Method, StatusCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TeamsError {
    #[error("Error occurred while creating http request {0}")]
    BuildRequest(String),

    #[error("Error occurred while calling github API: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{action}")]
    UnexpectedStatus { action: TeamAction, status: StatusCode },

    #[error("Error in reading response from API response {0}")]
    ReadBody(#[source] reqwest::Error),

    #[error("Error in unmarshalling response from API response {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Error in marshalling the request payload")]
    Encode(#[source] serde_json::Error),

    #[error("no response set")]
    NoResponseSet { method: Method, url: String },

    #[error("{hops} consecutive redirects")]
    TooManyRedirects { hops: usize },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error(
        "No API token found. Set AUTH_TOKEN or GITHUB_TOKEN, or add token to the gh-teams config.toml"
    )]
    MissingToken,
}

impl TeamsError {
    /// Status code returned by the API, if the failure was a status mismatch.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TeamsError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The team operation that received an unexpected status code.
///
/// Its `Display` output is the user-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    Create { team: String },
    Get { team: String },
    Update { team: String },
    Delete { team: String },
    ListMembers { team: String },
    AddMember { team: String, user: String },
    RemoveMember { team: String, user: String },
}

impl fmt::Display for TeamAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TeamAction::Create { team } => write!(f, "Error in creating a new team : {team}"),
            TeamAction::Get { team } => write!(f, "Error in getting team deatils : {team}"),
            TeamAction::Update { team } => write!(f, "Error in updating team : {team}"),
            TeamAction::Delete { team } => write!(f, "Error in deleting team : {team}"),
            TeamAction::ListMembers { team } => {
                write!(f, "Error in getting members of a team : {team}")
            }
            TeamAction::AddMember { team, user } => {
                write!(f, "Error in adding {user} to team {team}")
            }
            TeamAction::RemoveMember { team, user } => {
                write!(f, "Error in deleting {user} from team {team}")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, TeamsError>;
