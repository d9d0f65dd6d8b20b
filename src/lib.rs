//! Client for managing GitHub organization teams and their memberships.

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod teams;
pub mod transport;
pub mod types;

pub use client::GitHubClient;
pub use error::{Result, TeamAction, TeamsError};
pub use transport::{ApiRequest, ApiResponse, HttpTransport, MockTransport, Transport};
pub use types::{MembershipRole, Privacy, Role, Team};
