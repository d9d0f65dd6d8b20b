//! Team and membership operations.
//!
//! Every call is one request with a fixed method, path and expected status.
//! Successful responses are decoded into untyped JSON for display only.

use reqwest::{Method, StatusCode};
use serde_json::Value;
use tracing::debug;

use crate::client::{decode, encode, expect_status, GitHubClient};
use crate::error::{Result, TeamAction};
use crate::transport::Transport;
use crate::types::{MembershipRole, Role, Team};

impl<T: Transport> GitHubClient<T> {
    /// `POST /orgs/{org}/teams`, expecting 201.
    pub async fn create_team(&self, team: &Team) -> Result<Value> {
        let url = self.org_url(&["teams"]);
        let response = self.send(Method::POST, url, Some(encode(team)?)).await?;

        expect_status(&response, StatusCode::CREATED, || TeamAction::Create {
            team: team.name.clone(),
        })?;

        let created: Value = decode(&response)?;
        debug!(response = %created, "created team");
        Ok(created)
    }

    /// `GET /orgs/{org}/teams/{team}`, expecting 200.
    pub async fn get_team(&self, team: &str) -> Result<Value> {
        let url = self.org_url(&["teams", team]);
        let response = self.send(Method::GET, url, None).await?;

        expect_status(&response, StatusCode::OK, || TeamAction::Get {
            team: team.to_string(),
        })?;

        let details: Value = decode(&response)?;
        debug!(response = %details, "fetched team");
        Ok(details)
    }

    /// `PATCH /orgs/{org}/teams/{team}`, expecting 200.
    pub async fn update_team(&self, team: &Team) -> Result<Value> {
        let url = self.org_url(&["teams", team.name.as_str()]);
        let response = self.send(Method::PATCH, url, Some(encode(team)?)).await?;

        expect_status(&response, StatusCode::OK, || TeamAction::Update {
            team: team.name.clone(),
        })?;

        let updated: Value = decode(&response)?;
        debug!(response = %updated, "updated team");
        Ok(updated)
    }

    /// `DELETE /orgs/{org}/teams/{team}`, expecting 204. The body is ignored.
    pub async fn delete_team(&self, team: &str) -> Result<()> {
        let url = self.org_url(&["teams", team]);
        let response = self.send(Method::DELETE, url, None).await?;

        expect_status(&response, StatusCode::NO_CONTENT, || TeamAction::Delete {
            team: team.to_string(),
        })
    }

    /// `GET /orgs/{org}/teams/{team}/members`, expecting 200 and a JSON array.
    pub async fn list_members(&self, team: &str) -> Result<Vec<Value>> {
        let url = self.org_url(&["teams", team, "members"]);
        let response = self.send(Method::GET, url, None).await?;

        expect_status(&response, StatusCode::OK, || TeamAction::ListMembers {
            team: team.to_string(),
        })?;

        let members: Vec<Value> = decode(&response)?;
        debug!(count = members.len(), "fetched team members");
        Ok(members)
    }

    /// `PUT /orgs/{org}/teams/{team}/memberships/{user}`, expecting 200.
    ///
    /// `None` adds the user with the default `member` role.
    pub async fn add_member(&self, team: &str, user: &str, role: Option<Role>) -> Result<Value> {
        let url = self.org_url(&["teams", team, "memberships", user]);
        let body = encode(&MembershipRole::from(role))?;
        let response = self.send(Method::PUT, url, Some(body)).await?;

        expect_status(&response, StatusCode::OK, || TeamAction::AddMember {
            team: team.to_string(),
            user: user.to_string(),
        })?;

        let membership: Value = decode(&response)?;
        debug!(response = %membership, "added member");
        Ok(membership)
    }

    /// `DELETE /orgs/{org}/teams/{team}/memberships/{user}`, expecting 204.
    pub async fn remove_member(&self, team: &str, user: &str) -> Result<()> {
        let url = self.org_url(&["teams", team, "memberships", user]);
        let response = self.send(Method::DELETE, url, None).await?;

        expect_status(&response, StatusCode::NO_CONTENT, || TeamAction::RemoveMember {
            team: team.to_string(),
            user: user.to_string(),
        })
    }
}
