use serde_json::Value;
use tabled::Tabled;

use crate::client::GitHubClient;
use crate::error::Result;
use crate::output::{self, truncate};
use crate::transport::Transport;
use crate::types::Role;

#[derive(Tabled)]
struct MemberRow {
    #[tabled(rename = "Login")]
    login: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Profile")]
    profile: String,
}

impl MemberRow {
    fn from_member(member: &Value) -> Self {
        let text = |key: &str| member[key].as_str().unwrap_or("-").to_string();
        Self {
            login: text("login"),
            id: member["id"]
                .as_u64()
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
            kind: text("type"),
            profile: truncate(&text("html_url"), 50),
        }
    }
}

pub async fn list<T: Transport>(client: &GitHubClient<T>, team: &str) -> Result<()> {
    let members = client.list_members(team).await?;
    output::print_table(&members, MemberRow::from_member);
    Ok(())
}

/// Adds users in order and stops at the first failure; later users are not attempted.
pub async fn add<T: Transport>(
    client: &GitHubClient<T>,
    team: &str,
    users: &[String],
    role: Option<Role>,
) -> Result<()> {
    for user in users {
        client.add_member(team, user, role).await?;
        output::print_message(&format!(
            "Added {user} to {team} as {}",
            role.unwrap_or_default()
        ));
    }
    Ok(())
}

/// Removes users in order and stops at the first failure.
pub async fn remove<T: Transport>(
    client: &GitHubClient<T>,
    team: &str,
    users: &[String],
) -> Result<()> {
    for user in users {
        client.remove_member(team, user).await?;
        output::print_message(&format!("Removed {user} from {team}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::{ApiResponse, MockTransport};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    const MEMBERSHIPS: &str = "https://api.github.com/orgs/HybriStratus/teams/core/memberships";

    #[tokio::test]
    async fn test_add_stops_at_first_failure() {
        let mock = MockTransport::new()
            .with_response(
                Method::PUT,
                format!("{MEMBERSHIPS}/alice"),
                ApiResponse::new(StatusCode::OK).with_body(r#"{"state":"active"}"#),
            )
            .with_response(
                Method::PUT,
                format!("{MEMBERSHIPS}/bob"),
                ApiResponse::new(StatusCode::NOT_FOUND),
            )
            .with_response(
                Method::PUT,
                format!("{MEMBERSHIPS}/carol"),
                ApiResponse::new(StatusCode::OK).with_body(r#"{"state":"active"}"#),
            );
        let client = GitHubClient::new(&mock, "token", "HybriStratus");
        let users = vec!["alice".to_string(), "bob".to_string(), "carol".to_string()];

        let err = add(&client, "core", &users, None).await.unwrap_err();

        assert_eq!(err.to_string(), "Error in adding bob to team core");
        assert_eq!(mock.requests().len(), 2);
        assert_eq!(mock.pending(), 1);
    }

    #[tokio::test]
    async fn test_remove_all() {
        let mock = MockTransport::new()
            .with_response(
                Method::DELETE,
                format!("{MEMBERSHIPS}/alice"),
                ApiResponse::new(StatusCode::NO_CONTENT),
            )
            .with_response(
                Method::DELETE,
                format!("{MEMBERSHIPS}/bob"),
                ApiResponse::new(StatusCode::NO_CONTENT),
            );
        let client = GitHubClient::new(&mock, "token", "HybriStratus");
        let users = vec!["alice".to_string(), "bob".to_string()];

        remove(&client, "core", &users).await.unwrap();
        assert_eq!(mock.pending(), 0);
    }

    #[tokio::test]
    async fn test_list_renders_members() {
        let mock = MockTransport::new().with_response(
            Method::GET,
            "https://api.github.com/orgs/HybriStratus/teams/core/members",
            ApiResponse::new(StatusCode::OK)
                .with_body(r#"[{"login":"alice","id":1,"type":"User"}]"#),
        );
        let client = GitHubClient::new(&mock, "token", "HybriStratus");

        list(&client, "core").await.unwrap();
        assert_eq!(mock.pending(), 0);
    }

    #[test]
    fn test_member_row() {
        let row = MemberRow::from_member(&json!({
            "login": "test_user1",
            "id": 90353216,
            "type": "User",
            "html_url": "https://github.com/test_user1"
        }));
        assert_eq!(row.login, "test_user1");
        assert_eq!(row.id, "90353216");
        assert_eq!(row.kind, "User");

        let sparse = MemberRow::from_member(&json!({ "login": "ghost" }));
        assert_eq!(sparse.id, "-");
        assert_eq!(sparse.profile, "-");
    }
}
