use serde_json::Value;

use crate::client::GitHubClient;
use crate::error::Result;
use crate::output;
use crate::transport::Transport;
use crate::types::{Privacy, Team};

pub async fn create<T: Transport>(client: &GitHubClient<T>, team: Team) -> Result<()> {
    let created = client.create_team(&team).await?;
    output::print_item(&created, print_team);
    output::print_message(&format!("Created team {} in {}", team.name, client.org()));
    Ok(())
}

pub async fn show<T: Transport>(client: &GitHubClient<T>, name: &str) -> Result<()> {
    let details = client.get_team(name).await?;
    output::print_item(&details, print_team);
    Ok(())
}

pub async fn update<T: Transport>(client: &GitHubClient<T>, team: Team) -> Result<()> {
    let updated = client.update_team(&team).await?;
    output::print_item(&updated, print_team);
    output::print_message(&format!("Updated team {}", team.name));
    Ok(())
}

pub async fn delete<T: Transport>(client: &GitHubClient<T>, name: &str) -> Result<()> {
    client.delete_team(name).await?;
    output::print_message(&format!("Deleted team {name} from {}", client.org()));
    Ok(())
}

/// Key/value summary of a team as returned by the API.
pub(crate) fn print_team(team: &Value) {
    let field = |key: &str| match &team[key] {
        Value::Null => "-".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    println!("{}", field("name"));
    println!();
    if let Some(desc) = team["description"].as_str().filter(|d| !d.is_empty()) {
        println!("{desc}");
        println!();
    }
    println!("Slug:       {}", field("slug"));
    println!("ID:         {}", field("id"));
    let privacy = serde_json::from_value::<Privacy>(team["privacy"].clone())
        .map(Privacy::colored)
        .unwrap_or_else(|_| field("privacy"));
    println!("Privacy:    {privacy}");
    println!("Permission: {}", field("permission"));
    println!("Members:    {}", field("members_count"));
    println!("Repos:      {}", field("repos_count"));
    if let Some(parent) = team["parent"]["slug"].as_str() {
        println!("Parent:     {parent}");
    }
    println!("URL:        {}", field("html_url"));
}
