//! End-to-end lifecycle of a single team, one dependent step after another.

use tracing::info;

use crate::cli::WalkthroughArgs;
use crate::client::GitHubClient;
use crate::commands::{members, teams};
use crate::error::Result;
use crate::output;
use crate::transport::Transport;
use crate::types::{Privacy, Team};

pub async fn run<T: Transport>(client: &GitHubClient<T>, args: WalkthroughArgs) -> Result<()> {
    let mut team = Team {
        description: Some(args.description),
        privacy: Some(Privacy::Secret),
        ..Team::new(args.name)
    };

    output::print_step(&format!("Creating team {} under {}", team.name, client.org()));
    teams::create(client, team.clone()).await?;

    team.privacy = Some(Privacy::Closed);
    team.description = Some("Updated the description".to_string());
    output::print_step(&format!("Updating team {}", team.name));
    teams::update(client, team.clone()).await?;

    output::print_step(&format!("Team details for {}", team.name));
    teams::show(client, &team.name).await?;

    if !args.add.is_empty() {
        output::print_step(&format!("Adding {} to {}", args.add.join(", "), team.name));
        members::add(client, &team.name, &args.add, None).await?;

        output::print_step(&format!("Members of {}", team.name));
        members::list(client, &team.name).await?;
    }

    if !args.remove.is_empty() {
        output::print_step(&format!("Removing {} from {}", args.remove.join(", "), team.name));
        members::remove(client, &team.name, &args.remove).await?;

        output::print_step(&format!("Members of {}", team.name));
        members::list(client, &team.name).await?;
    }

    output::print_step(&format!("Deleting team {}", team.name));
    teams::delete(client, &team.name).await?;

    info!(team = %team.name, "walkthrough finished");
    Ok(())
}
