use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use crate::types::{Privacy, Role, Team};

#[derive(Parser)]
#[command(name = "gh-teams")]
#[command(about = "Manage GitHub teams and team memberships", version)]
#[command(after_help = "EXAMPLES:
    gh-teams team create platform -d \"Platform team\" --privacy secret
    gh-teams team show platform
    gh-teams member add platform alice bob --role maintainer
    gh-teams member list platform
    gh-teams team delete platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Organization (defaults to config, then HybriStratus)
    #[arg(long, global = true)]
    pub org: Option<String>,

    /// Output as JSON for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress success messages
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Show debug logs and detailed error information
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create, inspect, update and delete teams
    #[command(after_help = "EXAMPLES:
    gh-teams team create platform --privacy secret
    gh-teams team update platform --privacy closed -d \"Updated\"
    gh-teams team delete platform")]
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// List, add and remove team members
    #[command(after_help = "EXAMPLES:
    gh-teams member list platform
    gh-teams member add platform alice bob
    gh-teams member remove platform bob")]
    Member {
        #[command(subcommand)]
        action: MemberCommands,
    },
    /// Run a full team lifecycle: create, update, show, add/list/remove members, delete
    #[command(after_help = "EXAMPLES:
    gh-teams walkthrough iac-platform-test-team --add alice --add bob --remove bob")]
    Walkthrough(WalkthroughArgs),
    /// Generate shell completions
    #[command(after_help = "EXAMPLES:
    gh-teams completions bash > ~/.bash_completion.d/gh-teams
    gh-teams completions zsh > ~/.zfunc/_gh-teams")]
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
    /// Initialize configuration file interactively
    Init,
}

#[derive(Subcommand)]
pub enum TeamCommands {
    /// Create a new team
    Create(TeamArgs),
    /// Show team details
    Show {
        /// Team name (slug)
        name: String,
    },
    /// Update an existing team
    Update(TeamArgs),
    /// Delete a team
    Delete {
        /// Team name (slug)
        name: String,
    },
}

#[derive(Subcommand)]
pub enum MemberCommands {
    /// List members of a team
    List {
        /// Team name (slug)
        team: String,
    },
    /// Add users to a team, stopping at the first failure
    Add {
        /// Team name (slug)
        team: String,

        /// GitHub logins to add
        #[arg(required = true)]
        users: Vec<String>,

        /// Role for the new members (defaults to config, then member)
        #[arg(long, value_enum)]
        role: Option<Role>,
    },
    /// Remove users from a team, stopping at the first failure
    Remove {
        /// Team name (slug)
        team: String,

        /// GitHub logins to remove
        #[arg(required = true)]
        users: Vec<String>,
    },
}

#[derive(Args)]
pub struct TeamArgs {
    /// Team name (slug)
    pub name: String,

    /// Team description
    #[arg(long, short)]
    pub description: Option<String>,

    /// Team privacy
    #[arg(long, value_enum)]
    pub privacy: Option<Privacy>,

    /// Login of a team maintainer (repeatable)
    #[arg(long = "maintainer")]
    pub maintainers: Vec<String>,

    /// Full name of a repository to add the team to, e.g. org/repo (repeatable)
    #[arg(long = "repo")]
    pub repos: Vec<String>,

    /// ID of the parent team (0 for none)
    #[arg(long)]
    pub parent_team_id: Option<u64>,
}

impl From<TeamArgs> for Team {
    fn from(args: TeamArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            maintainers: args.maintainers,
            repos: args.repos,
            privacy: args.privacy,
            parent_team_id: args.parent_team_id,
        }
    }
}

#[derive(Args)]
pub struct WalkthroughArgs {
    /// Name of the team to create and later delete
    pub name: String,

    /// Description used when creating the team
    #[arg(long, short, default_value = "Created a new test team")]
    pub description: String,

    /// User to add after the team is created (repeatable)
    #[arg(long = "add")]
    pub add: Vec<String>,

    /// User to remove after the additions (repeatable)
    #[arg(long = "remove")]
    pub remove: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_team_create_args() {
        let cli = Cli::try_parse_from([
            "gh-teams",
            "team",
            "create",
            "platform",
            "--privacy",
            "secret",
            "--maintainer",
            "alice",
            "--maintainer",
            "bob",
            "--org",
            "acme",
        ])
        .unwrap();

        assert_eq!(cli.org.as_deref(), Some("acme"));
        let Commands::Team {
            action: TeamCommands::Create(args),
        } = cli.command
        else {
            panic!("expected team create");
        };
        let team = Team::from(args);
        assert_eq!(team.name, "platform");
        assert_eq!(team.privacy, Some(Privacy::Secret));
        assert_eq!(team.maintainers, vec!["alice", "bob"]);
        assert_eq!(team.description, None);
    }

    #[test]
    fn test_member_add_requires_users() {
        assert!(Cli::try_parse_from(["gh-teams", "member", "add", "platform"]).is_err());

        let cli = Cli::try_parse_from([
            "gh-teams", "member", "add", "platform", "alice", "bob", "--role", "maintainer",
        ])
        .unwrap();
        let Commands::Member {
            action: MemberCommands::Add { team, users, role },
        } = cli.command
        else {
            panic!("expected member add");
        };
        assert_eq!(team, "platform");
        assert_eq!(users, vec!["alice", "bob"]);
        assert_eq!(role, Some(Role::Maintainer));
    }
}
