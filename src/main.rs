use std::error::Error;
use std::io;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing_subscriber::{fmt, EnvFilter};

use gh_teams::cli::{Cli, Commands, MemberCommands, TeamCommands};
use gh_teams::commands;
use gh_teams::config::Config;
use gh_teams::output;
use gh_teams::{GitHubClient, HttpTransport, Result};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_tracing(verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");

        if verbose {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("Caused by: {cause}");
                source = cause.source();
            }
        }

        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "gh_teams=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    output::set_json_output(cli.json);
    output::set_quiet(cli.quiet);

    match cli.command {
        // Commands that don't require config/client
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "gh-teams", &mut io::stdout());
        }
        Commands::Init => {
            commands::init::run().await?;
        }
        // Commands that require config and client
        command => {
            let config = Config::load()?;
            let client = GitHubClient::new(
                HttpTransport::new()?,
                config.token()?,
                config.resolve_org(cli.org.as_deref()),
            )
            .with_base_url(config.api_url())?;

            match command {
                Commands::Team { action } => match action {
                    TeamCommands::Create(args) => {
                        commands::teams::create(&client, args.into()).await?;
                    }
                    TeamCommands::Show { name } => {
                        commands::teams::show(&client, &name).await?;
                    }
                    TeamCommands::Update(args) => {
                        commands::teams::update(&client, args.into()).await?;
                    }
                    TeamCommands::Delete { name } => {
                        commands::teams::delete(&client, &name).await?;
                    }
                },
                Commands::Member { action } => match action {
                    MemberCommands::List { team } => {
                        commands::members::list(&client, &team).await?;
                    }
                    MemberCommands::Add { team, users, role } => {
                        let role = config.resolve_role(role);
                        commands::members::add(&client, &team, &users, role).await?;
                    }
                    MemberCommands::Remove { team, users } => {
                        commands::members::remove(&client, &team, &users).await?;
                    }
                },
                Commands::Walkthrough(args) => {
                    commands::walkthrough::run(&client, args).await?;
                }
                Commands::Completions { .. } | Commands::Init => {
                    // Already handled above
                }
            }
        }
    }

    Ok(())
}
