use std::io::{self, Write};

use crate::config::{Config, DEFAULT_ORG};
use crate::error::{Result, TeamsError};

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = prompt(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;
        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("gh-teams Configuration");
    println!("======================\n");

    let token = prompt(
        "Enter a GitHub token with admin:org scope (https://github.com/settings/tokens): ",
    )?;
    if token.is_empty() {
        return Err(TeamsError::MissingToken);
    }

    let org = prompt(&format!("Enter organization [{DEFAULT_ORG}]: "))?;
    let api_url = prompt("Enter API URL for GitHub Enterprise [optional]: ")?;

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| TeamsError::ConfigRead {
            path: config_path.clone(),
            source: e,
        })?;
    }

    let mut config_content = format!("token = {}\n", toml_string(&token));
    if !org.is_empty() {
        config_content.push_str(&format!("org = {}\n", toml_string(&org)));
    }
    if !api_url.is_empty() {
        config_content.push_str(&format!("api_url = {}\n", toml_string(&api_url)));
    }

    std::fs::write(&config_path, config_content).map_err(|e| TeamsError::ConfigRead {
        path: config_path.clone(),
        source: e,
    })?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'gh-teams' commands!");

    Ok(())
}

fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
