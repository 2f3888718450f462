//! Moodboard CLI - Post and read messages from the terminal

mod api;
mod config;
mod display;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::Input;

use api::MoodboardClient;
use config::Config;

#[derive(Parser)]
#[command(name = "moodboard")]
#[command(about = "Moodboard CLI - Post and read messages", long_about = None)]
#[command(version)]
struct Cli {
    /// Log HTTP requests
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Post a message
    Post {
        /// Message content (will prompt if not provided)
        content: Option<String>,
        /// Nickname (defaults to the configured one)
        #[arg(short, long)]
        nickname: Option<String>,
    },

    /// List all messages, oldest first
    List,

    /// Check that the server is up
    Health,

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set the server URL
    SetUrl {
        url: String,
    },
    /// Set the default nickname
    SetNickname {
        nickname: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new("moodboard=debug"))
            .init();
    }

    match cli.command {
        Commands::Post { content, nickname } => cmd_post(content, nickname).await,
        Commands::List => cmd_list().await,
        Commands::Health => cmd_health().await,
        Commands::Config { action } => cmd_config(action.unwrap_or(ConfigAction::Show)),
    }
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_post(content: Option<String>, nickname: Option<String>) -> Result<()> {
    let config = Config::load()?;

    let nickname = match nickname.or_else(|| config.nickname.clone()) {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Nickname")
            .interact_text()
            .context("Failed to read nickname")?,
    };

    let content = match content {
        Some(c) => c,
        None => Input::<String>::new()
            .with_prompt("Message")
            .interact_text()
            .context("Failed to read message")?,
    };

    if nickname.is_empty() || content.is_empty() {
        bail!("Nickname and message must not be empty");
    }

    let client = MoodboardClient::new(&config.server_url());
    let message = client.post_message(&nickname, &content).await?;

    println!("{} Message posted", "✓".green());
    display::print_message(&message);

    Ok(())
}

async fn cmd_list() -> Result<()> {
    let config = Config::load()?;
    let client = MoodboardClient::new(&config.server_url());

    let messages = client.list_messages().await?;

    if messages.is_empty() {
        println!("No messages yet.");
        println!("\n{}", "Post the first one:".dimmed());
        println!("  moodboard post \"Hello!\" --nickname <NAME>");
        return Ok(());
    }

    for message in &messages {
        display::print_message(message);
        println!();
    }
    println!("{}", format!("{} message(s)", messages.len()).dimmed());

    Ok(())
}

async fn cmd_health() -> Result<()> {
    let config = Config::load()?;
    let url = config.server_url();
    let client = MoodboardClient::new(&url);

    print!("Checking {}... ", url);
    match client.health().await {
        Ok(true) => {
            println!("{}", "OK".green());
            Ok(())
        }
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach Moodboard API at {}", url);
        }
    }
}

fn cmd_config(action: ConfigAction) -> Result<()> {
    let mut config = Config::load()?;

    match action {
        ConfigAction::Show => {
            println!("{}", "Configuration:".bold());
            println!("  Path: {:?}", Config::config_path()?);
            println!("  Base URL: {}", config.base_url);
            if std::env::var(config::URL_ENV).is_ok() {
                println!(
                    "  {} {} = {}",
                    "Override:".yellow(),
                    config::URL_ENV,
                    config.server_url()
                );
            }
            println!(
                "  Nickname: {}",
                config.nickname.as_deref().unwrap_or("None").cyan()
            );
        }
        ConfigAction::SetUrl { url } => {
            config.set_base_url(url);
            config.save()?;
            println!("{} Base URL set to {}", "✓".green(), config.base_url);
        }
        ConfigAction::SetNickname { nickname } => {
            config.set_nickname(nickname);
            config.save()?;
            match &config.nickname {
                Some(n) => println!("{} Default nickname set to '{}'", "✓".green(), n),
                None => println!("{} Default nickname cleared", "✓".green()),
            }
        }
    }

    Ok(())
}
