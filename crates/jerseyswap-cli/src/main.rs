use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use jerseyswap_application::{SessionService, SwapWorkflow};
use jerseyswap_core::config::AppConfig;
use jerseyswap_core::user::AuthProvider;
use jerseyswap_infrastructure::{ConfigService, FileStore, JerseySwapPaths, MockSwapStudio};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "jerseyswap")]
#[command(about = "JerseySwap CLI - put any athlete in any jersey", long_about = None)]
struct Cli {
    /// Config file [default: <config_dir>/jerseyswap/config.toml]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Profile store directory, overrides `[storage] dir`
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a profile and sign in
    Signup(commands::account::SignupArgs),
    /// Sign in with a handle or email
    Signin {
        identifier: String,
        #[arg(long)]
        password: String,
    },
    /// Sign in as a guest through google or discord
    Sso { provider: AuthProvider },
    /// Sign out of the active profile
    Signout,
    /// Show the active profile
    Whoami,
    /// List profiles stored on this device
    Profiles,
    /// Switch to a stored profile by id or handle
    Select {
        profile: String,
        #[arg(long)]
        password: Option<String>,
    },
    /// Edit the active profile
    EditProfile(commands::account::EditProfileArgs),
    /// List leagues
    Leagues,
    /// List the teams of a league
    Teams { league: String },
    /// Swap a photo into a team jersey
    Swap(commands::swap::SwapArgs),
    /// Show or manage the vault of the active profile
    Vault {
        #[command(subcommand)]
        action: Option<VaultAction>,
    },
}

#[derive(Subcommand)]
enum VaultAction {
    /// List saved swaps with analytics
    List,
    /// Delete a saved swap
    Remove { id: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let Cli {
        config,
        store_dir,
        command,
    } = Cli::parse();

    let config_service = match config {
        Some(path) => ConfigService::new(path),
        None => ConfigService::from_default_location()?,
    };
    let config = config_service
        .load()
        .await
        .with_context(|| format!("Failed to load {}", config_service.path().display()))?;
    init_tracing(&config);

    let mut flow = open_workflow(store_dir, &config).await?;
    match command {
        Commands::Signup(args) => commands::account::signup(&mut flow, args).await?,
        Commands::Signin {
            identifier,
            password,
        } => commands::account::signin(&mut flow, &identifier, &password).await?,
        Commands::Sso { provider } => commands::account::sso(&mut flow, provider).await?,
        Commands::Signout => commands::account::signout(&mut flow).await?,
        Commands::Whoami => commands::account::whoami(&flow),
        Commands::Profiles => commands::account::profiles(&flow),
        Commands::Select { profile, password } => {
            commands::account::select(&mut flow, &profile, password.as_deref()).await?
        }
        Commands::EditProfile(args) => commands::account::edit_profile(&mut flow, args).await?,
        Commands::Leagues => commands::catalog::leagues(),
        Commands::Teams { league } => commands::catalog::teams(&league)?,
        Commands::Swap(args) => commands::swap::run(&mut flow, args).await?,
        Commands::Vault { action } => match action.unwrap_or(VaultAction::List) {
            VaultAction::List => commands::vault::list(&flow)?,
            VaultAction::Remove { id } => commands::vault::remove(&mut flow, &id).await?,
        },
    }

    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn open_workflow(store_dir: Option<PathBuf>, config: &AppConfig) -> Result<SwapWorkflow> {
    let dir = match store_dir {
        Some(dir) => dir,
        None => JerseySwapPaths::store_dir(config)?,
    };
    tracing::debug!("Using profile store at {}", dir.display());

    let session = SessionService::new(Arc::new(FileStore::new(dir)), config.session.clone());
    let studio = Arc::new(MockSwapStudio::new(config.studio.clone()));
    let mut flow = SwapWorkflow::new(session, studio);
    flow.bootstrap().await;
    Ok(flow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_swap() {
        let cli = Cli::try_parse_from([
            "jerseyswap",
            "--store-dir",
            "/tmp/js",
            "swap",
            "photo.png",
            "--league",
            "nfl",
            "--team",
            "kc",
            "--4k",
        ])
        .unwrap();
        assert_eq!(cli.store_dir, Some(PathBuf::from("/tmp/js")));
        match cli.command {
            Commands::Swap(args) => {
                assert_eq!(args.team, "kc");
                assert_eq!(args.number, "23");
                assert!(args.upscale);
                assert!(!args.remove_background);
            }
            _ => panic!("expected swap"),
        }
    }

    #[test]
    fn test_parse_signup_role() {
        let cli = Cli::try_parse_from([
            "jerseyswap",
            "signup",
            "--name",
            "Alex Kim",
            "--email",
            "alex@example.com",
            "--handle",
            "alexk",
            "--password",
            "secret1",
            "--role",
            "scout",
        ])
        .unwrap();
        match cli.command {
            Commands::Signup(args) => {
                assert_eq!(args.role, Some(jerseyswap_core::user::Role::Scout));
            }
            _ => panic!("expected signup"),
        }
    }

    #[test]
    fn test_parse_sso_provider() {
        let cli = Cli::try_parse_from(["jerseyswap", "sso", "Discord"]).unwrap();
        match cli.command {
            Commands::Sso { provider } => assert_eq!(provider, AuthProvider::Discord),
            _ => panic!("expected sso"),
        }
        assert!(Cli::try_parse_from(["jerseyswap", "sso", "myspace"]).is_err());
    }
}
