//! Mnemonic Verses CLI
//!
//! Look up a Bible verse, have a completion model rewrite it into an image
//! prompt, and generate images until you like one.

mod config;
mod console;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use dialoguer::Password;
use mnemonic::{ConfigError, Services, Session};
use tracing_subscriber::EnvFilter;

use config::{Config, Overrides};
use console::TerminalConsole;

#[derive(Parser)]
#[command(name = "mnemonic")]
#[command(about = "Mnemonic Verses - turn a Bible verse into an image", long_about = None)]
#[command(version)]
struct Cli {
    /// Show debug logs on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a verse-to-image session
    Run(RunArgs),

    /// Store the OpenAI API key
    Login {
        /// API key (will prompt if not provided)
        #[arg(short, long)]
        key: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[derive(Args)]
struct RunArgs {
    /// Book name, e.g. "Matthew" or "1 John" (prompted if omitted)
    #[arg(short, long)]
    book: Option<String>,
    /// Chapter number (prompted if omitted)
    #[arg(short, long)]
    chapter: Option<String>,
    /// Verse number (prompted if omitted)
    #[arg(long)]
    verse: Option<String>,
    /// Bible translation id (e.g. kjv, web, bbe)
    #[arg(short, long)]
    translation: Option<String>,
    /// Request timeout in seconds, 0 for none
    #[arg(long)]
    timeout: Option<u64>,
    /// Stop when the verse lookup fails instead of continuing with placeholder text
    #[arg(long)]
    abort_on_lookup_failure: bool,
    /// OpenAI API key (overrides the stored key)
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => cmd_run(args).await,
        Commands::Login { key } => cmd_login(key),
        Commands::Config => cmd_config(),
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "mnemonic=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// ============================================
// Command Implementations
// ============================================

async fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::load()?;
    let overrides = Overrides {
        api_key: args.api_key,
        translation: args.translation,
        request_timeout_secs: args.timeout,
        abort_on_lookup_failure: args.abort_on_lookup_failure,
    };

    let settings = config.to_settings(&overrides);
    let services = match Services::from_settings(&settings) {
        Ok(services) => services,
        Err(ConfigError::MissingApiKey) => {
            bail!("No OpenAI API key. Run 'mnemonic login' or set OPENAI_API_KEY.");
        }
        Err(e) => return Err(e.into()),
    };

    let mut session = Session::new(services, TerminalConsole::new())
        .with_lookup_failure_policy(config.lookup_failure_policy(&overrides));

    let reference = session
        .complete_reference(args.book, args.chapter, args.verse)
        .context("Failed to read verse reference")?;

    let summary = session.run(reference).await?;

    tracing::debug!(
        image = %summary.image.url,
        rewrites = summary.rewrites,
        generations = summary.generations,
        "Session finished"
    );

    Ok(())
}

fn cmd_login(key: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let api_key = match key {
        Some(k) => k,
        None => Password::new()
            .with_prompt("OpenAI API Key")
            .interact()
            .context("Failed to read API key")?,
    };

    if api_key.trim().is_empty() {
        bail!("API key cannot be empty");
    }

    config.set_api_key(api_key);
    config.save()?;

    println!("{} API key saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    let config = Config::load()?;
    let env_key = std::env::var("OPENAI_API_KEY").is_ok();

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!(
        "  API Key: {}",
        if config.api_key.is_some() {
            "Set".green()
        } else if env_key {
            "From OPENAI_API_KEY".green()
        } else {
            "Not set".red()
        }
    );
    println!("  Bible API: {}", config.bible_api_base_url);
    println!("  Translation: {}", config.translation.cyan());
    println!(
        "  Completion: {} (max_tokens {}, temperature {})",
        config.completion_model.cyan(),
        config.completion_max_tokens,
        config.completion_temperature
    );
    println!(
        "  Image: {} {} via {}",
        config.image_model.cyan(),
        config.image_size,
        config.image_endpoint
    );
    println!(
        "  Timeout: {}",
        match config.request_timeout_secs {
            0 => "none".to_string(),
            secs => format!("{}s", secs),
        }
    );
    if config.accept_invalid_certs {
        println!("  {}", "TLS verification disabled".red());
    }
    println!(
        "  Lookup failures: {}",
        if config.use_sentinel {
            "continue with placeholder"
        } else {
            "abort"
        }
    );

    Ok(())
}
