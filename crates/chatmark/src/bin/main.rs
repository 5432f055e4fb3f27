//! Chatmark CLI

use anyhow::Context;
use chatmark::{ConfigOverlay, ConfigProfile, OutputFormat, ParserConfig, read_message, render};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Chatmark - parse a chat message into a structured document
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Message file to parse (reads stdin when omitted or `-`)
    file: Option<PathBuf>,

    /// Configuration profile to use (development, production, minimal)
    #[arg(short, long, env = "CHATMARK_PROFILE", default_value = "development")]
    profile: String,

    /// YAML configuration file layered over the profile
    #[arg(short, long, env = "CHATMARK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format (json, human, text)
    #[arg(short, long)]
    format: Option<String>,

    /// Emit single-line JSON
    #[arg(long, action = clap::ArgAction::SetTrue)]
    compact: bool,
}

/// Resolve configuration: profile, then config file, then command-line flags.
fn load_config(args: &Args) -> anyhow::Result<ParserConfig> {
    let profile: ConfigProfile = args.profile.parse()?;
    let mut config = profile.create_config();

    if let Some(path) = &args.config {
        let overlay = ConfigOverlay::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?;
        config = config.merge(overlay);
    }

    if let Some(format) = &args.format {
        config.output_format = format.parse::<OutputFormat>()?;
    }
    if args.compact {
        config.pretty_json = false;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let args = Args::parse();
    let config = load_config(&args)?;

    // Logs go to stderr so stdout carries only the document; RUST_LOG overrides the config level
    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .parse_default_env()
        .try_init()
        .context("Failed to initialize logger")?;

    log::info!("Chatmark v{}", env!("CARGO_PKG_VERSION"));
    log::debug!(
        "Profile: {} | Format: {} | Max input: {} bytes",
        config.profile,
        config.output_format,
        config.max_input_bytes
    );

    let message = read_message(args.file.as_deref(), std::io::stdin(), &config)
        .context("Failed to read message")?;
    let output = render(&message, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if config.output_format == OutputFormat::Json {
        writeln!(stdout)?;
    }
    stdout.flush()?;

    Ok(())
}
