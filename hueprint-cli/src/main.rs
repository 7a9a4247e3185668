//! hueprint - deterministic avatar identities from the command line.
//!
//! Commands:
//! - `hueprint allocate [HUE...]`: pick the next hue
//! - `hueprint colors <HUE>`: show derived colors
//! - `hueprint initials --name N --email E`: derive initials
//! - `hueprint pattern <SEED> --hue H`: render an SVG pattern
//! - `hueprint match <INPUT> --roster FILE`: resolve an assignee
//! - `hueprint identity --id ID`: derive a new user's stored fields
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error
//! - 2: No assignee matched

use clap::Parser;
use tracing_subscriber::EnvFilter;

use hueprint_cli::{commands, Cli, CliError, HueprintConfig, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("hueprint=debug,hueprint_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    let exit_code = match run(cli) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = HueprintConfig::load()?;
    let format = cli.format.unwrap_or(config.format);
    commands::run(cli.command, &config, format)
}
