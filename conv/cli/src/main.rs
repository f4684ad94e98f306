mod config;
mod convert;
mod table;
mod verify;

use {
    crate::{config::Config, convert::ConvertCmd, table::TableCmd},
    clap::Parser,
    config_parser::parse_config,
    std::path::PathBuf,
    tracing::metadata::LevelFilter,
};

/// Environment variables prefixed with this override the config file.
const ENV_PREFIX: &str = "CONV";

/// Config file read when `--config` isn't given. It's fine for it not to exist.
const DEFAULT_CONFIG_FILE: &str = "conv.toml";

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Path to a TOML config file [default: ./conv.toml if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Maximum log level, overriding the config [e.g. info, debug, trace]
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    #[command(flatten)]
    Convert(ConvertCmd),

    /// Print the packed table of per-second rates
    Table(TableCmd),

    /// Check the converter over its whole domain
    Verify,
}

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments.
    let cli = Cli::parse();

    // Parse the config file. An explicitly given file must exist.
    let mut cfg: Config = match cli.config {
        Some(path) => parse_config(path, ENV_PREFIX, true)?,
        None => parse_config(DEFAULT_CONFIG_FILE, ENV_PREFIX, false)?,
    };

    if let Some(log_level) = cli.log_level {
        cfg.log_level = log_level;
    }

    // Set up tracing.
    tracing_subscriber::fmt()
        .with_max_level(cfg.log_level.parse::<LevelFilter>()?)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Convert(cmd) => cmd.run(),
        Command::Table(cmd) => cmd.run(&cfg.table),
        Command::Verify => verify::run(),
    }
}
