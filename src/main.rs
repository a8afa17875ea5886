use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vr_extras::config::Config;
use vr_extras::constants::{CONFIG_GENERATED, MAX_TIMESPAN_PRECISION};
use vr_extras::logger;
use vr_extras::utils::{
    base64url_to_hex, format_timespan_with_precision, hex_to_base64url_with, isoformat_str, Padding,
};

/// Formatting and encoding helpers
#[derive(Parser, Debug)]
#[command(name = "vr-extras", version, about)]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Format a duration in seconds as a human readable timespan
    Timespan {
        seconds: f64,

        /// Significant digits for durations under a minute (1-17)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=MAX_TIMESPAN_PRECISION as i64))]
        precision: Option<u8>,
    },
    /// Render a timestamp in ISO-8601 form (naive input is taken as UTC)
    Isoformat { timestamp: String },
    /// Convert a hex string to URL-safe base64
    HexToB64 {
        hex: String,

        /// Drop trailing '=' padding
        #[arg(long)]
        no_pad: bool,
    },
    /// Convert URL-safe base64 to a lowercase hex string
    B64ToHex { b64url: String },
    /// Write a default configuration file
    InitConfig { path: Option<PathBuf> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.verbose {
        config.logging.enabled = true;
        config.logging.level = "debug".to_string();
    }
    logger::init(&config.logging)?;

    let output = match cli.command {
        Command::Timespan { seconds, precision } => {
            let precision = precision.map(usize::from).unwrap_or(config.format.timespan_precision);
            format_timespan_with_precision(seconds, precision)
        }
        Command::Isoformat { timestamp } => isoformat_str(&timestamp)?,
        Command::HexToB64 { hex, no_pad } => {
            let padding = if no_pad { Padding::Unpadded } else { config.encoding.padding() };
            hex_to_base64url_with(&hex, padding)?
        }
        Command::B64ToHex { b64url } => base64url_to_hex(&b64url)?,
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::get_default_config_path().context("No path given and no default config location")?,
            };
            Config::generate_default_config(&path)?;
            format!("{}: {}", CONFIG_GENERATED, path.display())
        }
    };

    println!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timespan_precision_in_range() {
        let cli = Cli::try_parse_from(["vr-extras", "timespan", "0.35", "-p", "17"]).unwrap();
        assert!(matches!(cli.command, Command::Timespan { precision: Some(17), .. }));

        let cli = Cli::try_parse_from(["vr-extras", "timespan", "0.35"]).unwrap();
        assert!(matches!(cli.command, Command::Timespan { precision: None, .. }));
    }

    #[test]
    fn test_timespan_precision_out_of_range() {
        assert!(Cli::try_parse_from(["vr-extras", "timespan", "0.35", "-p", "0"]).is_err());
        assert!(Cli::try_parse_from(["vr-extras", "timespan", "0.35", "-p", "18"]).is_err());
        assert!(Cli::try_parse_from(["vr-extras", "timespan", "0.35", "-p", "70000"]).is_err());
    }
}
