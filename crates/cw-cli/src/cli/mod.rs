use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `cwatch` binary.
#[derive(Debug, Parser)]
#[command(
    name = "cwatch",
    version,
    about = "Cosmic Watch - near-Earth object monitor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print for listings
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Show progress spinners on a terminal: auto, off
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            color: self.color,
            progress: self.progress,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use cw_core::{RiskFilter, RiskLevel};

    use super::subcommands::{AuthCommands, WatchCommands};
    use super::{Cli, Commands, OutputFormat, ProgressMode};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "cwatch", "--format", "json", "--limit", "10", "--verbose", "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Stats));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["cwatch", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["cwatch", "--format", "xml", "stats"]).is_err());
    }

    #[test]
    fn progress_accepts_only_auto_and_off() {
        let cli = Cli::try_parse_from(["cwatch", "--progress", "off", "stats"])
            .expect("cli should parse");
        assert_eq!(cli.progress, ProgressMode::Off);
        assert!(Cli::try_parse_from(["cwatch", "--progress", "on", "stats"]).is_err());
    }

    #[test]
    fn feed_filter_parses_levels_case_insensitively() {
        let cli =
            Cli::try_parse_from(["cwatch", "feed", "--filter", "High"]).expect("cli should parse");
        match cli.command {
            Commands::Feed(args) => {
                assert_eq!(args.filter, Some(RiskFilter::Level(RiskLevel::High)));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn feed_filter_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["cwatch", "feed", "--filter", "extreme"]).is_err());
    }

    #[test]
    fn risk_requires_distance_and_velocity() {
        assert!(Cli::try_parse_from(["cwatch", "risk", "--hazardous"]).is_err());
        let cli = Cli::try_parse_from([
            "cwatch",
            "risk",
            "--miss-distance-km",
            "2000000",
            "--velocity-km-s",
            "25",
            "--hazardous",
        ])
        .expect("cli should parse");
        match cli.command {
            Commands::Risk(args) => {
                assert!(args.hazardous);
                assert!((args.miss_distance_km - 2_000_000.0).abs() < f64::EPSILON);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn watch_and_auth_subcommands_parse() {
        let cli =
            Cli::try_parse_from(["cwatch", "watch", "add", "3542519"]).expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Watch { action: WatchCommands::Add { ref id } } if id == "3542519"
        ));

        let cli = Cli::try_parse_from(["cwatch", "auth", "login", "ada", "--password", "pw"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Auth { action: AuthCommands::Login(ref args) } if args.username == "ada"
        ));

        let missing_email =
            Cli::try_parse_from(["cwatch", "auth", "register", "ada", "--password", "pw"]);
        assert!(missing_email.is_err());
    }
}
