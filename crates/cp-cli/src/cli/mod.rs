use clap::{Parser, ValueEnum};

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `coparent` binary.
#[derive(Debug, Parser)]
#[command(
    name = "coparent",
    version,
    about = "Coparent - shared parenting plans, visits, messages, and journals"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw (defaults to `general.default_format`)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve global flags, falling back to the configured default format.
    #[must_use]
    pub fn global_flags(&self, general: &cp_config::GeneralConfig) -> GlobalFlags {
        let format = self.format.unwrap_or_else(|| {
            OutputFormat::from_str(general.default_format.trim(), true).unwrap_or_else(|_| {
                tracing::warn!(
                    value = %general.default_format,
                    "unknown general.default_format; using table"
                );
                OutputFormat::Table
            })
        });
        GlobalFlags {
            format,
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use cp_config::GeneralConfig;
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands, OutputFormat};

    fn general(format: &str) -> GeneralConfig {
        GeneralConfig {
            default_format: format.to_string(),
        }
    }

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["coparent", "--format", "json", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["coparent", "home", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["coparent", "--format", "xml", "home"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn explicit_format_beats_config_default() {
        let cli = Cli::try_parse_from(["coparent", "-f", "json", "home"]).expect("cli should parse");
        assert_eq!(cli.global_flags(&general("raw")).format, OutputFormat::Json);
    }

    #[test]
    fn config_default_format_applies_without_flag() {
        let cli = Cli::try_parse_from(["coparent", "home"]).expect("cli should parse");
        assert_eq!(cli.global_flags(&general("RAW")).format, OutputFormat::Raw);
        assert_eq!(cli.global_flags(&general("yaml")).format, OutputFormat::Table);
    }
}
