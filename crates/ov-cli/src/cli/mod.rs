use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `ovt` binary.
#[derive(Debug, Parser)]
#[command(
    name = "ovt",
    version,
    about = "Optimization verification tracker - compiler registry and verification reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max results to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store file path (overrides `store.path` from config)
    #[arg(short, long, global = true)]
    pub store: Option<String>,

    /// Table colors: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            store: self.store.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::subcommands::{CompilerCommands, ReportCommands, VerifyCommands};
    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "ovt",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "verify",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Verify {
                action: VerifyCommands::List { .. }
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["ovt", "family", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Family { .. }));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["ovt", "--format", "xml", "family", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["json", "table", "raw"] {
            let cli = Cli::try_parse_from(["ovt", "--format", value, "family", "list"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Commands::Family { .. }));
        }
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "ovt",
            "--store",
            "/tmp/demo.json",
            "--color",
            "never",
            "init",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.store.as_deref(), Some("/tmp/demo.json"));
        assert_eq!(flags.color, ColorMode::Never);
    }

    #[test]
    fn compiler_register_takes_three_positionals() {
        let cli = Cli::try_parse_from(["ovt", "compiler", "register", "gcc", "12.2.0", "/usr/bin/gcc"])
            .expect("cli should parse");
        let Commands::Compiler {
            action:
                CompilerCommands::Register {
                    family,
                    version,
                    binary,
                },
        } = cli.command
        else {
            panic!("expected compiler register");
        };
        assert_eq!(family, "gcc");
        assert_eq!(version, "12.2.0");
        assert_eq!(binary, "/usr/bin/gcc");
    }

    #[test]
    fn verify_record_collects_repeated_evidence() {
        let cli = Cli::try_parse_from([
            "ovt",
            "verify",
            "record",
            "VER-001",
            "gcc",
            "12.2.0",
            "-O2",
            "--evidence",
            "test_results.json",
            "--evidence",
            "review.md",
        ])
        .expect("cli should parse");
        let Commands::Verify {
            action:
                VerifyCommands::Record {
                    id,
                    level,
                    evidence,
                    ..
                },
        } = cli.command
        else {
            panic!("expected verify record");
        };
        assert_eq!(id, "VER-001");
        assert_eq!(level, "-O2");
        assert_eq!(evidence, vec!["test_results.json", "review.md"]);
    }

    #[test]
    fn verify_list_filters_are_optional() {
        let cli = Cli::try_parse_from(["ovt", "verify", "list", "--level", "-Os"])
            .expect("cli should parse");
        let Commands::Verify {
            action:
                VerifyCommands::List {
                    family,
                    version,
                    level,
                    limit,
                },
        } = cli.command
        else {
            panic!("expected verify list");
        };
        assert_eq!(family, None);
        assert_eq!(version, None);
        assert_eq!(level.as_deref(), Some("-Os"));
        assert_eq!(limit, None);
    }

    #[test]
    fn report_output_override_parses() {
        let cli = Cli::try_parse_from(["ovt", "report", "safety", "--output", "out/safety.json"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Report {
                action: ReportCommands::Safety { output: Some(ref path) }
            } if path == "out/safety.json"
        ));
    }

    #[test]
    fn schema_accepts_list_flag_without_type() {
        let cli = Cli::try_parse_from(["ovt", "schema", "--list"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert!(args.list);
        assert_eq!(args.type_name, None);
    }
}
