//! Tests for CLI argument parsing.

use clap::error::ErrorKind;
use tracing::Level;

use super::cli::Cli;
use super::validated::ReportConfig;
use crate::network::filter::Selection;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from_iter(std::iter::once("nifs").chain(args.iter().copied())).unwrap()
}

fn config(args: &[&str]) -> ReportConfig {
    ReportConfig::from_cli(&parse(args))
}

mod parsing {
    use super::*;

    #[test]
    fn parse_no_args() {
        let cli = parse(&[]);

        assert!(!cli.ipv4 && !cli.ipv6);
        assert!(!cli.unicast && !cli.multicast);
        assert!(!cli.hw && !cli.sw);
        assert!(cli.show_mac());
        assert!(!cli.no_cast);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_short_flags() {
        let cli = parse(&["-4", "-u", "-H", "-C"]);

        assert!(cli.ipv4);
        assert!(cli.unicast);
        assert!(cli.hw);
        assert!(cli.no_cast);
    }

    #[test]
    fn parse_long_flags() {
        let cli = parse(&["--ipv6", "--multicast", "--sw", "--no-mac"]);

        assert!(cli.ipv6);
        assert!(cli.multicast);
        assert!(cli.sw);
        assert!(!cli.show_mac());
    }

    #[test]
    fn parse_combined_short_flags() {
        let cli = parse(&["-4um"]);

        assert!(cli.ipv4);
        assert!(cli.unicast);
        assert!(cli.multicast);
    }

    #[test]
    fn verbose_counts_occurrences() {
        assert_eq!(parse(&["-v"]).verbose, 1);
        assert_eq!(parse(&["-vv"]).verbose, 2);
        assert_eq!(parse(&["--verbose", "--verbose", "--verbose"]).verbose, 3);
    }

    #[test]
    fn repeated_flags_are_accepted() {
        assert!(parse(&["-4", "-4"]).ipv4);
        assert!(parse(&["-u", "--unicast"]).unicast);
        assert!(parse(&["-C", "-C"]).no_cast);
        assert!(parse(&["--mac", "--mac"]).show_mac());
        assert!(!parse(&["--no-mac", "--no-mac"]).show_mac());
    }

    #[test]
    fn repeated_flags_still_count_verbosity() {
        assert_eq!(parse(&["-4", "-v", "-4", "-v"]).verbose, 2);
    }

    #[test]
    fn last_of_mac_and_no_mac_wins() {
        assert!(!parse(&["--mac", "--no-mac"]).show_mac());
        assert!(parse(&["--no-mac", "--mac"]).show_mac());
        assert!(parse(&["-M"]).show_mac());
    }
}

mod errors {
    use super::*;

    fn parse_err(args: &[&str]) -> clap::Error {
        Cli::try_parse_from_iter(std::iter::once("nifs").chain(args.iter().copied())).unwrap_err()
    }

    #[test]
    fn unknown_option_is_rejected() {
        let error = parse_err(&["--bogus"]);
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
        assert!(error.use_stderr());
    }

    #[test]
    fn positional_argument_is_rejected() {
        let error = parse_err(&["eth0"]);
        assert_eq!(error.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn flags_take_no_value() {
        let error = parse_err(&["--ipv4=yes"]);
        assert!(error.use_stderr());
    }

    #[test]
    fn help_is_not_a_failure() {
        let error = parse_err(&["-h"]);
        assert_eq!(error.kind(), ErrorKind::DisplayHelp);
        assert!(!error.use_stderr());
    }

    #[test]
    fn version_is_not_a_failure() {
        let error = parse_err(&["-V"]);
        assert_eq!(error.kind(), ErrorKind::DisplayVersion);
        assert!(!error.use_stderr());
    }
}

mod report_config {
    use super::*;

    #[test]
    fn defaults_report_everything() {
        let config = config(&[]);

        assert_eq!(config, ReportConfig::default());
        assert!(config.selection.is_all());
        assert!(config.format.show_cast);
        assert!(config.format.show_mac);
        assert_eq!(config.log_level, Level::WARN);
    }

    #[test]
    fn toggles_restrict_their_pair() {
        let config = config(&["-6", "-m", "-s"]);

        assert_eq!(
            config.selection,
            Selection {
                ipv4: false,
                ipv6: true,
                unicast: false,
                multicast: true,
                hardware: false,
                software: true,
            }
        );
    }

    #[test]
    fn repeated_toggle_is_same_as_single() {
        assert_eq!(config(&["-6", "-6", "--sw", "-s"]), config(&["-6", "-s"]));
    }

    #[test]
    fn both_sides_of_pair_report_both() {
        let config = config(&["-4", "-6", "-H", "-s"]);
        assert!(config.selection.is_all());
    }

    #[test]
    fn format_follows_column_flags() {
        let config = config(&["--no-cast", "--no-mac"]);

        assert!(!config.format.show_cast);
        assert!(!config.format.show_mac);
    }

    #[test]
    fn verbosity_maps_to_log_level() {
        assert_eq!(config(&["-v"]).log_level, Level::DEBUG);
        assert_eq!(config(&["-vvv"]).log_level, Level::TRACE);
    }

    #[test]
    fn display_includes_selection_and_format() {
        let display = config(&["-4", "-C"]).to_string();

        assert!(display.contains("ipv4=true ipv6=false"));
        assert!(display.contains("show_cast: false"));
        assert!(display.contains("show_mac: true"));
    }
}
