use std::path::Path;

use clap::{CommandFactory, Parser};

use super::*;

#[test]
fn command_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn no_arguments_uses_defaults() {
    let cli = Cli::try_parse_from(["hepplot"]).unwrap();

    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(cli.data_dir.is_none());
    assert!(cli.output.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.no_config);
    assert_eq!(cli.format, SummaryFormat::Text);
}

#[test]
fn parses_all_options() {
    let cli = Cli::try_parse_from([
        "hepplot", "-vv", "-d", "runs/7", "-o", "plots.html", "-c", "layout.toml", "-f", "json",
    ])
    .unwrap();

    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.data_dir.as_deref(), Some(Path::new("runs/7")));
    assert_eq!(cli.output.as_deref(), Some(Path::new("plots.html")));
    assert_eq!(cli.config.as_deref(), Some(Path::new("layout.toml")));
    assert_eq!(cli.format, SummaryFormat::Json);
}

#[test]
fn config_conflicts_with_no_config() {
    let result = Cli::try_parse_from(["hepplot", "--config", "a.toml", "--no-config"]);
    assert!(result.is_err());
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["hepplot", "--format", "pdf"]).is_err());
}

#[test]
fn summary_format_converts() {
    assert_eq!(OutputFormat::from(SummaryFormat::Json), OutputFormat::Json);
    assert_eq!(OutputFormat::from(SummaryFormat::Text), OutputFormat::Text);
}
