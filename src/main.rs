use clap::Parser;

use hepplot::cli::Cli;
use hepplot::config::{ConfigLoader, FileConfigLoader, LoadResult, ReportConfig};
use hepplot::output::svg::ChartRenderer;
use hepplot::output::{OutputFormat, RunSummary};
use hepplot::{EXIT_SUCCESS, ReportDocument, ReportGenerator, logging};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!(kind = e.error_type(), "run failed");
            eprintln!("Error: {e}");
            e.exit_code()
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> hepplot::Result<()> {
    // 1. Load configuration
    let loaded = load_config(cli)?;
    let mut config = loaded.config;

    // 2. Apply CLI argument overrides
    apply_cli_overrides(&mut config, cli);

    // 3. Render every page into the document
    let output = config.report.output.clone();
    let renderer = ChartRenderer::with_size(config.report.width, config.report.height);
    let mut document =
        ReportDocument::create(&output, &config.report.title)?.with_renderer(renderer);
    ReportGenerator::new(config).run(&mut document)?;

    // 4. Summarize
    if !cli.quiet {
        let summary = RunSummary {
            output,
            config: loaded.source,
            pages: document.pages().to_vec(),
        };
        let format = OutputFormat::from(cli.format);
        print!("{}", format.formatter().format(&summary)?);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> hepplot::Result<LoadResult> {
    if cli.no_config {
        return Ok(LoadResult {
            config: ReportConfig::default(),
            source: None,
        });
    }

    let loader = FileConfigLoader::new();
    match &cli.config {
        Some(path) => loader.load_from_path(path),
        None => loader.load(),
    }
}

fn apply_cli_overrides(config: &mut ReportConfig, cli: &Cli) {
    if let Some(dir) = &cli.data_dir {
        config.report.data_dir.clone_from(dir);
    }
    if let Some(output) = &cli.output {
        config.report.output.clone_from(output);
    }
}
