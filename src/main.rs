use std::fs;

use clap::Parser;
use log::{LevelFilter, info};

use dockerfile_guard::cli::Cli;
use dockerfile_guard::config::{FileRulesLoader, LoadResult, RulesLoader};
use dockerfile_guard::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use dockerfile_guard::scanner::FileScanner;
use dockerfile_guard::EXIT_LOAD_ERROR;

const fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr; `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for_verbosity(verbose));
    builder.parse_env(env_logger::Env::default());
    builder.format_timestamp(None);
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            ErrorOutput::new(ColorMode::from(cli.color)).print_guard_error(&e);
            EXIT_LOAD_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn load_rules(cli: &Cli) -> dockerfile_guard::Result<LoadResult> {
    let loader = FileRulesLoader::new();
    if let Some(path) = &cli.rules {
        return loader.load_from_path(path);
    }
    if cli.no_config {
        return loader.load_bundled();
    }
    loader.load()
}

fn run(cli: &Cli) -> dockerfile_guard::Result<i32> {
    let LoadResult { rules, origin } = load_rules(cli)?;
    info!("Using rules from {origin}");

    let report = FileScanner::scan_path(&rules, &cli.dockerfile)?;

    let output = match cli.format {
        OutputFormat::Json => JsonFormatter.format(&report)?,
        OutputFormat::Text => {
            TextFormatter::with_verbose(cli.report_color_mode(), cli.verbose).format(&report)?
        }
    };

    if let Some(path) = &cli.output {
        fs::write(path, &output)?;
        info!("Report written to {}", path.display());
    } else if !cli.quiet {
        print!("{output}");
    }

    Ok(report.exit_code())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
