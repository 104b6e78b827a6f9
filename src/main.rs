use std::fs;
use std::path::Path;

use clap::Parser;
use rayon::prelude::*;

use size_gate::EXIT_CONFIG_ERROR;
use size_gate::analyzer::{FileScan, SourceScanner};
use size_gate::checker::{GateChecker, GateReport};
use size_gate::cli::{Cli, ColorChoice};
use size_gate::config::{ConfigLoader, FileConfig, FileConfigLoader, GateConfig};
use size_gate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use size_gate::scanner::{DirectoryScanner, FileScanner, GlobFilter};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run_gate(&cli);
    std::process::exit(exit_code);
}

fn run_gate(cli: &Cli) -> i32 {
    match run_gate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_gate_impl(cli: &Cli) -> size_gate::Result<i32> {
    // 1. Load configuration and apply CLI overrides
    let file_config = load_config(cli)?;
    let config = GateConfig::from_sources(file_config, cli);

    // 2. Existence check before any scanning
    if !config.src.exists() {
        println!("ERROR: source root not found: {}", config.src.display());
        return Ok(EXIT_CONFIG_ERROR);
    }

    // 3. Discover files, sorted for deterministic report order
    let filter = GlobFilter::new(config.extensions.clone(), &config.exclude_patterns)?;
    let scanner = DirectoryScanner::new(filter);
    let files = scanner.scan(&config.src)?;

    // 4. Scan each file (parallel; collect preserves the sorted order)
    let source_scanner = SourceScanner::default();
    let scans: Vec<FileScan> = files
        .par_iter()
        .filter_map(|path| source_scanner.scan_file(path))
        .collect();

    // 5. Aggregate violations and compute the verdict
    let checker = GateChecker::new(config.clone());
    let report = checker.check(&scans);

    // 6. Format and write the report
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(cli.format, &config, &report, color_mode)?;
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    Ok(report.exit_code())
}

fn load_config(cli: &Cli) -> size_gate::Result<FileConfig> {
    if cli.no_config {
        return Ok(FileConfig::default());
    }

    let loader = FileConfigLoader::new();
    cli.config
        .as_deref()
        .map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn format_output(
    format: OutputFormat,
    config: &GateConfig,
    report: &GateReport,
    color_mode: ColorMode,
) -> size_gate::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::new(color_mode).format(config, report),
        OutputFormat::Json => JsonFormatter.format(config, report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> size_gate::Result<()> {
    if let Some(path) = output_path {
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
