//! Physics study guide CLI.

use clap::{ColorChoice, Parser};
use guide_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use guide_cli::commands::{
    exit_code, run_check, run_export, run_import_text, run_parts, run_repair_json,
    run_repair_myst, run_show, run_validate,
};
use guide_cli::config::GuideConfig;
use guide_cli::logging::{LogConfig, LogFormat, init_logging};
use guide_model::Catalog;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let config = match GuideConfig::resolve(cli.config.as_deref()) {
        Ok(config) => config.with_content_dir_override(cli.content_dir.clone()),
        Err(error) => {
            eprintln!("error: {error:#}");
            std::process::exit(1);
        }
    };
    let catalog = Catalog::serway_volume_one();
    let result = match &cli.command {
        Command::Parts => run_parts(&catalog),
        Command::Show(args) => run_show(args, &config, &catalog),
        Command::Check(args) => run_check(args, &config),
        Command::Validate(args) => run_validate(args, &config, &catalog),
        Command::RepairMyst(args) => run_repair_myst(args, &config),
        Command::RepairJson(args) => run_repair_json(args, &config),
        Command::ImportText(args) => run_import_text(args),
        Command::Export(args) => run_export(args, &config, &catalog),
    };
    if let Err(error) = &result {
        eprintln!("error: {error:#}");
    }
    std::process::exit(exit_code(&result));
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
