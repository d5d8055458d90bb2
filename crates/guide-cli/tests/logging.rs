//! Integration tests for log configuration.

use guide_cli::logging::{LogConfig, LogFormat, default_filter_directives};
use tracing::level_filters::LevelFilter;

#[test]
fn default_config_logs_warnings_to_stderr() {
    let config = LogConfig::default();
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(config.log_file.is_none());
    assert!(matches!(config.format, LogFormat::Pretty));
}

#[test]
fn directives_keep_dependencies_quiet() {
    let directives = default_filter_directives(LevelFilter::TRACE);
    let mut parts = directives.split(',');
    assert_eq!(parts.next(), Some("warn"));
    assert!(parts.all(|part| part.starts_with("guide_") && part.ends_with("=trace")));
}

#[test]
fn info_directives() {
    insta::assert_snapshot!(
        default_filter_directives(LevelFilter::INFO),
        @"warn,guide_cli=info,guide_ingest=info,guide_model=info,guide_repair=info,guide_report=info,guide_session=info,guide_validate=info"
    );
}
