mod config;
pub use self::config::*;

use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{Layer, Registry};

/// Installs the global subscriber: console and rolling-file outputs, each
/// with its own filter under the global one.
pub fn initialize_telemetry(config: &TelemetryConfig) -> anyhow::Result<()> {
    if !config.enable {
        return Ok(());
    }
    let filter = build_filter(&config.max_level, &config.level_filter, &config.level_filter_env);
    let console = {
        let config = &config.console;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            let filter =
                build_filter(&config.max_level, &config.level_filter, &config.level_filter_env);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(filter),
            )
        } else {
            None
        }
    };
    let file = {
        let config = &config.file;
        if config.enable {
            let enable_debug_logging = config.enable_debug_logging;
            let file_appender = RollingFileAppender::new(
                config.rolling_time.clone().into(),
                &config.path,
                &config.prefix,
            );
            let filter =
                build_filter(&config.max_level, &config.level_filter, &config.level_filter_env);
            Some(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file_appender)
                    .with_file(enable_debug_logging)
                    .with_line_number(enable_debug_logging)
                    .with_thread_ids(enable_debug_logging)
                    .with_target(enable_debug_logging)
                    .with_filter(filter),
            )
        } else {
            None
        }
    };
    Registry::default().with(filter).with(console).with(file).try_init()?;
    Ok(())
}

fn build_filter(max_level: &LoggingLevel, level_filter: &str, level_filter_env: &str) -> EnvFilter {
    let mut filter_builder = EnvFilter::builder();
    if !level_filter_env.is_empty() {
        filter_builder = filter_builder.with_env_var(level_filter_env);
    }
    filter_builder
        .with_default_directive(max_level.clone().into())
        .parse_lossy(level_filter)
}

#[cfg(test)]
mod tests {
    use tracing::metadata::LevelFilter;

    use super::*;

    #[test]
    fn test_defaults_log_to_console_only() {
        let config: TelemetryConfig = serde_json::from_str("{}").unwrap();
        assert!(config.enable);
        assert!(config.console.enable);
        assert!(!config.file.enable);
        assert_eq!(config.file.path, "logs");
        assert_eq!(config.file.rolling_time, RotationLevel::Daily);
        assert_eq!(config.max_level, LoggingLevel::Info);
    }

    #[test]
    fn test_logging_level_maps_to_level_filter() {
        let level: LevelFilter = LoggingLevel::Warn.into();
        assert_eq!(level, LevelFilter::WARN);
        let level: LevelFilter = LoggingLevel::Off.into();
        assert_eq!(level, LevelFilter::OFF);
    }

    #[test]
    fn test_disabled_telemetry_installs_nothing() {
        let config: TelemetryConfig = serde_json::from_str(r#"{"enable": false}"#).unwrap();
        assert!(initialize_telemetry(&config).is_ok());
    }
}
