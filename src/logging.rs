use crate::config::LoggingConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize tracing subscriber with configured format and output
///
/// Logs never go to stdout, which carries the MCP stream. When a log file is
/// configured the returned guard must be kept alive to flush it.
pub fn init(config: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    // Build filter from config level or environment variable
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (writer, guard) = match &config.file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path
                .file_name()
                .ok_or_else(|| anyhow::anyhow!("log file path has no file name: {}", path.display()))?;

            std::fs::create_dir_all(directory)?;
            let appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    // Use try_init() to gracefully handle already-initialized subscriber (common in tests)
    let result = match config.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_writer(writer)
            .json()
            .with_env_filter(filter)
            .try_init(),
        "pretty" => tracing_subscriber::fmt()
            .with_writer(writer)
            .pretty()
            .with_env_filter(filter)
            .try_init(),
        _ => {
            // Default to compact
            tracing_subscriber::fmt()
                .with_writer(writer)
                .compact()
                .with_env_filter(filter)
                .try_init()
        }
    };

    // Ignore error if subscriber is already initialized (common in tests)
    result.or(Ok::<(), anyhow::Error>(()))?;
    Ok(guard)
}

/// Redact a claim number or plan id for safe logging
/// Shows first 4 chars + last 2 chars, hides middle
/// Returns "[REDACTED]" for strings ≤6 characters
pub fn redact_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 6 {
        return "[REDACTED]".to_string();
    }

    let visible_start = 4;
    let visible_end = 2;

    let head: String = chars[..visible_start].iter().collect();
    let tail: String = chars[chars.len() - visible_end..].iter().collect();
    format!("{}***{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Identifier Redaction Tests
    // ========================================================================

    #[test]
    fn redact_id_claim_number() {
        assert_eq!(redact_id("CLM123456"), "CLM1***56");
    }

    #[test]
    fn redact_id_plan_id() {
        assert_eq!(redact_id("PLAN001"), "PLAN***01");
    }

    #[test]
    fn redact_id_too_short() {
        assert_eq!(redact_id("PLAN01"), "[REDACTED]");
    }

    #[test]
    fn redact_id_empty_string() {
        assert_eq!(redact_id(""), "[REDACTED]");
    }

    #[test]
    fn redact_id_multibyte_does_not_panic() {
        assert_eq!(redact_id("ÇLMé12345"), "ÇLMé***45");
    }

    // ========================================================================
    // Initialization Tests
    // ========================================================================

    #[test]
    fn init_with_valid_config() {
        let config = LoggingConfig::default();

        let result = init(&config);
        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn init_with_different_formats() {
        let formats = vec!["compact", "pretty", "json", "unknown"];

        for format in formats {
            let config = LoggingConfig {
                format: format.to_string(),
                ..LoggingConfig::default()
            };

            let result = init(&config);
            assert!(result.is_ok(), "Failed to init with format: {}", format);
        }
    }

    #[test]
    fn init_with_log_file_returns_guard() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            file: Some(dir.path().join("logs").join("health-mcp.log")),
            ..LoggingConfig::default()
        };

        let guard = init(&config).unwrap();
        assert!(guard.is_some());
        assert!(dir.path().join("logs").is_dir());
    }
}
