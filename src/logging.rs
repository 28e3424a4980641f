// src/logging.rs

use crate::config::Config;
use crate::errors::{ChatError, ChatResult};
use chrono::{DateTime, Utc};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

/// Details of one outbound chat call.
#[derive(Debug, Clone)]
pub struct CallLog {
    pub timestamp: DateTime<Utc>,
    pub endpoint: String,
    pub request_summary: String,
    /// `None` when the call never got a status line back.
    pub response_status: Option<u16>,
    pub response_time_ms: u128,
}

/// Starts the file logger. The terminal is owned by the UI, so nothing is
/// written to stdout/stderr. Keep the returned handle alive for the whole run.
pub fn init_logging(config: &Config) -> ChatResult<LoggerHandle> {
    let log_dir = config.resolved_log_dir()?;

    Logger::try_with_str(&config.log_level)
        .map_err(|e| ChatError::config_error(format!("Invalid log level: {}", e)))?
        .log_to_file(FileSpec::default().directory(log_dir).basename("guardchat"))
        .rotate(
            Criterion::Size(1_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(5),
        )
        .append()
        .start()
        .map_err(|e| ChatError::config_error(format!("Failed to start logger: {}", e)))
}

pub fn format_call_log(log: &CallLog) -> String {
    let status = log
        .response_status
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "[{}] {} - {} - Status: {} - Time: {}ms",
        log.timestamp.to_rfc3339(),
        log.endpoint,
        log.request_summary,
        status,
        log.response_time_ms
    )
}

pub fn log_api_call(log: &CallLog) {
    log::info!("{}", format_call_log(log));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_call_log_with_status() {
        let log = CallLog {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            endpoint: "http://localhost:5000/api/chat".to_string(),
            request_summary: "message of 5 chars".to_string(),
            response_status: Some(200),
            response_time_ms: 42,
        };

        assert_eq!(
            format_call_log(&log),
            "[2024-05-01T12:00:00+00:00] http://localhost:5000/api/chat - message of 5 chars - Status: 200 - Time: 42ms"
        );
    }

    #[test]
    fn test_format_call_log_without_status() {
        let log = CallLog {
            timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            endpoint: "http://localhost:5000/api/chat".to_string(),
            request_summary: "message of 5 chars".to_string(),
            response_status: None,
            response_time_ms: 3,
        };

        assert!(format_call_log(&log).contains("Status: - "));
    }
}
