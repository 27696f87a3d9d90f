use std::path::PathBuf;

use elective_core::enrollment::{EnrollmentPolicy, DEFAULT_COURSE_CAPACITY};
use elective_core::report_time::parse_utc_offset;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Directory of static frontend files served for unmatched paths.
    pub static_dir: Option<PathBuf>,
    /// Database pool size (default: `20`).
    pub db_max_connections: u32,
    /// Capacity, time zone, and category handling for enrollment.
    pub enrollment: EnrollmentPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                 |
    /// |------------------------------|-------------------------|
    /// | `HOST`                       | `0.0.0.0`               |
    /// | `PORT`                       | `3000`                  |
    /// | `CORS_ORIGINS`               | `*`                     |
    /// | `REQUEST_TIMEOUT_SECS`       | `30`                    |
    /// | `SHUTDOWN_TIMEOUT_SECS`      | `30`                    |
    /// | `STATIC_DIR`                 | unset                   |
    /// | `DB_MAX_CONNECTIONS`         | `20`                    |
    /// | `COURSE_CAPACITY`            | `16`                    |
    /// | `REPORT_TIMEZONE`            | `+08:00`                |
    /// | `STRICT_ELECTIVE_TYPES`      | `false`                 |
    /// | `RECHECK_CAPACITY_ON_COMMIT` | `true`                  |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_list(&std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".into()));

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let static_dir = std::env::var("STATIC_DIR")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from);

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DB_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(elective_db::DEFAULT_MAX_CONNECTIONS);

        let course_capacity: i64 = std::env::var("COURSE_CAPACITY")
            .map(|v| v.parse().expect("COURSE_CAPACITY must be a valid integer"))
            .unwrap_or(DEFAULT_COURSE_CAPACITY);
        assert!(course_capacity > 0, "COURSE_CAPACITY must be positive");

        let defaults = EnrollmentPolicy::default();
        let report_offset = match std::env::var("REPORT_TIMEZONE") {
            Ok(raw) => parse_utc_offset(&raw)
                .unwrap_or_else(|e| panic!("REPORT_TIMEZONE is invalid: {e}")),
            Err(_) => defaults.report_offset,
        };

        let enrollment = EnrollmentPolicy {
            course_capacity,
            recheck_capacity_on_commit: env_flag(
                "RECHECK_CAPACITY_ON_COMMIT",
                defaults.recheck_capacity_on_commit,
            ),
            strict_elective_types: env_flag(
                "STRICT_ELECTIVE_TYPES",
                defaults.strict_elective_types,
            ),
            report_offset,
        };

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            static_dir,
            db_max_connections,
            enrollment,
        }
    }

    /// Whether CORS should allow any origin.
    pub fn cors_allows_any(&self) -> bool {
        self.cors_origins.iter().any(|o| o == "*")
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn env_flag(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(raw) => parse_flag(&raw).unwrap_or_else(|| panic!("{name} must be true or false")),
        Err(_) => default,
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flags() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn parses_origin_list() {
        assert_eq!(
            parse_list("http://a.test, http://b.test,,"),
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
