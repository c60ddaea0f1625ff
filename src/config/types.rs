// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    #[serde(default)]
    pub routes: RouteTable,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Access log file path (optional, stdout if not set)
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// Route table - the literal request paths the dispatcher serves
///
/// Fixed at process start and never mutated; the dispatcher matches request
/// paths against these literals by exact string equality.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RouteTable {
    /// Home page path
    #[serde(default = "default_home_path")]
    pub home: String,
    /// System information table path
    #[serde(default = "default_system_info_path")]
    pub system_info: String,
    /// Source path information table path
    #[serde(default = "default_path_info_path")]
    pub path_info: String,
    /// Favicon short-circuit path (204, empty body)
    #[serde(default = "default_favicon_path")]
    pub favicon: String,
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_system_info_path() -> String {
    "/os".to_string()
}

fn default_path_info_path() -> String {
    "/path".to_string()
}

fn default_favicon_path() -> String {
    "/favicon.ico".to_string()
}

impl Default for RouteTable {
    fn default() -> Self {
        Self {
            home: default_home_path(),
            system_info: default_system_info_path(),
            path_info: default_path_info_path(),
            favicon: default_favicon_path(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_defaults() {
        let routes = RouteTable::default();
        assert_eq!(routes.home, "/");
        assert_eq!(routes.system_info, "/os");
        assert_eq!(routes.path_info, "/path");
        assert_eq!(routes.favicon, "/favicon.ico");
    }
}
