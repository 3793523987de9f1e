//! Application-wide constants for timeouts and configuration defaults

use std::time::Duration;

/// HTTP client timeout constants
pub mod http {
    use super::Duration;

    /// Timeout for webhook fire requests
    pub const WEBHOOK_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Default configuration values
pub mod defaults {
    /// Default bind host for the web server
    pub const HOST: &str = "0.0.0.0";

    /// Default port for the web server
    pub const PORT: u16 = 8095;
}
