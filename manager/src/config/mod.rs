// File: manager/src/config/mod.rs
pub mod manager;
use crate::constants::defaults;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
pub use manager::ConfigManager;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    // Populated from individual group config files
    #[serde(skip)]
    pub timers: HashMap<String, TimerConfig>,
}

fn default_host() -> String {
    defaults::HOST.to_string()
}

fn default_port() -> u16 {
    defaults::PORT
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerConfig {
    pub description: Option<String>,
    /// 6-field cron expression (sec min hour day month dow)
    pub schedule: Option<String>,
    pub webhook_url: Option<String>,
    /// Extra JSON delivered with every fire event
    pub payload: Option<serde_json::Value>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Shape of a `config/{group}.toml` file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerGroupFile {
    pub timers: HashMap<String, TimerConfig>,
}
