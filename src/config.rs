// src/config.rs

use std::env;
use dotenvy::dotenv;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST backend, e.g. "http://localhost:3000".
    pub api_base_url: String,

    /// Bearer token for the admin session. Obtaining it (login, refresh)
    /// is handled elsewhere; the client only attaches it.
    pub api_token: Option<String>,

    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,

    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        let api_base_url = env::var("API_BASE_URL")
            .expect("API_BASE_URL must be set");

        let api_token = env::var("API_TOKEN").ok();

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let rust_log = env::var("RUST_LOG")
            .unwrap_or_else(|_| "info".to_string());

        Self {
            api_base_url,
            api_token,
            request_timeout_secs,
            rust_log,
        }
    }
}
