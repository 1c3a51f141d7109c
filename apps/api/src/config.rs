use anyhow::{bail, Context, Result};

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Cross-origin policy applied to every route. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorsConfig {
    pub allow_any_origin: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allow_any_origin: true,
        }
    }
}

/// Application configuration loaded from environment variables.
/// Built once before the listener starts and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Debug/production toggle for the HTTP listener.
    pub debug: bool,
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Request body limit for uploads, in bytes.
    pub max_upload_bytes: usize,
    pub cors: CorsConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = match lookup("APP_DEBUG") {
            Some(raw) => parse_bool(&raw).context("APP_DEBUG must be a boolean")?,
            None => false,
        };

        let host = lookup("HOST").unwrap_or_else(|| {
            if debug {
                "127.0.0.1".to_string()
            } else {
                "0.0.0.0".to_string()
            }
        });

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            None => DEFAULT_PORT,
        };

        let rust_log = lookup("RUST_LOG").unwrap_or_else(|| {
            if debug {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        let max_upload_bytes = match lookup("MAX_UPLOAD_BYTES") {
            Some(raw) => raw
                .parse::<usize>()
                .context("MAX_UPLOAD_BYTES must be a positive integer")?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };
        if max_upload_bytes == 0 {
            bail!("MAX_UPLOAD_BYTES must be greater than zero");
        }

        Ok(Config {
            debug,
            host,
            port,
            rust_log,
            max_upload_bytes,
            cors: CorsConfig::default(),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognized boolean value '{other}'"),
    }
}

#[cfg(test)]
impl Config {
    /// Production defaults, for tests that need a config without touching the environment.
    pub fn for_tests() -> Self {
        Self::from_lookup(|_| None).expect("default config is valid")
    }
}
