use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub log_dir: PathBuf,
    pub gemini_api_key: String,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub gemini_temperature: f32,
    pub gemini_top_k: i32,
    pub gemini_top_p: f32,
    pub gemini_max_output_tokens: i32,
    pub gemini_safety_settings: String,
    pub gemini_max_retry_attempts: usize,
    pub http_timeout_seconds: u64,
    pub max_body_bytes: usize,
    pub influencer_store_path: PathBuf,
}

pub static CONFIG: Lazy<Config> =
    Lazy::new(|| Config::load().expect("Failed to load configuration"));

fn env_string(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn env_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<f32>().ok())
        .unwrap_or(default)
}

fn env_i32(name: &str, default: i32) -> i32 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<i32>().ok())
        .unwrap_or(default)
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(default)
}

fn env_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(default)
}

pub(crate) fn normalize_gemini_safety_settings(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return "standard".to_string();
    }

    let lowered = trimmed.to_lowercase();
    match lowered.as_str() {
        "permissive" | "off" | "none" => "permissive".to_string(),
        "standard" => "standard".to_string(),
        _ => {
            warn!(
                "Unknown GEMINI_SAFETY_SETTINGS value '{}'; defaulting to standard.",
                value
            );
            "standard".to_string()
        }
    }
}

pub(crate) fn parse_bind_addr(value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse::<SocketAddr>()
        .map_err(|err| anyhow!("Invalid BIND_ADDR '{}': {}", value, err))
}

fn normalize_base_url(value: String) -> String {
    value.trim().trim_end_matches('/').to_string()
}

impl Config {
    pub fn load() -> Result<Self> {
        let bind_addr = parse_bind_addr(&env_string("BIND_ADDR", "0.0.0.0:3000"))?;

        Ok(Config {
            bind_addr,
            log_level: env_string("LOG_LEVEL", "info").to_lowercase(),
            log_dir: PathBuf::from(env_string("LOG_DIR", "logs")),
            gemini_api_key: env_string("GEMINI_API_KEY", "").trim().to_string(),
            gemini_model: env_string("GEMINI_MODEL", "gemini-2.5-flash"),
            gemini_base_url: normalize_base_url(env_string(
                "GEMINI_BASE_URL",
                "https://generativelanguage.googleapis.com",
            )),
            gemini_temperature: env_f32("GEMINI_TEMPERATURE", 0.9),
            gemini_top_k: env_i32("GEMINI_TOP_K", 40),
            gemini_top_p: env_f32("GEMINI_TOP_P", 0.95),
            gemini_max_output_tokens: env_i32("GEMINI_MAX_OUTPUT_TOKENS", 8192),
            gemini_safety_settings: normalize_gemini_safety_settings(&env_string(
                "GEMINI_SAFETY_SETTINGS",
                "standard",
            )),
            gemini_max_retry_attempts: env_usize("GEMINI_MAX_RETRY_ATTEMPTS", 2).max(1),
            http_timeout_seconds: env_u64("HTTP_TIMEOUT_SECONDS", 90),
            max_body_bytes: env_usize("MAX_BODY_BYTES", 25 * 1024 * 1024),
            influencer_store_path: PathBuf::from(env_string(
                "INFLUENCER_STORE_PATH",
                "data/influencer.json",
            )),
        })
    }
}
