use std::time::Duration;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Absent only in test mode, where no real backend call is made.
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a single backend call. The reference had none; every
    /// generation call here must finish or fail within this window.
    pub llm_timeout: Duration,
    /// When set, a canned generator replaces the Claude client.
    pub test_mode: bool,
    pub sender: SenderIdentity,
}

/// Identity pinned into the prompt's sign-off block.
///
/// Configuration rather than a hardcoded literal, so deployments can vary
/// the sender without a rebuild. Every field is optional; with none set,
/// the prompt falls back to signing off with the candidate's profile name.
#[derive(Debug, Clone, Default)]
pub struct SenderIdentity {
    pub name: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
}

impl SenderIdentity {
    pub fn is_configured(&self) -> bool {
        self.name.is_some() || self.linkedin.is_some() || self.github.is_some()
    }

    /// Renders the verbatim sign-off block pinned into the preamble.
    pub fn signoff_block(&self) -> String {
        let mut block = String::from("Best,");
        if let Some(name) = &self.name {
            block.push('\n');
            block.push_str(name);
        }
        if let Some(linkedin) = &self.linkedin {
            block.push_str(&format!("\nLinkedIn: {linkedin}"));
        }
        if let Some(github) = &self.github {
            block.push_str(&format!("\nGitHub: {github}"));
        }
        block
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            llm_timeout: Duration::from_secs(
                std::env::var("LLM_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse::<u64>()
                    .context("LLM_TIMEOUT_SECS must be a number of seconds")?,
            ),
            test_mode: std::env::var("TEST_MODE")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            sender: SenderIdentity {
                name: optional_env("SENDER_NAME"),
                linkedin: optional_env("SENDER_LINKEDIN"),
                github: optional_env("SENDER_GITHUB"),
            },
        })
    }
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}
