//! Configuration handling
//!
//! Settings come from `config.json` in the platform config directory and can
//! be overridden through `MENTOREO_*` environment variables.

use crate::backend::DEFAULT_ACADEMIC_ENDPOINT;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Default table that receives signups
pub const DEFAULT_SIGNUPS_TABLE: &str = "signups";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing {key}; set it in {file} or via {env}")]
    Missing {
        key: &'static str,
        env: &'static str,
        file: String,
    },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// User configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SignupConfig {
    /// Base URL of the hosted store project
    pub supabase_url: Option<String>,
    /// Public (anon) API key for the store
    pub supabase_anon_key: Option<String>,
    /// Table that receives signups
    pub signups_table: Option<String>,
    /// Token for the academic email verification service
    pub apy_token: Option<String>,
    /// Run the academic email check on the email step
    pub academic_email_check: Option<bool>,
    /// Verification endpoint override
    pub academic_email_endpoint: Option<String>,
}

impl SignupConfig {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mentoreo", "mentoreo-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load from file (if present), then apply environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match Self::config_path() {
            Some(path) if path.exists() => {
                let content = fs::read_to_string(&path)?;
                serde_json::from_str(&content)?
            }
            _ => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Overlay values from a key lookup (the environment in production)
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_empty("MENTOREO_SUPABASE_URL") {
            self.supabase_url = Some(v);
        }
        if let Some(v) = non_empty("MENTOREO_SUPABASE_ANON_KEY") {
            self.supabase_anon_key = Some(v);
        }
        if let Some(v) = non_empty("MENTOREO_SIGNUPS_TABLE") {
            self.signups_table = Some(v);
        }
        if let Some(v) = non_empty("MENTOREO_APY_TOKEN") {
            self.apy_token = Some(v);
        }
        if let Some(v) = non_empty("MENTOREO_ACADEMIC_EMAIL_CHECK") {
            self.academic_email_check = Some(parse_flag(&v));
        }
    }

    pub fn supabase_url(&self) -> Result<&str, ConfigError> {
        required(
            self.supabase_url.as_deref(),
            "supabase_url",
            "MENTOREO_SUPABASE_URL",
        )
    }

    pub fn supabase_anon_key(&self) -> Result<&str, ConfigError> {
        required(
            self.supabase_anon_key.as_deref(),
            "supabase_anon_key",
            "MENTOREO_SUPABASE_ANON_KEY",
        )
    }

    /// Only required when the academic check is enabled
    pub fn apy_token(&self) -> Result<&str, ConfigError> {
        required(self.apy_token.as_deref(), "apy_token", "MENTOREO_APY_TOKEN")
    }

    pub fn signups_table(&self) -> &str {
        self.signups_table.as_deref().unwrap_or(DEFAULT_SIGNUPS_TABLE)
    }

    pub fn academic_email_check(&self) -> bool {
        self.academic_email_check.unwrap_or(false)
    }

    pub fn academic_email_endpoint(&self) -> &str {
        self.academic_email_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_ACADEMIC_ENDPOINT)
    }
}

fn required<'a>(
    value: Option<&'a str>,
    key: &'static str,
    env: &'static str,
) -> Result<&'a str, ConfigError> {
    value.filter(|v| !v.is_empty()).ok_or_else(|| ConfigError::Missing {
        key,
        env,
        file: SignupConfig::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "config.json".to_string()),
    })
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
