use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const JOBSCOUT_DIR: &str = ".jobscout";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: Option<String>,
    pub api_key: String,
    pub base_url: Option<String>,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub top_p: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: None,
            api_key: String::new(),
            base_url: None,
            model: "llama-3.1-8b-instant".to_string(),
            temperature: 0.2,
            max_tokens: 512,
            top_p: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CareerjetConfig {
    pub affid: String,
    pub locale: String,
    pub user_ip: String,
    pub user_agent: String,
    /// Page the listing request claims to originate from.
    pub referer_url: String,
    pub base_url: String,
}

impl Default for CareerjetConfig {
    fn default() -> Self {
        Self {
            affid: String::new(),
            locale: "en_IN".to_string(),
            user_ip: "1.2.3.4".to_string(),
            user_agent: format!("jobscout/{}", env!("CARGO_PKG_VERSION")),
            referer_url: "https://jobscout.local/jobs".to_string(),
            base_url: "http://public.api.careerjet.net/search".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct JoobleConfig {
    pub api_key: String,
    pub base_url: String,
}

impl Default for JoobleConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: "https://jooble.org/api".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Web3Config {
    pub token: String,
    pub base_url: String,
}

impl Default for Web3Config {
    fn default() -> Self {
        Self {
            token: String::new(),
            base_url: "https://web3.career/api/v1".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Per-board deadline for one search call.
    pub timeout_secs: u64,
    pub max_results: usize,
    pub max_history: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 15,
            max_results: 5,
            max_history: 5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub careerjet: CareerjetConfig,
    pub jooble: JoobleConfig,
    pub web3: Web3Config,
    pub search: SearchConfig,
}

/// Environment variables that override secrets, first match wins.
const GROQ_KEY_VARS: &[&str] = &["JOBSCOUT_LLM_API_KEY", "GROQ_API_KEY"];
const OPENAI_KEY_VARS: &[&str] = &["JOBSCOUT_LLM_API_KEY", "OPENAI_API_KEY"];
const GENERIC_KEY_VARS: &[&str] = &["JOBSCOUT_LLM_API_KEY"];
const JOOBLE_KEY_VARS: &[&str] = &["JOOBLE_API_KEY"];
const WEB3_TOKEN_VARS: &[&str] = &["WEB3_TOKEN"];
const CAREERJET_AFFID_VARS: &[&str] = &["CAREERJET_AFFID"];

impl LlmConfig {
    /// Key variables for the selected provider, so one vendor's key is never
    /// sent to another.
    fn key_vars(&self) -> &'static [&'static str] {
        match self
            .provider
            .as_deref()
            .unwrap_or("groq")
            .to_lowercase()
            .as_str()
        {
            "groq" => GROQ_KEY_VARS,
            "openai" => OPENAI_KEY_VARS,
            _ => GENERIC_KEY_VARS,
        }
    }
}

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let mut config = if config_exists() {
            load_config()?
        } else {
            Config::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|name| std::env::var(name).ok());
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let resolve = |vars: &[&str]| {
            vars.iter()
                .filter_map(|name| lookup(*name))
                .find(|value| !value.trim().is_empty())
        };

        if let Some(key) = resolve(self.llm.key_vars()) {
            self.llm.api_key = key;
        }
        if let Some(key) = resolve(JOOBLE_KEY_VARS) {
            self.jooble.api_key = key;
        }
        if let Some(token) = resolve(WEB3_TOKEN_VARS) {
            self.web3.token = token;
        }
        if let Some(affid) = resolve(CAREERJET_AFFID_VARS) {
            self.careerjet.affid = affid;
        }
    }
}

pub fn get_jobscout_dir() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home).join(JOBSCOUT_DIR)
}

pub fn get_config_path() -> PathBuf {
    get_jobscout_dir().join("config.toml")
}

pub fn get_input_history_path() -> PathBuf {
    get_jobscout_dir().join("history.txt")
}

pub fn ensure_jobscout_dir() -> Result<PathBuf> {
    let dir = get_jobscout_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).with_context(|| {
            format!("Failed to create jobscout directory at {}", dir.display())
        })?;
    }

    Ok(dir)
}

pub fn load_config() -> Result<Config> {
    load_config_from(&get_config_path())
}

pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!(
                "Config file not found. Run 'jobscout onboard' to set up your configuration."
            )
        } else {
            anyhow::anyhow!("Failed to read config from {}: {}", path.display(), e)
        }
    })?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config from {}", path.display()))
}

pub fn save_config(config: &Config) -> Result<()> {
    ensure_jobscout_dir()?;
    save_config_to(config, &get_config_path())
}

pub fn save_config_to(config: &Config, path: &Path) -> Result<()> {
    let content =
        toml::to_string_pretty(config).with_context(|| "Failed to serialize config to TOML")?;

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;

    Ok(())
}

pub fn config_exists() -> bool {
    get_config_path().exists()
}
