use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::state::ensure_skyplan_home;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub weather: WeatherSection,
    pub llm: LlmSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSection {
    /// OpenWeatherMap API key; env `OPENWEATHER_API_KEY` takes precedence.
    pub api_key: Option<String>,
    pub default_city: String,
}

impl Default for WeatherSection {
    fn default() -> Self {
        Self {
            api_key: None,
            default_city: "Kathmandu".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSection {
    /// When false, task advisories come from the weather-threshold backstop only.
    pub enabled: bool,
    /// "anthropic" or "openai".
    pub provider: String,
    pub model: String,
    /// Env `ANTHROPIC_API_KEY` / `OPENAI_API_KEY` takes precedence.
    pub api_key: Option<String>,
}

impl Default for LlmSection {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "anthropic".to_string(),
            model: "claude-3-5-haiku-latest".to_string(),
            api_key: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_skyplan_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    Ok(toml::from_str(&s).context("parse config.toml")?)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

/// Resolve the weather API key: env first, then config.
pub fn weather_api_key(cfg: &Config) -> Result<String> {
    if let Ok(key) = std::env::var("OPENWEATHER_API_KEY")
        && !key.is_empty()
    {
        return Ok(key);
    }
    if let Some(key) = &cfg.weather.api_key
        && !key.is_empty()
    {
        return Ok(key.clone());
    }
    bail!(
        "missing OpenWeatherMap API key; set OPENWEATHER_API_KEY or weather.api_key in {}",
        config_path()?.display()
    )
}

/// Resolve the LLM key for the configured provider, if any.
pub fn llm_api_key(cfg: &Config) -> Option<String> {
    let env_name = match cfg.llm.provider.as_str() {
        "openai" => "OPENAI_API_KEY",
        _ => "ANTHROPIC_API_KEY",
    };
    if let Ok(key) = std::env::var(env_name)
        && !key.is_empty()
    {
        return Some(key);
    }
    cfg.llm.api_key.clone().filter(|k| !k.is_empty())
}
