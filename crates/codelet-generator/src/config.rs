use codelet_core::CodeletError;
use codelet_ollama::{OllamaConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "llama3";
pub const DEFAULT_PROJECT: &str = "Eval Unit Testing";

const ENV_TRACING: &str = "CODELET_TRACING";
const ENV_PROJECT: &str = "CODELET_PROJECT";
const ENV_MODEL: &str = "CODELET_MODEL";
const ENV_TEMPERATURE: &str = "CODELET_TEMPERATURE";
const ENV_BASE_URL: &str = "OLLAMA_BASE_URL";

/// Whether run events are traced, and under which project name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TracingSettings {
    pub enabled: bool,
    pub project: String,
}

impl TracingSettings {
    pub fn enabled(project: impl Into<String>) -> Self {
        Self {
            enabled: true,
            project: project.into(),
        }
    }
}

impl Default for TracingSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            project: DEFAULT_PROJECT.to_string(),
        }
    }
}

/// Everything a `Generator` needs to know about its model and tracing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub model: String,
    pub base_url: String,
    pub temperature: f64,
    #[serde(default)]
    pub tracing: TracingSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            temperature: 0.0,
            tracing: TracingSettings::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Self::default()
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_tracing(mut self, tracing: TracingSettings) -> Self {
        self.tracing = tracing;
        self
    }

    /// Read overrides from the process environment. The environment is never written.
    pub fn from_env() -> Result<Self, CodeletError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup, falling back to defaults
    /// for missing keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CodeletError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(model) = lookup(ENV_MODEL).filter(|v| !v.trim().is_empty()) {
            config.model = model;
        }
        if let Some(url) = lookup(ENV_BASE_URL).filter(|v| !v.trim().is_empty()) {
            config.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TEMPERATURE).filter(|v| !v.trim().is_empty()) {
            config.temperature = parse_temperature(&raw)?;
        }
        if let Some(raw) = lookup(ENV_TRACING) {
            config.tracing.enabled = parse_flag(ENV_TRACING, &raw)?;
        }
        if let Some(project) = lookup(ENV_PROJECT).filter(|v| !v.trim().is_empty()) {
            config.tracing.project = project;
        }

        Ok(config)
    }

    pub fn ollama_config(&self) -> OllamaConfig {
        OllamaConfig::new(&self.model)
            .with_base_url(&self.base_url)
            .with_temperature(self.temperature)
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, CodeletError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CodeletError::Config(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

fn parse_temperature(raw: &str) -> Result<f64, CodeletError> {
    let value: f64 = raw.trim().parse().map_err(|e| {
        CodeletError::Config(format!("{ENV_TEMPERATURE} is not a number ({raw:?}): {e}"))
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(CodeletError::Config(format!(
            "{ENV_TEMPERATURE} must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}
