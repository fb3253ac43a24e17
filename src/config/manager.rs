use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::paths;
use crate::translation::{AUTO_DETECT, is_auto_detect, resolve_language};

pub const DEFAULT_SOURCE_LANGUAGE: &str = "English";
pub const DEFAULT_TARGET_LANGUAGE: &str = "Spanish";
pub const DEFAULT_MODEL: &str = "llama3-8b-8192";
pub const DEFAULT_ENDPOINT: &str = "https://api.groq.com/openai";
pub const DEFAULT_API_KEY_ENV: &str = "GROQ_API_KEY";
pub const DEFAULT_TEMPERATURE: f32 = 0.2;
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3-turbo";
pub const DEFAULT_CALIBRATION_MS: u64 = 1000;
pub const DEFAULT_PAUSE_MS: u64 = 800;
pub const DEFAULT_MAX_UTTERANCE_SECS: u64 = 30;

/// Translation defaults in the `[defaults]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default source language (name or ISO 639-1 code).
    pub source: Option<String>,
    /// Default target language (name or ISO 639-1 code).
    pub target: Option<String>,
    /// Chat completion model.
    pub model: Option<String>,
    /// Base URL of the OpenAI-compatible API.
    pub endpoint: Option<String>,
    /// Environment variable holding the bearer token.
    pub api_key_env: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    /// HTTP timeout in seconds. Requests never time out when unset.
    pub timeout_secs: Option<u64>,
}

impl DefaultsConfig {
    /// Name of the environment variable the API key is read from.
    pub fn api_key_env_name(&self) -> &str {
        self.api_key_env
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_API_KEY_ENV)
    }

    /// Reads the API key from the configured environment variable.
    ///
    /// Empty values are treated as unset.
    pub fn get_api_key(&self) -> Option<String> {
        std::env::var(self.api_key_env_name())
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}

/// Speech input/output settings in the `[speech]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Speech-to-text model.
    pub model: Option<String>,
    /// Text-to-speech program. Defaults to `say` on macOS, `espeak-ng` elsewhere.
    pub tts_command: Option<String>,
    /// Extra arguments placed before the text.
    pub tts_args: Option<Vec<String>>,
    /// Ambient noise sampling window before listening.
    pub calibration_ms: Option<u64>,
    /// Trailing silence that ends an utterance.
    pub pause_ms: Option<u64>,
    pub max_utterance_secs: Option<u64>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/lingua/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Resolved speech settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSpeech {
    pub model: String,
    pub tts_command: String,
    pub tts_args: Vec<String>,
    pub calibration: Duration,
    pub pause: Duration,
    pub max_utterance: Duration,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Source language name as sent to the model, or `auto` to detect it from the text.
    pub source_language: String,
    /// Target language name as sent to the model.
    pub target_language: String,
    pub model: String,
    pub endpoint: String,
    pub api_key: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Option<Duration>,
    pub speech: ResolvedSpeech,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source: Option<String>,
    pub target: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub timeout_secs: Option<u64>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Precedence is CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if a value is out of range, a language name is blank, or
/// the API key environment variable is not set.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let defaults = &config_file.defaults;

    let source_language = resolve_language(
        options
            .source
            .as_deref()
            .or(defaults.source.as_deref())
            .unwrap_or(DEFAULT_SOURCE_LANGUAGE),
    )
    .context("Invalid source language")?;

    let target_language = resolve_language(
        options
            .target
            .as_deref()
            .or(defaults.target.as_deref())
            .unwrap_or(DEFAULT_TARGET_LANGUAGE),
    )
    .context("Invalid target language")?;
    if is_auto_detect(&target_language) {
        bail!("Invalid target language: only the source language can be '{AUTO_DETECT}'");
    }

    let model = options
        .model
        .as_ref()
        .or(defaults.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = options
        .endpoint
        .as_ref()
        .or(defaults.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let temperature = options
        .temperature
        .or(defaults.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Invalid temperature {temperature}: must be between 0.0 and 2.0");
    }

    let max_tokens = options
        .max_tokens
        .or(defaults.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);
    if max_tokens == 0 {
        bail!("Invalid max_tokens: must be greater than 0");
    }

    let timeout = options
        .timeout_secs
        .or(defaults.timeout_secs)
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs);

    let Some(api_key) = defaults.get_api_key() else {
        let env_var = defaults.api_key_env_name();
        bail!(
            "Missing API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             It may also be placed in a .env file in the current directory."
        );
    };

    Ok(ResolvedConfig {
        source_language,
        target_language,
        model,
        endpoint,
        api_key,
        temperature,
        max_tokens,
        timeout,
        speech: resolve_speech(&config_file.speech),
    })
}

fn resolve_speech(speech: &SpeechConfig) -> ResolvedSpeech {
    ResolvedSpeech {
        model: speech
            .model
            .clone()
            .unwrap_or_else(|| DEFAULT_TRANSCRIPTION_MODEL.to_string()),
        tts_command: speech
            .tts_command
            .clone()
            .unwrap_or_else(|| default_tts_command().to_string()),
        tts_args: speech.tts_args.clone().unwrap_or_default(),
        calibration: Duration::from_millis(speech.calibration_ms.unwrap_or(DEFAULT_CALIBRATION_MS)),
        pause: Duration::from_millis(speech.pause_ms.unwrap_or(DEFAULT_PAUSE_MS)),
        max_utterance: Duration::from_secs(
            speech
                .max_utterance_secs
                .unwrap_or(DEFAULT_MAX_UTTERANCE_SECS),
        ),
    }
}

const fn default_tts_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak-ng"
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/lingua/config.toml`
    /// or `~/.config/lingua/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, returning defaults when it does not exist.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }
}
