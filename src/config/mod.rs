//! Configuration file management and option resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, DEFAULT_TEMPERATURE,
    DefaultsConfig, ResolveOptions, ResolvedConfig, ResolvedSpeech, SpeechConfig,
    resolve_config,
};
