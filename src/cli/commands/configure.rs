//! Configure command handler for editing default settings.

use anyhow::{Result, bail};
use inquire::{CustomType, Select, Text};
use std::fmt;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE, DEFAULT_TEMPERATURE,
    DefaultsConfig,
};
use crate::translation::{AUTO_DETECT, SUPPORTED_LANGUAGES, resolve_language};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current configuration; otherwise prompts for each
/// default and saves the result.
pub fn run_configure(show: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if show {
        let config = manager.load_or_default()?;
        print_config(&manager, &config);
        return Ok(());
    }

    handle_prompt_cancellation(|| run_configure_inner(&manager))
}

fn run_configure_inner(manager: &ConfigManager) -> Result<()> {
    let mut config = manager.load_or_default()?;
    let current = config.defaults.clone();

    print_config(manager, &config);

    let source = select_language(
        "Default source language:",
        current.source.as_deref().unwrap_or(DEFAULT_SOURCE_LANGUAGE),
        true,
    )?;
    let target = select_language(
        "Default target language:",
        current.target.as_deref().unwrap_or(DEFAULT_TARGET_LANGUAGE),
        false,
    )?;

    let model = prompt_text("Model:", current.model.as_deref().unwrap_or(DEFAULT_MODEL))?;
    let endpoint = prompt_text(
        "API endpoint:",
        current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT),
    )?;
    let api_key_env = prompt_text(
        "API key environment variable:",
        current.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV),
    )?;

    let temperature = CustomType::<f32>::new("Temperature:")
        .with_default(current.temperature.unwrap_or(DEFAULT_TEMPERATURE))
        .with_error_message("Enter a number between 0.0 and 2.0")
        .prompt()?;
    if !(0.0..=2.0).contains(&temperature) {
        bail!("Temperature must be between 0.0 and 2.0");
    }

    let max_tokens = CustomType::<u32>::new("Max tokens:")
        .with_default(current.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS))
        .with_error_message("Enter a positive whole number")
        .prompt()?;
    if max_tokens == 0 {
        bail!("Max tokens must be greater than 0");
    }

    config.defaults = DefaultsConfig {
        source: Some(source),
        target: Some(target),
        model: Some(model),
        endpoint: Some(endpoint),
        api_key_env: Some(api_key_env),
        temperature: Some(temperature),
        max_tokens: Some(max_tokens),
        timeout_secs: current.timeout_secs,
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let defaults = &config.defaults;
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    let rows = [
        ("source", defaults.source.clone()),
        ("target", defaults.target.clone()),
        ("model", defaults.model.clone()),
        ("endpoint", defaults.endpoint.clone()),
        ("api_key_env", defaults.api_key_env.clone()),
        ("temperature", defaults.temperature.map(|t| t.to_string())),
        ("max_tokens", defaults.max_tokens.map(|t| t.to_string())),
        ("timeout_secs", defaults.timeout_secs.map(|t| t.to_string())),
        ("speech.model", config.speech.model.clone()),
        ("speech.tts_command", config.speech.tts_command.clone()),
    ];
    for (label, value) in rows {
        println!(
            "  {:<20} {}",
            Style::label(label),
            value.map_or_else(not_set, Style::value)
        );
    }

    let key_state = if defaults.get_api_key().is_some() {
        Style::success("(set)")
    } else {
        Style::warning("(not set)")
    };
    println!(
        "  {:<20} {}",
        Style::label(defaults.api_key_env_name()),
        key_state
    );
    println!();
}

fn prompt_text(message: &str, default: &str) -> Result<String> {
    let value = Text::new(message).with_default(default).prompt()?;
    let value = value.trim();

    if value.is_empty() {
        bail!("{} cannot be empty", message.trim_end_matches(':'));
    }

    Ok(value.to_string())
}

/// One entry in the language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
struct LanguageChoice {
    /// Value stored in the config file.
    name: String,
    label: Option<&'static str>,
}

impl fmt::Display for LanguageChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label {
            Some(label) => write!(f, "{} ({label})", self.name),
            None => write!(f, "{} (current)", self.name),
        }
    }
}

/// Builds the picker entries and the index of `current` among them.
///
/// A value outside the table (a passed-through name) is offered first so
/// accepting the default keeps it.
fn language_choices(current: &str, allow_auto: bool) -> (Vec<LanguageChoice>, usize) {
    let mut choices: Vec<LanguageChoice> = SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| LanguageChoice {
            name: (*name).to_string(),
            label: Some(*code),
        })
        .collect();
    if allow_auto {
        choices.insert(
            0,
            LanguageChoice {
                name: AUTO_DETECT.to_string(),
                label: Some("detect from text"),
            },
        );
    }

    let current = current.trim();
    let known = resolve_language(current)
        .ok()
        .and_then(|name| choices.iter().position(|choice| choice.name == name));

    match known {
        Some(index) => (choices, index),
        None if current.is_empty() => (choices, 0),
        None => {
            choices.insert(
                0,
                LanguageChoice {
                    name: current.to_string(),
                    label: None,
                },
            );
            (choices, 0)
        }
    }
}

fn select_language(message: &str, current: &str, allow_auto: bool) -> Result<String> {
    let (choices, cursor) = language_choices(current, allow_auto);

    let selection = Select::new(message, choices)
        .with_starting_cursor(cursor)
        .prompt()?;

    // Store the name, not the code; it is what the model is told
    Ok(selection.name)
}
