use anyhow::{Result, bail};
use std::path::PathBuf;

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::speech::{
    AudioFile, CloudRecognizer, LocalSpeaker, Microphone, transcribe_or_empty,
};
use crate::translation::{
    TranslationClient, TranslationOptions, TranslationRequest, detect_language, is_auto_detect,
    iso_639_1_code,
};
use crate::ui::{Style, with_spinner};

/// Where the text to translate comes from.
#[derive(Debug, Clone)]
pub enum TextInput {
    Text(String),
    Microphone,
    AudioFile(PathBuf),
}

pub struct TranslateOptions {
    pub input: TextInput,
    pub resolve: ResolveOptions,
    pub speak: bool,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    if let TextInput::Text(text) = &options.input
        && text.trim().is_empty()
    {
        bail!("Input text is empty");
    }

    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let config = resolve_config(&options.resolve, &config_file)?;

    let from_speech = !matches!(options.input, TextInput::Text(_));
    let text = match options.input {
        TextInput::Text(text) => text,
        TextInput::Microphone => {
            let microphone = Microphone {
                calibration: config.speech.calibration,
                pause: config.speech.pause,
                max_utterance: config.speech.max_utterance,
            };
            crate::status!("Adjusting for ambient noise...");
            let recognizer = build_recognizer(&config)?;
            transcribe_or_empty(microphone, &recognizer).await
        }
        TextInput::AudioFile(path) => {
            let recognizer = build_recognizer(&config)?;
            transcribe_or_empty(AudioFile::new(path), &recognizer).await
        }
    };

    if text.is_empty() {
        crate::warn!("No speech recognized; nothing to translate");
        return Ok(());
    }
    if from_speech {
        crate::status!("{} {text}", Style::label("Heard:"));
    }

    let source_language = if is_auto_detect(&config.source_language) {
        let detected = detect_language(&text);
        crate::status!("{} {}", Style::label("Detected:"), Style::value(detected));
        detected.to_string()
    } else {
        config.source_language.clone()
    };

    let translation = translate_text(&config, source_language, text).await?;
    println!("{translation}");

    if options.speak {
        LocalSpeaker::from_config(&config.speech)
            .speak(&translation)
            .await?;
    }

    Ok(())
}

async fn translate_text(
    config: &ResolvedConfig,
    source_language: String,
    text: String,
) -> Result<String> {
    let client = TranslationClient::new(
        config.endpoint.clone(),
        config.api_key.clone(),
        TranslationOptions {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            timeout: config.timeout,
        },
    )?;

    let request = TranslationRequest {
        text,
        source_language,
        target_language: config.target_language.clone(),
    };

    let translation = with_spinner("Translating...", client.translate(&request)).await?;

    Ok(translation)
}

fn build_recognizer(config: &ResolvedConfig) -> Result<CloudRecognizer> {
    let recognizer = CloudRecognizer::new(
        config.endpoint.clone(),
        config.api_key.clone(),
        config.speech.model.clone(),
        config.timeout,
    )?
    // With auto-detection the service picks the spoken language itself
    .with_language(iso_639_1_code(&config.source_language).map(str::to_string));

    Ok(recognizer)
}
