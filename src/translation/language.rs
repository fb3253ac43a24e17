//! Language names and ISO 639-1 codes.

use anyhow::{Result, bail};

use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// Source language value that asks for detection from the text itself.
pub const AUTO_DETECT: &str = "auto";

/// Used when detection finds nothing it recognises.
pub const DEFAULT_DETECTED_LANGUAGE: &str = "English";

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::value(name));
    }
    println!();
    println!(
        "  {:5} {}",
        Style::code(AUTO_DETECT),
        Style::secondary("detect the source language from the text")
    );
}

pub fn is_auto_detect(language: &str) -> bool {
    language.trim().eq_ignore_ascii_case(AUTO_DETECT)
}

/// Looks up the language name for a code (case-insensitive, so `JA` and
/// `zh-tw` work).
pub fn language_name(code: &str) -> Option<&'static str> {
    let code = code.trim();
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Looks up the ISO 639-1 code for a language name (case-insensitive).
pub fn language_code(name: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name.trim()))
        .map(|(code, _)| *code)
}

/// Two-letter ISO 639-1 code for a language name, as speech-to-text
/// services expect it.
///
/// Region subtags are dropped (`zh-TW` becomes `zh`) and Filipino maps to
/// Tagalog. Returns `None` for names outside the table.
pub fn iso_639_1_code(name: &str) -> Option<&'static str> {
    let code = language_code(name).or_else(|| language_name(name).and_then(language_code))?;

    match code {
        "fil" => Some("tl"),
        code => code.split('-').next().filter(|primary| primary.len() == 2),
    }
}

/// Resolves user input to the language name sent to the model.
///
/// Accepts an ISO 639-1 code (`ja`, `zh-TW`) or a language name. Known names
/// are returned with canonical capitalisation; anything else is passed through
/// trimmed, since the model understands far more languages than the table
/// lists. `auto` is returned as [`AUTO_DETECT`].
///
/// # Errors
///
/// Returns an error if the input is blank.
pub fn resolve_language(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        bail!("Language must not be empty");
    }

    if is_auto_detect(input) {
        return Ok(AUTO_DETECT.to_string());
    }

    if let Some(name) = language_name(input) {
        return Ok(name.to_string());
    }

    if let Some((_, name)) = SUPPORTED_LANGUAGES
        .iter()
        .find(|(_, name)| name.eq_ignore_ascii_case(input))
    {
        return Ok((*name).to_string());
    }

    tracing::debug!(language = input, "language not in table, passing through");
    Ok(input.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_language_code() {
        assert_eq!(resolve_language("ja").unwrap(), "Japanese");
        assert_eq!(resolve_language("es").unwrap(), "Spanish");
        assert_eq!(resolve_language("zh-TW").unwrap(), "Chinese (Traditional)");
    }

    #[test]
    fn test_resolve_language_name_is_canonicalised() {
        assert_eq!(resolve_language("english").unwrap(), "English");
        assert_eq!(resolve_language("  GERMAN ").unwrap(), "German");
    }

    #[test]
    fn test_resolve_language_unknown_passes_through() {
        assert_eq!(
            resolve_language("Brazilian Portuguese").unwrap(),
            "Brazilian Portuguese"
        );
    }

    #[test]
    fn test_resolve_language_blank() {
        assert!(resolve_language("").is_err());
        assert!(resolve_language("   ").is_err());
    }

    #[test]
    fn test_language_code_lookup() {
        assert_eq!(language_code("Japanese"), Some("ja"));
        assert_eq!(language_code("spanish"), Some("es"));
        assert_eq!(language_code("Klingon"), None);
    }

    #[test]
    fn test_language_name_ignores_case() {
        assert_eq!(language_name("ko"), Some("Korean"));
        assert_eq!(language_name("JA"), Some("Japanese"));
        assert_eq!(language_name("zh-tw"), Some("Chinese (Traditional)"));
        assert_eq!(language_name("JP"), None);
    }

    #[test]
    fn test_resolve_language_uppercase_code() {
        assert_eq!(resolve_language("JA").unwrap(), "Japanese");
        assert_eq!(resolve_language("ZH-tw").unwrap(), "Chinese (Traditional)");
    }

    #[test]
    fn test_resolve_language_auto() {
        assert_eq!(resolve_language(" Auto ").unwrap(), AUTO_DETECT);
        assert!(is_auto_detect("AUTO"));
        assert!(!is_auto_detect("Austrian"));
    }

    #[test]
    fn test_iso_639_1_code_is_two_letters() {
        assert_eq!(iso_639_1_code("Japanese"), Some("ja"));
        assert_eq!(iso_639_1_code("Chinese (Traditional)"), Some("zh"));
        assert_eq!(iso_639_1_code("zh-TW"), Some("zh"));
        assert_eq!(iso_639_1_code("Filipino"), Some("tl"));
        assert_eq!(iso_639_1_code("Klingon"), None);
        assert_eq!(iso_639_1_code(AUTO_DETECT), None);
    }

    #[test]
    fn test_every_table_entry_has_a_two_letter_hint() {
        for (_, name) in SUPPORTED_LANGUAGES {
            let code = iso_639_1_code(name).unwrap();
            assert_eq!(code.len(), 2, "{name} -> {code}");
        }
    }
}
