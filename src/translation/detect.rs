//! Source language detection for `--source auto`.

use super::language::{DEFAULT_DETECTED_LANGUAGE, language_name};

/// ISO 639-3 codes reported by the detector, mapped to the table's codes.
const ISO_639_3_TO_1: &[(&str, &str)] = &[
    ("afr", "af"),
    ("amh", "am"),
    ("ara", "ar"),
    ("aze", "az"),
    ("bel", "be"),
    ("ben", "bn"),
    ("bul", "bg"),
    ("cat", "ca"),
    ("ces", "cs"),
    ("cmn", "zh"),
    ("dan", "da"),
    ("deu", "de"),
    ("ell", "el"),
    ("eng", "en"),
    ("est", "et"),
    ("fin", "fi"),
    ("fra", "fr"),
    ("guj", "gu"),
    ("heb", "he"),
    ("hin", "hi"),
    ("hrv", "hr"),
    ("hun", "hu"),
    ("hye", "hy"),
    ("ind", "id"),
    ("ita", "it"),
    ("jpn", "ja"),
    ("kan", "kn"),
    ("kat", "ka"),
    ("khm", "km"),
    ("kor", "ko"),
    ("lat", "la"),
    ("lav", "lv"),
    ("lit", "lt"),
    ("mal", "ml"),
    ("mar", "mr"),
    ("mkd", "mk"),
    ("mya", "my"),
    ("nep", "ne"),
    ("nld", "nl"),
    ("nob", "no"),
    ("pan", "pa"),
    ("pes", "fa"),
    ("pol", "pl"),
    ("por", "pt"),
    ("ron", "ro"),
    ("rus", "ru"),
    ("sin", "si"),
    ("slk", "sk"),
    ("slv", "sl"),
    ("spa", "es"),
    ("srp", "sr"),
    ("swe", "sv"),
    ("tam", "ta"),
    ("tel", "te"),
    ("tgl", "tl"),
    ("tha", "th"),
    ("tur", "tr"),
    ("ukr", "uk"),
    ("urd", "ur"),
    ("uzb", "uz"),
    ("vie", "vi"),
];

/// Guesses the language `text` is written in and returns its table name.
///
/// Falls back to English when nothing is detected or the detected language
/// is not in the table.
pub fn detect_language(text: &str) -> &'static str {
    let Some(info) = whatlang::detect(text) else {
        tracing::debug!("no language detected, using fallback");
        return DEFAULT_DETECTED_LANGUAGE;
    };

    let iso_639_3 = info.lang().code();
    tracing::debug!(
        lang = iso_639_3,
        confidence = info.confidence(),
        reliable = info.is_reliable(),
        "language detected"
    );

    ISO_639_3_TO_1
        .iter()
        .find(|(long, _)| *long == iso_639_3)
        .and_then(|(_, code)| language_name(code))
        .unwrap_or(DEFAULT_DETECTED_LANGUAGE)
}
