mod client;
mod detect;
mod error;
mod language;
mod prompt;

pub use client::{TranslationClient, TranslationOptions, TranslationRequest};
pub use error::TranslationError;
pub use detect::detect_language;
pub use language::{
    AUTO_DETECT, SUPPORTED_LANGUAGES, is_auto_detect, iso_639_1_code, language_code,
    language_name, print_languages, resolve_language,
};
pub use prompt::build_system_prompt;
