/// System instruction that restricts the model to translating.
pub fn build_system_prompt(source_language: &str, target_language: &str) -> String {
    format!(
        "You are a translator. Translate from {source_language} to {target_language}. \
         Only provide the translation."
    )
}
