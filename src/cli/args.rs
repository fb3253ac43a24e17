use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lingua")]
#[command(about = "Translate text or speech with an AI chat completion API")]
#[command(version)]
#[command(subcommand_negates_reqs = true)]
pub struct Args {
    /// Text to translate
    #[arg(long, required_unless_present_any = ["listen", "audio_file"])]
    pub text: Option<String>,

    /// Source language name, ISO 639-1 code, or `auto` to detect it [default: English]
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Target language name or ISO 639-1 code [default: Spanish]
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Model name
    #[arg(short = 'm', long)]
    pub model: Option<String>,

    /// API base URL (OpenAI-compatible)
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Sampling temperature (0.0 - 2.0)
    #[arg(long)]
    pub temperature: Option<f32>,

    /// Maximum tokens in the translation
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// HTTP timeout in seconds (no timeout by default)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Record the text to translate from the default microphone
    #[arg(short = 'l', long, conflicts_with_all = ["text", "audio_file"])]
    pub listen: bool,

    /// Transcribe the text to translate from an audio file
    #[arg(short = 'a', long, value_name = "PATH", conflicts_with = "text")]
    pub audio_file: Option<PathBuf>,

    /// Speak the translation aloud after printing it
    #[arg(long)]
    pub speak: bool,

    /// Suppress status messages
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Edit default settings interactively
    Configure {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// List supported language codes
    Languages,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_text_is_required() {
        let err = Args::try_parse_from(["lingua"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_text_with_defaults() {
        let args = Args::try_parse_from(["lingua", "--text", "Hello"]).unwrap();
        assert_eq!(args.text.as_deref(), Some("Hello"));
        assert!(args.source.is_none());
        assert!(args.target.is_none());
        assert!(!args.listen);
    }

    #[test]
    fn test_listen_replaces_text() {
        let args = Args::try_parse_from(["lingua", "--listen", "--speak"]).unwrap();
        assert!(args.listen);
        assert!(args.speak);
        assert!(args.text.is_none());
    }

    #[test]
    fn test_listen_conflicts_with_text() {
        let err = Args::try_parse_from(["lingua", "--listen", "--text", "hi"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_subcommand_does_not_need_text() {
        let args = Args::try_parse_from(["lingua", "languages"]).unwrap();
        assert!(matches!(args.command, Some(Command::Languages)));
    }

    #[test]
    fn test_audio_file_replaces_text() {
        let args = Args::try_parse_from(["lingua", "--audio-file", "clip.wav"]).unwrap();
        assert_eq!(args.audio_file, Some(PathBuf::from("clip.wav")));
    }
}
