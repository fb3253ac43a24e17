//! # lingua - Translation CLI
//!
//! `lingua` translates text with an OpenAI-compatible chat completion API
//! (Groq by default). Input can also be spoken: one utterance is recorded from
//! the microphone, or read from an audio file, and transcribed before
//! translation. The result can be spoken aloud through a local
//! text-to-speech program.
//!
//! ## Quick Start
//!
//! ```bash
//! export GROQ_API_KEY=...
//!
//! # English to Spanish
//! lingua --text "Hello"
//!
//! # Pick languages by name or ISO 639-1 code
//! lingua --text "Good morning" --source en --target Japanese
//!
//! # Speak, translate, and hear the result
//! lingua --listen --target French --speak
//! ```
//!
//! ## Configuration
//!
//! Defaults are read from `~/.config/lingua/config.toml`:
//!
//! ```toml
//! [defaults]
//! target = "German"
//! model = "llama3-8b-8192"
//! api_key_env = "GROQ_API_KEY"
//!
//! [speech]
//! tts_command = "espeak-ng"
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and option resolution.
pub mod config;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Speech capture, recognition and synthesis.
pub mod speech;

/// Translation client for OpenAI-compatible APIs.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;
