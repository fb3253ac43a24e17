use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use lingua_cli::cli::commands::configure;
use lingua_cli::cli::commands::translate::{self, TextInput, TranslateOptions};
use lingua_cli::cli::{Args, Command};
use lingua_cli::config::ResolveOptions;
use lingua_cli::output::{self, OutputConfig};
use lingua_cli::translation::print_languages;
use lingua_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    init_tracing(args.verbose);
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("{} {err:#}", Style::error("Error:"));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<()> {
    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Configure { show }) => {
            configure::run_configure(show)?;
        }
        None => {
            let input = match (args.text, args.audio_file) {
                (Some(text), _) => TextInput::Text(text),
                (None, Some(path)) => TextInput::AudioFile(path),
                (None, None) => TextInput::Microphone,
            };

            let options = TranslateOptions {
                input,
                resolve: ResolveOptions {
                    source: args.source,
                    target: args.target,
                    model: args.model,
                    endpoint: args.endpoint,
                    temperature: args.temperature,
                    max_tokens: args.max_tokens,
                    timeout_secs: args.timeout,
                },
                speak: args.speak,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "warn,lingua_cli=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
