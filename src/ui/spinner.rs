use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::future::Future;
use std::time::Duration;

use crate::output;

const TICKS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", " "];
const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Awaits `future` while a braille spinner labelled `message` runs on stderr.
///
/// The spinner is cleared before the result is returned, so the caller can
/// print straight away. Nothing is drawn in quiet mode.
pub async fn with_spinner<F: Future>(message: &str, future: F) -> F::Output {
    let progress_bar = spinner_bar(message);
    let output = future.await;
    progress_bar.finish_and_clear();
    output
}

fn spinner_bar(message: &str) -> ProgressBar {
    if output::is_quiet() {
        return ProgressBar::hidden();
    }

    let progress_bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());
    progress_bar.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(TICKS),
    );
    progress_bar.set_message(message.to_string());
    progress_bar.enable_steady_tick(TICK_INTERVAL);
    progress_bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_spinner_returns_future_output() {
        let value = with_spinner("Working...", async { 42 }).await;
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn test_with_spinner_passes_errors_through() {
        let result: Result<(), &str> = with_spinner("Working...", async { Err("boom") }).await;
        assert_eq!(result, Err("boom"));
    }
}
