//! Progress spinner shown while waiting on the inspection API

use is_terminal::IsTerminal;
use std::io::{self, Write};
use std::time::Duration;
use tokio::sync::oneshot;

const SPINNER_CHARS: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];
const SPINNER_INTERVAL: Duration = Duration::from_millis(80);

/// Animated indicator on stderr, stopped when dropped. Does nothing when
/// stderr is not a terminal so piped output stays clean.
pub struct Spinner {
    stop_tx: Option<oneshot::Sender<()>>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        if !io::stderr().is_terminal() {
            return Self {
                stop_tx: None,
                handle: None,
            };
        }

        let (stop_tx, stop_rx) = oneshot::channel();
        let handle = tokio::spawn(Self::run(message.into(), stop_rx));

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    async fn run(message: String, mut stop_rx: oneshot::Receiver<()>) {
        let mut stderr = io::stderr();

        for spinner_char in SPINNER_CHARS.iter().cycle() {
            let _ = write!(stderr, "\r{} {}", spinner_char, message);
            let _ = stderr.flush();

            tokio::select! {
                _ = tokio::time::sleep(SPINNER_INTERVAL) => {},
                _ = &mut stop_rx => break,
            }
        }

        Self::clear_line();
    }

    fn clear_line() {
        let mut stderr = io::stderr();
        let _ = write!(stderr, "\r\x1b[K");
        let _ = stderr.flush();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(());
        }
        // Can't await in Drop
        if let Some(handle) = self.handle.take() {
            handle.abort();
            Self::clear_line();
        }
    }
}

/// Run a future with a spinner showing
pub async fn with_spinner<F, T>(message: impl Into<String>, future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    let _spinner = Spinner::start(message);
    future.await
}
