use std::io::{IsTerminal, Write};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_INTERVAL_MS: u64 = 120;

/// Spinner on stderr while a model or OCR request is in flight. Does nothing
/// visible when stderr is not a terminal.
pub struct AnimatedLogger {
    message: String,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        if !std::io::stderr().is_terminal() {
            log::info!("⏳ {}...", self.message);
            return;
        }

        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message = self.message.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        eprint!("\r{} {} ", message, SPINNER_FRAMES[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % SPINNER_FRAMES.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub async fn stop(&mut self, final_message: &str) {
        if self.halt().await {
            eprint!("\r\x1b[K✅  {}\n", final_message);
            let _ = std::io::stderr().flush();
        } else {
            log::info!("✅ {}", final_message);
        }
    }

    pub async fn error(&mut self, error_message: &str) {
        if self.halt().await {
            eprint!("\r\x1b[K❌ {}\n", error_message);
            let _ = std::io::stderr().flush();
        } else {
            log::error!("❌ {}", error_message);
        }
    }

    /// Stops the animation task; returns whether one was running.
    async fn halt(&mut self) -> bool {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        match self.task_handle.take() {
            Some(handle) => {
                let _ = handle.await;
                true
            }
            None => false,
        }
    }
}
