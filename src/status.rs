// File: ./src/status.rs
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Sent by [`StatusTimer`] once a message has been on screen long enough.
/// Carries the generation of the message it was scheduled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusExpired(pub u64);

/// Single-shot, cancellable auto-clear for the status line.
#[derive(Debug)]
pub struct StatusTimer {
    timeout: Duration,
    tx: mpsc::Sender<StatusExpired>,
    pending: Option<JoinHandle<()>>,
}

impl StatusTimer {
    pub fn new(timeout: Duration, tx: mpsc::Sender<StatusExpired>) -> Self {
        Self {
            timeout,
            tx,
            pending: None,
        }
    }

    /// Arms the timer for `generation`, aborting whatever was pending.
    /// Must be called from inside a tokio runtime.
    pub fn schedule(&mut self, generation: u64) {
        self.cancel();
        let deadline = Instant::now() + self.timeout;
        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep_until(deadline).await;
            let _ = tx.send(StatusExpired(generation)).await;
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for StatusTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The transient feedback line: Empty -> Set -> Empty.
///
/// Every `set` bumps the generation, so an expiry scheduled for an older
/// message can never clear a newer one.
#[derive(Debug, Default)]
pub struct StatusLine {
    text: Option<String>,
    generation: u64,
    timer: Option<StatusTimer>,
}

impl StatusLine {
    pub fn with_timer(timer: StatusTimer) -> Self {
        Self {
            timer: Some(timer),
            ..Self::default()
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn set(&mut self, message: impl Into<String>) -> u64 {
        self.generation += 1;
        self.text = Some(message.into());
        if let Some(timer) = &mut self.timer {
            timer.schedule(self.generation);
        }
        self.generation
    }

    pub fn clear(&mut self) {
        self.generation += 1;
        self.text = None;
        if let Some(timer) = &mut self.timer {
            timer.cancel();
        }
    }

    /// Applies an expiry. Returns `true` if it cleared the current message.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || self.text.is_none() {
            tracing::trace!(generation, current = self.generation, "ignoring stale status expiry");
            return false;
        }
        self.text = None;
        true
    }
}
