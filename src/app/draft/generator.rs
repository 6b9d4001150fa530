//! Draft submission state machine
//!
//! `Empty -> Pending -> {Success, Failed}`; from `Success` or `Failed` a new
//! submission goes back to `Pending`. Each submission runs on its own thread
//! and reports back over a channel that the UI drains once per frame. Every
//! submission carries a sequence number and only the completion of the most
//! recent one is accepted.

#![warn(clippy::all, rust_2018_idioms)]

use super::client::TextGenerator;
use super::error::DraftError;
use super::prompt::{DraftField, DraftForm};
use crate::{log_debug, log_error, log_info, log_trace, log_warn};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DraftResult {
    #[default]
    Empty,
    Pending,
    Success(String),
    Failed(DraftError),
}

impl DraftResult {
    pub fn is_pending(&self) -> bool {
        matches!(self, DraftResult::Pending)
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            DraftResult::Success(text) => Some(text),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DraftError> {
        match self {
            DraftResult::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clipboard unavailable: {0}")]
pub struct ClipboardError(pub String);

/// Destination of the copy button
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Name prefix of the threads that run draft requests
pub const WORKER_THREAD_PREFIX: &str = "draft-request-";

/// True for threads started by [`DraftGenerator::submit`]. Panics there are
/// turned into failed drafts and do not bring the app down.
pub fn is_draft_worker(thread_name: Option<&str>) -> bool {
    thread_name.is_some_and(|name| name.starts_with(WORKER_THREAD_PREFIX))
}

/// Outcome of one background request
#[derive(Debug)]
struct Completion {
    sequence: u64,
    outcome: Result<String, DraftError>,
}

/// Run one request to completion. A panicking generator ends as a transport
/// failure so the submission never stays pending.
fn run_request(generator: Arc<dyn TextGenerator>, prompt: String) -> Result<String, DraftError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| DraftError::Transport(format!("failed to start async runtime: {}", e)))?;

    let task = runtime.spawn(async move { generator.generate(&prompt).await });
    match runtime.block_on(task) {
        Ok(outcome) => outcome,
        Err(e) if e.is_panic() => {
            log_error!("Text generator panicked while drafting");
            Err(DraftError::Transport("draft task panicked".to_string()))
        }
        Err(e) => Err(DraftError::Transport(format!("draft task failed: {}", e))),
    }
}

pub struct DraftGenerator {
    form: DraftForm,
    result: DraftResult,
    generator: Arc<dyn TextGenerator>,
    latest_sequence: u64,
    completion_sender: mpsc::Sender<Completion>,
    completion_receiver: mpsc::Receiver<Completion>,
}

impl std::fmt::Debug for DraftGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DraftGenerator")
            .field("form", &self.form)
            .field("result", &self.result)
            .field("latest_sequence", &self.latest_sequence)
            .finish_non_exhaustive()
    }
}

impl DraftGenerator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        let (completion_sender, completion_receiver) = mpsc::channel();
        Self {
            form: DraftForm::default(),
            result: DraftResult::Empty,
            generator,
            latest_sequence: 0,
            completion_sender,
            completion_receiver,
        }
    }

    pub fn form(&self) -> &DraftForm {
        &self.form
    }

    pub fn update_field(&mut self, field: DraftField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Direct access for text widgets
    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        self.form.get_mut(field)
    }

    pub fn prompt_preview(&self) -> String {
        self.form.build_prompt()
    }

    pub fn result(&self) -> &DraftResult {
        &self.result
    }

    pub fn is_pending(&self) -> bool {
        self.result.is_pending()
    }

    /// Start a new request with the current form. Returns the sequence number
    /// assigned to it.
    pub fn submit(&mut self) -> u64 {
        let prompt = self.form.build_prompt();
        self.latest_sequence += 1;
        let sequence = self.latest_sequence;
        self.result = DraftResult::Pending;

        log_info!("Submitting draft request #{}", sequence);
        log_debug!("Draft prompt #{}:\n{}", sequence, prompt);

        let generator = Arc::clone(&self.generator);
        let sender = self.completion_sender.clone();

        // egui owns the main thread, so each request gets its own runtime
        let spawned = std::thread::Builder::new()
            .name(format!("{}{}", WORKER_THREAD_PREFIX, sequence))
            .spawn(move || {
                let outcome = run_request(generator, prompt);
                // The receiver is gone when the app has shut down
                let _ = sender.send(Completion { sequence, outcome });
            });

        if let Err(e) = spawned {
            log_warn!("Could not start draft request #{}: {}", sequence, e);
            self.complete(Completion {
                sequence,
                outcome: Err(DraftError::Transport(format!(
                    "failed to start request thread: {}",
                    e
                ))),
            });
        }

        sequence
    }

    /// Drain finished requests. Returns true when the visible result changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(completion) = self.completion_receiver.try_recv() {
            changed |= self.complete(completion);
        }
        changed
    }

    /// Wait up to `timeout` for one finished request, then drain the rest.
    pub fn poll_timeout(&mut self, timeout: Duration) -> bool {
        match self.completion_receiver.recv_timeout(timeout) {
            Ok(completion) => {
                let changed = self.complete(completion);
                self.poll() || changed
            }
            Err(_) => false,
        }
    }

    fn complete(&mut self, completion: Completion) -> bool {
        if completion.sequence != self.latest_sequence {
            log_trace!(
                "Dropping stale draft response #{} (latest is #{})",
                completion.sequence,
                self.latest_sequence
            );
            return false;
        }

        self.result = match completion.outcome {
            Ok(text) => {
                log_info!("Draft request #{} succeeded", completion.sequence);
                DraftResult::Success(text)
            }
            Err(err) => {
                log_warn!(
                    "Draft request #{} failed ({:?}): {}",
                    completion.sequence,
                    err.kind(),
                    err
                );
                DraftResult::Failed(err)
            }
        };
        true
    }

    /// Copy the generated text. Only a successful draft is ever written; in any
    /// other state this returns `Ok(false)` without touching the clipboard.
    pub fn copy_result_to_clipboard(
        &self,
        clipboard: &mut dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        match &self.result {
            DraftResult::Success(text) => {
                clipboard.set_text(text)?;
                log_debug!("Copied draft to clipboard");
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
