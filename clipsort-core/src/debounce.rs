//! Debounced classification for live typing.
//!
//! A front-end that classifies as the user types should not run the
//! classifier on every keystroke. [`spawn_debounced_classifier`] starts a
//! background task that holds only the most recent text and classifies it
//! once no newer text has arrived for the idle period.

use anyhow::{anyhow, Result};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::classification::ClassificationResult;
use crate::engine::ContentClassifier;

/// Capacity of the input and output channels.
const CHANNEL_CAPACITY: usize = 64;

/// Handle to a running debounce task.
#[derive(Debug)]
pub struct DebouncedClassifier {
    input: Option<mpsc::Sender<String>>,
    output: mpsc::Receiver<ClassificationResult>,
    task: JoinHandle<()>,
}

impl DebouncedClassifier {
    /// Queues `text` for classification, superseding any pending text.
    pub async fn submit(&self, text: impl Into<String>) -> Result<()> {
        let input = self
            .input
            .as_ref()
            .ok_or_else(|| anyhow!("debounced classifier input is closed"))?;
        input
            .send(text.into())
            .await
            .map_err(|_| anyhow!("debounce task has stopped"))
    }

    /// Returns a sender for submitting from other tasks.
    ///
    /// The task only finishes once every sender, including clones, is gone.
    pub fn sender(&self) -> Option<mpsc::Sender<String>> {
        self.input.clone()
    }

    /// Waits for the next result. `None` once the task has finished and all
    /// results were received.
    pub async fn recv(&mut self) -> Option<ClassificationResult> {
        self.output.recv().await
    }

    /// Stops accepting input. Text still pending is classified one last time.
    pub fn close(&mut self) {
        self.input = None;
    }

    /// Aborts the task without classifying pending text. [`recv`](Self::recv)
    /// then yields `None`.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// Spawns the debounce task on the current tokio runtime.
pub fn spawn_debounced_classifier(
    classifier: Arc<dyn ContentClassifier>,
    idle: Duration,
) -> DebouncedClassifier {
    let (input_tx, input_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (output_tx, output_rx) = mpsc::channel(CHANNEL_CAPACITY);

    let task = tokio::spawn(run_debounce_loop(classifier, idle, input_rx, output_tx));

    DebouncedClassifier {
        input: Some(input_tx),
        output: output_rx,
        task,
    }
}

async fn run_debounce_loop(
    classifier: Arc<dyn ContentClassifier>,
    idle: Duration,
    mut input: mpsc::Receiver<String>,
    output: mpsc::Sender<ClassificationResult>,
) {
    while let Some(mut pending) = input.recv().await {
        let mut superseded = 0usize;
        let mut input_closed = false;

        loop {
            tokio::select! {
                next = input.recv() => match next {
                    Some(text) => {
                        pending = text;
                        superseded += 1;
                    }
                    None => {
                        input_closed = true;
                        break;
                    }
                },
                _ = tokio::time::sleep(idle) => break,
            }
        }

        debug!(
            "Debounce settled after {} superseded submission(s); classifying {} bytes.",
            superseded,
            pending.len()
        );
        let result = classifier.classify(&pending);
        if output.send(result).await.is_err() {
            debug!("Debounce result receiver dropped; stopping.");
            return;
        }
        if input_closed {
            break;
        }
    }
    debug!("Debounce input closed; task finished.");
}
