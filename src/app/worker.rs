use std::future::Future;
use std::sync::mpsc::{self, Receiver, TryRecvError};

use eframe::egui;

use crate::error::ProbeError;
use crate::outcome::Outcome;

/// Receiving end of a request running on a worker thread.
pub struct PendingRequest {
    rx: Receiver<Outcome>,
}

impl PendingRequest {
    /// Non-blocking check for the worker's outcome. A worker that went away
    /// without answering is reported as an internal failure.
    pub fn poll(&self) -> Option<Outcome> {
        match self.rx.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::error!("request worker exited without a result");
                Some(Outcome::from(ProbeError::Internal(
                    "the request worker stopped before reporting a result".to_string(),
                )))
            }
        }
    }
}

/// Run `job` to completion on its own thread and runtime, then wake the UI.
pub fn spawn_request<F, Fut>(ctx: &egui::Context, job: F) -> PendingRequest
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Outcome>,
{
    let (tx, rx) = mpsc::channel();
    let ctx = ctx.clone();

    std::thread::spawn(move || {
        let outcome = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt.block_on(job()),
            Err(e) => Outcome::from(ProbeError::Internal(format!(
                "failed to start async runtime: {e}"
            ))),
        };

        // The window may have been cleared in the meantime; nobody is listening then.
        if tx.send(outcome).is_err() {
            tracing::debug!("request finished after its result was discarded");
        }
        ctx.request_repaint();
    });

    PendingRequest { rx }
}
