//! Suggestion worker thread
//!
//! Handles requests in a background thread to avoid blocking the UI.
//! Receives requests via channel, runs each one to completion on a
//! single-threaded tokio runtime, and sends the outcome back.

use std::sync::mpsc::{Receiver, Sender};

use super::mentor_state::{SuggestionRequest, SuggestionResponse};
use super::provider::SuggestionProvider;
use crate::config::MentorConfig;

/// Spawn the suggestion worker thread
///
/// The thread exits once `request_rx` is closed.
pub fn spawn_worker(
    config: &MentorConfig,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<SuggestionResponse>,
) {
    let config = config.clone();

    std::thread::spawn(move || {
        worker_loop(config, request_rx, response_tx);
    });
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    config: MentorConfig,
    request_rx: Receiver<SuggestionRequest>,
    response_tx: Sender<SuggestionResponse>,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => Some(runtime),
        Err(e) => {
            log::error!("Failed to start worker runtime: {}", e);
            None
        }
    };

    log::debug!("Suggestion worker started ({} mode)", config.mode.label());

    while let Ok(request) = request_rx.recv() {
        let response = match &runtime {
            Some(runtime) => runtime.block_on(handle_request(&config, request)),
            None => SuggestionResponse::Failed {
                error: "worker runtime unavailable".to_string(),
                request_id: request.request_id(),
            },
        };

        if response_tx.send(response).is_err() {
            // Main thread disconnected
            break;
        }
    }

    log::debug!("Suggestion worker shutting down");
}

/// Run one request to completion; exactly one attempt, no retry
async fn handle_request(config: &MentorConfig, request: SuggestionRequest) -> SuggestionResponse {
    let SuggestionRequest::Generate {
        profile,
        api_key,
        request_id,
    } = request;

    log::info!("Request {} started ({} mode)", request_id, config.mode.label());

    let result = match SuggestionProvider::from_config(config, &api_key) {
        Ok(provider) => provider.suggest(&profile).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(text) => {
            log::info!("Request {} succeeded ({} bytes)", request_id, text.len());
            SuggestionResponse::Complete { text, request_id }
        }
        Err(e) => {
            log::error!("Request {} failed: {}", request_id, e);
            SuggestionResponse::Failed {
                error: e.to_string(),
                request_id,
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
