//! Upload tasks
//!
//! One task per file. Progress is forwarded with `try_send` so a full
//! channel drops a progress tick instead of stalling the upload, and only
//! when the whole percentage changes.

use std::sync::atomic::{AtomicU16, Ordering};

use tokio::sync::mpsc;
use tracing::warn;

use crate::handler::UploadRequest;
use crate::message::Message;
use ztp_client::{UploadProgress, ZtpClient};

/// Placeholder meaning "no percentage reported yet"
const NO_PROGRESS: u16 = u16::MAX;

pub(super) fn spawn_upload(
    client: ZtpClient,
    folder: String,
    request: UploadRequest,
    msg_tx: mpsc::Sender<Message>,
) {
    let UploadRequest { id, path, cancel } = request;

    tokio::spawn(async move {
        let last_percent = AtomicU16::new(NO_PROGRESS);
        let progress_tx = msg_tx.clone();
        let on_progress = move |progress: UploadProgress| {
            let percent = progress.percent();
            if last_percent.swap(percent, Ordering::Relaxed) != percent {
                let _ = progress_tx.try_send(Message::UploadProgress { id, percent });
            }
        };

        let msg = match client.upload_file(&path, &folder, on_progress, cancel).await {
            Ok(()) => Message::UploadFinished { id },
            Err(e) if e.is_cancelled() => Message::UploadCancelled { id },
            Err(e) => {
                warn!("Upload of {} failed: {}", path.display(), e);
                Message::UploadFailed {
                    id,
                    error: e.to_string(),
                }
            }
        };

        if msg_tx.send(msg).await.is_err() {
            warn!("Message channel closed before upload {} reported back", id);
        }
    });
}
