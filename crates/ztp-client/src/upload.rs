//! Streaming multipart uploads with progress reporting

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use futures_util::TryStreamExt;
use reqwest::multipart::Part;
use reqwest::Body;
use tokio_util::io::ReaderStream;

use ztp_core::prelude::*;

use crate::response::transport;

/// Bytes sent so far for one upload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadProgress {
    pub sent: u64,
    pub total: u64,
}

impl UploadProgress {
    /// Whole percent in 0..=100. An empty file counts as done.
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 100;
        }
        ((self.sent.min(self.total) * 100) / self.total) as u16
    }
}

/// Name sent as the multipart file name
pub(crate) fn file_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| Error::config(format!("Not a file path: {}", path.display())))
}

/// Open `path` as a streamed multipart part, calling `on_progress` after
/// every chunk handed to the connection.
pub(crate) async fn streamed_part<F>(path: &Path, on_progress: F) -> Result<Part>
where
    F: Fn(UploadProgress) + Send + Sync + 'static,
{
    let name = file_name(path)?;
    let file = tokio::fs::File::open(path).await?;
    let total = file.metadata().await?.len();
    let sent = Arc::new(AtomicU64::new(0));

    on_progress(UploadProgress { sent: 0, total });

    let stream = ReaderStream::new(file).inspect_ok(move |chunk| {
        let len = chunk.len() as u64;
        let now = sent.fetch_add(len, Ordering::Relaxed) + len;
        on_progress(UploadProgress { sent: now, total });
    });

    Part::stream_with_length(Body::wrap_stream(stream), total)
        .file_name(name)
        .mime_str("application/octet-stream")
        .map_err(transport)
}

/// Read a small file fully into a multipart part
pub(crate) async fn buffered_part(path: &Path) -> Result<Part> {
    let name = file_name(path)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(Part::bytes(bytes).file_name(name))
}
