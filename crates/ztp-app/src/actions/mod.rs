//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs as its own tokio task against the shared [`ZtpClient`]
//! and reports back to the TEA loop through `msg_tx`.

use std::future::Future;

use tokio::sync::mpsc;

use crate::config::save_settings;
use crate::message::Message;
use crate::state::Tab;
use crate::UpdateAction;
use ztp_client::ZtpClient;
use ztp_core::prelude::*;

pub(super) mod upload;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: &ZtpClient) {
    match action {
        UpdateAction::LoadData => {
            let client = client.clone();
            tokio::spawn(async move {
                let msg = match client.load_data().await {
                    Ok(records) => Message::DataLoaded { records },
                    Err(e) => {
                        warn!("Loading profile data failed: {}", e);
                        Message::DataLoadFailed {
                            error: e.to_string(),
                        }
                    }
                };
                send(&msg_tx, msg).await;
            });
        }

        UpdateAction::SubmitData { data, export_after } => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Profiles,
                async move { client.submit_data(&data).await },
                move |()| Message::DataSaved { export_after },
            );
        }

        UpdateAction::ListFiles => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Files,
                async move { client.list_files().await },
                |files| Message::FilesLoaded { files },
            );
        }

        UpdateAction::UploadFiles { folder, uploads } => {
            for request in uploads {
                upload::spawn_upload(client.clone(), folder.clone(), request, msg_tx.clone());
            }
        }

        UpdateAction::DeleteFile { name } => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Files,
                async move {
                    client.delete_file(&name).await?;
                    Ok(name)
                },
                |name| Message::FileDeleted { name },
            );
        }

        UpdateAction::DownloadFile { name, dest_dir } => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Files,
                async move { client.download_file(&name, &dest_dir).await },
                |path| Message::FileDownloaded { path },
            );
        }

        UpdateAction::ImportCsv { path } => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Files,
                async move { client.import_csv(&path).await },
                |()| Message::CsvImported,
            );
        }

        UpdateAction::ExportCsv { dest } => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Files,
                async move {
                    client.export_csv(&dest).await?;
                    Ok(dest)
                },
                |path| Message::CsvExported { path },
            );
        }

        UpdateAction::GetLog => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Log,
                async move { client.get_log().await },
                |entries| Message::LogLoaded { entries },
            );
        }

        UpdateAction::ClearLog => {
            let client = client.clone();
            spawn_request(
                msg_tx,
                Tab::Log,
                async move { client.clear_log().await },
                |()| Message::LogCleared,
            );
        }

        UpdateAction::SaveSettings { path, settings } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = save_settings(&path, &settings) {
                    warn!("Failed to save settings to {}: {}", path.display(), e);
                }
            });
        }
    }
}

/// Run `request` in the background. Success is mapped through `on_success`;
/// any error becomes [`Message::RequestFailed`] tagged with `panel`.
fn spawn_request<T, Fut, F>(
    msg_tx: mpsc::Sender<Message>,
    panel: Tab,
    request: Fut,
    on_success: F,
) where
    T: Send + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
    F: FnOnce(T) -> Message + Send + 'static,
{
    tokio::spawn(async move {
        let msg = match request.await {
            Ok(value) => on_success(value),
            Err(e) => {
                if e.is_recoverable() {
                    warn!("Request failed: {}", e);
                } else {
                    error!("Request failed: {:?}", e);
                }
                Message::RequestFailed {
                    panel,
                    error: e.to_string(),
                }
            }
        };
        send(&msg_tx, msg).await;
    });
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    let sent = msg_tx
        .send(msg)
        .await
        .map_err(|_| Error::channel_send("action result"));
    if let Err(e) = sent {
        debug!("{}; console is shutting down", e);
    }
}
