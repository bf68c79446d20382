//! Headless mode runner - one request per subcommand
//!
//! Payloads are written to the caller's writer; events go to stderr.

use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU16, Ordering};

use tokio::sync::oneshot;

use ztp_app::config::Settings;
use ztp_client::{ZtpClient, EXPORT_FILE_NAME};
use ztp_core::prelude::*;
use ztp_core::{ensure_defaults, FileEntry, LogEntry, ProfileForm, ProfileList, RenderSession};

use super::{Command, HeadlessEvent};

/// Run one headless subcommand against `client`
pub async fn run_command(
    command: Command,
    client: &ZtpClient,
    settings: &Settings,
    out: &mut impl Write,
) -> Result<()> {
    info!("Headless command against {}: {:?}", client.base_url(), command);

    match command {
        Command::Pull { output } => {
            let records = client.load_data().await?;
            let json = serde_json::to_string_pretty(&records)?;
            match output {
                Some(path) => std::fs::write(&path, json + "\n")?,
                None => writeln!(out, "{}", json)?,
            }
        }
        Command::Push { file } => {
            let bytes = std::fs::read(&file)
                .with_context(|| format!("Reading {}", file.display()))?;
            let records = normalize(&bytes)?;
            client.submit_data(&records).await?;
            HeadlessEvent::data_pushed(records.len()).emit();
        }
        Command::Files => {
            let files = client.list_files().await?;
            write_files(out, &files)?;
        }
        Command::Upload { folder, files } => {
            let folder = folder.unwrap_or_else(|| settings.files.upload_folder.clone());
            for path in &files {
                upload(client, path, &folder).await?;
            }
        }
        Command::Rm { name } => {
            client.delete_file(&name).await?;
            HeadlessEvent::file_deleted(&name).emit();
        }
        Command::Get { name, dir } => {
            let dir = dir.unwrap_or_else(|| settings.files.download_dir.clone());
            let path = client.download_file(&name, &dir).await?;
            HeadlessEvent::file_downloaded(&name, &path).emit();
        }
        Command::Import { file } => {
            client.import_csv(&file).await?;
            HeadlessEvent::csv_imported(&file).emit();
        }
        Command::Export { output } => {
            let path = output.unwrap_or_else(|| settings.files.download_dir.join(EXPORT_FILE_NAME));
            client.export_csv(&path).await?;
            HeadlessEvent::csv_exported(&path).emit();
        }
        Command::Log { clear: true } => {
            client.clear_log().await?;
            HeadlessEvent::log_cleared().emit();
        }
        Command::Log { clear: false } => {
            let entries = client.get_log().await?;
            write_log(out, &entries)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Parse a profile list and pass it through the editor's render and
/// reconstruct steps, so a push sends exactly what saving from the TUI would.
fn normalize(bytes: &[u8]) -> Result<ProfileList> {
    let mut records: ProfileList = serde_json::from_slice(bytes)?;
    if ensure_defaults(&mut records) {
        debug!("Inserted empty defaults record");
    }

    let mut form = ProfileForm::new();
    let mut session = RenderSession::new();
    form.load(&records, &mut session);
    Ok(form.reconstruct()?)
}

async fn upload(client: &ZtpClient, path: &Path, folder: &str) -> Result<()> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    // Only report whole-percent steps
    let last = AtomicU16::new(u16::MAX);
    let progress_name = name.clone();
    let on_progress = move |progress: ztp_client::UploadProgress| {
        let percent = progress.percent();
        if last.swap(percent, Ordering::Relaxed) != percent {
            HeadlessEvent::upload_progress(&progress_name, percent).emit();
        }
    };

    // Never fired; the upload runs to completion or fails
    let (_cancel_tx, cancel_rx) = oneshot::channel();
    client.upload_file(path, folder, on_progress, cancel_rx).await?;
    HeadlessEvent::upload_finished(&name).emit();
    Ok(())
}

fn write_files(out: &mut impl Write, files: &[FileEntry]) -> Result<()> {
    let width = files.iter().map(|f| f.size.len()).max().unwrap_or(0);
    for entry in files {
        writeln!(out, "{:>width$}  {}", entry.size, entry.file)?;
    }
    Ok(())
}

fn write_log(out: &mut impl Write, entries: &[LogEntry]) -> Result<()> {
    for entry in entries {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}",
            entry.ip, entry.time, entry.serial, entry.version, entry.status
        )?;
    }
    Ok(())
}
