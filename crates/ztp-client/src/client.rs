//! Async HTTP client for the ZTP configuration service.
//!
//! Every endpoint the console talks to lives here:
//!
//! | Method | Path | Call |
//! |---|---|---|
//! | GET / POST | `/data` | [`ZtpClient::load_data`], [`ZtpClient::submit_data`] |
//! | GET | `/list` | [`ZtpClient::list_files`] |
//! | POST | `/file` | [`ZtpClient::upload_file`] |
//! | GET / DELETE | `/file/{name}` | [`ZtpClient::download_file`], [`ZtpClient::delete_file`] |
//! | GET / POST | `/csv` | [`ZtpClient::export_csv`], [`ZtpClient::import_csv`] |
//! | GET / DELETE | `/log` | [`ZtpClient::get_log`], [`ZtpClient::clear_log`] |

use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use tokio::sync::oneshot;
use url::Url;

use ztp_core::prelude::*;
use ztp_core::{FileEntry, LogEntry, ProfileList};

use crate::response::{check, transport};
use crate::upload::{buffered_part, file_name, streamed_part, UploadProgress};

/// File name used for CSV exports
pub const EXPORT_FILE_NAME: &str = "export.csv";

/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ZtpClient {
    http: reqwest::Client,
    base: Url,
}

impl ZtpClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| Error::config(format!("Invalid server URL '{}': {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(Error::config(format!("Invalid server URL '{}'", base_url)));
        }

        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-requested-with"),
            HeaderValue::from_static("XMLHttpRequest"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(transport)?;

        Ok(Self { http, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Endpoint URL for `segments` under the base path
    fn endpoint<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| Error::config(format!("Invalid server URL '{}'", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// `/file/{name}`, one encoded segment per path component
    fn file_url(&self, name: &str) -> Result<Url> {
        let parts = name.split('/').filter(|s| !s.is_empty() && *s != ".");
        self.endpoint(std::iter::once("file").chain(parts))
    }

    // ─────────────────────────────────────────────────────────────
    // Profiles
    // ─────────────────────────────────────────────────────────────

    pub async fn load_data(&self) -> Result<ProfileList> {
        let url = self.endpoint(["data"])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = check(response).await?.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn submit_data(&self, data: &ProfileList) -> Result<()> {
        let url = self.endpoint(["data"])?;
        debug!("POST {} ({} records)", url, data.len());
        let response = self
            .http
            .post(url)
            .json(data)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        info!("Saved {} profile records", data.len());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // Files
    // ─────────────────────────────────────────────────────────────

    pub async fn list_files(&self) -> Result<Vec<FileEntry>> {
        let url = self.endpoint(["list"])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = check(response).await?.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Upload one file into `folder`, reporting progress as it streams.
    ///
    /// Sending on (not dropping) the `cancel` handle aborts the request and
    /// yields [`Error::Cancelled`].
    pub async fn upload_file<F>(
        &self,
        path: &Path,
        folder: &str,
        on_progress: F,
        cancel: oneshot::Receiver<()>,
    ) -> Result<()>
    where
        F: Fn(UploadProgress) + Send + Sync + 'static,
    {
        let url = self.endpoint(["file"])?;
        let part = streamed_part(path, on_progress).await?;
        let form = Form::new().text("folder", folder.to_string()).part("upload", part);
        info!("Uploading {} to folder '{}'", path.display(), folder);

        let request = self.http.post(url).multipart(form).send();
        tokio::select! {
            response = request => {
                check(response.map_err(transport)?).await?;
                info!("Upload finished: {}", path.display());
                Ok(())
            }
            Ok(()) = cancel => {
                info!("Upload cancelled: {}", path.display());
                Err(Error::Cancelled)
            }
        }
    }

    pub async fn delete_file(&self, name: &str) -> Result<()> {
        let url = self.file_url(name)?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await.map_err(transport)?;
        check(response).await?;
        info!("Deleted {}", name);
        Ok(())
    }

    /// Fetch `name` into `dest_dir`, keeping its base name
    pub async fn download_file(&self, name: &str, dest_dir: &Path) -> Result<PathBuf> {
        let url = self.file_url(name)?;
        let dest = dest_dir.join(file_name(Path::new(name))?);
        debug!("GET {} -> {}", url, dest.display());

        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = check(response).await?.bytes().await.map_err(transport)?;
        tokio::fs::create_dir_all(dest_dir).await?;
        tokio::fs::write(&dest, &body).await?;
        info!("Downloaded {} ({} bytes)", dest.display(), body.len());
        Ok(dest)
    }

    // ─────────────────────────────────────────────────────────────
    // CSV
    // ─────────────────────────────────────────────────────────────

    pub async fn import_csv(&self, path: &Path) -> Result<()> {
        let url = self.endpoint(["csv"])?;
        let form = Form::new().part("upload", buffered_part(path).await?);
        debug!("POST {} ({})", url, path.display());
        let response = self
            .http
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        check(response).await?;
        info!("Imported {}", path.display());
        Ok(())
    }

    /// Write the CSV export to `dest`
    pub async fn export_csv(&self, dest: &Path) -> Result<()> {
        let url = self.endpoint(["csv"])?;
        debug!("GET {} -> {}", url, dest.display());
        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = check(response).await?.bytes().await.map_err(transport)?;
        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(dest, &body).await?;
        info!("Exported CSV to {}", dest.display());
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────
    // Log
    // ─────────────────────────────────────────────────────────────

    pub async fn get_log(&self) -> Result<Vec<LogEntry>> {
        let url = self.endpoint(["log"])?;
        debug!("GET {}", url);
        let response = self.http.get(url).send().await.map_err(transport)?;
        let body = check(response).await?.bytes().await.map_err(transport)?;
        Ok(serde_json::from_slice(&body)?)
    }

    pub async fn clear_log(&self) -> Result<()> {
        let url = self.endpoint(["log"])?;
        debug!("DELETE {}", url);
        let response = self.http.delete(url).send().await.map_err(transport)?;
        check(response).await?;
        info!("Cleared provisioning log");
        Ok(())
    }
}
