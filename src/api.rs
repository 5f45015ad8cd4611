// API client module: a small blocking HTTP client that pushes HTML assets
// to the signage tablet. Uploads are synchronous, one file at a time.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::blocking::Client;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// Client bound to one device: holds the reqwest blocking client (with the
/// per-request timeout baked in) and the device base URL.
#[derive(Clone)]
pub struct DeviceClient {
    client: Client,
    base_url: String,
}

/// Outcome of a single file upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadResult {
    pub success: bool,
    /// Size in bytes as reported by the device, when it reports one.
    pub size: Option<u64>,
}

/// Optional JSON the device answers with after storing an asset.
#[derive(Deserialize, Debug)]
struct UploadReceipt {
    size: Option<u64>,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("File does not exist!")]
    Missing,
    #[error("File is not valid UTF-8")]
    InvalidUtf8,
    #[error("{0}")]
    Read(#[source] io::Error),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("Status {}", .0.as_u16())]
    Status(StatusCode),
}

impl From<io::Error> for UploadError {
    fn from(err: io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => UploadError::Missing,
            io::ErrorKind::InvalidData => UploadError::InvalidUtf8,
            _ => UploadError::Read(err),
        }
    }
}

impl DeviceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(DeviceClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL an asset named `file_name` is stored under.
    pub fn asset_url(&self, file_name: &str) -> String {
        format!("{}/assets/{}", self.base_url, file_name)
    }

    /// Upload one file, printing progress and the outcome. Never fails: any
    /// error is printed and reported as an unsuccessful result so the caller
    /// can move on to the next file.
    pub fn upload(&self, file_path: &Path) -> UploadResult {
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("\nUploading {} -> /assets/{} ...", file_name, file_name);

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("   {spinner} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message("sending...");
        spinner.enable_steady_tick(Duration::from_millis(100));
        let outcome = self.send(file_path, &file_name);
        spinner.finish_and_clear();

        match outcome {
            Ok(Some(size)) => {
                println!("   OK SUCCESS! Size: {} bytes", group_thousands(size));
                UploadResult { success: true, size: Some(size) }
            }
            Ok(None) => {
                println!("   OK SUCCESS!");
                UploadResult { success: true, size: None }
            }
            Err(e) => {
                log::warn!("upload of {} failed: {:?}", file_path.display(), e);
                println!("   ERROR: {}", e);
                UploadResult { success: false, size: None }
            }
        }
    }

    /// Read, POST and interpret the response. Returns the size the device
    /// reported, if any.
    fn send(&self, file_path: &Path, file_name: &str) -> Result<Option<u64>, UploadError> {
        // Decoding as text first rejects files that are not valid UTF-8.
        let html = fs::read_to_string(file_path)?;
        let body = html.into_bytes();

        let url = self.asset_url(file_name);
        log::debug!("POST {} ({} bytes)", url, body.len());
        let res = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE))
            .body(body)
            .send()?;

        let status = res.status();
        log::debug!("{} answered {}", url, status);
        if !status.is_success() {
            return Err(UploadError::Status(status));
        }
        // The receipt is optional; an unreadable body still counts as success.
        let size = res
            .json::<UploadReceipt>()
            .ok()
            .and_then(|receipt| receipt.size);
        Ok(size)
    }
}

/// Format `n` with `,` between groups of three digits.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1024), "1,024");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn asset_url_tolerates_trailing_slash() {
        let client = DeviceClient::new("http://device:12345/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.asset_url("menu.html"), "http://device:12345/assets/menu.html");
    }
}
