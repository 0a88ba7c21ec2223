//! HTTP client with streaming download support
//!
//! One GET per fetch, no retries. The body is streamed chunkwise into a
//! `.part` file next to the destination and atomically renamed into place
//! once the stream finishes, so the destination path never holds a partial
//! package. On any failure after the `.part` file is created, streaming or
//! renaming, it is removed best-effort.

use futures::StreamExt;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{FetchError, FileOperation, Result};
use crate::status::ProgressCallback;

/// HTTP client configured for package downloads
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client from fetch configuration
    ///
    /// The timeout bounds connecting and each read gap, not the transfer as
    /// a whole, so a large package on a slow link still completes as long
    /// as bytes keep arriving.
    pub fn from_config(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout)
            .read_timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| FetchError::ClientBuild { source: e })?;

        Ok(Self { client })
    }

    /// Download from URL to file with streaming and percent progress
    ///
    /// Percentages are `floor(downloaded * 100 / total)`, emitted per chunk
    /// only while the content length is known and nonzero. A final `100` is
    /// always emitted on success, which also covers responses without a
    /// length header. Returns the number of bytes written.
    pub async fn download_to_file(
        &self,
        url: &str,
        dest_path: &Path,
        progress_callback: Option<&ProgressCallback>,
    ) -> Result<u64> {
        debug!("stream downloading {} to {}", url, dest_path.display());

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::HttpRequest {
                url: url.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RemoteStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        if let Some(parent) = dest_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| FetchError::FileSystem {
                        path: parent.to_path_buf(),
                        operation: FileOperation::CreateDir,
                        source: e,
                    })?;
            }
        }

        let total_size = response.content_length().unwrap_or(0);
        debug!("content length: {} bytes", total_size);

        let temp_path = part_path(dest_path);
        let result = self
            .stream_body(response, &temp_path, total_size, progress_callback)
            .await;

        match result {
            Ok(downloaded) => {
                if let Err(e) = fs::rename(&temp_path, dest_path).await {
                    // Never leave a stray partial file behind
                    let _ = fs::remove_file(&temp_path).await;
                    return Err(FetchError::FileSystem {
                        path: dest_path.to_path_buf(),
                        operation: FileOperation::Move,
                        source: e,
                    });
                }

                if let Some(callback) = progress_callback {
                    callback(100);
                }

                debug!("stream download completed: {} bytes", downloaded);
                Ok(downloaded)
            }
            Err(e) => {
                // Never leave a stray partial file behind
                let _ = fs::remove_file(&temp_path).await;
                Err(e)
            }
        }
    }

    async fn stream_body(
        &self,
        response: reqwest::Response,
        temp_path: &Path,
        total_size: u64,
        progress_callback: Option<&ProgressCallback>,
    ) -> Result<u64> {
        let url = response.url().to_string();

        let mut file = fs::File::create(temp_path)
            .await
            .map_err(|e| FetchError::FileSystem {
                path: temp_path.to_path_buf(),
                operation: FileOperation::Create,
                source: e,
            })?;

        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result.map_err(|e| FetchError::HttpRequest {
                url: url.clone(),
                source: e,
            })?;

            if chunk.is_empty() {
                continue;
            }

            file.write_all(&chunk)
                .await
                .map_err(|e| FetchError::FileSystem {
                    path: temp_path.to_path_buf(),
                    operation: FileOperation::Write,
                    source: e,
                })?;

            downloaded += chunk.len() as u64;

            if total_size > 0 {
                if let Some(callback) = progress_callback {
                    let percent = (downloaded.saturating_mul(100) / total_size).min(100) as u8;
                    callback(percent);
                }
            }
        }

        file.flush().await.map_err(|e| FetchError::FileSystem {
            path: temp_path.to_path_buf(),
            operation: FileOperation::Write,
            source: e,
        })?;

        Ok(downloaded)
    }
}

/// Temp path used while the body is still streaming
pub(crate) fn part_path(dest_path: &Path) -> PathBuf {
    let mut name = dest_path.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
