//! File service
//!
//! Serves the sample document and stores PDF uploads under generated names.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::{AppError, FileError};

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// File contents ready to be sent back to a client
#[derive(Debug, Clone)]
pub struct DownloadedFile {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub file_name: String,
}

pub struct FileService {
    sample_file: PathBuf,
    upload_dir: PathBuf,
    max_upload_bytes: usize,
}

impl FileService {
    pub fn new(sample_file: PathBuf, upload_dir: PathBuf, max_upload_bytes: usize) -> Self {
        Self {
            sample_file,
            upload_dir,
            max_upload_bytes,
        }
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_bytes
    }

    /// Read the sample file. Every id resolves to the same document.
    pub async fn get_file(&self, file_id: &str) -> Result<DownloadedFile, AppError> {
        tracing::debug!(file_id, path = %self.sample_file.display(), "Serving file");

        let bytes = tokio::fs::read(&self.sample_file)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => FileError::NotFound(format!("File {} not found", file_id)),
                _ => FileError::Io(e),
            })?;

        Ok(DownloadedFile {
            bytes,
            content_type: content_type_for(&self.sample_file),
            file_name: self
                .sample_file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "download".to_string()),
        })
    }

    /// Validate an upload and write it under a generated name
    ///
    /// The client-supplied file name is never used for the stored path.
    pub async fn store_upload(
        &self,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<PathBuf, AppError> {
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Empty file.".to_string()));
        }
        if bytes.len() > self.max_upload_bytes {
            return Err(AppError::BadRequest(format!(
                "File is larger than the allowed maximum of {} bytes.",
                self.max_upload_bytes
            )));
        }
        if !content_type.is_some_and(is_pdf) {
            return Err(AppError::BadRequest(
                "Only PDF files are accepted.".to_string(),
            ));
        }

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(FileError::Io)?;

        let path = self
            .upload_dir
            .join(format!("uploaded_file_{}.pdf", Uuid::new_v4()));
        tokio::fs::write(&path, bytes).await.map_err(FileError::Io)?;

        tracing::info!(path = %path.display(), size = bytes.len(), "File uploaded");
        Ok(path)
    }
}

fn content_type_for(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn is_pdf(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(PDF_CONTENT_TYPE))
}
