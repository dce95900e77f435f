//! Upload checks for product photos and certificates.
//!
//! Files are checked before any request is made. Content type comes from
//! the file's magic bytes; the extension is only a fallback.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;
pub const MAX_CERTIFICATE_BYTES: u64 = 50 * 1024 * 1024;

const IMAGE_TYPES: &[&str] = &["image/jpeg", "image/png", "image/webp"];
const CERTIFICATE_TYPES: &[&str] = &["application/pdf", "image/jpeg", "image/png", "image/webp"];

const SNIFF_LEN: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProductPhoto,
    Certificate,
}

impl UploadKind {
    pub fn max_bytes(self) -> u64 {
        match self {
            UploadKind::ProductPhoto => MAX_IMAGE_BYTES,
            UploadKind::Certificate => MAX_CERTIFICATE_BYTES,
        }
    }

    pub fn allowed_types(self) -> &'static [&'static str] {
        match self {
            UploadKind::ProductPhoto => IMAGE_TYPES,
            UploadKind::Certificate => CERTIFICATE_TYPES,
        }
    }

    /// Multipart field name.
    pub fn field_name(self) -> &'static str {
        match self {
            UploadKind::ProductPhoto => "photos",
            UploadKind::Certificate => "certificate",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FileValidationError {
    #[error("Invalid file type: {file_name}. Use PNG, JPG, or WebP.")]
    InvalidImageType { file_name: String },

    #[error("File too large: {file_name}. Maximum size is 10MB.")]
    ImageTooLarge { file_name: String },

    #[error("Invalid file type. Use PDF, PNG, JPG, or WebP.")]
    InvalidCertificateType { file_name: String },

    #[error("File too large. Maximum size is 50MB.")]
    CertificateTooLarge { file_name: String },

    #[error("Cannot read {file_name}: {message}")]
    Unreadable { file_name: String, message: String },
}

/// File described by name, detected content type and size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
    pub size: u64,
}

/// Checks type and size limits for `kind`.
pub fn validate(kind: UploadKind, candidate: &UploadCandidate) -> Result<(), FileValidationError> {
    let file_name = candidate.file_name.clone();
    if !kind.allowed_types().contains(&candidate.mime.as_str()) {
        return Err(match kind {
            UploadKind::ProductPhoto => FileValidationError::InvalidImageType { file_name },
            UploadKind::Certificate => FileValidationError::InvalidCertificateType { file_name },
        });
    }
    if candidate.size > kind.max_bytes() {
        return Err(match kind {
            UploadKind::ProductPhoto => FileValidationError::ImageTooLarge { file_name },
            UploadKind::Certificate => FileValidationError::CertificateTooLarge { file_name },
        });
    }
    Ok(())
}

/// Reads size and leading bytes of `path` to build an [`UploadCandidate`].
pub fn inspect(path: &Path) -> Result<UploadCandidate, FileValidationError> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let unreadable = |e: std::io::Error| FileValidationError::Unreadable {
        file_name: file_name.clone(),
        message: e.to_string(),
    };

    let mut file = File::open(path).map_err(unreadable)?;
    let size = file.metadata().map_err(unreadable)?.len();
    let mut head = Vec::with_capacity(SNIFF_LEN);
    file.by_ref()
        .take(SNIFF_LEN as u64)
        .read_to_end(&mut head)
        .map_err(unreadable)?;

    Ok(UploadCandidate {
        path: path.to_path_buf(),
        mime: detect_mime(&head, path),
        file_name,
        size,
    })
}

/// Inspect + validate in one step.
pub fn check(kind: UploadKind, path: &Path) -> Result<UploadCandidate, FileValidationError> {
    let candidate = inspect(path)?;
    validate(kind, &candidate)?;
    Ok(candidate)
}

/// Validates a batch of photos, keeping the good ones.
///
/// Invalid files are reported individually and do not block the rest.
pub fn select_photos<P: AsRef<Path>>(
    paths: &[P],
) -> (Vec<UploadCandidate>, Vec<FileValidationError>) {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for path in paths {
        match check(UploadKind::ProductPhoto, path.as_ref()) {
            Ok(candidate) => accepted.push(candidate),
            Err(err) => rejected.push(err),
        }
    }
    (accepted, rejected)
}

fn detect_mime(head: &[u8], path: &Path) -> String {
    if head.starts_with(b"%PDF-") {
        return "application/pdf".to_string();
    }
    if let Ok(format) = image::guess_format(head) {
        return format.to_mime_type().to_string();
    }
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase());
    match extension.as_deref() {
        Some("pdf") => "application/pdf".to_string(),
        Some(ext) => ImageFormat::from_extension(ext)
            .map(|format| format.to_mime_type().to_string())
            .unwrap_or_else(|| "application/octet-stream".to_string()),
        None => "application/octet-stream".to_string(),
    }
}
