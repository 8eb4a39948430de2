//! Logo upload: file handles, size and type gating, preview generation.
//!
//! Gating happens before a file reaches the company draft. Rejections come
//! back as `UploadError` values and are shown as the logo field's inline
//! error; nothing here pops dialogs.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;
use serde::Serialize;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::UploadError;

static ACCEPTED_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image/(jpeg|jpg|png)$").expect("valid MIME pattern"));

/// A selected logo file: an opaque handle over the raw bytes.
#[derive(Debug, Clone, Serialize)]
pub struct LogoFile {
    pub id: Uuid,
    pub name: String,
    pub mime_type: String,
    pub size: u64,
    #[serde(skip)]
    bytes: Arc<[u8]>,
}

impl PartialEq for LogoFile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl LogoFile {
    /// Wrap in-memory bytes as a logo handle.
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        let bytes: Arc<[u8]> = bytes.into();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            mime_type: mime_type.into(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Read a file from disk, inferring its MIME type from the extension.
    pub async fn from_path(path: &Path) -> Result<Self, UploadError> {
        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("logo")
            .to_string();
        Ok(Self::new(name, mime_for_path(path), bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encode the file as a `data:` URL for image previews.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }
}

/// Guess a MIME type from a file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Human-readable byte count: "5MB", "7.5MB", "500KB", "900 bytes".
///
/// Up to two decimals, trailing zeros dropped.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    let (value, unit) = if bytes >= MB {
        (bytes as f64 / MB as f64, "MB")
    } else if bytes >= KB {
        (bytes as f64 / KB as f64, "KB")
    } else {
        return format!("{} bytes", bytes);
    };
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("{}{}", trimmed, unit)
}

/// Size and type gate applied before a logo is accepted.
#[derive(Debug, Clone, Copy)]
pub struct LogoGate {
    max_bytes: u64,
}

impl LogoGate {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    /// Accept the file or explain why it was rejected. Size is checked first.
    pub fn check(&self, file: &LogoFile) -> Result<(), UploadError> {
        if file.size > self.max_bytes {
            return Err(UploadError::TooLarge {
                size: file.size,
                max: self.max_bytes,
            });
        }
        if !ACCEPTED_MIME.is_match(&file.mime_type) {
            return Err(UploadError::UnsupportedType {
                mime: file.mime_type.clone(),
            });
        }
        Ok(())
    }
}

impl Default for LogoGate {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_LOGO_BYTES)
    }
}

/// A rendered preview of the most recently selected logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewImage {
    pub file_id: Uuid,
    pub data_url: String,
}

#[derive(Debug, Default)]
struct PreviewSlot {
    generation: AtomicU64,
    image: RwLock<Option<PreviewImage>>,
}

/// Single-slot logo preview, filled asynchronously.
///
/// Each `load` takes a new ticket; a read that finishes after a newer
/// selection has been made is dropped, so the slot always ends up showing
/// the last file selected.
#[derive(Debug, Clone, Default)]
pub struct LogoPreview {
    slot: Arc<PreviewSlot>,
}

impl LogoPreview {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start decoding `file` into the preview slot. Fire-and-forget; the
    /// handle is only returned so callers can wait on it if they want.
    pub fn load(&self, file: &LogoFile) -> JoinHandle<()> {
        let ticket = self.slot.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let slot = Arc::clone(&self.slot);
        let file = file.clone();

        tokio::spawn(async move {
            let data_url = file.to_data_url();
            let mut image = slot.image.write().await;
            if slot.generation.load(Ordering::SeqCst) != ticket {
                debug!(file = %file.name, ticket, "Discarding stale logo preview");
                return;
            }
            info!(file = %file.name, size = file.size, "Logo preview ready");
            *image = Some(PreviewImage {
                file_id: file.id,
                data_url,
            });
        })
    }

    /// The preview currently on display, if any read has completed.
    pub async fn current(&self) -> Option<PreviewImage> {
        self.slot.image.read().await.clone()
    }

    /// Upload button label: "Change" once a preview exists.
    pub async fn button_label(&self) -> &'static str {
        if self.current().await.is_some() {
            "Change"
        } else {
            "Upload"
        }
    }
}
