//! Error types for the onboarding flow.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Flow error: {0}")]
    Flow(#[from] FlowError),

    #[error("Editor error: {0}")]
    Editor(#[from] EditorError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Logo upload constraint violations.
///
/// The `Display` text is what the user sees next to the logo field.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("File size must be less than {}", size_limit(.max))]
    TooLarge { size: u64, max: u64 },

    #[error("Please upload a JPG or PNG file")]
    UnsupportedType { mime: String },

    #[error("Could not read file: {0}")]
    Io(#[from] std::io::Error),
}

fn size_limit(max: &u64) -> String {
    crate::upload::format_size(*max)
}

/// Rich-text editor command failures.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error("Position {block}:{offset} is outside the document")]
    InvalidPosition { block: usize, offset: usize },

    #[error("Link URL must not be empty")]
    EmptyLink,
}

/// An action that does not apply to the flow's current state.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Action {action} blocked while the {modal} modal is open")]
    ModalOpen { action: String, modal: String },

    #[error("Action {action} requires the {expected} modal, but {open} is open")]
    WrongModal {
        action: String,
        expected: String,
        open: String,
    },

    #[error("Action {action} is not available in stage {stage}")]
    WrongStage { action: String, stage: String },

    #[error("Onboarding already finished")]
    Finished,

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Field {field} is read-only")]
    ReadOnlyField { field: String },

    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_messages_match_user_copy() {
        let too_large = UploadError::TooLarge {
            size: 6 * 1024 * 1024,
            max: 5 * 1024 * 1024,
        };
        assert_eq!(too_large.to_string(), "File size must be less than 5MB");

        let bad_type = UploadError::UnsupportedType {
            mime: "image/gif".to_string(),
        };
        assert_eq!(bad_type.to_string(), "Please upload a JPG or PNG file");
    }

    #[test]
    fn size_limit_keeps_precision() {
        let sub_megabyte = UploadError::TooLarge {
            size: 600_000,
            max: 512_000,
        };
        assert_eq!(sub_megabyte.to_string(), "File size must be less than 500KB");

        let fractional = UploadError::TooLarge {
            size: 8 * 1024 * 1024,
            max: 7 * 1024 * 1024 + 512 * 1024,
        };
        assert_eq!(fractional.to_string(), "File size must be less than 7.5MB");
    }

    #[test]
    fn flow_error_converts_into_top_level() {
        let err: Error = FlowError::Finished.into();
        assert!(matches!(err, Error::Flow(FlowError::Finished)));
        assert_eq!(err.to_string(), "Flow error: Onboarding already finished");
    }
}
