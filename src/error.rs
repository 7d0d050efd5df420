use thiserror::Error;

/// Errors produced while normalizing annotations, resolving emojis or
/// talking to the vision provider.
#[derive(Error, Debug)]
pub enum EmotionError {
    #[error("invalid input{}: {reason}", face_suffix(.face))]
    InvalidInput {
        face: Option<usize>,
        reason: String,
    },

    #[error("label outside the emotion set: {0}")]
    UnreachableLabel(String),

    #[error("vision provider returned {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("vision provider error: {0}")]
    UpstreamMessage(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl EmotionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EmotionError::InvalidInput {
            face: None,
            reason: reason.into(),
        }
    }

    /// Attaches the offending face index to an `InvalidInput` error.
    pub(crate) fn at_face(self, index: usize) -> Self {
        match self {
            EmotionError::InvalidInput { reason, .. } => EmotionError::InvalidInput {
                face: Some(index),
                reason,
            },
            other => other,
        }
    }
}

fn face_suffix(face: &Option<usize>) -> String {
    match face {
        Some(index) => format!(" (face {index})"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, EmotionError>;
