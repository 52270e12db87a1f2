//! Engine errors.

use serde::Serialize;
use thiserror::Error;

use crate::element::ElementIdentity;

/// Errors that can occur in the engine.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Rendering one element failed. No partial result is produced.
    #[error("Rendering failed for {element}: {reason}")]
    RenderingFailed { element: String, reason: String },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RenderError {
    pub fn rendering_failed(element: &ElementIdentity, reason: impl ToString) -> Self {
        RenderError::RenderingFailed {
            element: element.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// An element that could not be rendered as part of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementFailure {
    /// Position in the input list.
    pub index: usize,
    pub element: ElementIdentity,
    pub reason: String,
}
