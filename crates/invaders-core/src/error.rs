//! Failure types surfaced at the core boundary.
//!
//! None of these are fatal: the simulation absorbs them locally.

use std::fmt;

use crate::enums::ModelId;

/// Reason a model could not be delivered by the asset loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadFailure {
    /// No asset is published under the model's name.
    NotFound { model: ModelId },
    /// The asset exists but could not be decoded.
    Malformed { model: ModelId, reason: String },
}

impl AssetLoadFailure {
    pub fn model(&self) -> ModelId {
        match self {
            Self::NotFound { model } | Self::Malformed { model, .. } => *model,
        }
    }
}

impl fmt::Display for AssetLoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { model } => write!(f, "model {model}.glb not found"),
            Self::Malformed { model, reason } => {
                write!(f, "model {model}.glb could not be decoded: {reason}")
            }
        }
    }
}

impl std::error::Error for AssetLoadFailure {}
