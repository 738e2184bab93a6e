//! Error types for frame analysis

use thiserror::Error;

/// Main error type for model building, analysis and result queries
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node '{0}' not found in model")]
    NodeNotFound(String),

    #[error("Member '{0}' not found in model")]
    MemberNotFound(String),

    #[error("Material '{0}' not found in model")]
    MaterialNotFound(String),

    #[error("Section '{0}' not found in model")]
    SectionNotFound(String),

    #[error("Load combination '{0}' not found in model")]
    LoadCombinationNotFound(String),

    #[error("Duplicate name '{0}' already exists")]
    DuplicateName(String),

    #[error("Invalid property: {0}")]
    InvalidProperty(String),

    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("Model is unstable: {0}")]
    Unstable(String),

    #[error("Singular stiffness matrix - model may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Model not analyzed - run analyze() first")]
    NotAnalyzed,

    #[error("Position {position} is outside the member length (0 to {length})")]
    OutOfRange { position: f64, length: f64 },
}

/// Result type for frame analysis operations
pub type FrameResult<T> = Result<T, FrameError>;
