use thiserror::Error;

/// Top-level error type for the vessel generator.
#[derive(Debug, Error)]
pub enum VesselError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate in {0}")]
    NonFinite(&'static str),

    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to solid construction and boolean composition.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("operation failed: {0}")]
    Failed(String),
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("tessellation failed: {0}")]
    Failed(String),
}

/// Errors raised while serializing a solid for export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("too many triangles for export format: {0}")]
    TooManyTriangles(usize),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`VesselError`].
pub type Result<T> = std::result::Result<T, VesselError>;
