//! pn-project: canonical drawing file format and validation.
//!
//! The persisted shape is a flat ordered component list tagged by kind
//! (`node` | `edge`), exactly what the drawing surface hands the solver and
//! what file export writes back out.

pub mod convert;
pub mod migrate;
pub mod schema;
pub mod validate;

pub use convert::{from_network, to_network};
pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_drawing};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<Drawing> {
    let content = std::fs::read_to_string(path)?;
    let mut drawing: Drawing = serde_json::from_str(&content)?;
    drawing = migrate_to_latest(drawing)?;
    validate_drawing(&drawing)?;
    Ok(drawing)
}

pub fn save_json(path: &std::path::Path, drawing: &Drawing) -> ProjectResult<()> {
    validate_drawing(drawing)?;
    let content = serde_json::to_string_pretty(drawing)?;
    std::fs::write(path, content)?;
    Ok(())
}
