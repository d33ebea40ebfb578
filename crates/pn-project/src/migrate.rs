//! Schema migration framework.

use crate::ProjectError;
use crate::schema::Drawing;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut drawing: Drawing) -> Result<Drawing, ProjectError> {
    while drawing.version < LATEST_VERSION {
        drawing = migrate_one_version(drawing)?;
    }
    Ok(drawing)
}

fn migrate_one_version(drawing: Drawing) -> Result<Drawing, ProjectError> {
    match drawing.version {
        0 => migrate_v0_to_v1(drawing),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

// Version 0 files predate the version field itself; serde defaults it to 0
// and the list shape is already current.
fn migrate_v0_to_v1(mut drawing: Drawing) -> Result<Drawing, ProjectError> {
    drawing.version = 1;
    Ok(drawing)
}
