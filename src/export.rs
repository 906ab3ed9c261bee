use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::element::Element;
use crate::grid::GridConfig;
use crate::scene::Scene;

/// Snapshot schema version. Documents carrying any other version are
/// rejected on import instead of guessing a migration.
pub const SCHEMA_VERSION: &str = "1.0";

/// File name offered for a saved snapshot.
pub const EXPORT_FILE_NAME: &str = "floor-plan.json";

/// Errors that can occur while exporting or importing a snapshot
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotMetadata {
    /// Export timestamp, ISO-8601.
    pub created: DateTime<Utc>,
    pub version: String,
    /// Grid pitch in effect at export time.
    #[serde(rename = "gridSize")]
    pub grid_size: f32,
}

/// The persisted snapshot of a scene.
///
/// The top-level keys `elements` and `metadata` (with `created`, `version`
/// and `gridSize`) are a fixed contract consumed by downstream tooling; the
/// element records serialize as in [`Element`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorPlanDocument {
    pub elements: Vec<Element>,
    pub metadata: SnapshotMetadata,
}

impl FloorPlanDocument {
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Capture the full ordered element sequence plus metadata. Reads the scene,
/// never mutates it; the timestamp is the only external input.
pub fn export_snapshot(scene: &Scene, grid: &GridConfig) -> FloorPlanDocument {
    FloorPlanDocument {
        elements: scene.elements().to_vec(),
        metadata: SnapshotMetadata {
            created: Utc::now(),
            version: SCHEMA_VERSION.to_owned(),
            grid_size: grid.pitch,
        },
    }
}

/// Parse a previously exported snapshot, rejecting unknown schema versions.
pub fn import_snapshot(json: &str) -> Result<FloorPlanDocument, ExportError> {
    let document: FloorPlanDocument = serde_json::from_str(json)?;
    if document.metadata.version != SCHEMA_VERSION {
        return Err(ExportError::UnsupportedVersion(document.metadata.version));
    }
    Ok(document)
}

/// Rebuild an editable scene from a snapshot, with nothing selected.
pub fn import_scene(json: &str) -> Result<Scene, ExportError> {
    let document = import_snapshot(json)?;
    Ok(Scene::from_elements(document.elements))
}
