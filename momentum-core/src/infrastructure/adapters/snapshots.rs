// momentum-core/src/infrastructure/adapters/snapshots.rs

use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, instrument};
use walkdir::WalkDir;

use crate::domain::MomentumData;
use crate::infrastructure::error::InfrastructureError;

// A snapshot file holds either a single object or an array of them.
#[derive(Deserialize)]
#[serde(untagged)]
enum SnapshotFile {
    Many(Vec<MomentumData>),
    One(Box<MomentumData>),
}

/// Discovers every `*.json` / `*.jsonl` file under `dir` and returns the
/// snapshots they contain, ordered by timestamp.
///
/// A missing directory yields an empty list. A malformed file is an error.
#[instrument(skip(dir), fields(dir = %dir.display()))]
pub fn load_snapshots(dir: &Path) -> Result<Vec<MomentumData>, InfrastructureError> {
    if !dir.exists() {
        info!("Snapshot directory does not exist");
        return Ok(Vec::new());
    }

    let mut snapshots = Vec::new();
    let walker = WalkDir::new(dir).follow_links(true).sort_by_file_name();

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        let before = snapshots.len();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => snapshots.extend(parse_json_file(path)?),
            Some("jsonl") => snapshots.extend(parse_jsonl_file(path)?),
            _ => continue,
        }
        debug!(path = %path.display(), count = snapshots.len() - before, "Snapshot file loaded");
    }

    // Stable: equal timestamps keep file order.
    snapshots.sort_by_key(|s| s.timestamp);
    info!(count = snapshots.len(), "Snapshots discovered");
    Ok(snapshots)
}

fn parse_json_file(path: &Path) -> Result<Vec<MomentumData>, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    let parsed: SnapshotFile = serde_json::from_str(&content).map_err(|source| {
        InfrastructureError::JsonError {
            path: path.display().to_string(),
            source,
        }
    })?;
    Ok(match parsed {
        SnapshotFile::Many(items) => items,
        SnapshotFile::One(item) => vec![*item],
    })
}

fn parse_jsonl_file(path: &Path) -> Result<Vec<MomentumData>, InfrastructureError> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).map_err(|source| InfrastructureError::JsonError {
                path: format!("{}:{}", path.display(), idx + 1),
                source,
            })
        })
        .collect()
}
