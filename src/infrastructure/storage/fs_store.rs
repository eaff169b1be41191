use crate::domain::storage::Storage;
use crate::domain::{AlgorithmParams, Snapshot};
use crate::error::Result;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Clone)]
pub struct FileSystemStore {
    snapshot_path: PathBuf,
    params_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl FileSystemStore {
    pub fn new(
        snapshot_path: impl Into<PathBuf>,
        params_path: Option<PathBuf>,
        output_path: Option<PathBuf>,
    ) -> Self {
        Self {
            snapshot_path: snapshot_path.into(),
            params_path,
            output_path,
        }
    }
}

impl Storage for FileSystemStore {
    fn load_snapshot(&self) -> Result<Snapshot> {
        let content = fs::read_to_string(&self.snapshot_path)?;
        let snapshot = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    fn load_params(&self) -> Result<Option<AlgorithmParams>> {
        let Some(path) = &self.params_path else {
            return Ok(None);
        };
        let content = fs::read_to_string(path)?;
        let params = serde_json::from_str(&content)?;
        Ok(Some(params))
    }

    fn save_rankings(&self, rankings: &Snapshot) -> Result<()> {
        let Some(path) = &self.output_path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(rankings)?;
        fs::write(path, content)?;
        info!("Saved recomputed rankings to {:?}", path);
        Ok(())
    }
}
