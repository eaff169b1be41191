use super::params::AlgorithmParams;
use super::snapshot::Snapshot;
use crate::error::Result;

pub trait Storage: Send + Sync {
    fn load_snapshot(&self) -> Result<Snapshot>;
    fn load_params(&self) -> Result<Option<AlgorithmParams>>;
    fn save_rankings(&self, rankings: &Snapshot) -> Result<()>;
}
