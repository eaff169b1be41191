mod params;
mod snapshot;
pub mod storage;

pub use params::{AlgorithmParams, DecayFn, StarScaling};
pub use snapshot::{
    DecaySums, Project, ProjectContributor, RepoContribution, Snapshot, University,
};
