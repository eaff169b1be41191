use crate::domain::params::DecayFn;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Precomputed sums of position-decay weights over an entity's commits,
/// one per decay function. `uniform` equals the commit count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DecaySums {
    pub harmonic: f64,
    pub linear: f64,
    pub log: f64,
    pub sqrt: f64,
    pub uniform: f64,
}

impl DecaySums {
    pub fn get(&self, decay_fn: DecayFn) -> f64 {
        match decay_fn {
            DecayFn::Harmonic => self.harmonic,
            DecayFn::Linear => self.linear,
            DecayFn::Log => self.log,
            DecayFn::Sqrt => self.sqrt,
            DecayFn::Uniform => self.uniform,
        }
    }
}

/// One university's activity in one repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoContribution {
    pub repo: String,
    pub commits: u64,
    pub stars: u64,
    /// Derived, rewritten on every recompute.
    pub score: i64,
    pub decay_sums: DecaySums,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct University {
    /// Derived, dense 1-based.
    #[serde(default)]
    pub rank: usize,
    pub domain: String,
    pub name: String,
    /// Derived, rewritten on every recompute.
    pub score: i64,
    pub repos_contributed: usize,
    pub repos: Vec<RepoContribution>,
}

/// One person's activity in one project. The commit-timing percentiles are
/// collector-provided display stats; the engine carries them through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectContributor {
    pub name: String,
    pub university: String,
    pub domain: String,
    pub commits: u64,
    pub score: i64,
    pub first_commit_pct: f64,
    pub median_commit_pct: f64,
    pub last_commit_pct: f64,
    pub decay_sums: DecaySums,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub repo: String,
    pub stars: u64,
    pub total_commits: u64,
    pub edu_contributors: usize,
    pub total_score: i64,
    pub contributors: Vec<ProjectContributor>,
}

/// Immutable root document produced by the collector. Loaded once per
/// session; recomputation clones it and rewrites the derived fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub total_repos: usize,
    pub universities: Vec<University>,
    pub projects: Vec<Project>,
}
