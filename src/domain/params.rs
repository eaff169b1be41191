use crate::error::{RankError, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Position-decay function applied to each commit when the collector builds
/// the per-contribution decay sums. The engine only selects which of the five
/// precomputed sums to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DecayFn {
    Harmonic,
    Linear,
    Log,
    Sqrt,
    Uniform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StarScaling {
    Linear,
    Log,
    Sqrt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmParams {
    pub decay_fn: DecayFn,
    pub star_weight: f64,
    pub commit_weight: f64,
    pub star_scaling: StarScaling,
    /// Cap on a single contribution's score, as a multiple of the owning
    /// entity's importance. 0 disables the cap.
    pub cap_multiplier: f64,
    pub min_commits: u64,
    /// Top-N repos counted towards a university's total. 0 means unlimited.
    pub max_repos_per_uni: usize,
    /// Top-K contributors kept per project. 0 means unlimited.
    pub top_k_contributors: usize,
    pub diversity_bonus: f64,
    pub normalize: bool,
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        // Matches the collector's fixed scheme: importance = 2*stars + commits,
        // harmonic decay, capped at 1x importance.
        Self {
            decay_fn: DecayFn::Harmonic,
            star_weight: 2.0,
            commit_weight: 1.0,
            star_scaling: StarScaling::Linear,
            cap_multiplier: 1.0,
            min_commits: 0,
            max_repos_per_uni: 0,
            top_k_contributors: 0,
            diversity_bonus: 0.0,
            normalize: false,
        }
    }
}

impl AlgorithmParams {
    /// Range checks for the numeric fields. The enum fields are a closed set
    /// already rejected by serde/clap at the deserialization boundary, so the
    /// compute core never sees an unknown key.
    pub fn validate(&self) -> Result<()> {
        if !self.star_weight.is_finite() || self.star_weight < 0.0 {
            return Err(RankError::Params(format!(
                "star_weight must be >= 0, got {}",
                self.star_weight
            )));
        }
        if !self.commit_weight.is_finite() || self.commit_weight < 0.0 {
            return Err(RankError::Params(format!(
                "commit_weight must be >= 0, got {}",
                self.commit_weight
            )));
        }
        if !self.cap_multiplier.is_finite() || self.cap_multiplier < 0.0 {
            return Err(RankError::Params(format!(
                "cap_multiplier must be 0 (uncapped) or > 0, got {}",
                self.cap_multiplier
            )));
        }
        if !self.diversity_bonus.is_finite()
            || !(0.0..=1.0).contains(&self.diversity_bonus)
        {
            return Err(RankError::Params(format!(
                "diversity_bonus must be within 0..=1, got {}",
                self.diversity_bonus
            )));
        }
        Ok(())
    }

    /// Canonical encoding used as the memoization key for recomputation.
    /// Field order is the struct declaration order, so equal params always
    /// produce equal keys.
    pub fn cache_key(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
