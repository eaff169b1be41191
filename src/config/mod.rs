use crate::config::cli::Args;
use crate::domain::AlgorithmParams;
use crate::error::Result;
use clap::Parser;
use tracing::info;

pub mod cli;

pub struct Config {
    pub args: Args,
}

impl Config {
    pub fn new() -> Result<Self> {
        let args = Args::parse();
        Ok(Self { args })
    }

    /// Resolves the effective parameters: built-in defaults, then the params
    /// file when given, then any CLI overrides on top. Validated before use.
    pub fn resolve_params(&self, from_file: Option<AlgorithmParams>) -> Result<AlgorithmParams> {
        let mut params = from_file.unwrap_or_default();

        if let Some(decay_fn) = self.args.decay_fn {
            params.decay_fn = decay_fn;
        }
        if let Some(star_weight) = self.args.star_weight {
            params.star_weight = star_weight;
        }
        if let Some(commit_weight) = self.args.commit_weight {
            params.commit_weight = commit_weight;
        }
        if let Some(star_scaling) = self.args.star_scaling {
            params.star_scaling = star_scaling;
        }
        if let Some(cap_multiplier) = self.args.cap_multiplier {
            params.cap_multiplier = cap_multiplier;
        }
        if let Some(min_commits) = self.args.min_commits {
            params.min_commits = min_commits;
        }
        if let Some(max_repos) = self.args.max_repos_per_uni {
            params.max_repos_per_uni = max_repos;
        }
        if let Some(top_k) = self.args.top_k_contributors {
            params.top_k_contributors = top_k;
        }
        if let Some(diversity_bonus) = self.args.diversity_bonus {
            params.diversity_bonus = diversity_bonus;
        }
        if self.args.normalize {
            params.normalize = true;
        }

        params.validate()?;
        info!("Resolved algorithm parameters: {:?}", params);
        Ok(params)
    }
}
