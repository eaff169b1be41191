use crate::domain::{DecayFn, StarScaling};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Path to the rankings snapshot produced by the collector
    #[arg(long, default_value = "rankings.json")]
    pub snapshot_file: PathBuf,

    /// Optional parameters file; defaults apply when absent
    #[arg(long)]
    pub params_file: Option<PathBuf>,

    /// Where to write the recomputed rankings; logs a summary when absent
    #[arg(long)]
    pub output_file: Option<PathBuf>,

    /// Decay function used to weight commit positions
    #[arg(long, value_enum)]
    pub decay_fn: Option<DecayFn>,

    /// Weight applied to the scaled star count
    #[arg(long)]
    pub star_weight: Option<f64>,

    /// Weight applied to the commit count
    #[arg(long)]
    pub commit_weight: Option<f64>,

    /// Scaling applied to star counts before weighting
    #[arg(long, value_enum)]
    pub star_scaling: Option<StarScaling>,

    /// Cap on a single contribution as a multiple of importance (0 = uncapped)
    #[arg(long)]
    pub cap_multiplier: Option<f64>,

    /// Drop contributions with fewer commits than this
    #[arg(long)]
    pub min_commits: Option<u64>,

    /// Count only the top N repos towards each university total (0 = all)
    #[arg(long)]
    pub max_repos_per_uni: Option<usize>,

    /// Keep only the top K contributors per project (0 = all)
    #[arg(long)]
    pub top_k_contributors: Option<usize>,

    /// Bonus fraction per additional active repo (0 to 1)
    #[arg(long)]
    pub diversity_bonus: Option<f64>,

    /// Rescale university scores so the top entry is 100
    #[arg(long)]
    pub normalize: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
