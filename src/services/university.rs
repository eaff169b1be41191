use crate::domain::{AlgorithmParams, RepoContribution, University};
use crate::services::importance::importance;
use crate::services::scoring::score_contribution;
use rustc_hash::FxHashMap;

/// Rescores one university from its repo contributions.
///
/// `project_commits` maps repo id to that project's total commit count; a
/// repo missing from the project collection counts as 0 total commits, which
/// degrades its importance to stars only instead of failing.
///
/// The active set (top `max_repos_per_uni` after sorting) feeds the total
/// score, but the returned repo list is always the full sorted list, so
/// truncation never hides rows from the detail view.
pub fn aggregate_university(
    university: &University,
    project_commits: &FxHashMap<String, u64>,
    params: &AlgorithmParams,
) -> University {
    let mut repos: Vec<RepoContribution> = university
        .repos
        .iter()
        .filter(|r| params.min_commits == 0 || r.commits >= params.min_commits)
        .cloned()
        .collect();

    for repo in &mut repos {
        let total_commits = project_commits.get(&repo.repo).copied().unwrap_or(0);
        let imp = importance(repo.stars, total_commits, params);
        repo.score = score_contribution(&repo.decay_sums, params.decay_fn, imp, params.cap_multiplier);
    }

    // sort_by is stable, so equal scores keep their snapshot order
    repos.sort_by(|a, b| b.score.cmp(&a.score));

    let active_len = if params.max_repos_per_uni > 0 {
        params.max_repos_per_uni.min(repos.len())
    } else {
        repos.len()
    };

    let mut total: f64 = repos[..active_len].iter().map(|r| r.score as f64).sum();

    // Bonus for contributing to several distinct repos:
    // with bonus 0.1, 2 active repos -> x1.1, 3 -> x1.2, 4 -> x1.3
    if params.diversity_bonus > 0.0 && active_len > 1 {
        total *= 1.0 + params.diversity_bonus * (active_len - 1) as f64;
    }

    University {
        rank: 0,
        domain: university.domain.clone(),
        name: university.name.clone(),
        score: total.round() as i64,
        repos_contributed: repos.len(),
        repos,
    }
}
