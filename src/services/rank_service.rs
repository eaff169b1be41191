use crate::domain::{AlgorithmParams, Snapshot, University};
use crate::error::Result;
use crate::services::project::aggregate_project;
use crate::services::ranking::{normalize_scores, rank_universities};
use crate::services::university::aggregate_university;
use rustc_hash::FxHashMap;
use tracing::{debug, info};

/// Re-derives the full ranking from an immutable snapshot under a given
/// parameter set. The snapshot is loaded once per session, so results are
/// memoized on the params alone.
pub struct RankService {
    snapshot: Snapshot,
    cache: FxHashMap<String, Snapshot>,
}

impl RankService {
    pub fn new(snapshot: Snapshot) -> Self {
        info!(
            "Loaded snapshot: {} universities, {} projects across {} repos",
            snapshot.universities.len(),
            snapshot.projects.len(),
            snapshot.total_repos
        );
        Self {
            snapshot,
            cache: FxHashMap::default(),
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Recomputes every derived score and rank. Pure with respect to
    /// (snapshot, params): identical inputs produce identical output.
    pub fn recompute(&mut self, params: &AlgorithmParams) -> Result<Snapshot> {
        params.validate()?;

        let key = params.cache_key();
        if let Some(cached) = self.cache.get(&key) {
            debug!("Using cached ranking for current params");
            return Ok(cached.clone());
        }

        let ranked = compute(&self.snapshot, params);
        info!(
            "Recomputed ranking: {} universities scored",
            ranked.universities.len()
        );

        self.cache.insert(key, ranked.clone());
        Ok(ranked)
    }
}

fn compute(snapshot: &Snapshot, params: &AlgorithmParams) -> Snapshot {
    // Repo importance for the university path uses the project's total
    // commit count; repos outside the project collection fall back to 0.
    let project_commits: FxHashMap<String, u64> = snapshot
        .projects
        .iter()
        .map(|p| (p.repo.clone(), p.total_commits))
        .collect();

    let mut universities: Vec<University> = snapshot
        .universities
        .iter()
        .map(|u| aggregate_university(u, &project_commits, params))
        .collect();

    rank_universities(&mut universities);
    if params.normalize {
        normalize_scores(&mut universities);
    }

    let projects = snapshot
        .projects
        .iter()
        .map(|p| aggregate_project(p, params))
        .collect();

    Snapshot {
        generated_at: snapshot.generated_at,
        total_repos: snapshot.total_repos,
        universities,
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DecaySums, Project, RepoContribution};
    use chrono::{TimeZone, Utc};

    fn sample_snapshot() -> Snapshot {
        let repo = |id: &str, commits, stars, harmonic| RepoContribution {
            repo: id.to_string(),
            commits,
            stars,
            score: 0,
            decay_sums: DecaySums {
                harmonic,
                ..Default::default()
            },
        };
        Snapshot {
            generated_at: Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).unwrap(),
            total_repos: 2,
            universities: vec![
                University {
                    rank: 0,
                    domain: "mit.edu".to_string(),
                    name: "MIT".to_string(),
                    score: 0,
                    repos_contributed: 2,
                    repos: vec![repo("a/a", 10, 100, 1.5), repo("b/b", 3, 10, 0.5)],
                },
                University {
                    rank: 0,
                    domain: "cmu.edu".to_string(),
                    name: "CMU".to_string(),
                    score: 0,
                    repos_contributed: 1,
                    repos: vec![repo("b/b", 8, 10, 2.0)],
                },
            ],
            projects: vec![
                Project {
                    repo: "a/a".to_string(),
                    stars: 100,
                    total_commits: 50,
                    edu_contributors: 0,
                    total_score: 0,
                    contributors: Vec::new(),
                },
                Project {
                    repo: "b/b".to_string(),
                    stars: 10,
                    total_commits: 5,
                    edu_contributors: 0,
                    total_score: 0,
                    contributors: Vec::new(),
                },
            ],
        }
    }

    #[test]
    fn recompute_orders_and_ranks_universities() {
        let mut service = RankService::new(sample_snapshot());
        let ranked = service.recompute(&AlgorithmParams::default()).unwrap();

        // MIT: 250 + 13 = 263; CMU: min(2.0 * 25, 25) = 25
        assert_eq!(ranked.universities[0].domain, "mit.edu");
        assert_eq!(ranked.universities[0].score, 263);
        assert_eq!(ranked.universities[0].rank, 1);
        assert_eq!(ranked.universities[1].domain, "cmu.edu");
        assert_eq!(ranked.universities[1].score, 25);
        assert_eq!(ranked.universities[1].rank, 2);
    }

    #[test]
    fn recompute_is_deterministic() {
        let mut service = RankService::new(sample_snapshot());
        let first = service.recompute(&AlgorithmParams::default()).unwrap();
        let second = service.recompute(&AlgorithmParams::default()).unwrap();
        assert_eq!(first, second);

        // a fresh service without the cache agrees too
        let mut fresh = RankService::new(sample_snapshot());
        assert_eq!(fresh.recompute(&AlgorithmParams::default()).unwrap(), first);
    }

    #[test]
    fn recompute_never_mutates_the_snapshot() {
        let snapshot = sample_snapshot();
        let mut service = RankService::new(snapshot.clone());
        service.recompute(&AlgorithmParams::default()).unwrap();
        assert_eq!(*service.snapshot(), snapshot);
    }

    #[test]
    fn normalized_run_keeps_rank_order() {
        let mut service = RankService::new(sample_snapshot());
        let plain = service.recompute(&AlgorithmParams::default()).unwrap();
        let normalized = service
            .recompute(&AlgorithmParams {
                normalize: true,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(normalized.universities[0].score, 100);
        // 25 / 263 * 100 = 9.5... -> 10
        assert_eq!(normalized.universities[1].score, 10);
        let plain_order: Vec<_> = plain.universities.iter().map(|u| &u.domain).collect();
        let norm_order: Vec<_> = normalized.universities.iter().map(|u| &u.domain).collect();
        assert_eq!(plain_order, norm_order);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let mut service = RankService::new(sample_snapshot());
        let result = service.recompute(&AlgorithmParams {
            diversity_bonus: 2.0,
            ..Default::default()
        });
        assert!(result.is_err());
    }
}
