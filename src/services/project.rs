use crate::domain::{AlgorithmParams, Project, ProjectContributor};
use crate::services::importance::importance;
use crate::services::scoring::score_contribution;

/// Rescores one project from its contributor list.
///
/// All contributors share the project's own importance. Unlike the
/// university path, `top_k_contributors` truncation drops entries from both
/// the displayed list and the total.
pub fn aggregate_project(project: &Project, params: &AlgorithmParams) -> Project {
    let imp = importance(project.stars, project.total_commits, params);

    let mut contributors: Vec<ProjectContributor> = project
        .contributors
        .iter()
        .filter(|c| params.min_commits == 0 || c.commits >= params.min_commits)
        .cloned()
        .collect();

    for contributor in &mut contributors {
        contributor.score = score_contribution(
            &contributor.decay_sums,
            params.decay_fn,
            imp,
            params.cap_multiplier,
        );
    }

    contributors.sort_by(|a, b| b.score.cmp(&a.score));

    if params.top_k_contributors > 0 {
        contributors.truncate(params.top_k_contributors);
    }

    let total_score = contributors.iter().map(|c| c.score).sum();

    Project {
        repo: project.repo.clone(),
        stars: project.stars,
        total_commits: project.total_commits,
        edu_contributors: project.edu_contributors,
        total_score,
        contributors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DecaySums;

    fn contributor(name: &str, commits: u64, harmonic: f64) -> ProjectContributor {
        ProjectContributor {
            name: name.to_string(),
            university: "MIT".to_string(),
            domain: "mit.edu".to_string(),
            commits,
            score: 0,
            first_commit_pct: 0.0,
            median_commit_pct: 50.0,
            last_commit_pct: 100.0,
            decay_sums: DecaySums {
                harmonic,
                ..Default::default()
            },
        }
    }

    fn project(contributors: Vec<ProjectContributor>) -> Project {
        Project {
            repo: "example/repo".to_string(),
            stars: 100,
            total_commits: 50,
            edu_contributors: contributors.len(),
            total_score: 0,
            contributors,
        }
    }

    #[test]
    fn contributors_share_project_importance() {
        let proj = project(vec![
            contributor("alice", 20, 0.8),
            contributor("bob", 5, 0.2),
        ]);

        let result = aggregate_project(&proj, &AlgorithmParams::default());

        // importance = 2*100 + 50 = 250 for both
        assert_eq!(result.contributors[0].score, 200);
        assert_eq!(result.contributors[1].score, 50);
        assert_eq!(result.total_score, 250);
    }

    #[test]
    fn top_k_truncates_both_list_and_total() {
        let proj = project(vec![
            contributor("alice", 20, 0.8),
            contributor("bob", 5, 0.2),
            contributor("carol", 2, 0.1),
        ]);
        let params = AlgorithmParams {
            top_k_contributors: 2,
            ..Default::default()
        };

        let result = aggregate_project(&proj, &params);
        assert_eq!(result.contributors.len(), 2);
        assert_eq!(result.total_score, 250);
        assert_eq!(result.edu_contributors, 3);
    }

    #[test]
    fn min_commits_filters_contributors() {
        let proj = project(vec![
            contributor("alice", 20, 0.8),
            contributor("bob", 5, 0.2),
        ]);
        let params = AlgorithmParams {
            min_commits: 10,
            ..Default::default()
        };

        let result = aggregate_project(&proj, &params);
        assert_eq!(result.contributors.len(), 1);
        assert_eq!(result.contributors[0].name, "alice");
        assert_eq!(result.total_score, 200);
    }

    #[test]
    fn tied_contributors_keep_snapshot_order() {
        let proj = project(vec![
            contributor("alice", 5, 0.2),
            contributor("bob", 5, 0.2),
        ]);

        let result = aggregate_project(&proj, &AlgorithmParams::default());
        assert_eq!(result.contributors[0].name, "alice");
        assert_eq!(result.contributors[1].name, "bob");
    }
}
