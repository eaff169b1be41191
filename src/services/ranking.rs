use crate::domain::University;

/// Sorts universities descending by score and assigns dense 1-based ranks.
/// The sort is stable, so ties keep their prior relative order and the
/// result is reproducible across runs.
pub fn rank_universities(universities: &mut [University]) {
    universities.sort_by(|a, b| b.score.cmp(&a.score));
    for (i, university) in universities.iter_mut().enumerate() {
        university.rank = i + 1;
    }
}

/// Rescales scores so the top university sits at 100. Skipped for an empty
/// list or a zero top score. The rescale is monotonic and uniform, so ranks
/// assigned before it stay valid.
pub fn normalize_scores(universities: &mut [University]) {
    let top_score = match universities.first() {
        Some(top) if top.score > 0 => top.score as f64,
        _ => return,
    };
    for university in universities.iter_mut() {
        university.score = (university.score as f64 / top_score * 100.0).round() as i64;
    }
}
