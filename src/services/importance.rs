use crate::domain::{AlgorithmParams, StarScaling};

/// Rescales a raw star count before weighting. All three modes are total
/// over stars >= 0: ln(1+0) = 0 and sqrt(0) = 0.
pub fn scale_stars(stars: u64, scaling: StarScaling) -> f64 {
    let stars = stars as f64;
    match scaling {
        StarScaling::Linear => stars,
        StarScaling::Log => (1.0 + stars).ln(),
        StarScaling::Sqrt => stars.sqrt(),
    }
}

/// Weighted combination of popularity and activity. Under the defaults
/// (star_weight 2, commit_weight 1, linear scaling) this reproduces the
/// collector's `2 * stars + total_commits`.
pub fn importance(stars: u64, activity: u64, params: &AlgorithmParams) -> f64 {
    params.star_weight * scale_stars(stars, params.star_scaling)
        + params.commit_weight * activity as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scaling_modes() {
        assert_eq!(scale_stars(100, StarScaling::Linear), 100.0);
        assert!((scale_stars(100, StarScaling::Log) - 101f64.ln()).abs() < 1e-12);
        assert_eq!(scale_stars(100, StarScaling::Sqrt), 10.0);
    }

    #[test]
    fn zero_stars_is_defined_for_all_modes() {
        assert_eq!(scale_stars(0, StarScaling::Linear), 0.0);
        assert_eq!(scale_stars(0, StarScaling::Log), 0.0);
        assert_eq!(scale_stars(0, StarScaling::Sqrt), 0.0);
    }

    #[test]
    fn default_weights_match_collector_formula() {
        let params = AlgorithmParams::default();
        assert_eq!(importance(100, 50, &params), 250.0);
        assert_eq!(importance(10, 5, &params), 25.0);
    }
}
