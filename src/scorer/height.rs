use crate::consts::{HEIGHT_BASE_PERCENT, HEIGHT_FULL_PERCENT, HEIGHT_SEGMENTS};

fn curve_start() -> f64 {
    HEIGHT_SEGMENTS[0].0
}

fn curve_end() -> f64 {
    HEIGHT_SEGMENTS[HEIGHT_SEGMENTS.len() - 1].1
}

/// Weighted distance covered along the curve up to `score`.
fn weighted_progress(score: f64) -> f64 {
    HEIGHT_SEGMENTS
        .iter()
        .map(|&(start, end, weight)| weight * (score.min(end) - start).max(0.0))
        .sum()
}

/// Maps a total score onto the bar height, in percent.
///
/// Piecewise-linear over the breakpoints 20/60/80/90/100 with slopes in the
/// ratio 1.0 : 0.6 : 0.4 : 0.2, so early gains lift the bar more than late
/// ones. Scores at or below 20 sit on the 20% base; scores above 100 are
/// clamped to the full bar.
pub fn height_percent(total_score: f64) -> f64 {
    if total_score.is_nan() || total_score <= curve_start() {
        return HEIGHT_BASE_PERCENT;
    }
    let score = total_score.min(curve_end());

    let fraction = weighted_progress(score) / weighted_progress(curve_end());
    HEIGHT_BASE_PERCENT + (HEIGHT_FULL_PERCENT - HEIGHT_BASE_PERCENT) * fraction
}
