use crate::config::Z_SCORE_CLAMP;
use crate::reference::ReferenceTable;

/// The seven anchors at `age_weeks`, linearly interpolated between the two
/// bracketing rows. An exact age match returns the row's raw values.
/// `None` when the age is outside the table.
pub(crate) fn anchors_at(table: &ReferenceTable, age_weeks: f64) -> Option<[f64; 7]> {
    if !table.covers(age_weeks) {
        return None;
    }

    let points = table.points();
    let idx = points.partition_point(|p| p.age < age_weeks);
    let after = points.get(idx)?;
    if after.age == age_weeks || idx == 0 {
        return Some(after.anchors());
    }
    let before = &points[idx - 1];

    let t = (age_weeks - before.age) / (after.age - before.age);
    let lo = before.anchors();
    let hi = after.anchors();
    // Weighted form keeps the ladder ordered under rounding.
    Some(std::array::from_fn(|i| lo[i] * (1.0 - t) + hi[i] * t))
}

/// Place `value` on the Z-3 … Z+3 ladder.
///
/// Values at or beyond the outer anchors clamp to ±3. Inside, the score is
/// interpolated linearly within the bracketing pair; a flat pair yields the
/// lower anchor's Z. `None` only for a NaN value.
pub(crate) fn locate_z(anchors: &[f64; 7], value: f64) -> Option<f64> {
    if value <= anchors[0] {
        return Some(-Z_SCORE_CLAMP);
    }
    if value >= anchors[6] {
        return Some(Z_SCORE_CLAMP);
    }

    (0..6).find_map(|k| {
        let (lo, hi) = (anchors[k], anchors[k + 1]);
        if value < lo || value > hi {
            return None;
        }
        let z_k = k as f64 - Z_SCORE_CLAMP;
        if hi == lo {
            Some(z_k)
        } else {
            Some(z_k + (value - lo) / (hi - lo))
        }
    })
}
