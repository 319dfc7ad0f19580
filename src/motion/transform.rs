//! Linear re-projection of one scalar onto another range.

/// Maps `value` from `domain` onto `range` linearly, clamped to `range`.
pub fn map_range(value: f64, domain: (f64, f64), range: (f64, f64)) -> f64 {
    let (d0, d1) = domain;
    let (r0, r1) = range;
    if d1 == d0 {
        return if value < d0 { r0 } else { r1 };
    }
    let progress = ((value - d0) / (d1 - d0)).clamp(0.0, 1.0);
    r0 + (r1 - r0) * progress
}

/// Scroll progress over which the primary orb drifts down by half its height.
pub fn primary_orb_shift_percent(scroll_progress: f64) -> f64 {
    map_range(scroll_progress, (0.0, 1.0), (0.0, 50.0))
}

pub fn secondary_orb_shift_percent(scroll_progress: f64) -> f64 {
    map_range(scroll_progress, (0.0, 1.0), (0.0, -30.0))
}

/// Content fades out during the first half of the traversal.
pub fn content_opacity(scroll_progress: f64) -> f64 {
    map_range(scroll_progress, (0.0, 0.5), (1.0, 0.0))
}

/// Horizontal counter-drift of the secondary orb, from the smoothed pointer x.
pub fn secondary_orb_drift(spring_x: f64) -> f64 {
    map_range(spring_x, (0.0, 100.0), (0.0, -50.0))
}

/// Horizontal drift of feature pill `index`; later pills drift further.
pub fn feature_pill_drift(spring_x: f64, index: usize) -> f64 {
    map_range(spring_x, (0.0, 100.0), (0.0, index as f64 * 5.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn quarter_scroll_is_half_faded() {
        assert!(close(content_opacity(0.25), 0.5));
        assert!(close(content_opacity(0.0), 1.0));
        assert!(close(content_opacity(0.5), 0.0));
        assert!(close(content_opacity(0.9), 0.0));
    }

    #[test]
    fn orbs_shift_linearly_over_the_full_traversal() {
        assert!(close(primary_orb_shift_percent(0.0), 0.0));
        assert!(close(primary_orb_shift_percent(0.5), 25.0));
        assert!(close(primary_orb_shift_percent(1.0), 50.0));
        assert!(close(secondary_orb_shift_percent(0.5), -15.0));
        assert!(close(secondary_orb_shift_percent(1.0), -30.0));
    }

    #[test]
    fn output_is_clamped_outside_the_domain() {
        assert!(close(map_range(-3.0, (0.0, 1.0), (10.0, 20.0)), 10.0));
        assert!(close(map_range(7.0, (0.0, 1.0), (10.0, 20.0)), 20.0));
        assert!(close(secondary_orb_drift(250.0), -50.0));
        assert!(close(feature_pill_drift(-20.0, 2), 0.0));
    }

    #[test]
    fn pill_drift_scales_with_index() {
        assert!(close(feature_pill_drift(50.0, 0), 0.0));
        assert!(close(feature_pill_drift(50.0, 1), 2.5));
        assert!(close(feature_pill_drift(50.0, 2), 5.0));
    }

    #[test]
    fn degenerate_domain_steps() {
        assert!(close(map_range(0.0, (1.0, 1.0), (0.0, 1.0)), 0.0));
        assert!(close(map_range(1.0, (1.0, 1.0), (0.0, 1.0)), 1.0));
    }
}
