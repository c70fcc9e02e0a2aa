use std::f64::consts::{FRAC_PI_2, TAU};

use cappy_site::charts::datasets::{value_bounds, PERFORMANCE, REGIMES, VOLATILITY};
use cappy_site::charts::stats::{bar_span, percent_tick, ring_segment, segment_angles};

#[test]
fn static_datasets_are_consistent() {
    for series in PERFORMANCE.series {
        assert_eq!(series.values.len(), PERFORMANCE.labels.len(), "{}", series.label);
    }
    for series in VOLATILITY.series {
        assert_eq!(series.values.len(), VOLATILITY.categories.len(), "{}", series.label);
    }
    assert_eq!(REGIMES.values.len(), REGIMES.labels.len());
    assert_eq!(REGIMES.colors.len(), REGIMES.labels.len());
}

#[test]
fn doughnut_segments_cover_the_full_circle() {
    let spans = segment_angles(REGIMES.values);
    assert_eq!(spans.len(), 4);
    assert!((spans[0].0 + FRAC_PI_2).abs() < 1e-12);
    assert!((spans[3].1 - (TAU - FRAC_PI_2)).abs() < 1e-9);
    for pair in spans.windows(2) {
        assert_eq!(pair[0].1, pair[1].0);
    }
    // Expansion is 42 of 100
    assert!(((spans[0].1 - spans[0].0) - 0.42 * TAU).abs() < 1e-9);
}

#[test]
fn doughnut_without_data_draws_nothing() {
    assert!(segment_angles(&[]).is_empty());
    assert!(segment_angles(&[0.0, 0.0]).is_empty());
}

#[test]
fn ring_segment_starts_at_twelve_o_clock() {
    let outline = ring_segment((100.0, 100.0), 80.0, 40.0, (-FRAC_PI_2, 0.0), 8);
    assert_eq!(outline.len(), 18);
    assert_eq!(outline[0], (100, 20));
    assert_eq!(outline[8], (180, 100));
    assert_eq!(outline[9], (140, 100));
    assert_eq!(outline[17], (100, 60));
}

#[test]
fn grouped_bars_stay_inside_their_category() {
    for category in 0..3 {
        let (a0, a1) = bar_span(category, 0, 2);
        let (b0, b1) = bar_span(category, 1, 2);
        assert!(a0 >= category as f64 && b1 <= category as f64 + 1.0);
        assert!(a1 <= b0 + 1e-12);
    }
}

#[test]
fn volatility_axis_covers_losses_and_gains() {
    assert_eq!(value_bounds(VOLATILITY.series), (-22.0, 18.0));
    assert_eq!(percent_tick(-20.0), "-20%");
    assert_eq!(percent_tick(15.0), "15%");
}
