// Health classifier tests: thresholds, boundaries, monotonicity, score mapping

use bondwatch::telemetry::format::round_to;
use bondwatch::telemetry::{HealthStatus, assess, classify, health_score, issue_points};

const GOOD_MOS: f64 = 4.5;

#[test]
fn clean_link_is_good() {
    assert_eq!(classify(20.0, 2.0, 4.5, 0.0, 0.0), HealthStatus::Good);
    assert_eq!(issue_points(20.0, 2.0, 4.5, 0.0, 0.0), 0);
}

#[test]
fn latency_boundaries() {
    assert_eq!(issue_points(50.0, 0.0, GOOD_MOS, 0.0, 0.0), 0);
    assert_eq!(issue_points(50.01, 0.0, GOOD_MOS, 0.0, 0.0), 1);
    assert_eq!(issue_points(100.0, 0.0, GOOD_MOS, 0.0, 0.0), 1);
    assert_eq!(issue_points(100.01, 0.0, GOOD_MOS, 0.0, 0.0), 2);
}

#[test]
fn jitter_boundaries() {
    assert_eq!(issue_points(0.0, 10.0, GOOD_MOS, 0.0, 0.0), 0);
    assert_eq!(issue_points(0.0, 10.5, GOOD_MOS, 0.0, 0.0), 1);
    assert_eq!(issue_points(0.0, 30.0, GOOD_MOS, 0.0, 0.0), 1);
    assert_eq!(issue_points(0.0, 30.5, GOOD_MOS, 0.0, 0.0), 2);
}

#[test]
fn mos_boundaries() {
    assert_eq!(issue_points(0.0, 0.0, 4.0, 0.0, 0.0), 0);
    assert_eq!(issue_points(0.0, 0.0, 3.99, 0.0, 0.0), 1);
    assert_eq!(issue_points(0.0, 0.0, 3.5, 0.0, 0.0), 1);
    assert_eq!(issue_points(0.0, 0.0, 3.49, 0.0, 0.0), 2);
    // Unmeasured MOS counts as poor.
    assert_eq!(issue_points(0.0, 0.0, 0.0, 0.0, 0.0), 2);
}

#[test]
fn loss_uses_worst_direction_in_percent() {
    assert_eq!(issue_points(0.0, 0.0, GOOD_MOS, 0.0, 0.0), 0);
    assert_eq!(issue_points(0.0, 0.0, GOOD_MOS, 0.005, 0.0), 1);
    assert_eq!(issue_points(0.0, 0.0, GOOD_MOS, 0.0, 0.005), 1);
    assert_eq!(issue_points(0.0, 0.0, GOOD_MOS, 0.01, 0.0), 2);
    assert_eq!(issue_points(0.0, 0.0, GOOD_MOS, 0.001, 0.2), 2);
}

#[test]
fn tiers_follow_point_totals() {
    // 1 point: latency only
    assert_eq!(classify(60.0, 0.0, GOOD_MOS, 0.0, 0.0), HealthStatus::Good);
    // 2 points
    assert_eq!(classify(150.0, 0.0, GOOD_MOS, 0.0, 0.0), HealthStatus::Warn);
    // 3 points
    assert_eq!(classify(150.0, 15.0, GOOD_MOS, 0.0, 0.0), HealthStatus::Warn);
    // 4 points
    assert_eq!(classify(150.0, 40.0, GOOD_MOS, 0.0, 0.0), HealthStatus::Bad);
    // everything bad
    assert_eq!(classify(500.0, 100.0, 1.0, 0.5, 0.5), HealthStatus::Bad);
    assert_eq!(issue_points(500.0, 100.0, 1.0, 0.5, 0.5), 8);
}

#[test]
fn signals_do_not_mask_each_other() {
    // Excellent MOS cannot offset bad latency and jitter.
    assert_eq!(classify(150.0, 40.0, 5.0, 0.0, 0.0), HealthStatus::Bad);
}

const LATENCIES: [f64; 8] = [0.0, 10.0, 50.0, 50.01, 75.0, 100.0, 100.01, 400.0];
const JITTERS: [f64; 7] = [0.0, 5.0, 10.0, 10.01, 30.0, 30.01, 90.0];
const MOS_VALUES: [f64; 8] = [0.0, 1.0, 3.49, 3.5, 3.99, 4.0, 4.4, 5.0];
const LOSSES: [f64; 6] = [0.0, 0.0001, 0.005, 0.0099, 0.01, 0.3];

#[test]
fn classification_is_monotone_in_every_signal() {
    for &lat in &LATENCIES {
        for &jit in &JITTERS {
            for &mos in &MOS_VALUES {
                for &loss in &LOSSES {
                    let base = classify(lat, jit, mos, loss, loss);
                    assert_eq!(base, classify(lat, jit, mos, loss, loss), "deterministic");

                    for &higher in LATENCIES.iter().filter(|&&l| l > lat) {
                        assert!(classify(higher, jit, mos, loss, loss) >= base);
                    }
                    for &higher in JITTERS.iter().filter(|&&j| j > jit) {
                        assert!(classify(lat, higher, mos, loss, loss) >= base);
                    }
                    for &lower in MOS_VALUES.iter().filter(|&&m| m < mos) {
                        assert!(classify(lat, jit, lower, loss, loss) >= base);
                    }
                    for &higher in LOSSES.iter().filter(|&&l| l > loss) {
                        assert!(classify(lat, jit, mos, higher, loss) >= base);
                        assert!(classify(lat, jit, mos, loss, higher) >= base);
                    }
                }
            }
        }
    }
}

#[test]
fn score_decreases_with_points_and_stays_in_range() {
    let mut previous = u8::MAX;
    for points in 0..=8 {
        let score = health_score(points);
        assert!(score <= 100);
        assert!(score < previous);
        previous = score;
    }
    assert_eq!(health_score(0), 100);
    assert_eq!(health_score(8), 52);
    assert!(health_score(u8::MAX) > 0);
}

#[test]
fn score_bands_agree_with_status() {
    for &lat in &LATENCIES {
        for &jit in &JITTERS {
            for &mos in &MOS_VALUES {
                let a = assess(lat, jit, mos, 0.0, 0.0);
                match a.status {
                    HealthStatus::Good => assert!(a.score >= 94),
                    HealthStatus::Warn => assert!((82..=88).contains(&a.score)),
                    HealthStatus::Bad => assert!((52..=76).contains(&a.score)),
                }
            }
        }
    }
}

// Raw values just under a threshold that round onto the "good" side in the
// performance block (latency to 0.1 ms, MOS to 0.01).
const EDGE_LATENCIES: [f64; 3] = [0.0, 30.0, 49.94];
const EDGE_MOS: [f64; 4] = [3.996, 4.0, 4.2, 5.0];

#[test]
fn low_latency_high_mos_scores_at_least_70() {
    for &lat in &EDGE_LATENCIES {
        for &jit in &JITTERS {
            for &mos in &EDGE_MOS {
                for &loss in &LOSSES {
                    let displayed_lat = round_to(lat, 1);
                    let displayed_mos = round_to(mos, 2);
                    assert!(displayed_lat < 50.0 && displayed_mos >= 4.0);

                    let a = assess(lat, jit, mos, loss, loss);
                    assert!(
                        a.score >= 70,
                        "lat={lat} jit={jit} mos={mos} loss={loss} scored {}",
                        a.score
                    );
                }
            }
        }
    }
}

#[test]
fn measured_link_never_scores_zero() {
    for &lat in &LATENCIES {
        for &jit in &JITTERS {
            for &mos in MOS_VALUES.iter().filter(|&&m| m > 0.0) {
                for &loss in &LOSSES {
                    assert!(assess(lat, jit, mos, loss, loss).score > 0);
                }
            }
        }
    }
    // Worst possible link, MOS barely measured.
    assert!(assess(1000.0, 500.0, 0.01, 1.0, 1.0).score > 0);
}

#[test]
fn jittery_lossy_link_with_good_latency_and_mos() {
    let a = assess(30.0, 35.0, 4.2, 0.005, 0.005);
    assert_eq!(a.points, 3);
    assert_eq!(a.status, HealthStatus::Warn);
    assert_eq!(a.score, 82);
}

#[test]
fn status_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&HealthStatus::Good).unwrap(), "\"good\"");
    assert_eq!(serde_json::to_string(&HealthStatus::Warn).unwrap(), "\"warn\"");
    assert_eq!(serde_json::to_string(&HealthStatus::Bad).unwrap(), "\"bad\"");
}
