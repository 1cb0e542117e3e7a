// Host-side tests for angle normalization, stage tables and stage tracking.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod folio_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod rotation {
        include!("../src/core/rotation.rs");
    }
    pub mod stage {
        include!("../src/core/stage.rs");
    }
    pub mod presets {
        include!("../src/core/presets.rs");
    }
}

use folio_core::presets::*;
use folio_core::rotation::FrameSample;
use folio_core::stage::*;
use std::f32::consts::{PI, TAU};

fn sample(angle: f32, rotating: bool) -> FrameSample {
    FrameSample {
        angle,
        velocity: 0.0,
        rotating,
    }
}

#[test]
fn normalize_lands_in_range_for_any_sign_and_magnitude() {
    let inputs = [
        0.0, 1.0, -1.0, TAU, -TAU, 3.0 * TAU + 0.5, -7.5, 1e-9, -1e-9, 1000.0, -1000.0,
        123_456.7,
    ];
    for a in inputs {
        let n = normalize(a);
        assert!((0.0..TAU).contains(&n), "normalize({a}) = {n}");
    }
}

#[test]
fn normalize_is_idempotent() {
    let mut a = -50.0_f32;
    while a < 50.0 {
        let n = normalize(a);
        assert_eq!(normalize(n), n, "not idempotent at {a}");
        a += 0.37;
    }
}

#[test]
fn normalize_maps_equivalent_angles_together() {
    assert!((normalize(-PI / 2.0) - 1.5 * PI).abs() < 1e-5);
    assert!((normalize(1.0 + TAU) - 1.0).abs() < 1e-5);
    assert_eq!(normalize(f32::NAN), 0.0);
    assert_eq!(normalize(f32::INFINITY), 0.0);
}

#[test]
fn classify_with_gap_between_ranges() {
    let table = StageTable::new(&[StageRange::new(0.85, 1.3, 3), StageRange::new(1.7, 2.6, 2)]);
    assert_eq!(table.classify(1.0), Some(3));
    assert_eq!(table.classify(1.5), None);
    assert_eq!(table.classify(2.0), Some(2));
    assert_eq!(table.classify(1.0 - TAU), Some(3));
    assert_eq!(table.classify(2.0 + 2.0 * TAU), Some(2));
}

#[test]
fn classify_bounds_are_inclusive() {
    let table = StageTable::new(&[StageRange::new(0.85, 1.3, 3)]);
    assert_eq!(table.classify(0.85), Some(3));
    assert_eq!(table.classify(1.3), Some(3));
}

#[test]
fn classify_is_pure() {
    let table = ModelPreset::Island.stage_table();
    let mut a = -10.0_f32;
    while a < 10.0 {
        assert_eq!(table.classify(a), table.classify(a));
        a += 0.05;
    }
}

#[test]
fn first_matching_range_wins_on_overlap() {
    let table = StageTable::new(&[StageRange::new(1.0, 2.0, 1), StageRange::new(1.5, 3.0, 2)]);
    assert_eq!(table.classify(1.75), Some(1));
    assert_eq!(table.overlaps().as_slice(), &[(0, 1)]);
}

#[test]
fn disjoint_tiling_table_matches_exactly_once() {
    let edge = f32::from_bits(PI.to_bits() + 1);
    let table = StageTable::new(&[StageRange::new(edge, TAU, 2), StageRange::new(0.0, PI, 1)]);
    assert!(table.validate().is_ok());
    assert!(table.overlaps().is_empty());
    assert!(table.tiles_circle());

    let mut a = 0.0_f32;
    while a < TAU {
        let n = normalize(a);
        let matches = table.ranges().iter().filter(|r| r.contains(n)).count();
        assert_eq!(matches, 1, "angle {a} matched {matches} ranges");
        a += 0.001;
    }
}

#[test]
fn gaps_do_not_tile() {
    let table = StageTable::new(&[StageRange::new(0.0, 1.0, 1), StageRange::new(1.5, TAU, 2)]);
    assert!(!table.tiles_circle());
    assert!(!StageTable::default().tiles_circle());
}

#[test]
fn validate_rejects_bad_ranges() {
    let cases = [
        (
            StageRange::new(2.0, 1.0, 1),
            StageTableError::Inverted {
                index: 0,
                lower: 2.0,
                upper: 1.0,
            },
        ),
        (
            StageRange::new(f32::NAN, 1.0, 1),
            StageTableError::NonFinite { index: 0 },
        ),
        (
            StageRange::new(-0.5, 1.0, 1),
            StageTableError::OutsideCircle {
                index: 0,
                lower: -0.5,
                upper: 1.0,
            },
        ),
        (
            StageRange::new(0.5, 1.0, 0),
            StageTableError::ZeroStage { index: 0 },
        ),
    ];
    for (range, expected) in cases {
        assert_eq!(StageTable::new(&[range]).validate(), Err(expected));
    }
}

#[test]
fn validate_error_messages_name_the_range() {
    let err = StageTable::new(&[StageRange::new(0.0, 1.0, 1), StageRange::new(0.5, 1.0, 0)])
        .validate()
        .unwrap_err();
    assert!(err.to_string().contains("range 1"));
}

#[test]
fn presets_keep_their_own_thresholds() {
    for preset in ModelPreset::ALL {
        let table = preset.stage_table();
        assert!(table.validate().is_ok(), "{} invalid", preset.name());
        assert_eq!(table.max_stage(), Some(4));
    }
    // near-identical models disagree about where stage 2 begins
    assert_eq!(ModelPreset::Room.stage_table().classify(1.5), Some(2));
    assert_eq!(ModelPreset::Showroom.stage_table().classify(1.5), None);
    assert_eq!(ModelPreset::Island.stage_table().classify(2.0), None);
    assert_eq!(ModelPreset::Showroom.stage_table().classify(2.0), Some(2));
}

#[test]
fn island_has_gaps_and_no_overlaps() {
    let table = ModelPreset::Island.stage_table();
    assert!(table.overlaps().is_empty());
    assert!(!table.tiles_circle());
    assert_eq!(table.classify(5.6), Some(4));
    assert_eq!(table.classify(1.0), Some(3));
    assert_eq!(table.classify(2.5), Some(2));
    assert_eq!(table.classify(4.5), Some(1));
    assert_eq!(table.classify(3.5), None);
}

#[test]
fn ghost_kitty_overlaps_but_covers_the_circle() {
    let table = ModelPreset::GhostKitty.stage_table();
    assert!(table.tiles_circle());
    assert_eq!(table.overlaps().as_slice(), &[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(table.classify(1.55), Some(1));
}

#[test]
fn tracker_ignores_idle_frames() {
    let table = ModelPreset::Island.stage_table();
    let mut tracker = StageTracker::new(false);
    let mut calls = Vec::new();

    tracker.update(&sample(1.0, false), &table, |s| calls.push(s));
    assert!(calls.is_empty());
    assert_eq!(tracker.current(), None);

    tracker.update(&sample(1.0, true), &table, |s| calls.push(s));
    assert_eq!(calls, vec![Some(3)]);

    // coasting into a gap keeps the last stage
    tracker.update(&sample(3.5, false), &table, |s| calls.push(s));
    assert_eq!(tracker.current(), Some(3));
    assert_eq!(calls.len(), 1);
}

#[test]
fn tracker_reports_changes_only() {
    let table = ModelPreset::Island.stage_table();
    let mut tracker = StageTracker::new(false);
    let mut calls = Vec::new();
    for a in [1.0, 1.1, 1.2, 3.5, 3.6, 2.5] {
        tracker.update(&sample(a, true), &table, |s| calls.push(s));
    }
    assert_eq!(calls, vec![Some(3), None, Some(2)]);
}

#[test]
fn tracker_can_classify_while_idle() {
    let table = ModelPreset::GhostKitty.stage_table();
    let mut tracker = StageTracker::new(true);
    let stage = tracker.update(&sample(3.5, false), &table, |_| {});
    assert_eq!(stage, Some(3));
}

#[test]
fn preset_names_round_trip() {
    for preset in ModelPreset::ALL {
        assert_eq!(ModelPreset::from_name(preset.name()), Some(preset));
    }
    assert_eq!(ModelPreset::from_name(" Island "), Some(ModelPreset::Island));
    assert_eq!(ModelPreset::from_name("car"), Some(ModelPreset::Showroom));
    assert_eq!(ModelPreset::from_name("spaceship"), None);
    assert_eq!(ModelPreset::default(), ModelPreset::Island);
}
