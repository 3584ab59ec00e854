//! Property tests for band selection and fuel calibration.

use proptest::prelude::*;
use rocket_assembly::builder::calibration::{active_band_count, allocated_weight, band_fractions};
use rocket_assembly::builder::{FreightRocketBuilder, Payload, assemble};

const STANDARD: [f64; 2] = [1_000.0, 2_000.0];

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * b.abs().max(1.0)
}

/// Strictly increasing capacities built from positive gaps.
fn capacities() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(1.0f64..5_000.0, 1..6).prop_map(|gaps| {
        gaps.iter()
            .scan(0.0, |cap, gap| {
                *cap += gap;
                Some(*cap)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn light_payloads_use_one_stage(weight in 0.0f64..=1_000.0) {
        let rocket = assemble(&mut FreightRocketBuilder::new(), Payload::satellite(1, weight))
            .expect("assembly");
        prop_assert_eq!(rocket.stage_count(), 1);
        let level = rocket.stages()[0].fuel_level().expect("liquid");
        prop_assert!(close(level, weight / 1_000.0 * 100.0));
    }

    #[test]
    fn heavy_payloads_use_two_stages(weight in 1_000.001f64..4_000.0) {
        let rocket = assemble(&mut FreightRocketBuilder::new(), Payload::satellite(1, weight))
            .expect("assembly");
        prop_assert_eq!(rocket.stage_count(), 2);
        prop_assert_eq!(rocket.stages()[0].fuel_level(), Some(100.0));
        let level = rocket.stages()[1].fuel_level().expect("liquid");
        prop_assert!(close(level, (weight - 1_000.0) / 1_000.0 * 100.0));
    }

    #[test]
    fn fractions_partition_the_payload(caps in capacities(), share in 0.0f64..=1.0) {
        let top = *caps.last().expect("non-empty");
        let weight = top * share;
        let fractions = band_fractions(weight, &caps);
        prop_assert_eq!(fractions.len(), active_band_count(weight, &caps));
        prop_assert!(close(allocated_weight(&fractions, &caps), weight));
        for level in &fractions {
            prop_assert!(*level >= 0.0 && *level <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn lower_bands_are_full_when_upper_band_is_staged(caps in capacities(), share in 0.0f64..=1.5) {
        let weight = caps.last().expect("non-empty") * share;
        let fractions = band_fractions(weight, &caps);
        if let Some((_, lower)) = fractions.split_last() {
            for level in lower {
                prop_assert!(close(*level, 100.0));
            }
        }
    }

    #[test]
    fn assembly_is_deterministic(weight in 0.0f64..3_000.0, id in any::<u32>()) {
        let payload = Payload::satellite(id, weight);
        let a = assemble(&mut FreightRocketBuilder::new(), payload).expect("first");
        let b = assemble(&mut FreightRocketBuilder::new(), payload).expect("second");
        prop_assert_eq!(a, b);
    }

    #[test]
    fn negative_weights_never_assemble(weight in -10_000.0f64..-0.001) {
        let mut builder = FreightRocketBuilder::new();
        prop_assert!(assemble(&mut builder, Payload::satellite(1, weight)).is_err());
    }
}

#[test]
fn band_count_uses_strict_boundaries() {
    assert_eq!(active_band_count(0.0, &STANDARD), 1);
    assert_eq!(active_band_count(1_000.0, &STANDARD), 1);
    assert_eq!(active_band_count(1_000.5, &STANDARD), 2);
    assert_eq!(active_band_count(2_000.0, &STANDARD), 2);
    assert_eq!(active_band_count(9_999.0, &STANDARD), 2);
    assert_eq!(active_band_count(5.0, &[]), 0);
    assert!(band_fractions(5.0, &[]).is_empty());
}
