use proptest::prelude::*;

use ptx_core::{ParticleRecord, TargetSpecies};
use ptx_engine::ScriptedSource;
use ptx_extract::{extract_transverse_momenta, transverse_momentum, ExtractionStatus};

fn arb_particle() -> impl Strategy<Value = ParticleRecord> {
    (
        prop_oneof![Just(11i32), Just(-11), Just(13), Just(15), Just(-15), Just(211)],
        -50.0f64..50.0,
        -50.0f64..50.0,
    )
        .prop_map(|(id, px, py)| ParticleRecord::transverse(id, px, py))
}

fn arb_events() -> impl Strategy<Value = Vec<Vec<ParticleRecord>>> {
    prop::collection::vec(prop::collection::vec(arb_particle(), 0..6), 0..8)
}

proptest! {
    #[test]
    fn count_equals_matches_under_capacity(events in arb_events()) {
        let target = TargetSpecies::from_magnitude(15);
        let expected: Vec<f64> = events
            .iter()
            .flatten()
            .filter(|p| p.id.unsigned_abs() == 15)
            .map(|p| transverse_momentum(p.px, p.py))
            .collect();

        // Capacity always exceeds the number of possible matches.
        let mut buffer = vec![0.0f64; 64];
        let outcome = extract_transverse_momenta(ScriptedSource::new(events), target, &mut buffer);

        prop_assert_eq!(outcome.status, ExtractionStatus::Success);
        prop_assert_eq!(outcome.count, expected.len());
        prop_assert_eq!(&buffer[..outcome.count], expected.as_slice());
    }

    #[test]
    fn overflow_count_equals_capacity(events in arb_events(), capacity in 0usize..4) {
        let target = TargetSpecies::from_magnitude(15);
        let matches = events
            .iter()
            .flatten()
            .filter(|p| p.id.unsigned_abs() == 15)
            .count();

        let mut buffer = vec![0.0f64; capacity];
        let outcome = extract_transverse_momenta(ScriptedSource::new(events), target, &mut buffer);

        if matches > capacity {
            prop_assert_eq!(outcome.status, ExtractionStatus::Overflow);
            prop_assert_eq!(outcome.count, capacity);
        } else {
            prop_assert_eq!(outcome.status, ExtractionStatus::Success);
            prop_assert_eq!(outcome.count, matches);
        }
    }

    #[test]
    fn extracted_values_are_non_negative(px in -1e6f64..1e6, py in -1e6f64..1e6) {
        let pt = transverse_momentum(px, py);
        prop_assert!(pt >= 0.0);
        prop_assert!(pt.is_finite());
    }
}
