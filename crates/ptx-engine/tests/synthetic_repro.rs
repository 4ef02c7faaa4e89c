use ptx_core::{CollisionEvent, EventSource};
use ptx_engine::{SyntheticConfig, SyntheticSource};

fn drain(mut source: SyntheticSource) -> Vec<CollisionEvent> {
    let mut events = Vec::new();
    while let Some(event) = source.next_event().unwrap() {
        events.push(event);
    }
    events
}

#[test]
fn fixed_seed_reproduces_the_stream() {
    let config = SyntheticConfig {
        events: 12,
        ..SyntheticConfig::default()
    };
    let run_a = drain(SyntheticSource::new(config.clone(), 2024));
    let run_b = drain(SyntheticSource::new(config, 2024));
    assert_eq!(run_a, run_b);
}

#[test]
fn different_seeds_diverge() {
    let config = SyntheticConfig {
        events: 12,
        ..SyntheticConfig::default()
    };
    let run_a = drain(SyntheticSource::new(config.clone(), 1));
    let run_b = drain(SyntheticSource::new(config, 2));
    assert_ne!(run_a, run_b);
}

#[test]
fn event_content_depends_only_on_seed_and_ordinal() {
    // Streams of different lengths share the same master seed, so their
    // common prefix is identical: every event draws from a substream derived
    // from the seed and its ordinal alone.
    let short = SyntheticConfig {
        events: 4,
        ..SyntheticConfig::default()
    };
    let long = SyntheticConfig {
        events: 16,
        ..SyntheticConfig::default()
    };
    let run_short = drain(SyntheticSource::new(short, 314));
    let run_long = drain(SyntheticSource::new(long, 314));
    assert_eq!(run_short.as_slice(), &run_long[..4]);
}

#[test]
fn respects_event_count_and_multiplicity() {
    let config = SyntheticConfig {
        events: 25,
        max_multiplicity: 3,
        ..SyntheticConfig::default()
    };
    let events = drain(SyntheticSource::new(config.clone(), 7));
    assert_eq!(events.len(), 25);
    for (idx, event) in events.iter().enumerate() {
        assert_eq!(event.ordinal, idx as u64 + 1);
        assert!(!event.is_empty());
        assert!(event.len() <= 3);
        for particle in &event.particles {
            assert!(config.species_menu.contains(&particle.id.abs()));
            assert!(particle.px.abs() <= config.max_component);
            assert!(particle.py.abs() <= config.max_component);
        }
    }
}
