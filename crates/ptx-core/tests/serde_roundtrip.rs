use ptx_core::errors::{ErrorInfo, PtxError};
use ptx_core::provenance::{sha256_hex, RunProvenance};
use ptx_core::rng::SeedPolicy;
use ptx_core::{CollisionEvent, ParticleRecord};

#[test]
fn event_roundtrips_through_json() {
    let event = CollisionEvent::new(
        7,
        vec![
            ParticleRecord {
                id: 15,
                px: 3.0,
                py: 4.0,
                pz: 1.5,
                e: 5.5,
            },
            ParticleRecord::transverse(-15, 0.0, 5.0),
        ],
    );
    let json = serde_json::to_string(&event).unwrap();
    let restored: CollisionEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, restored);
}

#[test]
fn error_roundtrips_with_family_tag() {
    let err = PtxError::Simulation(
        ErrorInfo::new("lhe-truncated", "event block truncated").with_context("event", "2"),
    );
    let json = serde_json::to_string(&err).unwrap();
    assert!(json.contains("\"family\":\"Simulation\""));
    let restored: PtxError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, restored);
}

#[test]
fn seed_policy_uses_kebab_case_tags() {
    let json = serde_json::to_string(&SeedPolicy::SystemEntropy).unwrap();
    assert!(json.contains("system-entropy"));
    let fixed: SeedPolicy = serde_json::from_str(r#"{"type":"fixed","seed":11}"#).unwrap();
    assert_eq!(fixed, SeedPolicy::Fixed { seed: 11 });
}

#[test]
fn hash_file_matches_payload_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.lhe");
    std::fs::write(&path, b"<LesHouchesEvents>").unwrap();
    assert_eq!(
        ptx_core::provenance::hash_file(&path).unwrap(),
        sha256_hex(b"<LesHouchesEvents>")
    );

    let err = ptx_core::provenance::hash_file(&dir.path().join("absent")).unwrap_err();
    assert!(matches!(err, PtxError::Serde(info) if info.code == "provenance-read"));
}

#[test]
fn provenance_roundtrips_through_json() {
    let provenance = RunProvenance {
        input_spec: "events.lhe".to_string(),
        input_hash: sha256_hex(b"<LesHouchesEvents>"),
        seed: 42,
        species: 15,
        tool_version: "0.1.0".to_string(),
    };
    let json = serde_json::to_string(&provenance).unwrap();
    let restored: RunProvenance = serde_json::from_str(&json).unwrap();
    assert_eq!(provenance, restored);
}
