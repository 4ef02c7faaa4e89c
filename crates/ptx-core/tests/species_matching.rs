use ptx_core::{ParticleRecord, TargetSpecies};

#[test]
fn matching_ignores_sign() {
    let target = TargetSpecies::from_magnitude(15);
    assert!(target.matches_id(15));
    assert!(target.matches_id(-15));
    assert!(!target.matches_id(11));
    assert!(!target.matches_id(-11));
}

#[test]
fn from_code_discards_sign() {
    assert_eq!(TargetSpecies::from_code(-15), TargetSpecies::from_code(15));
    assert_eq!(TargetSpecies::from_code(-15).magnitude(), 15);
}

#[test]
fn abs_of_minimum_code_does_not_overflow() {
    let target = TargetSpecies::from_code(i32::MIN);
    assert_eq!(target.magnitude(), 2_147_483_648);
    assert!(target.matches_id(i32::MIN));
}

#[test]
fn transverse_constructor_zeroes_longitudinal_components() {
    let record = ParticleRecord::transverse(15, 3.0, 4.0);
    assert_eq!(record.pz, 0.0);
    assert_eq!(record.e, 0.0);
    assert_eq!(record.id, 15);
}
