use num_bigint::BigUint;
use srp_core::bigint::hash_padded_pair;
use srp_core::params::SrpParameters;
use srp_core::routines::*;
use srp_core::types::SrpError;

fn params_256() -> SrpParameters {
    SrpParameters::for_bit_size(256).unwrap()
}

#[test]
fn hash_routines_report_correct_sizes() {
    assert_eq!(Sha1Hash.digest(b"x").len(), 20);
    assert_eq!(Sha1Hash.output_bits(), 160);
    assert_eq!(Sha256Hash.digest(b"x").len(), 32);
    assert_eq!(Sha256Hash.output_bits(), 256);
    assert_eq!(Sha512Hash.digest(b"x").len(), 64);
    assert_eq!(Sha512Hash.output_bits(), 512);
}

#[test]
fn sha1_matches_known_digest() {
    assert_eq!(
        hex::encode(Sha1Hash.digest(b"abc")),
        "a9993e364706816aba3e25717850c26c9cd0d89d"
    );
}

#[test]
fn default_password_key_ignores_identity() {
    let salt = b"0123456789abcdef";
    let x1 = DefaultPasswordKey.compute_x(&Sha1Hash, salt, b"alice", b"secret");
    let x2 = DefaultPasswordKey.compute_x(&Sha1Hash, salt, b"bob", b"secret");
    assert_eq!(x1, x2);
}

#[test]
fn identity_bound_password_key_binds_identity() {
    let salt = b"0123456789abcdef";
    let x1 = IdentityBoundPasswordKey.compute_x(&Sha1Hash, salt, b"alice", b"secret");
    let x2 = IdentityBoundPasswordKey.compute_x(&Sha1Hash, salt, b"bob", b"secret");
    assert_ne!(x1, x2);
}

#[test]
fn password_key_depends_on_salt_and_password() {
    let x1 = DefaultPasswordKey.compute_x(&Sha1Hash, b"salt-one", b"", b"secret");
    let x2 = DefaultPasswordKey.compute_x(&Sha1Hash, b"salt-two", b"", b"secret");
    let x3 = DefaultPasswordKey.compute_x(&Sha1Hash, b"salt-one", b"", b"other");
    assert_ne!(x1, x2);
    assert_ne!(x1, x3);
}

#[test]
fn default_and_identity_bound_routines_disagree() {
    let salt = b"0123456789abcdef";
    let x1 = DefaultPasswordKey.compute_x(&Sha1Hash, salt, b"alice", b"secret");
    let x2 = IdentityBoundPasswordKey.compute_x(&Sha1Hash, salt, b"alice", b"secret");
    assert_ne!(x1, x2);
}

#[test]
fn pbkdf2_rejects_weak_iteration_counts() {
    assert_eq!(Pbkdf2PasswordKey::new(0).err(), Some(SrpError::InvalidConfig));
    assert_eq!(Pbkdf2PasswordKey::new(999).err(), Some(SrpError::InvalidConfig));
    assert!(Pbkdf2PasswordKey::new(1000).is_ok());
}

#[test]
fn pbkdf2_default_iteration_count() {
    let routine = Pbkdf2PasswordKey::default();
    assert_eq!(routine.iterations(), 20_000);
}

#[test]
fn pbkdf2_is_deterministic_per_iteration_count() {
    let salt = b"0123456789abcdef";
    let fast = Pbkdf2PasswordKey::new(1000).unwrap();
    let x1 = fast.compute_x(&Sha1Hash, salt, b"", b"secret");
    let x2 = fast.compute_x(&Sha1Hash, salt, b"", b"secret");
    assert_eq!(x1, x2);

    let slower = Pbkdf2PasswordKey::new(2000).unwrap();
    let x3 = slower.compute_x(&Sha1Hash, salt, b"", b"secret");
    assert_ne!(x1, x3);
}

#[test]
fn pbkdf2_output_fits_160_bits() {
    let fast = Pbkdf2PasswordKey::new(1000).unwrap();
    let x = fast.compute_x(&Sha1Hash, b"salt", b"", b"secret");
    assert!(x.bits() <= 160);
}

#[test]
fn default_scrambling_is_the_padded_pair_hash() {
    let params = params_256();
    let a_pub = BigUint::from(123456u32);
    let b_pub = BigUint::from(654321u32);

    let u = DefaultScrambling.compute_u(&params, &a_pub, &b_pub).unwrap();
    let expected = hash_padded_pair(params.hash(), params.n(), &a_pub, &b_pub).unwrap();
    assert_eq!(u, expected);
}

#[test]
fn hex_and_raw_evidence_routines_disagree() {
    let params = params_256();
    let a_pub = BigUint::from(11111u32);
    let b_pub = BigUint::from(22222u32);
    let secret = BigUint::from(33333u32);

    let raw = DefaultClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret);
    let hexed = HexClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret);
    assert_ne!(raw, hexed);

    let m2_raw = DefaultServerEvidence.compute_m2(&params, &a_pub, &raw, &secret);
    let m2_hex = HexServerEvidence.compute_m2(&params, &a_pub, &raw, &secret);
    assert_ne!(m2_raw, m2_hex);
}

#[test]
fn hex_evidence_hashes_the_lowercase_minimal_encoding() {
    let params = params_256();
    let a_pub = BigUint::from(0xABCDu32);
    let b_pub = BigUint::from(0xEF01u32);
    let secret = BigUint::from(0x23u32);

    let mut input = b"abcd".to_vec();
    input.extend_from_slice(b"ef01");
    input.extend_from_slice(b"23");
    let expected = BigUint::from_bytes_be(&params.hash().digest(&input));

    let m1 = HexClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret);
    assert_eq!(m1, expected);
}

#[test]
fn routines_bundle_defaults_to_raw_byte_strategies() {
    let params = params_256();
    let routines = Routines::default();
    let a_pub = BigUint::from(11111u32);
    let b_pub = BigUint::from(22222u32);
    let secret = BigUint::from(33333u32);

    let m1 = routines
        .client_evidence
        .compute_m1(&params, &a_pub, &b_pub, &secret);
    assert_eq!(
        m1,
        DefaultClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret)
    );
}
