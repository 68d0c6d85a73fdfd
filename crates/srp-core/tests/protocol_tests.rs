use num_bigint::BigUint;
use num_traits::Zero;
use rand_core::OsRng;
use srp_core::params::SrpParameters;
use srp_core::protocol;
use srp_core::routines::{
    DefaultClientEvidence, DefaultScrambling, DefaultServerEvidence, IdentityBoundPasswordKey,
    PasswordKeyRoutine, ClientEvidenceRoutine, ScramblingRoutine, ServerEvidenceRoutine,
};
use srp_core::verifier::VerifierGenerator;

fn params_256() -> SrpParameters {
    SrpParameters::for_bit_size(256).unwrap()
}

#[test]
fn multiplier_k_is_deterministic_and_nonzero() {
    let params = params_256();
    let k1 = protocol::compute_k(&params).unwrap();
    let k2 = protocol::compute_k(&params).unwrap();
    assert_eq!(k1, k2);
    assert!(!k1.is_zero());
}

#[test]
fn verifier_matches_reference_vector() {
    // Reference vector produced with the identity-bound x routine over the
    // 256-bit precomputed group with SHA-1.
    let params = params_256();
    let salt = hex::decode("1e97da52cbdcd653f85b").unwrap();

    let x = IdentityBoundPasswordKey.compute_x(params.hash(), &salt, b"alice", b"secret");
    let v = protocol::compute_verifier(&params, &x);

    let expected = BigUint::parse_bytes(
        b"100e0c40a5c281dbfb046911634f8e69d3469964863c01eb4683d8d182926da72",
        16,
    )
    .unwrap();
    assert_eq!(v, expected);
}

#[test]
fn verifier_generator_agrees_with_manual_computation() {
    let params = params_256();
    let salt = hex::decode("1e97da52cbdcd653f85b").unwrap();

    let mut generator = VerifierGenerator::new(params.clone());
    generator.set_password_key_routine(std::sync::Arc::new(IdentityBoundPasswordKey));
    let v = generator.generate_verifier(&salt, b"alice", b"secret");

    let x = IdentityBoundPasswordKey.compute_x(params.hash(), &salt, b"alice", b"secret");
    assert_eq!(v, protocol::compute_verifier(&params, &x));
}

#[test]
fn private_value_respects_bit_floor_and_modulus() {
    let params = params_256();
    let n = params.n();
    // min(256, 257 / 2) = 128
    for _ in 0..20 {
        let a = protocol::generate_private_value(n, &mut OsRng).unwrap();
        assert!(a.bits() >= 128, "private value too short: {} bits", a.bits());
        assert!(&a < n);
    }
}

#[test]
fn private_value_bit_floor_caps_at_256() {
    let params = SrpParameters::for_bit_size(1024).unwrap();
    // min(256, 1024 / 2) = 256
    for _ in 0..10 {
        let b = protocol::generate_private_value(params.n(), &mut OsRng).unwrap();
        assert!(b.bits() >= 256);
        assert!(&b < params.n());
    }
}

#[test]
fn private_value_degenerate_modulus_errors_instead_of_panicking() {
    use srp_core::types::SrpError;

    assert_eq!(
        protocol::generate_private_value(&BigUint::zero(), &mut OsRng).err(),
        Some(SrpError::InvalidInput)
    );
    assert_eq!(
        protocol::generate_private_value(&BigUint::from(1u32), &mut OsRng).err(),
        Some(SrpError::InvalidInput)
    );
    // The smallest workable modulus leaves exactly one value to draw.
    assert_eq!(
        protocol::generate_private_value(&BigUint::from(2u32), &mut OsRng).unwrap(),
        BigUint::from(1u32)
    );
}

#[test]
fn public_values_are_valid() {
    let params = params_256();
    let a = protocol::generate_private_value(params.n(), &mut OsRng).unwrap();
    let a_pub = protocol::compute_public_client_value(params.n(), params.g(), &a);
    assert!(protocol::is_valid_public_value(params.n(), &a_pub));
}

#[test]
fn validity_check_rejects_multiples_of_n() {
    let params = params_256();
    let n = params.n();
    assert!(!protocol::is_valid_public_value(n, &BigUint::zero()));
    assert!(!protocol::is_valid_public_value(n, n));
    assert!(!protocol::is_valid_public_value(n, &(n * 2u32)));
    assert!(protocol::is_valid_public_value(n, &(n + 1u32)));
    assert!(protocol::is_valid_public_value(n, &BigUint::from(1u32)));
}

#[test]
fn client_and_server_derive_the_same_session_key() {
    let params = params_256();
    let n = params.n();
    let g = params.g();
    let salt = hex::decode("1e97da52cbdcd653f85b").unwrap();

    let x = IdentityBoundPasswordKey.compute_x(params.hash(), &salt, b"alice", b"secret");
    let v = protocol::compute_verifier(&params, &x);
    let k = protocol::compute_k(&params).unwrap();

    let a = protocol::generate_private_value(n, &mut OsRng).unwrap();
    let b = protocol::generate_private_value(n, &mut OsRng).unwrap();
    let a_pub = protocol::compute_public_client_value(n, g, &a);
    let b_pub = protocol::compute_public_server_value(n, g, &k, &v, &b);

    let u = DefaultScrambling.compute_u(&params, &a_pub, &b_pub).unwrap();

    let client_s = protocol::compute_session_key_client(n, g, &k, &x, &u, &a, &b_pub);
    let server_s = protocol::compute_session_key_server(n, &v, &u, &a_pub, &b);

    assert_eq!(client_s, server_s);
    assert!(!client_s.is_zero());
}

#[test]
fn evidence_messages_chain_consistently() {
    let params = params_256();
    let a_pub = BigUint::from(11111u32);
    let b_pub = BigUint::from(22222u32);
    let secret = BigUint::from(33333u32);

    let m1 = DefaultClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret);
    let m1_again = DefaultClientEvidence.compute_m1(&params, &a_pub, &b_pub, &secret);
    assert_eq!(m1, m1_again);

    let m2 = DefaultServerEvidence.compute_m2(&params, &a_pub, &m1, &secret);
    assert_ne!(m1, m2);

    let other_secret = BigUint::from(44444u32);
    let m1_other = DefaultClientEvidence.compute_m1(&params, &a_pub, &b_pub, &other_secret);
    assert_ne!(m1, m1_other);
}

#[test]
fn server_public_value_depends_on_verifier() {
    let params = params_256();
    let n = params.n();
    let g = params.g();
    let k = protocol::compute_k(&params).unwrap();
    let b = protocol::generate_private_value(n, &mut OsRng).unwrap();

    let b_pub_1 = protocol::compute_public_server_value(n, g, &k, &BigUint::from(5u32), &b);
    let b_pub_2 = protocol::compute_public_server_value(n, g, &k, &BigUint::from(6u32), &b);
    assert_ne!(b_pub_1, b_pub_2);
}
