use zklogin_stark::hash::Hash;
use zklogin_stark::params::{AuthParams, AuthParamsBuilder};
use zklogin_stark::proof::{verify_detailed, VerificationFailure};
use zklogin_stark::{
    expected_commitment, prove, verify, CubicRound, PrimeField, ProverError, Statement,
};

const TRANSITIONS: u32 = 15;

fn login_params() -> AuthParams {
    AuthParamsBuilder::new().build().expect("login profile")
}

fn registered_statement(params: &AuthParams, secret: u64) -> (Statement, PrimeField) {
    let field = PrimeField::from_params(params);
    let h = expected_commitment(params, field.element(secret), TRANSITIONS);
    (Statement::new(TRANSITIONS, h), field)
}

#[test]
fn commitment_matches_direct_iteration() {
    let params = login_params();
    let field = PrimeField::from_params(&params);
    let h = expected_commitment(&params, field.element(3), TRANSITIONS);
    assert_eq!(h.as_u64(), 599_961_644);
}

#[test]
fn honest_prover_verifies() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let proof = prove(&params, &statement, field.element(3)).expect("honest witness");
    assert!(verify(&params, &statement, &proof));

    let round = CubicRound::from_params(&field, &params);
    verify_detailed(&params, &statement, &proof, &round).expect("detailed check");
}

#[test]
fn tampered_root_fails() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let mut proof = prove(&params, &statement, field.element(3)).expect("honest witness");

    let mut bytes = proof.root.into_bytes();
    bytes[0] ^= 1;
    proof.root = Hash::from_bytes(bytes);
    assert!(!verify(&params, &statement, &proof));
}

#[test]
fn wrong_secret_is_witness_mismatch() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let err = prove(&params, &statement, field.element(4)).expect_err("wrong secret");
    assert_eq!(err, ProverError::WitnessMismatch);
}

#[test]
fn zero_query_budget_still_opens_final_step() {
    let mut builder = AuthParamsBuilder::new();
    builder.query_count = 0;
    let params = builder.build().expect("profile");
    let (statement, field) = registered_statement(&params, 3);

    let proof = prove(&params, &statement, field.element(3)).expect("honest witness");
    assert!(proof.indices.contains(&(TRANSITIONS - 1)));
    assert!(verify(&params, &statement, &proof));
}

#[test]
fn proving_is_deterministic() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let a = prove(&params, &statement, field.element(3)).expect("first run");
    let b = prove(&params, &statement, field.element(3)).expect("second run");
    assert_eq!(a, b);
}

#[test]
fn tampered_opening_value_fails() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let mut proof = prove(&params, &statement, field.element(3)).expect("honest witness");

    let original = proof.openings[0].next;
    proof.openings[0].next = field.add(original, field.one());
    assert!(!verify(&params, &statement, &proof));
}

#[test]
fn dropping_final_opening_is_malformed() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let mut proof = prove(&params, &statement, field.element(3)).expect("honest witness");

    // Strip the mandatory boundary opening and everything pointing at it.
    let keep: Vec<usize> = proof
        .indices
        .iter()
        .enumerate()
        .filter(|(_, &index)| index != TRANSITIONS - 1)
        .map(|(slot, _)| slot)
        .collect();
    proof.indices = keep.iter().map(|&slot| proof.indices[slot]).collect();
    proof.openings = keep.iter().map(|&slot| proof.openings[slot].clone()).collect();

    let round = CubicRound::from_params(&field, &params);
    let err = verify_detailed(&params, &statement, &proof, &round).expect_err("boundary dropped");
    assert!(matches!(err, VerificationFailure::MalformedProof(_)));
    assert!(!verify(&params, &statement, &proof));
}

#[test]
fn statement_boundary_mismatch_detected() {
    let params = login_params();
    let (statement, field) = registered_statement(&params, 3);
    let proof = prove(&params, &statement, field.element(3)).expect("honest witness");

    // Same proof checked against a different registered commitment.
    let other = Statement::new(TRANSITIONS, field.add(statement.final_value, field.one()));
    assert!(!verify(&params, &other, &proof));
}

#[test]
fn small_modulus_profile_roundtrip() {
    let mut builder = AuthParamsBuilder::new();
    builder.modulus = 17;
    builder.round_constant = 7;
    builder.query_count = 4;
    let params = builder.build().expect("small profile");
    let (statement, field) = registered_statement(&params, 3);

    let proof = prove(&params, &statement, field.element(3)).expect("honest witness");
    assert!(verify(&params, &statement, &proof));
}
