use proptest::prelude::*;
use zklogin_stark::field::{FieldElement, Polynomial, PolynomialError};
use zklogin_stark::params::LOGIN_MODULUS;
use zklogin_stark::PrimeField;

#[test]
fn interpolate_reproduces_inputs_small_modulus() {
    let field = PrimeField::new(17);
    let points: Vec<(FieldElement, FieldElement)> = [(0u64, 4u64), (1, 9), (2, 1), (3, 16), (7, 5)]
        .iter()
        .map(|&(x, y)| (field.element(x), field.element(y)))
        .collect();
    let poly = Polynomial::interpolate(&field, &points).expect("distinct x-coordinates");
    for (x, y) in &points {
        assert_eq!(poly.evaluate(&field, *x), *y);
    }
}

#[test]
fn interpolate_empty_is_zero_polynomial() {
    let field = PrimeField::new(17);
    let poly = Polynomial::interpolate(&field, &[]).expect("empty input");
    assert!(poly.is_zero());
    assert_eq!(poly.degree(), 0);
}

#[test]
fn duplicate_x_coordinate_rejected() {
    let field = PrimeField::new(LOGIN_MODULUS);
    let points = vec![
        (field.element(5), field.element(1)),
        (field.element(9), field.element(2)),
        (field.element(5), field.element(3)),
    ];
    let err = Polynomial::interpolate(&field, &points).expect_err("shared x-coordinate");
    assert_eq!(err, PolynomialError::DuplicateXCoordinate { x: 5 });
}

proptest! {
    #[test]
    fn interpolate_roundtrip(
        xs in proptest::collection::btree_set(0..LOGIN_MODULUS, 1..8),
        seed in 0..LOGIN_MODULUS,
    ) {
        let field = PrimeField::new(LOGIN_MODULUS);
        let points: Vec<(FieldElement, FieldElement)> = xs
            .iter()
            .enumerate()
            .map(|(i, &x)| {
                (
                    field.element(x),
                    field.element(seed.wrapping_add(i as u64 * 7919)),
                )
            })
            .collect();
        let poly = Polynomial::interpolate(&field, &points).expect("distinct x-coordinates");
        for (x, y) in &points {
            prop_assert_eq!(poly.evaluate(&field, *x), *y);
        }
    }

    #[test]
    fn mul_degree_law(
        p in proptest::collection::vec(0..LOGIN_MODULUS, 1..6),
        q in proptest::collection::vec(0..LOGIN_MODULUS, 1..6),
    ) {
        let field = PrimeField::new(LOGIN_MODULUS);
        let to_poly = |coeffs: &[u64]| {
            Polynomial::new(coeffs.iter().map(|&c| field.element(c)).collect())
        };
        let (p, q) = (to_poly(&p), to_poly(&q));
        prop_assume!(!p.is_zero() && !q.is_zero());
        let product = p.mul(&field, &q);
        prop_assert_eq!(product.degree(), p.degree() + q.degree());
    }
}
