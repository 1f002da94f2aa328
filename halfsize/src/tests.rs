use super::*;
use num_bigint::{BigInt, BigUint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_scalar<const N: usize>(rng: &mut StdRng, order: &Order<N>) -> [u64; N] {
    let mut wide = [0u64; N];
    for limb in wide.iter_mut() {
        *limb = rng.random();
    }
    // Vary the size so that short and mid-size inputs are covered too.
    let keep = rng.random_range(1..=order.bits());
    let v = limbs::to_biguint(&wide) % (BigUint::from(1u32) << keep) % order.to_biguint();
    limbs::from_biguint(&v)
}

fn edge_scalars<const N: usize>(order: &Order<N>) -> Vec<[u64; N]> {
    let ell = order.to_biguint();
    let one = BigUint::from(1u32);
    let half = order.half_bits();
    [
        BigUint::default(),
        one.clone(),
        BigUint::from(2u32),
        &ell - 1u32,
        &ell - 2u32,
        (&one << half) - 1u32,
        &one << half,
        (&one << half) + 1u32,
        &one << (half + 1),
        &one << (order.bits() - 1),
        &ell >> 1u32,
    ]
    .iter()
    .map(limbs::from_biguint)
    .collect()
}

fn check_pair<const N: usize>(order: &Order<N>, v: &[u64; N], pair: &CofactorPair<N>) {
    let ell = BigInt::from(order.to_biguint());
    let v = BigInt::from(limbs::to_biguint(v));
    let (r, t) = pair.to_bigints();
    assert_eq!(((&r * &v - &t) % &ell), BigInt::default(), "r * v != t for v = {v}");

    let bound = u64::from(order.enhanced_bits());
    assert!(r.bits() <= bound, "cofactor too large for v = {v}");
    assert!(t.bits() <= bound, "remainder too large for v = {v}");
    assert!(r.bits() > 0);
}

fn check_all_reducers<const N: usize>(order: &Order<N>, seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut inputs = edge_scalars(order);
    inputs.extend((0..300).map(|_| random_scalar(&mut rng, order)));

    for v in &inputs {
        for reducer in Reducer::ALL {
            let pair = reducer.reduce(order, v);
            check_pair(order, v, &pair);
        }
    }
}

#[test]
fn test_congruence_and_size_ed25519() {
    check_all_reducers(&ED25519_ORDER, 42);
}

#[test]
fn test_congruence_and_size_ed448() {
    check_all_reducers(&ED448_ORDER, 7);
}

#[test]
fn test_remainders_below_half_bits() {
    // Only the enhanced reducer may stop one bit above the half size.
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let v = random_scalar(&mut rng, &ED25519_ORDER);
        for reducer in [Reducer::Subtractive, Reducer::Division, Reducer::Hgcd] {
            let pair = reducer.reduce(&ED25519_ORDER, &v);
            assert!(limbs::bit_length(&pair.t) <= ED25519_ORDER.half_bits());
        }
    }
}

#[test]
fn test_hgcd_agrees_with_division() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..300 {
        let v = random_scalar(&mut rng, &ED25519_ORDER);
        assert_eq!(
            reduce_hgcd(&ED25519_ORDER, &v),
            reduce_division(&ED25519_ORDER, &v)
        );

        let w = random_scalar(&mut rng, &ED448_ORDER);
        assert_eq!(reduce_hgcd(&ED448_ORDER, &w), reduce_division(&ED448_ORDER, &w));
    }
}

#[test]
fn test_order_minus_one_agrees_everywhere() {
    let mut v = *ED25519_ORDER.limbs();
    v[0] -= 1;
    let reference = reduce_division(&ED25519_ORDER, &v);
    assert_eq!(reference.r, [1, 0, 0, 0]);
    assert_eq!(reference.t, [1, 0, 0, 0]);
    assert!(reference.r_negative);
    assert!(!reference.t_negative);
    for reducer in Reducer::ALL {
        assert_eq!(reducer.reduce(&ED25519_ORDER, &v), reference);
    }
}

#[test]
fn test_short_inputs_are_fixed_points() {
    for reducer in Reducer::ALL {
        for v in [[0u64, 0, 0, 0], [1, 0, 0, 0], [u64::MAX, u64::MAX >> 1, 0, 0]] {
            let pair = reducer.reduce(&ED25519_ORDER, &v);
            assert_eq!(pair.r, [1, 0, 0, 0]);
            assert_eq!(pair.t, v);
            assert!(!pair.signs_differ());
        }
    }
}

#[test]
fn test_reducer_listing_and_default() {
    let names: Vec<String> = Reducer::ALL
        .iter()
        .map(|reducer| format!("{reducer:?}"))
        .collect();
    assert_eq!(names, ["Subtractive", "Division", "Hgcd", "HgcdEnhanced"]);
    assert_eq!(Reducer::default(), Reducer::Subtractive);
}
