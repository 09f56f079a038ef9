//! Property tests for the public generator and mapping API.

use catdraw::{normalize, transform, Categorical, Engine, EngineKind, Error, Lcg};
use proptest::prelude::*;

fn engine_kind() -> impl Strategy<Value = EngineKind> {
    prop_oneof![
        Just(EngineKind::Default),
        Just(EngineKind::XorShift),
        Just(EngineKind::MersenneTwister),
        Just(EngineKind::Lcg),
    ]
}

// ---------------------------------------------------------------------------
// Fixed cases
// ---------------------------------------------------------------------------

#[test]
fn normalize_rejects_empty_and_all_zero() {
    assert!(matches!(normalize(&[]), Err(Error::InvalidArgument(_))));
    assert!(matches!(normalize(&[0.0, 0.0, 0.0]), Err(Error::InvalidArgument(_))));
}

#[test]
fn transform_half_half() {
    assert_eq!(transform(0.0, &[0.5, 0.5]).unwrap(), 0);
    assert_eq!(transform(0.999_999, &[0.5, 0.5]).unwrap(), 1);
    assert_eq!(transform(1.0, &[0.5, 0.5]).unwrap(), 1);
}

#[test]
fn lcg_rejects_inverted_range() {
    let mut g = Lcg::new(1 << 31, 1_103_515_245, 12_345, 1).unwrap();
    assert!(matches!(g.next(100, 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn error_messages_are_readable() {
    let e = normalize(&[-1.0]).unwrap_err();
    assert_eq!(e.to_string(), "invalid argument: probabilities must be non-negative");
}

// ---------------------------------------------------------------------------
// Property tests
// ---------------------------------------------------------------------------

proptest! {
    /// Every LCG draw lands in `[min, max)` for arbitrary parameters.
    #[test]
    fn lcg_draws_in_range(
        m in 1u64..=u64::MAX,
        a in any::<u64>(),
        c in any::<u64>(),
        seed in any::<u64>(),
        min in any::<i64>(),
        max in any::<i64>(),
    ) {
        prop_assume!(max > min);
        let mut g = Lcg::new(m, a, c, seed).unwrap();
        for _ in 0..100 {
            let v = g.next(min, max).unwrap();
            prop_assert!(v >= min && v < max);
        }
    }

    /// Identically constructed engines produce identical category streams.
    #[test]
    fn engines_are_reproducible(kind in engine_kind(), seed in any::<u64>()) {
        let dist = Categorical::new(&[0.1, 0.2, 0.3, 0.4]).unwrap();
        let mut a = Engine::new(kind, seed);
        let mut b = Engine::new(kind, seed);
        prop_assert_eq!(dist.draw_n(&mut a, 200), dist.draw_n(&mut b, 200));
    }

    /// Normalized output sums to one and keeps the input's order.
    #[test]
    fn normalize_sums_to_one_and_preserves_order(
        raw in proptest::collection::vec(0.0f64..1.0e3, 1..64),
    ) {
        prop_assume!(raw.iter().any(|&p| p > 0.0));
        let p = normalize(&raw).unwrap();
        let sum: f64 = p.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum={}", sum);
        for (i, j) in (0..raw.len()).zip(1..raw.len()) {
            if raw[i] < raw[j] {
                prop_assert!(p[i] <= p[j]);
            } else if raw[i] > raw[j] {
                prop_assert!(p[i] >= p[j]);
            } else {
                prop_assert_eq!(p[i], p[j]);
            }
        }
    }

    /// Any value at or above 1 clamps to the last index.
    #[test]
    fn transform_clamps_past_the_end(k in 1usize..20, over in 1.0f64..1.0e9) {
        let p = vec![1.0 / k as f64; k];
        prop_assert_eq!(transform(over, &p).unwrap(), k - 1);
    }
}
