// End-to-end checks through the public API: validate → factorize →
// export → parse back.

use factor_pairs::application::factor_use_case::FactorUseCase;
use factor_pairs::data::validator::Validator;
use factor_pairs::domain::classification::Classification;
use factor_pairs::infra::cache::{BoundedCache, MemoryCache, NoopCache};
use factor_pairs::infra::config::AppConfig;
use factor_pairs::infra::csv_export::{parse_csv, to_csv_string};
use factor_pairs::math::factorizer::{trial_division, Factorizer};
use factor_pairs::math::isqrt::isqrt;
use rand::Rng;

fn pairs(n: u64) -> Vec<(u64, u64)> {
    trial_division(n).pairs().iter().map(|&p| p.into()).collect()
}

#[test]
fn boundary_values() {
    assert!(pairs(2).is_empty());
    assert!(pairs(3).is_empty());
    assert_eq!(pairs(4), vec![(2, 2)]);
    assert!(pairs(997).is_empty());

    assert_eq!(trial_division(2).classification(), Classification::Prime);
    assert_eq!(trial_division(4).classification(), Classification::Semiprime);
    assert_eq!(trial_division(997).classification(), Classification::Prime);

    let million = pairs(1_000_000);
    assert!(million.contains(&(2, 500_000)));
    assert!(million.contains(&(1000, 1000)));
    assert_eq!(trial_division(1_000_000).classification(), Classification::Composite);
}

#[test]
fn pairs_are_exactly_the_divisors_up_to_the_root() {
    let mut rng = rand::thread_rng();
    for _ in 0..250 {
        let n = rng.gen_range(2..1_000_000u64);
        let expected: Vec<(u64, u64)> = (2..=isqrt(n))
            .filter(|a| n % a == 0)
            .map(|a| (a, n / a))
            .collect();
        assert_eq!(pairs(n), expected, "n = {n}");
    }
}

#[test]
fn classification_tracks_pair_count() {
    for n in 2..5_000u64 {
        let r = trial_division(n);
        let want = match r.pair_count() {
            0 => Classification::Prime,
            1 => Classification::Semiprime,
            _ => Classification::Composite,
        };
        assert_eq!(r.classification(), want, "n = {n}");
    }
}

#[test]
fn repeated_calls_agree_under_every_cache() {
    let n = 2 * 3 * 5 * 7 * 11 * 13 * 17u64;

    let noop    = Factorizer::new(NoopCache);
    let memory  = Factorizer::new(MemoryCache::new());
    let bounded = Factorizer::new(BoundedCache::new(1));

    let a = noop.factorize(n);
    let b = noop.factorize(n);
    assert_eq!(a.pairs(), b.pairs());
    assert_eq!(a.classification(), b.classification());

    assert_eq!(memory.factorize(n), memory.factorize(n));
    assert_eq!(bounded.factorize(n).pairs(), a.pairs());
}

#[test]
fn csv_roundtrip_reproduces_pairs() {
    for n in [2u64, 4, 36, 997, 1_000_000, 735_134_400] {
        let r = trial_division(n);
        assert_eq!(parse_csv(&to_csv_string(&r)).unwrap(), r.pairs(), "n = {n}");
    }
}

#[test]
fn invalid_input_never_reaches_the_core() {
    let validator = Validator::default();
    let use_case  = FactorUseCase::new(&AppConfig::default());
    for bad in ["", "abc", "-5", "1", "0"] {
        let err = validator.validate(bad).unwrap_err();
        assert!(!err.to_string().is_empty());
        assert!(use_case.execute(bad).is_err());
    }
}

#[test]
fn below_two_degenerates_to_invalid() {
    for n in [0u64, 1] {
        let r = trial_division(n);
        assert!(r.pairs().is_empty());
        assert_eq!(r.classification(), Classification::Invalid);
    }
}
