//! The harness catches unlawful instances and reports the failure.
mod common;

use monoid_core::instances::Sum;
use monoid_core::{Magma, Monoid, Semigroup};
use monoid_laws::{
    associativity, check_monoid, left_identity, right_identity, Law, LawConfig, LawViolation,
};

fn quick() -> LawConfig {
    LawConfig::default().with_cases(64).deterministic()
}

/// Subtraction, falsely declared associative.
struct Sub;

impl Magma for Sub {
    type Elem = i64;

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        a - b
    }
}

impl Semigroup for Sub {}

/// Addition with 1 as its claimed identity.
struct OffByOne;

impl Magma for OffByOne {
    type Elem = i64;

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        Sum::<i64>::new().combine(a, b)
    }
}

impl Semigroup for OffByOne {}

impl Monoid for OffByOne {
    fn identity(&self) -> i64 {
        1
    }
}

/// Addition that refuses to exceed 100.
struct Capped;

impl Magma for Capped {
    type Elem = i64;

    fn combine(&self, a: &i64, b: &i64) -> i64 {
        if a + b > 100 {
            panic!("sum too large");
        }
        a + b
    }
}

impl Semigroup for Capped {}

impl Monoid for Capped {
    fn identity(&self) -> i64 {
        0
    }
}

#[test]
fn subtraction_fails_associativity_with_counterexample() {
    common::init_tracing();
    let err = associativity("sub", &Sub, -100i64..100, &quick()).unwrap_err();
    match &err {
        LawViolation::Counterexample {
            instance,
            law,
            inputs,
            left,
            right,
        } => {
            assert_eq!(instance, "sub");
            assert_eq!(*law, Law::Associativity);
            assert!(inputs.starts_with('('), "{inputs}");
            assert_ne!(left, right);
        }
        other => panic!("expected a counterexample, got {other}"),
    }
    let message = err.to_string();
    assert!(message.starts_with("sub: associativity"), "{message}");
    assert!(message.contains(" != "), "{message}");
}

#[test]
fn shrunk_counterexample_is_small() {
    let err = associativity("sub", &Sub, 0i64..1000, &quick()).unwrap_err();
    let LawViolation::Counterexample { left, right, .. } = err else {
        panic!("expected a counterexample");
    };
    // a - b - c == a - (b - c) only when c == 0; the minimal failure has c == 1.
    let (left, right): (i64, i64) = (left.parse().unwrap(), right.parse().unwrap());
    assert_eq!((right - left).abs(), 2);
}

#[test]
fn wrong_identity_fails_both_identity_laws() {
    let config = quick();
    assert!(associativity("off-by-one", &OffByOne, -100i64..100, &config).is_ok());
    assert_eq!(
        left_identity("off-by-one", &OffByOne, -100i64..100, &config)
            .unwrap_err()
            .law(),
        Law::LeftIdentity
    );
    assert_eq!(
        right_identity("off-by-one", &OffByOne, -100i64..100, &config)
            .unwrap_err()
            .law(),
        Law::RightIdentity
    );
}

#[test]
fn report_collects_every_failure() {
    let report = check_monoid("off-by-one", &OffByOne, -100i64..100, &quick());
    assert!(!report.is_ok());
    assert_eq!(report.violations().count(), 2);

    let text = report.to_string();
    assert!(text.contains("associativity: ok"), "{text}");
    assert!(text.contains("left identity: FAILED"), "{text}");

    let failures = report.into_result().unwrap_err();
    assert_eq!(failures.0.len(), 2);
    assert!(failures.to_string().starts_with("2 law(s) violated:"));
}

#[test]
fn deterministic_runs_agree() {
    let run = || associativity("sub", &Sub, -1000i64..1000, &quick()).unwrap_err();
    assert_eq!(run(), run());
}

#[test]
fn panicking_instance_yields_counterexample() {
    common::init_tracing();
    let err = associativity("capped", &Capped, 0i64..100, &quick()).unwrap_err();
    let LawViolation::Counterexample {
        instance,
        law,
        left,
        right,
        ..
    } = err
    else {
        panic!("expected a counterexample");
    };
    assert_eq!(instance, "capped");
    assert_eq!(law, Law::Associativity);
    assert!(left.starts_with("<panicked: "), "{left}");
    assert!(left.contains("sum too large"), "{left}");
    assert_eq!(right, "<not evaluated>");
}

#[test]
fn panicking_law_keeps_the_rest_of_the_report() {
    let report = check_monoid("capped", &Capped, 0i64..100, &quick());
    assert!(!report.is_ok());
    assert!(!report.outcome(Law::Associativity).is_some_and(|o| o.holds()));
    assert!(report.outcome(Law::LeftIdentity).is_some_and(|o| o.holds()));
    assert!(report.outcome(Law::RightIdentity).is_some_and(|o| o.holds()));
}
