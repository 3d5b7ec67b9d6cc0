//! Randomized checks of the semigroup, monoid and commutativity laws.
//!
//! Each check samples inputs from a proptest [`Strategy`], evaluates
//! both sides of the law with the instance, and compares them with
//! `PartialEq`. On a mismatch proptest shrinks the input to a minimal
//! counterexample; both sides are then re-evaluated on that input so
//! the reported values match the reported input. An instance that
//! panics during a trial fails that trial; the panic message stands
//! in for the left side of the counterexample.
use std::fmt;
use std::fmt::Debug;
use std::panic;
use std::panic::AssertUnwindSafe;

use monoid_core::CommutativeSemigroup;
use monoid_core::Monoid;
use monoid_core::Semigroup;
use proptest::strategy::Strategy;
use proptest::test_runner::TestCaseError;
use proptest::test_runner::TestError;
use tracing::debug;
use tracing::warn;

use crate::config::LawConfig;
use crate::error::Law;
use crate::error::LawFailures;
use crate::error::LawViolation;

/// Check `combine(combine(a, b), c) == combine(a, combine(b, c))` on
/// random triples.
pub fn associativity<M, S>(
    name: &str,
    semigroup: &M,
    gen: S,
    config: &LawConfig,
) -> Result<(), LawViolation>
where
    M: Semigroup + ?Sized,
    M::Elem: PartialEq + Debug,
    S: Strategy<Value = M::Elem>,
{
    let sides = |(a, b, c): &(M::Elem, M::Elem, M::Elem)| {
        let left = semigroup.combine(&semigroup.combine(a, b), c);
        let right = semigroup.combine(a, &semigroup.combine(b, c));
        (left, right)
    };
    let result = config
        .runner()
        .run(&(&gen, &gen, &gen), |triple| same(sides(&triple)));
    conclude(name, Law::Associativity, config, result, sides)
}

/// Check `combine(identity, a) == a` on random values.
pub fn left_identity<M, S>(
    name: &str,
    monoid: &M,
    gen: S,
    config: &LawConfig,
) -> Result<(), LawViolation>
where
    M: Monoid + ?Sized,
    M::Elem: PartialEq + Debug + Clone,
    S: Strategy<Value = M::Elem>,
{
    let sides = |a: &M::Elem| (monoid.combine(&monoid.identity(), a), a.clone());
    let result = config.runner().run(&gen, |a| same(sides(&a)));
    conclude(name, Law::LeftIdentity, config, result, sides)
}

/// Check `combine(a, identity) == a` on random values.
pub fn right_identity<M, S>(
    name: &str,
    monoid: &M,
    gen: S,
    config: &LawConfig,
) -> Result<(), LawViolation>
where
    M: Monoid + ?Sized,
    M::Elem: PartialEq + Debug + Clone,
    S: Strategy<Value = M::Elem>,
{
    let sides = |a: &M::Elem| (monoid.combine(a, &monoid.identity()), a.clone());
    let result = config.runner().run(&gen, |a| same(sides(&a)));
    conclude(name, Law::RightIdentity, config, result, sides)
}

/// Check `combine(a, b) == combine(b, a)` on random pairs.
pub fn commutativity<M, S>(
    name: &str,
    semigroup: &M,
    gen: S,
    config: &LawConfig,
) -> Result<(), LawViolation>
where
    M: CommutativeSemigroup + ?Sized,
    M::Elem: PartialEq + Debug,
    S: Strategy<Value = M::Elem>,
{
    let sides = |(a, b): &(M::Elem, M::Elem)| (semigroup.combine(a, b), semigroup.combine(b, a));
    let result = config.runner().run(&(&gen, &gen), |pair| same(sides(&pair)));
    conclude(name, Law::Commutativity, config, result, sides)
}

/// Run the semigroup laws (associativity).
pub fn check_semigroup<M, S>(name: &str, semigroup: &M, gen: S, config: &LawConfig) -> LawReport
where
    M: Semigroup + ?Sized,
    M::Elem: PartialEq + Debug,
    S: Strategy<Value = M::Elem>,
{
    let mut report = LawReport::new(name);
    report.record(
        Law::Associativity,
        associativity(name, semigroup, &gen, config),
    );
    report
}

/// Run the commutative semigroup laws (associativity, commutativity).
pub fn check_commutative_semigroup<M, S>(
    name: &str,
    semigroup: &M,
    gen: S,
    config: &LawConfig,
) -> LawReport
where
    M: CommutativeSemigroup + ?Sized,
    M::Elem: PartialEq + Debug,
    S: Strategy<Value = M::Elem>,
{
    let mut report = check_semigroup(name, semigroup, &gen, config);
    report.record(
        Law::Commutativity,
        commutativity(name, semigroup, &gen, config),
    );
    report
}

/// Run the monoid laws (associativity, left and right identity).
pub fn check_monoid<M, S>(name: &str, monoid: &M, gen: S, config: &LawConfig) -> LawReport
where
    M: Monoid + ?Sized,
    M::Elem: PartialEq + Debug + Clone,
    S: Strategy<Value = M::Elem>,
{
    let mut report = check_semigroup(name, monoid, &gen, config);
    report.record(Law::LeftIdentity, left_identity(name, monoid, &gen, config));
    report.record(
        Law::RightIdentity,
        right_identity(name, monoid, &gen, config),
    );
    report
}

/// Run the monoid laws plus commutativity.
pub fn check_commutative_monoid<M, S>(
    name: &str,
    monoid: &M,
    gen: S,
    config: &LawConfig,
) -> LawReport
where
    M: Monoid + CommutativeSemigroup + ?Sized,
    M::Elem: PartialEq + Debug + Clone,
    S: Strategy<Value = M::Elem>,
{
    let mut report = check_monoid(name, monoid, &gen, config);
    report.record(
        Law::Commutativity,
        commutativity(name, monoid, &gen, config),
    );
    report
}

fn same<T: PartialEq + Debug>((left, right): (T, T)) -> Result<(), TestCaseError> {
    if left == right {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!("{left:?} != {right:?}")))
    }
}

fn conclude<V, T>(
    instance: &str,
    law: Law,
    config: &LawConfig,
    result: Result<(), TestError<V>>,
    sides: impl Fn(&V) -> (T, T),
) -> Result<(), LawViolation>
where
    V: Debug,
    T: Debug,
{
    match result {
        Ok(()) => {
            debug!(instance, %law, cases = config.cases, "law holds");
            Ok(())
        }
        Err(TestError::Fail(reason, inputs)) => {
            // The instance may panic on the shrunk input; proptest has
            // already captured that panic's message in `reason`.
            let (left, right) = match panic::catch_unwind(AssertUnwindSafe(|| sides(&inputs))) {
                Ok((left, right)) => (format!("{left:?}"), format!("{right:?}")),
                Err(_) => (
                    format!("<panicked: {}>", reason.message()),
                    "<not evaluated>".to_owned(),
                ),
            };
            warn!(instance, %law, ?inputs, %left, %right, "law violated");
            Err(LawViolation::Counterexample {
                instance: instance.to_owned(),
                law,
                inputs: format!("{inputs:?}"),
                left,
                right,
            })
        }
        Err(TestError::Abort(reason)) => {
            let reason = reason.message().to_owned();
            warn!(instance, %law, %reason, "law check aborted");
            Err(LawViolation::Aborted {
                instance: instance.to_owned(),
                law,
                reason,
            })
        }
    }
}

/// The verdict on one law.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawOutcome {
    /// The law checked.
    pub law: Law,
    /// `Ok` if every trial passed.
    pub result: Result<(), LawViolation>,
}

impl LawOutcome {
    /// Did the law hold?
    pub fn holds(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of every law checked for one instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LawReport {
    instance: String,
    outcomes: Vec<LawOutcome>,
}

impl LawReport {
    fn new(instance: &str) -> Self {
        Self {
            instance: instance.to_owned(),
            outcomes: Vec::new(),
        }
    }

    fn record(&mut self, law: Law, result: Result<(), LawViolation>) {
        self.outcomes.push(LawOutcome { law, result });
    }

    /// Display name of the instance.
    pub fn instance(&self) -> &str {
        &self.instance
    }

    /// One outcome per law, in the order checked.
    pub fn outcomes(&self) -> &[LawOutcome] {
        &self.outcomes
    }

    /// The outcome for `law`, if it was checked.
    pub fn outcome(&self, law: Law) -> Option<&LawOutcome> {
        self.outcomes.iter().find(|o| o.law == law)
    }

    /// True when every checked law held.
    pub fn is_ok(&self) -> bool {
        self.outcomes.iter().all(LawOutcome::holds)
    }

    /// The laws that failed.
    pub fn violations(&self) -> impl Iterator<Item = &LawViolation> {
        self.outcomes.iter().filter_map(|o| o.result.as_ref().err())
    }

    /// `Err` with every violation if any law failed.
    pub fn into_result(self) -> Result<(), LawFailures> {
        let failures: Vec<_> = self
            .outcomes
            .into_iter()
            .filter_map(|o| o.result.err())
            .collect();
        if failures.is_empty() {
            Ok(())
        } else {
            Err(LawFailures(failures))
        }
    }
}

impl fmt::Display for LawReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "laws for {}:", self.instance)?;
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(f, "  {}: ok", outcome.law)?,
                Err(v) => writeln!(f, "  {}: FAILED ({v})", outcome.law)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monoid_core::instances::{Any, Concat, Sum};
    use monoid_core::Magma;
    use proptest::prelude::*;

    fn quick() -> LawConfig {
        LawConfig::default().with_cases(32).deterministic()
    }

    #[test]
    fn lawful_monoid_report_is_ok() {
        let report = check_monoid("any", &Any, any::<bool>(), &quick());
        assert!(report.is_ok(), "{report}");
        let laws: Vec<_> = report.outcomes().iter().map(|o| o.law).collect();
        assert_eq!(
            laws,
            [Law::Associativity, Law::LeftIdentity, Law::RightIdentity]
        );
        assert_eq!(report.instance(), "any");
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn commutative_report_includes_commutativity() {
        let report =
            check_commutative_monoid("sum", &Sum::<i32>::new(), -1000i32..1000, &quick());
        assert!(report.is_ok(), "{report}");
        assert!(report.outcome(Law::Commutativity).is_some_and(LawOutcome::holds));
    }

    // Non-commutative but lawful: concatenation.
    struct PretendCommutative;

    impl Magma for PretendCommutative {
        type Elem = String;

        fn combine(&self, a: &String, b: &String) -> String {
            Concat.combine(a, b)
        }
    }

    impl Semigroup for PretendCommutative {}

    impl CommutativeSemigroup for PretendCommutative {}

    #[test]
    fn false_commutativity_claim_is_caught() {
        let report = check_commutative_semigroup(
            "concat",
            &PretendCommutative,
            "[a-c]{0,3}",
            &quick(),
        );
        assert!(!report.is_ok());
        assert!(report.outcome(Law::Associativity).is_some_and(LawOutcome::holds));

        let violation = report.violations().next().expect("one violation");
        assert_eq!(violation.law(), Law::Commutativity);
        assert_eq!(violation.instance(), "concat");
    }

    #[test]
    fn report_display_lists_laws() {
        let report = check_semigroup("any", &Any, any::<bool>(), &quick());
        assert_eq!(report.to_string(), "laws for any:\n  associativity: ok\n");
    }

    #[test]
    fn rejecting_generator_aborts() {
        let never = any::<bool>().prop_filter("nothing passes", |_| false);
        let err = left_identity("any", &Any, never, &quick()).unwrap_err();
        assert!(matches!(err, LawViolation::Aborted { law: Law::LeftIdentity, .. }));
    }
}
