//! Laws and the ways they can fail.
use std::fmt;

/// An algebraic law the harness knows how to check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    /// `combine(combine(a, b), c) == combine(a, combine(b, c))`
    Associativity,
    /// `combine(identity, a) == a`
    LeftIdentity,
    /// `combine(a, identity) == a`
    RightIdentity,
    /// `combine(a, b) == combine(b, a)`
    Commutativity,
}

impl Law {
    /// The law as an equation.
    pub fn equation(&self) -> &'static str {
        match self {
            Law::Associativity => "(a <> b) <> c == a <> (b <> c)",
            Law::LeftIdentity => "identity <> a == a",
            Law::RightIdentity => "a <> identity == a",
            Law::Commutativity => "a <> b == b <> a",
        }
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Law::Associativity => "associativity",
            Law::LeftIdentity => "left identity",
            Law::RightIdentity => "right identity",
            Law::Commutativity => "commutativity",
        };
        f.write_str(name)
    }
}

/// A law that did not hold for an instance.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LawViolation {
    /// A (shrunk) input for which the two sides of the law differ.
    #[error("{instance}: {law} ({}) fails for {inputs}: {left} != {right}", .law.equation())]
    Counterexample {
        /// Display name of the instance under test.
        instance: String,
        /// The violated law.
        law: Law,
        /// The minimal failing input, `Debug`-rendered.
        inputs: String,
        /// Left-hand side of the law evaluated at `inputs`, or the
        /// panic message if the instance panicked on them.
        left: String,
        /// Right-hand side of the law evaluated at `inputs`.
        right: String,
    },

    /// Proptest gave up before reaching a verdict, e.g. because the
    /// generator rejected too many values.
    #[error("{instance}: {law} check aborted: {reason}")]
    Aborted {
        /// Display name of the instance under test.
        instance: String,
        /// The law being checked.
        law: Law,
        /// Proptest's reason.
        reason: String,
    },
}

impl LawViolation {
    /// The law that failed.
    pub fn law(&self) -> Law {
        match self {
            LawViolation::Counterexample { law, .. } | LawViolation::Aborted { law, .. } => *law,
        }
    }

    /// The instance it failed for.
    pub fn instance(&self) -> &str {
        match self {
            LawViolation::Counterexample { instance, .. }
            | LawViolation::Aborted { instance, .. } => instance,
        }
    }
}

/// Every violation found in one report.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{} law(s) violated:\n{}", .0.len(), render_each(.0))]
pub struct LawFailures(pub Vec<LawViolation>);

fn render_each(violations: &[LawViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counterexample_renders_both_sides() {
        let v = LawViolation::Counterexample {
            instance: "sub".into(),
            law: Law::Associativity,
            inputs: "(1, 2, 3)".into(),
            left: "-4".into(),
            right: "2".into(),
        };
        assert_eq!(
            v.to_string(),
            "sub: associativity ((a <> b) <> c == a <> (b <> c)) fails for (1, 2, 3): -4 != 2"
        );
        assert_eq!(v.law(), Law::Associativity);
        assert_eq!(v.instance(), "sub");
    }

    #[test]
    fn aborted_renders_reason() {
        let v = LawViolation::Aborted {
            instance: "evens".into(),
            law: Law::LeftIdentity,
            reason: "Too many local rejects".into(),
        };
        assert_eq!(
            v.to_string(),
            "evens: left identity check aborted: Too many local rejects"
        );
    }

    #[test]
    fn failures_list_every_violation() {
        let one = LawViolation::Aborted {
            instance: "x".into(),
            law: Law::Commutativity,
            reason: "r".into(),
        };
        let failures = LawFailures(vec![one.clone(), one]);
        let text = failures.to_string();
        assert!(text.starts_with("2 law(s) violated:\n"));
        assert_eq!(text.matches("commutativity check aborted").count(), 2);
    }
}
