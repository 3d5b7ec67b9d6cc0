#![deny(missing_docs)]
//! # monoid-laws — property-based checks for monoid-core instances
//!
//! The traits in `monoid_core` promise laws the type system cannot
//! check. This crate checks them by random sampling:
//!
//! - **associativity** for every [`Semigroup`](monoid_core::Semigroup)
//! - **left/right identity** for every [`Monoid`](monoid_core::Monoid)
//! - **commutativity** for every
//!   [`CommutativeSemigroup`](monoid_core::CommutativeSemigroup)
//!
//! Inputs come from a proptest [`Strategy`](proptest::strategy::Strategy)
//! over the instance's domain (see [`gen`] for ready-made ones).
//! Equality is structural (`PartialEq`). A failing law yields a
//! [`LawViolation`] holding the shrunk counterexample and both sides of
//! the equation, `Debug`-rendered.
//!
//! Laws say nothing about *which* operation an instance implements:
//! sum and product are both lawful monoids over integers. Pair the
//! law checks with a few literal examples per instance.
//!
//! ## Checking an instance
//!
//! ```rust
//! use monoid_core::instances::Sum;
//! use monoid_laws::{check_commutative_monoid, gen, Law, LawConfig};
//!
//! let report = check_commutative_monoid(
//!     "sum",
//!     &Sum::<i64>::new(),
//!     gen::addends(),
//!     &LawConfig::default().with_cases(64),
//! );
//! assert!(report.is_ok(), "{report}");
//! assert!(report.outcome(Law::Commutativity).is_some());
//! ```
//!
//! ## Generating tests
//!
//! The [`semigroup_laws!`], [`monoid_laws!`] and
//! [`commutative_monoid_laws!`] macros expand to a module with one
//! `#[test]` per law, so each law runs as its own test:
//!
//! ```rust
//! use monoid_core::instances::{Concat, Sum};
//! use monoid_laws::{commutative_monoid_laws, gen, monoid_laws, LawConfig};
//!
//! monoid_laws!(strings, Concat, gen::strings());
//! // strings::associativity, strings::left_identity, strings::right_identity
//!
//! commutative_monoid_laws!(
//!     sums,
//!     Sum::<i64>::new(),
//!     gen::addends(),
//!     LawConfig::default().with_cases(64)
//! );
//! # fn main() {}
//! ```

pub mod config;
pub mod error;
pub mod gen;
pub mod harness;

pub use config::LawConfig;
pub use error::Law;
pub use error::LawFailures;
pub use error::LawViolation;
pub use harness::associativity;
pub use harness::check_commutative_monoid;
pub use harness::check_commutative_semigroup;
pub use harness::check_monoid;
pub use harness::check_semigroup;
pub use harness::commutativity;
pub use harness::left_identity;
pub use harness::right_identity;
pub use harness::LawOutcome;
pub use harness::LawReport;

/// Emit a `#[test]` for one law; shared by the public macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __law_test {
    ($check:ident, $name:ident, $instance:expr, $gen:expr, $config:expr) => {
        #[test]
        fn $check() {
            let config: $crate::LawConfig = $config;
            if let Err(violation) =
                $crate::$check(stringify!($name), &$instance, $gen, &config)
            {
                panic!("{violation}");
            }
        }
    };
}

/// Property tests for the semigroup laws of an instance.
///
/// `semigroup_laws!(name, instance, generator)` expands to
/// `mod name { #[test] fn associativity() }`. An optional fourth
/// argument overrides the [`LawConfig`].
#[macro_export]
macro_rules! semigroup_laws {
    ($name:ident, $instance:expr, $gen:expr) => {
        $crate::semigroup_laws!($name, $instance, $gen, $crate::LawConfig::default());
    };
    ($name:ident, $instance:expr, $gen:expr, $config:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::__law_test!(associativity, $name, $instance, $gen, $config);
        }
    };
}

/// Property tests for the monoid laws of an instance.
///
/// Expands to a module with `associativity`, `left_identity` and
/// `right_identity` tests.
#[macro_export]
macro_rules! monoid_laws {
    ($name:ident, $instance:expr, $gen:expr) => {
        $crate::monoid_laws!($name, $instance, $gen, $crate::LawConfig::default());
    };
    ($name:ident, $instance:expr, $gen:expr, $config:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::__law_test!(associativity, $name, $instance, $gen, $config);
            $crate::__law_test!(left_identity, $name, $instance, $gen, $config);
            $crate::__law_test!(right_identity, $name, $instance, $gen, $config);
        }
    };
}

/// Property tests for the monoid laws plus commutativity.
#[macro_export]
macro_rules! commutative_monoid_laws {
    ($name:ident, $instance:expr, $gen:expr) => {
        $crate::commutative_monoid_laws!($name, $instance, $gen, $crate::LawConfig::default());
    };
    ($name:ident, $instance:expr, $gen:expr, $config:expr) => {
        mod $name {
            #[allow(unused_imports)]
            use super::*;

            $crate::__law_test!(associativity, $name, $instance, $gen, $config);
            $crate::__law_test!(left_identity, $name, $instance, $gen, $config);
            $crate::__law_test!(right_identity, $name, $instance, $gen, $config);
            $crate::__law_test!(commutativity, $name, $instance, $gen, $config);
        }
    };
}
