#![deny(missing_docs)]
//! # monoid-core — magmas, semigroups and monoids as instance values
//!
//! This crate provides a small hierarchy of algebraic contracts:
//!
//! - [`Magma`]: a closed binary operation `combine` on a domain
//! - [`Semigroup`]: a magma whose `combine` is associative
//! - [`Monoid`]: a semigroup with an identity element
//! - [`CommutativeSemigroup`]: a semigroup whose `combine` is commutative
//!
//! Unlike the usual "the type *is* the monoid" encoding, a contract
//! here is implemented by an **instance value** whose associated
//! [`Magma::Elem`] is the domain. One domain can therefore carry
//! several lawful instances side by side: `i64` is a monoid under
//! [`Sum`](instances::Sum) and under [`Product`](instances::Product),
//! `bool` under [`Any`](instances::Any) and [`All`](instances::All).
//!
//! ## Quick start
//!
//! ```rust
//! use monoid_core::fold::{fold, fold_map};
//! use monoid_core::instances::{Concat, Sum};
//! use monoid_core::{Magma, Monoid};
//!
//! let sum = Sum::<i32>::new();
//! assert_eq!(sum.combine(&1, &2), 3);
//! assert_eq!(sum.identity(), 0);
//!
//! let words = vec!["hello".to_string(), " ".to_string(), "world".to_string()];
//! assert_eq!(fold(&Concat, words), "hello world");
//!
//! // Total length of some words, in one pass.
//! let len = fold_map(|w: &str| w.len(), &Sum::<usize>::new(), ["ab", "cde"]);
//! assert_eq!(len, 5);
//! ```
//!
//! ## Provided instances
//!
//! See [`instances`] for the catalog: booleans (`Any`, `All`),
//! strings (`Concat`), numbers (`Sum`, `Product`, `Min`, `Max`),
//! optional values (`Optional`, with [`instances::min`] /
//! [`instances::max`] as identity-bearing comparisons) and maps
//! ([`instances::key_value`]).
//!
//! ### Tuples (product instances)
//!
//! - **`(A,)`, `(A, B)`, `(A, B, C)`, `(A, B, C, D)`** of instances are
//!   themselves instances over the tuple of their domains:
//!   `Magma`, `Semigroup`, `Monoid`, `CommutativeSemigroup`
//!   (componentwise).
//!
//! ### References
//!
//! `&M` implements every contract `M` does, so generic code can take
//! instances by value or by reference.
//!
//! ## Laws
//!
//! The laws are documented on each trait and are not enforced by the
//! type system. The `monoid-laws` crate checks them by property-based
//! testing.

pub mod fold;
pub mod instances;

/// A **magma**: a domain with a total, closed binary operation.
///
/// Closure (`Elem × Elem → Elem`) is the only property and the type
/// system already guarantees it; there are no runtime laws to check.
///
/// # Example
///
/// ```rust
/// use monoid_core::Magma;
///
/// // Subtraction is closed over i32, but not associative.
/// struct Sub;
///
/// impl Magma for Sub {
///     type Elem = i32;
///
///     fn combine(&self, a: &i32, b: &i32) -> i32 {
///         a - b
///     }
/// }
///
/// assert_eq!(Sub.combine(&5, &3), 2);
/// ```
pub trait Magma {
    /// The domain the operation is closed over.
    type Elem;

    /// Combine two domain values.
    fn combine(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// In-place combine: `*acc = combine(acc, other)`.
    ///
    /// Instances whose domain supports it (strings, maps) override
    /// this to extend `acc` without reallocating.
    fn combine_assign(&self, acc: &mut Self::Elem, other: &Self::Elem) {
        *acc = self.combine(acc, other);
    }
}

/// A **semigroup**: a magma whose operation is associative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `combine(combine(a, b), c) == combine(a, combine(b, c))`
///
/// Associativity is what licenses callers to regroup a chain of
/// combinations freely, e.g. to reduce a sequence sequentially,
/// divide-and-conquer, or in parallel.
///
/// # Example
///
/// ```rust
/// use monoid_core::instances::Max;
/// use monoid_core::Magma;
///
/// let max = Max::<i32>::new();
/// let (x, y, z) = (3, 5, 2);
/// assert_eq!(
///     max.combine(&max.combine(&x, &y), &z),
///     max.combine(&x, &max.combine(&y, &z)),
/// );
/// ```
pub trait Semigroup: Magma {
    // Marker trait - laws are documented above
}

/// A **monoid**: a semigroup with an identity element.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `combine(combine(a, b), c) == combine(a, combine(b, c))`
/// - **Left identity**: `combine(identity(), a) == a`
/// - **Right identity**: `combine(a, identity()) == a`
///
/// The identity must hold for every value of the domain, edge cases
/// included. Domains without a natural identity (e.g. `min` over
/// plain integers) are lifted into `Option`, with `None` standing for
/// "no value yet"; see [`instances::Optional`].
///
/// # Example
///
/// ```rust
/// use monoid_core::instances::Product;
/// use monoid_core::{Magma, Monoid};
///
/// let product = Product::<i32>::new();
/// assert_eq!(product.combine(&3, &5), 15);
/// assert_eq!(product.combine(&product.identity(), &3), 3);
/// assert_eq!(product.combine(&3, &product.identity()), 3);
/// ```
pub trait Monoid: Semigroup {
    /// The identity element.
    fn identity(&self) -> Self::Elem;
}

/// A **commutative semigroup**: a semigroup where combine is
/// commutative.
///
/// Laws (not enforced by type system):
///
/// - **Associative**:
///   `combine(combine(a, b), c) == combine(a, combine(b, c))`
/// - **Commutative**: `combine(a, b) == combine(b, a)`
pub trait CommutativeSemigroup: Semigroup {
    // Marker trait - laws are documented above
}

// References

impl<M: Magma + ?Sized> Magma for &M {
    type Elem = M::Elem;

    fn combine(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        (**self).combine(a, b)
    }

    fn combine_assign(&self, acc: &mut Self::Elem, other: &Self::Elem) {
        (**self).combine_assign(acc, other)
    }
}

impl<M: Semigroup + ?Sized> Semigroup for &M {}

impl<M: Monoid + ?Sized> Monoid for &M {
    fn identity(&self) -> Self::Elem {
        (**self).identity()
    }
}

impl<M: CommutativeSemigroup + ?Sized> CommutativeSemigroup for &M {}

// Tuples: product instances

macro_rules! impl_product_instance {
    ( $( $T:ident : $idx:tt ),+ ) => {
        impl<$( $T ),+> Magma for ( $( $T, )+ )
        where
            $( $T: Magma ),+
        {
            type Elem = ( $( $T::Elem, )+ );

            fn combine(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
                (
                    $( self.$idx.combine(&a.$idx, &b.$idx), )+
                )
            }

            fn combine_assign(&self, acc: &mut Self::Elem, other: &Self::Elem) {
                $( self.$idx.combine_assign(&mut acc.$idx, &other.$idx); )+
            }
        }

        impl<$( $T ),+> Semigroup for ( $( $T, )+ )
        where
            $( $T: Semigroup ),+
        {
        }

        impl<$( $T ),+> Monoid for ( $( $T, )+ )
        where
            $( $T: Monoid ),+
        {
            fn identity(&self) -> Self::Elem {
                (
                    $( self.$idx.identity(), )+
                )
            }
        }

        impl<$( $T ),+> CommutativeSemigroup for ( $( $T, )+ )
        where
            $( $T: CommutativeSemigroup ),+
        {
        }
    }
}

impl_product_instance!(A:0);
impl_product_instance!(A:0, B:1);
impl_product_instance!(A:0, B:1, C:2);
impl_product_instance!(A:0, B:1, C:2, D:3);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instances::{All, Any, Concat, Max, Min, Sum};

    // Subtraction: a magma that is deliberately not a semigroup.
    struct Sub;

    impl Magma for Sub {
        type Elem = i32;

        fn combine(&self, a: &i32, b: &i32) -> i32 {
            a - b
        }
    }

    #[test]
    fn magma_combine_works() {
        assert_eq!(Sub.combine(&5, &3), 2);
    }

    #[test]
    fn magma_combine_assign_defaults_to_combine() {
        let mut acc = 10;
        Sub.combine_assign(&mut acc, &4);
        assert_eq!(acc, 6);
    }

    fn combine_then_identity<M: Monoid>(m: M, a: &M::Elem, b: &M::Elem) -> (M::Elem, M::Elem) {
        (m.combine(a, b), m.identity())
    }

    #[test]
    fn reference_forwards_to_instance() {
        let sum = Sum::<i32>::new();
        assert_eq!(combine_then_identity(&sum, &3, &5), (8, 0));
        assert_eq!(combine_then_identity(&&sum, &3, &5), (8, 0));

        let concat = &Concat;
        let mut acc = "ab".to_string();
        Magma::combine_assign(&concat, &mut acc, &"cd".to_string());
        assert_eq!(acc, "abcd");
    }

    #[test]
    fn product_combine_is_componentwise() {
        let pair = (Sum::<i32>::new(), Concat);
        let x = (1, "a".to_string());
        let y = (2, "b".to_string());
        assert_eq!(pair.combine(&x, &y), (3, "ab".to_string()));
    }

    #[test]
    fn product_identity_is_tuple_of_identities() {
        let quad = (Any, All, Concat, Sum::<u8>::new());
        assert_eq!(quad.identity(), (false, true, String::new(), 0));
    }

    #[test]
    fn product_combine_assign_is_componentwise() {
        let triple = (Min::<i32>::new(), Max::<i32>::new(), Concat);
        let mut acc = (4, 4, "x".to_string());
        triple.combine_assign(&mut acc, &(2, 9, "y".to_string()));
        assert_eq!(acc, (2, 9, "xy".to_string()));
    }

    #[test]
    fn singleton_tuple_wraps_instance() {
        let single = (Sum::<i64>::new(),);
        assert_eq!(single.combine(&(2,), &(40,)), (42,));
        assert_eq!(single.identity(), (0,));
    }

    fn assert_commutative<M: CommutativeSemigroup>(_: &M) {}

    #[test]
    fn product_of_commutative_is_commutative() {
        assert_commutative(&(Sum::<i32>::new(), Any));
        assert_commutative(&&Min::<u32>::new());
    }
}
