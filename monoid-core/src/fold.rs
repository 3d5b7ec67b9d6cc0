//! Generic **folds** over instances.
//!
//! - [`fold`]: reduce a sequence with a [`Monoid`], seeded with its
//!   identity
//! - [`fold_map`]: project each element into the monoid's domain and
//!   fold, in one pass
//! - [`fold_with`]: reduce with a [`Semigroup`] from an explicit seed
//! - [`reduce`]: reduce a non-empty sequence with a [`Semigroup`];
//!   `None` when empty
//! - [`fold_balanced`]: divide-and-conquer reduction of a slice
//! - [`par_fold`] *(feature = "parallel")*: parallel reduction with
//!   rayon
//!
//! `fold` and `fold_map` only accept identity-bearing, associative
//! instances. For those, how the sequence is grouped while reducing
//! does not change the result, so the sequential, balanced and
//! parallel strategies all agree. Element order is always preserved;
//! non-commutative instances (e.g. [`Concat`](crate::instances::Concat))
//! are safe with every strategy.
//!
//! # Example
//!
//! ```rust
//! use monoid_core::fold::{fold, fold_map, fold_with, reduce};
//! use monoid_core::instances::{All, Any, Concat, Max};
//!
//! assert!(!fold(&All, [true, false, true]));
//! assert!(fold(&Any, [true, false]));
//!
//! // Any element satisfying a predicate.
//! assert!(fold_map(|x: i32| x > 2, &Any, [1, 2, 3]));
//!
//! let s = fold_with(&Concat, "a".to_string(), ["b", "c", "d"].map(String::from));
//! assert_eq!(s, "abcd");
//!
//! assert_eq!(reduce(&Max::<i32>::new(), [3, 9, 4]), Some(9));
//! assert_eq!(reduce(&Max::<i32>::new(), []), None);
//! ```
use crate::Monoid;
use crate::Semigroup;

/// Combine every element of `xs`, starting from `monoid.identity()`.
///
/// An empty sequence yields exactly the identity. Panics only if the
/// instance does, e.g. `Sum<i64>` overflowing in a debug build; fold
/// over `Sum<Wrapping<i64>>` when the total may not fit.
pub fn fold<M, I>(monoid: &M, xs: I) -> M::Elem
where
    M: Monoid + ?Sized,
    I: IntoIterator<Item = M::Elem>,
{
    fold_with(monoid, monoid.identity(), xs)
}

/// Map each element into the monoid's domain with `project` and fold
/// the results.
///
/// Equivalent to `fold(monoid, xs.into_iter().map(project))`, done in a
/// single pass without collecting the projected values.
pub fn fold_map<M, I, F>(mut project: F, monoid: &M, xs: I) -> M::Elem
where
    M: Monoid + ?Sized,
    I: IntoIterator,
    F: FnMut(I::Item) -> M::Elem,
{
    xs.into_iter().fold(monoid.identity(), |mut acc, x| {
        let y = project(x);
        monoid.combine_assign(&mut acc, &y);
        acc
    })
}

/// Left fold over a semigroup from an explicit seed.
///
/// A semigroup has no identity, so the caller supplies the starting
/// value.
pub fn fold_with<S, I>(semigroup: &S, init: S::Elem, xs: I) -> S::Elem
where
    S: Semigroup + ?Sized,
    I: IntoIterator<Item = S::Elem>,
{
    xs.into_iter().fold(init, |mut acc, x| {
        semigroup.combine_assign(&mut acc, &x);
        acc
    })
}

/// Combine a sequence without an identity. Returns `None` for an
/// empty sequence.
pub fn reduce<S, I>(semigroup: &S, xs: I) -> Option<S::Elem>
where
    S: Semigroup + ?Sized,
    I: IntoIterator<Item = S::Elem>,
{
    let mut it = xs.into_iter();
    let first = it.next()?;
    Some(fold_with(semigroup, first, it))
}

/// Divide-and-conquer fold: split the slice in halves, fold each half,
/// combine the two results.
///
/// Same result as [`fold`] for any lawful monoid; only the grouping
/// differs.
pub fn fold_balanced<M>(monoid: &M, xs: &[M::Elem]) -> M::Elem
where
    M: Monoid + ?Sized,
    M::Elem: Clone,
{
    match xs {
        [] => monoid.identity(),
        [x] => x.clone(),
        _ => {
            let (left, right) = xs.split_at(xs.len() / 2);
            monoid.combine(&fold_balanced(monoid, left), &fold_balanced(monoid, right))
        }
    }
}

/// Parallel fold on the rayon thread pool.
///
/// Contiguous chunks are folded from the identity and the partial
/// results combined in order, so the result equals [`fold`] for any
/// lawful monoid, commutative or not.
#[cfg(feature = "parallel")]
pub fn par_fold<M>(monoid: &M, xs: Vec<M::Elem>) -> M::Elem
where
    M: Monoid + Sync + ?Sized,
    M::Elem: Send,
{
    use rayon::prelude::*;

    xs.into_par_iter()
        .fold(
            || monoid.identity(),
            |mut acc, x| {
                monoid.combine_assign(&mut acc, &x);
                acc
            },
        )
        .reduce(|| monoid.identity(), |a, b| monoid.combine(&a, &b))
}
