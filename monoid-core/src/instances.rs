//! Concrete **instances** of the contracts in this crate.
//!
//! Every instance is an immutable, stateless (or instance-holding)
//! value. None of them mutates its arguments; `combine` always builds
//! a fresh value.
//!
//! # Catalog
//!
//! | Instance | Domain | `combine` | `identity` |
//! |---|---|---|---|
//! | [`Any`] | `bool` | `a \|\| b` | `false` |
//! | [`All`] | `bool` | `a && b` | `true` |
//! | [`Concat`] | `String` | concatenation | `""` |
//! | [`Sum<T>`] | number | `a + b` | `0` |
//! | [`Product<T>`] | number | `a * b` | `1` |
//! | [`Min<T>`] | `T: Ord` | lesser value | *(semigroup only)* |
//! | [`Max<T>`] | `T: Ord` | greater value | *(semigroup only)* |
//! | [`min()`] | `Option<T>`, `T: Ord` | lesser present value | `None` |
//! | [`max()`] | `Option<T>`, `T: Ord` | greater present value | `None` |
//! | [`Optional<S>`] | `Option<S::Elem>` | `S` on two present values | `None` |
//! | [`key_value()`] | `HashMap<K, V>` | key union, shared values via inner | `{}` |
//!
//! `Min`/`Max`, and so `min()`/`max()`, need a total order. Floats
//! are only `PartialOrd` (NaN compares with nothing), so `min::<f64>()`
//! is not a monoid; wrap floats in a totally ordered type first.
//!
//! ```compile_fail
//! use monoid_core::fold::fold;
//! use monoid_core::instances::min;
//!
//! fold(&min::<f64>(), [Some(1.0)]);
//! ```
//!
//! `Sum`/`Product` over primitive integers use the plain `+`/`*`, so
//! overflow panics in debug builds. For modular arithmetic
//! use [`std::num::Wrapping`]:
//!
//! ```rust
//! use std::num::Wrapping;
//!
//! use monoid_core::fold::fold;
//! use monoid_core::instances::Sum;
//!
//! let total = fold(&Sum::<Wrapping<i64>>::new(), [Wrapping(i64::MAX), Wrapping(1)]);
//! assert_eq!(total, Wrapping(i64::MIN));
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use monoid_core::instances::{key_value, Concat};
//! use monoid_core::Magma;
//!
//! let kv = key_value(Concat);
//! let a = HashMap::from([("a", "hello ".to_string())]);
//! let b = HashMap::from([("a", "world".to_string()), ("b", "!".to_string())]);
//!
//! let c = kv.combine(&a, &b);
//! assert_eq!(c["a"], "hello world");
//! assert_eq!(c["b"], "!");
//! ```
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use num_traits::One;
use num_traits::Zero;

use crate::CommutativeSemigroup;
use crate::Magma;
use crate::Monoid;
use crate::Semigroup;

// combine = OR (disjunction)

/// Booleans under logical OR (disjunction).
///
/// - `combine(a, b) == a || b`
/// - Identity is `false`
///
/// # Example
///
/// ```rust
/// use monoid_core::instances::Any;
/// use monoid_core::{Magma, Monoid};
///
/// assert!(Any.combine(&false, &true));
/// assert!(!Any.identity());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Any;

impl Magma for Any {
    type Elem = bool;

    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a || *b
    }
}

impl Semigroup for Any {}

impl Monoid for Any {
    fn identity(&self) -> bool {
        false
    }
}

impl CommutativeSemigroup for Any {}

// combine = AND (conjunction)

/// Booleans under logical AND (conjunction).
///
/// - `combine(a, b) == a && b`
/// - Identity is `true`
///
/// # Example
///
/// ```rust
/// use monoid_core::instances::All;
/// use monoid_core::{Magma, Monoid};
///
/// assert!(!All.combine(&true, &false));
/// assert!(All.identity());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct All;

impl Magma for All {
    type Elem = bool;

    fn combine(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }
}

impl Semigroup for All {}

impl Monoid for All {
    fn identity(&self) -> bool {
        true
    }
}

impl CommutativeSemigroup for All {}

// combine = string concatenation

/// Strings under concatenation, with the empty string as identity.
///
/// Not commutative: `"ab" <> "cd" != "cd" <> "ab"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Concat;

impl Magma for Concat {
    type Elem = String;

    fn combine(&self, a: &String, b: &String) -> String {
        let mut out = String::with_capacity(a.len() + b.len());
        out.push_str(a);
        out.push_str(b);
        out
    }

    fn combine_assign(&self, acc: &mut String, other: &String) {
        acc.push_str(other);
    }
}

impl Semigroup for Concat {}

impl Monoid for Concat {
    fn identity(&self) -> String {
        String::new()
    }
}

// Numeric instances carry their number type as a phantom parameter.

macro_rules! phantom_instance {
    ( $( #[$meta:meta] )* $name:ident ) => {
        $( #[$meta] )*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// Create the instance.
            pub const fn new() -> Self {
                $name(PhantomData)
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>", stringify!($name), std::any::type_name::<T>())
            }
        }
    };
}

phantom_instance! {
    /// Numbers under addition, with `0` as identity.
    ///
    /// Works for any `T: num_traits::Zero + Clone`. Overflow follows
    /// `T`'s own `+` (a panic in debug builds for primitive
    /// integers); use `Sum<Wrapping<T>>` to wrap instead.
    /// Floating-point addition is only approximately associative.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monoid_core::instances::Sum;
    /// use monoid_core::{Magma, Monoid};
    ///
    /// let sum = Sum::<i64>::new();
    /// assert_eq!(sum.combine(&1, &2), 3);
    /// assert_eq!(sum.identity(), 0);
    /// ```
    Sum
}

impl<T: Zero + Clone> Magma for Sum<T> {
    type Elem = T;

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() + b.clone()
    }
}

impl<T: Zero + Clone> Semigroup for Sum<T> {}

impl<T: Zero + Clone> Monoid for Sum<T> {
    fn identity(&self) -> T {
        T::zero()
    }
}

impl<T: Zero + Clone> CommutativeSemigroup for Sum<T> {}

phantom_instance! {
    /// Numbers under multiplication, with `1` as identity.
    ///
    /// Works for any `T: num_traits::One + Clone`. Overflow follows
    /// `T`'s own `*`; use `Product<Wrapping<T>>` to wrap instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monoid_core::instances::Product;
    /// use monoid_core::{Magma, Monoid};
    ///
    /// let product = Product::<i64>::new();
    /// assert_eq!(product.combine(&2, &2), 4);
    /// assert_eq!(product.identity(), 1);
    /// ```
    Product
}

impl<T: One + Clone> Magma for Product<T> {
    type Elem = T;

    fn combine(&self, a: &T, b: &T) -> T {
        a.clone() * b.clone()
    }
}

impl<T: One + Clone> Semigroup for Product<T> {}

impl<T: One + Clone> Monoid for Product<T> {
    fn identity(&self) -> T {
        T::one()
    }
}

impl<T: One + Clone> CommutativeSemigroup for Product<T> {}

phantom_instance! {
    /// Ordered values under `min`.
    ///
    /// A semigroup only: plain `T` has no identity for `min` without
    /// a sentinel bound. Use [`min()`] for the monoid over
    /// `Option<T>`. On ties the left operand is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monoid_core::instances::Min;
    /// use monoid_core::Magma;
    ///
    /// assert_eq!(Min::<i32>::new().combine(&1, &2), 1);
    /// ```
    Min
}

impl<T: Ord + Clone> Magma for Min<T> {
    type Elem = T;

    fn combine(&self, a: &T, b: &T) -> T {
        if b < a {
            b.clone()
        } else {
            a.clone()
        }
    }
}

impl<T: Ord + Clone> Semigroup for Min<T> {}

impl<T: Ord + Clone> CommutativeSemigroup for Min<T> {}

phantom_instance! {
    /// Ordered values under `max`.
    ///
    /// A semigroup only; use [`max()`] for the monoid over
    /// `Option<T>`. On ties the left operand is kept.
    ///
    /// # Example
    ///
    /// ```rust
    /// use monoid_core::instances::Max;
    /// use monoid_core::Magma;
    ///
    /// assert_eq!(Max::<i32>::new().combine(&1, &2), 2);
    /// ```
    Max
}

impl<T: Ord + Clone> Magma for Max<T> {
    type Elem = T;

    fn combine(&self, a: &T, b: &T) -> T {
        if b > a {
            b.clone()
        } else {
            a.clone()
        }
    }
}

impl<T: Ord + Clone> Semigroup for Max<T> {}

impl<T: Ord + Clone> CommutativeSemigroup for Max<T> {}

// Option: None as identity; Some combines inner

/// Lifts a semigroup `S` into a monoid over `Option<S::Elem>`.
///
/// - `combine(None, x) == x` and `combine(x, None) == x`
/// - `combine(Some(a), Some(b)) == Some(S::combine(a, b))`
/// - Identity is `None`, meaning "no value yet"
///
/// This is how `min`/`max` become total, well-identified monoids
/// without a sentinel numeric bound.
///
/// # Example
///
/// ```rust
/// use monoid_core::instances::{Concat, Optional};
/// use monoid_core::{Magma, Monoid};
///
/// let opt = Optional(Concat);
/// let a = Some("a".to_string());
/// assert_eq!(opt.combine(&a, &None), a);
/// assert_eq!(opt.combine(&a, &Some("b".to_string())), Some("ab".to_string()));
/// assert_eq!(opt.identity(), None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Optional<S>(pub S);

impl<S> Optional<S> {
    /// The lifted instance.
    pub fn inner(&self) -> &S {
        &self.0
    }
}

impl<S> Magma for Optional<S>
where
    S: Magma,
    S::Elem: Clone,
{
    type Elem = Option<S::Elem>;

    fn combine(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        match (a, b) {
            (None, x) | (x, None) => x.clone(),
            (Some(a), Some(b)) => Some(self.0.combine(a, b)),
        }
    }
}

impl<S> Semigroup for Optional<S>
where
    S: Semigroup,
    S::Elem: Clone,
{
}

impl<S> Monoid for Optional<S>
where
    S: Semigroup,
    S::Elem: Clone,
{
    fn identity(&self) -> Self::Elem {
        None
    }
}

impl<S> CommutativeSemigroup for Optional<S>
where
    S: CommutativeSemigroup,
    S::Elem: Clone,
{
}

/// `min` as a monoid over `Option<T>`, `None` as identity.
pub type MinMonoid<T> = Optional<Min<T>>;

/// `max` as a monoid over `Option<T>`, `None` as identity.
pub type MaxMonoid<T> = Optional<Max<T>>;

/// The `min` monoid: lesser of two present values, `None` is identity.
///
/// ```rust
/// use monoid_core::fold::fold;
/// use monoid_core::instances::min;
///
/// assert_eq!(fold(&min::<i32>(), [3, 2, 4, 1].map(Some)), Some(1));
/// assert_eq!(fold(&min::<i32>(), []), None);
/// ```
pub const fn min<T>() -> MinMonoid<T> {
    Optional(Min::new())
}

/// The `max` monoid: greater of two present values, `None` is identity.
///
/// ```rust
/// use monoid_core::fold::fold;
/// use monoid_core::instances::max;
///
/// assert_eq!(fold(&max::<i32>(), [3, 2, 4, 1].map(Some)), Some(4));
/// ```
pub const fn max<T>() -> MaxMonoid<T> {
    Optional(Max::new())
}

// Key-value maps: union of keys, shared values via the inner instance

/// Maps from keys to values, parameterized by an inner instance over
/// the values.
///
/// Combining two maps:
/// - keys present in only one operand are copied through unchanged
/// - values under keys present in both are combined with the inner
///   instance, left operand's value first
///
/// The inner instance only needs to be a [`Semigroup`]; the empty
/// map is always the identity. Both operands are left untouched and
/// a new map is returned, even when one side is empty.
pub struct KeyValue<K, S> {
    inner: S,
    keys: PhantomData<fn() -> K>,
}

/// Build the key-value instance over `HashMap<K, S::Elem>`.
///
/// ```rust
/// use std::collections::HashMap;
///
/// use monoid_core::instances::{key_value, Sum};
/// use monoid_core::Magma;
///
/// let counts = key_value(Sum::<u32>::new());
/// let a = HashMap::from([("x", 1), ("y", 2)]);
/// let b = HashMap::from([("y", 40)]);
/// assert_eq!(counts.combine(&a, &b), HashMap::from([("x", 1), ("y", 42)]));
/// ```
pub const fn key_value<K, S>(inner: S) -> KeyValue<K, S> {
    KeyValue::new(inner)
}

impl<K, S> KeyValue<K, S> {
    /// Wrap an inner instance over the value type.
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            keys: PhantomData,
        }
    }

    /// The instance used for values under shared keys.
    pub fn inner(&self) -> &S {
        &self.inner
    }
}

impl<K, S> KeyValue<K, S>
where
    K: Eq + Hash + Clone,
    S: Magma,
    S::Elem: Clone,
{
    fn merge_into(&self, out: &mut HashMap<K, S::Elem>, other: &HashMap<K, S::Elem>) {
        for (k, v_other) in other {
            match out.entry(k.clone()) {
                Entry::Occupied(mut slot) => {
                    let merged = self.inner.combine(slot.get(), v_other);
                    slot.insert(merged);
                }
                Entry::Vacant(slot) => {
                    slot.insert(v_other.clone());
                }
            }
        }
    }
}

impl<K, S: Clone> Clone for KeyValue<K, S> {
    fn clone(&self) -> Self {
        Self::new(self.inner.clone())
    }
}

impl<K, S: Copy> Copy for KeyValue<K, S> {}

impl<K, S: Default> Default for KeyValue<K, S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<K, S: fmt::Debug> fmt::Debug for KeyValue<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyValue")
            .field("keys", &std::any::type_name::<K>())
            .field("inner", &self.inner)
            .finish()
    }
}

impl<K, S> Magma for KeyValue<K, S>
where
    K: Eq + Hash + Clone,
    S: Magma,
    S::Elem: Clone,
{
    type Elem = HashMap<K, S::Elem>;

    fn combine(&self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let mut out = a.clone();
        self.merge_into(&mut out, b);
        out
    }

    fn combine_assign(&self, acc: &mut Self::Elem, other: &Self::Elem) {
        self.merge_into(acc, other);
    }
}

impl<K, S> Semigroup for KeyValue<K, S>
where
    K: Eq + Hash + Clone,
    S: Semigroup,
    S::Elem: Clone,
{
}

impl<K, S> Monoid for KeyValue<K, S>
where
    K: Eq + Hash + Clone,
    S: Semigroup,
    S::Elem: Clone,
{
    fn identity(&self) -> Self::Elem {
        HashMap::new()
    }
}

impl<K, S> CommutativeSemigroup for KeyValue<K, S>
where
    K: Eq + Hash + Clone,
    S: CommutativeSemigroup,
    S::Elem: Clone,
{
}
