//! # Semigroups and Monoids
//!
//! The value-level contracts: things that can be combined.
//!
//! - [`Semigroup`]: an associative `combine`
//! - [`Monoid`]: a semigroup with a two-sided `identity`
//!
//! ## Laws
//!
//! ```text
//! combine(combine(a, b), c) == combine(a, combine(b, c))
//! combine(identity(), x) == x == combine(x, identity())
//! ```
//!
//! Neither law is checked at call time. See [`crate::laws`].
//!
//! ## Reduction without specialization
//!
//! [`reduce`] must return `identity()` for a monoid and fail for a bare
//! semigroup. Rust cannot branch on "does `T` also implement `Monoid`", so
//! every semigroup exposes [`Semigroup::try_identity`]: `None` by default,
//! `Some(identity())` for monoids. The harness checks the two agree.

use std::any::type_name;

use crate::error::{AlgebraError, Result};

/// A type with an associative binary operation.
pub trait Semigroup: Sized {
    /// Combine two values. Must be associative.
    fn combine(self, other: Self) -> Self;

    /// The identity element, if this instance has one.
    ///
    /// Monoid instances override this to return `Some(Self::identity())`.
    fn try_identity() -> Option<Self> {
        None
    }
}

/// A semigroup with a two-sided identity element.
pub trait Monoid: Semigroup {
    /// The identity: `combine(identity(), x) == x == combine(x, identity())`.
    fn identity() -> Self;
}

/// Left-fold a sequence with `combine`.
///
/// Empty input yields the instance's identity when it has one, otherwise
/// [`AlgebraError::EmptyInput`].
///
/// ```
/// use compositional_algebra::monoid::reduce;
/// use compositional_algebra::newtypes::{Max, Sum};
///
/// assert_eq!(reduce(vec![Sum(1), Sum(2), Sum(3)]).unwrap(), Sum(6));
/// assert_eq!(reduce(Vec::<Sum<i32>>::new()).unwrap(), Sum(0));
/// assert!(reduce(Vec::<Max<i32>>::new()).is_err());
/// ```
pub fn reduce<T, I>(items: I) -> Result<T>
where
    T: Semigroup,
    I: IntoIterator<Item = T>,
{
    let mut iter = items.into_iter();
    match iter.next() {
        Some(first) => Ok(iter.fold(first, T::combine)),
        None => T::try_identity().ok_or_else(|| {
            tracing::debug!(instance = type_name::<T>(), "reduce over empty input");
            AlgebraError::EmptyInput {
                operation: "reduce",
                instance: type_name::<T>(),
            }
        }),
    }
}

/// Fold a sequence of monoid values, starting from `identity()`.
pub fn concat<T, I>(items: I) -> T
where
    T: Monoid,
    I: IntoIterator<Item = T>,
{
    items.into_iter().fold(T::identity(), T::combine)
}

/// Combine `value` with itself `n` times.
///
/// `n == 0` is only meaningful for monoids and goes through [`reduce`].
pub fn combine_n<T>(value: T, n: usize) -> Result<T>
where
    T: Semigroup + Clone,
{
    reduce(std::iter::repeat(value).take(n))
}

// ============================================================================
// Std Instances
// ============================================================================

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }

    fn try_identity() -> Option<Self> {
        Some(Self::identity())
    }
}

impl Monoid for String {
    fn identity() -> Self {
        String::new()
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }

    fn try_identity() -> Option<Self> {
        Some(Self::identity())
    }
}

impl<T> Monoid for Vec<T> {
    fn identity() -> Self {
        Vec::new()
    }
}

/// `None` is the identity; two `Some`s combine their contents.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(a), Some(b)) => Some(a.combine(b)),
            (a, None) => a,
            (None, b) => b,
        }
    }

    fn try_identity() -> Option<Self> {
        Some(None)
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn identity() -> Self {
        None
    }
}

impl Semigroup for () {
    fn combine(self, _other: Self) -> Self {}

    fn try_identity() -> Option<Self> {
        Some(())
    }
}

impl Monoid for () {
    fn identity() -> Self {}
}

/// Component-wise. A pair is a monoid only when both halves are.
impl<A: Semigroup, B: Semigroup> Semigroup for (A, B) {
    fn combine(self, other: Self) -> Self {
        (self.0.combine(other.0), self.1.combine(other.1))
    }

    fn try_identity() -> Option<Self> {
        Some((A::try_identity()?, B::try_identity()?))
    }
}

impl<A: Monoid, B: Monoid> Monoid for (A, B) {
    fn identity() -> Self {
        (A::identity(), B::identity())
    }
}
