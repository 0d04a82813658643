//! # Newtype Instances
//!
//! The same carrier often admits several lawful `combine`s: integers add
//! and multiply, orderable values pick a maximum or a minimum. Each choice
//! gets its own wrapper so the instance is selected by type.
//!
//! | Wrapper | combine | identity |
//! |---------|---------|----------|
//! | [`Sum`] | wrapping `+` | `0` |
//! | [`Product`] | wrapping `*` | `1` |
//! | [`All`] | `&&` | `true` |
//! | [`Any`] | `\|\|` | `false` |
//! | [`Max`] | larger | none |
//! | [`Min`] | smaller | none |
//! | [`First`] | left | none |
//! | [`Last`] | right | none |
//!
//! Integer arithmetic wraps so associativity survives overflow. Floating
//! point is left out: `+` on `f64` is not associative.

use crate::monoid::{Monoid, Semigroup};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Additive monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sum<T>(pub T);

/// Multiplicative monoid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Product<T>(pub T);

macro_rules! integer_monoids {
    ($($t:ty),* $(,)?) => {
        $(
            impl Semigroup for Sum<$t> {
                fn combine(self, other: Self) -> Self {
                    Sum(self.0.wrapping_add(other.0))
                }

                fn try_identity() -> Option<Self> {
                    Some(Self::identity())
                }
            }

            impl Monoid for Sum<$t> {
                fn identity() -> Self {
                    Sum(0)
                }
            }

            impl Semigroup for Product<$t> {
                fn combine(self, other: Self) -> Self {
                    Product(self.0.wrapping_mul(other.0))
                }

                fn try_identity() -> Option<Self> {
                    Some(Self::identity())
                }
            }

            impl Monoid for Product<$t> {
                fn identity() -> Self {
                    Product(1)
                }
            }
        )*
    };
}

integer_monoids!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Boolean conjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct All(pub bool);

impl Semigroup for All {
    fn combine(self, other: Self) -> Self {
        All(self.0 && other.0)
    }

    fn try_identity() -> Option<Self> {
        Some(Self::identity())
    }
}

impl Monoid for All {
    fn identity() -> Self {
        All(true)
    }
}

/// Boolean disjunction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Any(pub bool);

impl Semigroup for Any {
    fn combine(self, other: Self) -> Self {
        Any(self.0 || other.0)
    }

    fn try_identity() -> Option<Self> {
        Some(Self::identity())
    }
}

impl Monoid for Any {
    fn identity() -> Self {
        Any(false)
    }
}

// ============================================================================
// Semigroup-only wrappers
// ============================================================================

/// Keeps the larger value. No identity for an arbitrary `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Max<T>(pub T);

impl<T: Ord> Semigroup for Max<T> {
    fn combine(self, other: Self) -> Self {
        // Ties keep the left operand.
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

/// Keeps the smaller value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Min<T>(pub T);

impl<T: Ord> Semigroup for Min<T> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 {
            other
        } else {
            self
        }
    }
}

/// Keeps the leftmost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct First<T>(pub T);

impl<T> Semigroup for First<T> {
    fn combine(self, _other: Self) -> Self {
        self
    }
}

/// Keeps the rightmost value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Last<T>(pub T);

impl<T> Semigroup for Last<T> {
    fn combine(self, other: Self) -> Self {
        other
    }
}
