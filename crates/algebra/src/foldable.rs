//! # Foldable and Traversable
//!
//! - [`Foldable`]: reduce a container to one value through a monoid
//! - [`Traversable`]: run an effectful function over every element and
//!   rebuild the container inside a single outer context
//!
//! `traverse` sequences effects strictly left to right. For a container
//! `[x1, x2, x3]` and an order-observable applicative such as
//! [`crate::writer::Writer`], the effect of `f(x1)` is recorded before the
//! effect of `f(x2)`.

use crate::functor::{Applicative, Functor, Kind};
use crate::monoid::Monoid;

/// Containers that can be folded into a single value.
pub trait Foldable: Kind {
    /// Left-associative fold over the elements.
    fn fold_left<A, B, F>(fa: Self::Of<A>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B;

    /// Map every element into a monoid and combine the results.
    fn fold_map<A, M, F>(fa: Self::Of<A>, mut f: F) -> M
    where
        M: Monoid,
        F: FnMut(A) -> M,
    {
        Self::fold_left::<A, M, _>(fa, M::identity(), move |acc, a| acc.combine(f(a)))
    }

    /// Combine monoid elements starting from `identity()`.
    fn fold<M>(fm: Self::Of<M>) -> M
    where
        M: Monoid,
    {
        Self::fold_map::<M, M, _>(fm, |m| m)
    }

    /// Number of elements.
    fn length<A>(fa: Self::Of<A>) -> usize {
        Self::fold_left::<A, usize, _>(fa, 0, |n, _| n + 1)
    }

    /// Elements in fold order.
    fn to_vec<A>(fa: Self::Of<A>) -> Vec<A> {
        Self::fold_left::<A, Vec<A>, _>(fa, Vec::new(), |mut out, a| {
            out.push(a);
            out
        })
    }
}

/// Containers whose elements can be visited with an effectful function.
pub trait Traversable: Functor + Foldable {
    /// Apply `f` to each element left to right, sequencing the effects in
    /// that order, and collect the results inside one `G` context.
    fn traverse<G, A, B, F>(ta: Self::Of<A>, f: F) -> G::Of<Self::Of<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B>;

    /// Flip a container of contexts into a context of a container.
    fn sequence<G, A>(tga: Self::Of<G::Of<A>>) -> G::Of<Self::Of<A>>
    where
        G: Applicative,
        A: Clone + 'static,
        G::Of<A>: 'static,
    {
        Self::traverse::<G, G::Of<A>, A, _>(tga, |ga| ga)
    }
}
