//! # Generic Combinators
//!
//! Free functions over any conforming instance. Each one dispatches to the
//! instance's own contract implementation; none of them re-checks laws.
//!
//! The family is inferred from the argument through [`Kinded`], so
//! `map(Some(1), f)` and `map(vec![1], f)` need no annotations. Only `pure`
//! and `traverse` name a family explicitly: `pure` has no wrapped argument,
//! and `traverse` needs the *outer* applicative.
//!
//! ```
//! use compositional_algebra::combinators::{bind, fold, map, pure, traverse};
//! use compositional_algebra::{OptionKind, Sum};
//!
//! assert_eq!(map(vec![1, 2], |x| x * 10), vec![10, 20]);
//! assert_eq!(bind(Some(4), |x| if x > 0 { Some(x - 1) } else { None }), Some(3));
//! assert_eq!(fold(vec![Sum(1), Sum(2)]), Sum(3));
//! assert_eq!(pure::<OptionKind, _>("x"), Some("x"));
//! assert_eq!(traverse::<OptionKind, _, _, _>(vec![1, 2], Some), Some(vec![1, 2]));
//! ```

use crate::error::Result;
use crate::foldable::{Foldable, Traversable};
use crate::functor::{Applicative, Functor, Kind, Kinded, Monad};
use crate::monoid::{self, Monoid, Semigroup};

/// The family of `T`, applied to `B`.
pub type Rewrap<T, B> = <<T as Kinded>::Family as Kind>::Of<B>;

/// `a` combined with `b`.
pub fn combine<T: Semigroup>(a: T, b: T) -> T {
    a.combine(b)
}

/// The identity element of `T`.
pub fn identity<T: Monoid>() -> T {
    T::identity()
}

/// See [`monoid::reduce`].
pub fn reduce<T, I>(items: I) -> Result<T>
where
    T: Semigroup,
    I: IntoIterator<Item = T>,
{
    monoid::reduce(items)
}

/// Apply `f` to every element of `fa`.
pub fn map<T, B, F>(fa: T, f: F) -> Rewrap<T, B>
where
    T: Kinded,
    T::Family: Functor,
    T::Elem: 'static,
    B: 'static,
    F: Fn(T::Elem) -> B + 'static,
{
    <T::Family as Functor>::map::<T::Elem, B, F>(fa.into_kind(), f)
}

/// Lift `value` into family `K`.
pub fn pure<K, A>(value: A) -> K::Of<A>
where
    K: Applicative,
    A: Clone + 'static,
{
    K::pure(value)
}

/// Apply wrapped functions to wrapped values; `ff`'s effects come first.
pub fn apply<FF, T, B>(ff: FF, fa: T) -> Rewrap<T, B>
where
    T: Kinded,
    T::Family: Applicative,
    T::Elem: Clone + 'static,
    FF: Kinded<Family = T::Family>,
    FF::Elem: Fn(T::Elem) -> B + 'static,
    B: 'static,
{
    <T::Family as Applicative>::apply::<T::Elem, B, FF::Elem>(ff.into_kind(), fa.into_kind())
}

/// Sequence a dependent computation after `ma`.
pub fn bind<T, B, F>(ma: T, f: F) -> Rewrap<T, B>
where
    T: Kinded,
    T::Family: Monad,
    T::Elem: 'static,
    B: 'static,
    F: Fn(T::Elem) -> Rewrap<T, B> + 'static,
{
    <T::Family as Monad>::bind::<T::Elem, B, F>(ma.into_kind(), f)
}

/// Combine every monoid element of `container`.
pub fn fold<T>(container: T) -> T::Elem
where
    T: Kinded,
    T::Family: Foldable,
    T::Elem: Monoid,
{
    <T::Family as Foldable>::fold::<T::Elem>(container.into_kind())
}

/// Map every element into a monoid, then fold.
pub fn fold_map<T, M, F>(container: T, f: F) -> M
where
    T: Kinded,
    T::Family: Foldable,
    M: Monoid,
    F: FnMut(T::Elem) -> M,
{
    <T::Family as Foldable>::fold_map::<T::Elem, M, F>(container.into_kind(), f)
}

/// Run `f` over `container` left to right inside applicative `G`.
pub fn traverse<G, T, B, F>(container: T, f: F) -> G::Of<Rewrap<T, B>>
where
    G: Applicative,
    T: Kinded,
    T::Family: Traversable,
    T::Elem: 'static,
    B: Clone + 'static,
    F: Fn(T::Elem) -> G::Of<B>,
{
    <T::Family as Traversable>::traverse::<G, T::Elem, B, F>(container.into_kind(), f)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{OptionKind, VecKind};
    use crate::newtypes::{Max, Product};
    use crate::state::{modify, State, StateKind};
    use crate::writer::{tell, WriterKind};

    #[test]
    fn test_combine_and_identity() {
        assert_eq!(combine(Product(3), Product(4)), Product(12));
        assert_eq!(identity::<String>(), "");
    }

    #[test]
    fn test_reduce_reports_instance() {
        let err = reduce(Vec::<Max<u8>>::new()).unwrap_err();
        assert!(err.to_string().contains("Max"));
    }

    #[test]
    fn test_apply_infers_family() {
        let fs: Vec<fn(i32) -> i32> = vec![|x| x + 1, |x| x - 1];
        assert_eq!(apply(fs, vec![10]), vec![11, 9]);
    }

    #[test]
    fn test_map_over_state() {
        let doubled = map(State::<i32, i32>::new(|s| (s, s)), |v| v * 2);
        assert_eq!(doubled.run(4), (8, 4));
    }

    #[test]
    fn test_bind_over_writer() {
        let w = bind(tell(vec![1]), |_| tell(vec![2]));
        assert_eq!(w.exec(), vec![1, 2]);
    }

    #[test]
    fn test_fold_map_lengths() {
        assert_eq!(fold_map(vec!["ab", "cde"], |s| Product(s.len())), Product(6));
    }

    #[test]
    fn test_traverse_sequences_writer_in_order() {
        let logged = traverse::<WriterKind<Vec<i32>>, _, _, _>(vec![1, 2, 3], |x| {
            tell(vec![x]).map(move |_| x * 2)
        });
        let (values, log) = logged.run();
        assert_eq!(values, vec![2, 4, 6]);
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[test]
    fn test_traverse_threads_state_in_order() {
        let program = traverse::<StateKind<Vec<char>>, _, _, _>(vec!['x', 'y', 'z'], |c| {
            modify(move |mut seen: Vec<char>| {
                seen.push(c);
                seen
            })
            .map(move |_| c.to_ascii_uppercase())
        });
        assert_eq!(program.run(Vec::new()), (vec!['X', 'Y', 'Z'], vec!['x', 'y', 'z']));
    }

    #[test]
    fn test_pure_per_family() {
        assert_eq!(pure::<VecKind, _>(1), vec![1]);
        assert_eq!(pure::<OptionKind, _>(1), Some(1));
    }
}
