//! # Law Harness
//!
//! Each function drives both sides of one law on caller-supplied values and
//! compares them. Nothing in the core calls these: a lawless instance
//! produces wrong answers silently, and these checks are how such an
//! instance is caught before generic code trusts it.
//!
//! Pair them with a property-testing tool to supply random inputs; the
//! integration tests in this crate use `proptest`.
//!
//! ## Observation
//!
//! `Option` and `Vec` compare directly, but `State` and `Reader` wrap
//! functions. The container-level checks therefore take an `observe`
//! function turning a wrapped value into something comparable, e.g.
//! `|m| m.run(seed)` for `State` or `Clone::clone` for `Vec`.

use std::any::type_name;
use std::fmt::Debug;

use thiserror::Error;

use crate::foldable::{Foldable, Traversable};
use crate::functor::{Applicative, Functor, Monad};
use crate::monoid::{Monoid, Semigroup};

/// A law whose two sides disagreed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{law} violated for {instance}: {left} != {right}")]
pub struct LawViolation {
    pub law: &'static str,
    pub instance: &'static str,
    pub left: String,
    pub right: String,
}

/// Outcome of a law check.
pub type LawResult = Result<(), LawViolation>;

type Arrow<X, Y> = Box<dyn Fn(X) -> Y>;

fn verdict<I: ?Sized, O: PartialEq + Debug>(law: &'static str, left: O, right: O) -> LawResult {
    if left == right {
        Ok(())
    } else {
        Err(LawViolation {
            law,
            instance: type_name::<I>(),
            left: format!("{left:?}"),
            right: format!("{right:?}"),
        })
    }
}

// ============================================================================
// Semigroup / Monoid
// ============================================================================

/// `combine(combine(a, b), c) == combine(a, combine(b, c))`
pub fn check_associativity<T>(a: T, b: T, c: T) -> LawResult
where
    T: Semigroup + Clone + PartialEq + Debug,
{
    let left = a.clone().combine(b.clone()).combine(c.clone());
    let right = a.combine(b.combine(c));
    verdict::<T, _>("semigroup associativity", left, right)
}

/// `combine(identity(), x) == x`
pub fn check_left_identity<T>(x: T) -> LawResult
where
    T: Monoid + Clone + PartialEq + Debug,
{
    verdict::<T, _>("monoid left identity", T::identity().combine(x.clone()), x)
}

/// `combine(x, identity()) == x`
pub fn check_right_identity<T>(x: T) -> LawResult
where
    T: Monoid + Clone + PartialEq + Debug,
{
    verdict::<T, _>("monoid right identity", x.clone().combine(T::identity()), x)
}

/// `try_identity() == Some(identity())`, which `reduce` relies on.
pub fn check_identity_agreement<T>() -> LawResult
where
    T: Monoid + PartialEq + Debug,
{
    verdict::<T, _>(
        "monoid identity agreement",
        T::try_identity(),
        Some(T::identity()),
    )
}

/// Associativity for one triple.
pub fn check_semigroup_laws<T>(a: T, b: T, c: T) -> LawResult
where
    T: Semigroup + Clone + PartialEq + Debug,
{
    check_associativity(a, b, c)
}

/// Associativity, both identities on every input, and identity agreement.
pub fn check_monoid_laws<T>(a: T, b: T, c: T) -> LawResult
where
    T: Monoid + Clone + PartialEq + Debug,
{
    check_associativity(a.clone(), b.clone(), c.clone())?;
    for x in [a, b, c] {
        check_left_identity(x.clone())?;
        check_right_identity(x)?;
    }
    check_identity_agreement::<T>()
}

// ============================================================================
// Functor
// ============================================================================

/// `map(fa, id) == fa`
pub fn check_functor_identity<K, A, O, Obs>(fa: K::Of<A>, observe: Obs) -> LawResult
where
    K: Functor,
    A: 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    let left = observe(K::map::<A, A, _>(fa.clone(), |a| a));
    let right = observe(fa);
    verdict::<K, _>("functor identity", left, right)
}

/// `map(map(fa, f), g) == map(fa, g ∘ f)`
pub fn check_functor_composition<K, A, B, C, F, G, O, Obs>(
    fa: K::Of<A>,
    f: F,
    g: G,
    observe: Obs,
) -> LawResult
where
    K: Functor,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> B + Clone + 'static,
    G: Fn(B) -> C + Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<C>) -> O,
{
    let left = observe(K::map::<B, C, G>(
        K::map::<A, B, F>(fa.clone(), f.clone()),
        g.clone(),
    ));
    let right = observe(K::map::<A, C, _>(fa, move |a| g(f(a))));
    verdict::<K, _>("functor composition", left, right)
}

/// Identity and composition with endomorphisms `f` and `g`.
pub fn check_functor_laws<K, A, F, G, O, Obs>(fa: K::Of<A>, f: F, g: G, observe: Obs) -> LawResult
where
    K: Functor,
    A: 'static,
    F: Fn(A) -> A + Clone + 'static,
    G: Fn(A) -> A + Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    check_functor_identity::<K, A, O, _>(fa.clone(), &observe)?;
    check_functor_composition::<K, A, A, A, F, G, O, _>(fa, f, g, &observe)
}

// ============================================================================
// Applicative
// ============================================================================

fn apply_pure<K, A, B, H>(h: H, fa: K::Of<A>) -> K::Of<B>
where
    K: Applicative,
    A: Clone + 'static,
    B: 'static,
    H: Fn(A) -> B + Clone + 'static,
{
    K::apply::<A, B, H>(K::pure::<H>(h), fa)
}

/// `apply(pure(id), v) == v`
pub fn check_applicative_identity<K, A, O, Obs>(v: K::Of<A>, observe: Obs) -> LawResult
where
    K: Applicative,
    A: Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    let left = observe(apply_pure::<K, A, A, _>(|a: A| a, v.clone()));
    let right = observe(v);
    verdict::<K, _>("applicative identity", left, right)
}

/// `apply(pure(f), pure(x)) == pure(f(x))`
pub fn check_applicative_homomorphism<K, A, B, F, O, Obs>(f: F, x: A, observe: Obs) -> LawResult
where
    K: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    F: Fn(A) -> B + Clone + 'static,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<B>) -> O,
{
    let left = observe(apply_pure::<K, A, B, F>(f.clone(), K::pure::<A>(x.clone())));
    let right = observe(K::pure::<B>(f(x)));
    verdict::<K, _>("applicative homomorphism", left, right)
}

/// `apply(u, pure(y)) == apply(pure(|f| f(y)), u)`
pub fn check_applicative_interchange<K, A, B, F, O, Obs>(
    u: K::Of<F>,
    y: A,
    observe: Obs,
) -> LawResult
where
    K: Applicative,
    A: Clone + 'static,
    B: 'static,
    F: Fn(A) -> B + Clone + 'static,
    K::Of<F>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<B>) -> O,
{
    let left = observe(K::apply::<A, B, F>(u.clone(), K::pure::<A>(y.clone())));
    let right = observe(apply_pure::<K, F, B, _>(move |f: F| f(y.clone()), u));
    verdict::<K, _>("applicative interchange", left, right)
}

/// `apply(apply(apply(pure(∘), u), v), w) == apply(u, apply(v, w))`
pub fn check_applicative_composition<K, A, B, C, F, G, O, Obs>(
    u: K::Of<G>,
    v: K::Of<F>,
    w: K::Of<A>,
    observe: Obs,
) -> LawResult
where
    K: Applicative,
    A: Clone + 'static,
    B: Clone + 'static,
    C: 'static,
    F: Fn(A) -> B + Clone + 'static,
    G: Fn(B) -> C + Clone + 'static,
    K::Of<G>: Clone,
    K::Of<F>: Clone,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<C>) -> O,
{
    let composed = K::map::<G, Arrow<F, Arrow<A, C>>, _>(u.clone(), |g: G| {
        Box::new(move |f: F| {
            let g = g.clone();
            Box::new(move |a: A| g(f(a))) as Arrow<A, C>
        }) as Arrow<F, Arrow<A, C>>
    });
    let partial = K::apply::<F, Arrow<A, C>, Arrow<F, Arrow<A, C>>>(composed, v.clone());
    let left = observe(K::apply::<A, C, Arrow<A, C>>(partial, w.clone()));

    let inner = K::apply::<A, B, F>(v, w);
    let right = observe(K::apply::<B, C, G>(u, inner));
    verdict::<K, _>("applicative composition", left, right)
}

/// Identity, homomorphism and interchange with an endomorphism `f`.
pub fn check_applicative_laws<K, A, O, Obs>(
    v: K::Of<A>,
    x: A,
    f: fn(A) -> A,
    observe: Obs,
) -> LawResult
where
    K: Applicative,
    A: Clone + 'static,
    K::Of<A>: Clone,
    K::Of<fn(A) -> A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    check_applicative_identity::<K, A, O, _>(v, &observe)?;
    check_applicative_homomorphism::<K, A, A, fn(A) -> A, O, _>(f, x.clone(), &observe)?;
    check_applicative_interchange::<K, A, A, fn(A) -> A, O, _>(K::pure(f), x, &observe)
}

// ============================================================================
// Monad
// ============================================================================

/// `bind(pure(x), f) == f(x)`
pub fn check_monad_left_identity<K, A, B, F, O, Obs>(x: A, f: F, observe: Obs) -> LawResult
where
    K: Monad,
    A: Clone + 'static,
    B: 'static,
    F: Fn(A) -> K::Of<B> + Clone + 'static,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<B>) -> O,
{
    let left = observe(K::bind::<A, B, F>(K::pure::<A>(x.clone()), f.clone()));
    let right = observe(f(x));
    verdict::<K, _>("monad left identity", left, right)
}

/// `bind(m, pure) == m`
pub fn check_monad_right_identity<K, A, O, Obs>(m: K::Of<A>, observe: Obs) -> LawResult
where
    K: Monad,
    A: Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    let left = observe(K::bind::<A, A, _>(m.clone(), |a: A| K::pure::<A>(a)));
    let right = observe(m);
    verdict::<K, _>("monad right identity", left, right)
}

/// `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
pub fn check_monad_associativity<K, A, B, C, F, G, O, Obs>(
    m: K::Of<A>,
    f: F,
    g: G,
    observe: Obs,
) -> LawResult
where
    K: Monad,
    A: 'static,
    B: 'static,
    C: 'static,
    F: Fn(A) -> K::Of<B> + Clone + 'static,
    G: Fn(B) -> K::Of<C> + Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<C>) -> O,
{
    let left = observe(K::bind::<B, C, G>(
        K::bind::<A, B, F>(m.clone(), f.clone()),
        g.clone(),
    ));
    let right = observe(K::bind::<A, C, _>(m, move |a: A| {
        K::bind::<B, C, G>(f(a), g.clone())
    }));
    verdict::<K, _>("monad associativity", left, right)
}

/// Left identity, right identity and associativity with Kleisli arrows
/// `f` and `g` from `A` to `K::Of<A>`.
pub fn check_monad_laws<K, A, F, G, O, Obs>(
    x: A,
    m: K::Of<A>,
    f: F,
    g: G,
    observe: Obs,
) -> LawResult
where
    K: Monad,
    A: Clone + 'static,
    F: Fn(A) -> K::Of<A> + Clone + 'static,
    G: Fn(A) -> K::Of<A> + Clone + 'static,
    K::Of<A>: Clone,
    O: PartialEq + Debug,
    Obs: Fn(K::Of<A>) -> O,
{
    check_monad_left_identity::<K, A, A, F, O, _>(x, f.clone(), &observe)?;
    check_monad_right_identity::<K, A, O, _>(m.clone(), &observe)?;
    check_monad_associativity::<K, A, A, A, F, G, O, _>(m, f, g, &observe)
}

// ============================================================================
// Foldable / Traversable
// ============================================================================

/// `fold_map(fa, f) == fold(map(fa, f))`
pub fn check_fold_map_consistency<K, A, M, F>(fa: K::Of<A>, f: F) -> LawResult
where
    K: Foldable + Functor,
    A: 'static,
    M: Monoid + PartialEq + Debug + 'static,
    F: Fn(A) -> M + Clone + 'static,
    K::Of<A>: Clone,
{
    let left = K::fold_map::<A, M, F>(fa.clone(), f.clone());
    let right = K::fold::<M>(K::map::<A, M, F>(fa, f));
    verdict::<K, _>("fold_map consistency", left, right)
}

/// `traverse::<G>(ta, pure) == pure(ta)`
pub fn check_traverse_identity<T, G, A, O, Obs>(ta: T::Of<A>, observe: Obs) -> LawResult
where
    T: Traversable,
    G: Applicative,
    A: Clone + 'static,
    T::Of<A>: Clone + 'static,
    O: PartialEq + Debug,
    Obs: Fn(G::Of<T::Of<A>>) -> O,
{
    let left = observe(T::traverse::<G, A, A, _>(ta.clone(), |a: A| G::pure::<A>(a)));
    let right = observe(G::pure::<T::Of<A>>(ta));
    verdict::<T, _>("traverse identity", left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::containers::{OptionKind, VecKind};
    use crate::newtypes::{First, Sum};
    use crate::state::{State, StateKind};

    /// `combine` that is not associative: keeps the difference.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Minus(i32);

    impl Semigroup for Minus {
        fn combine(self, other: Self) -> Self {
            Minus(self.0.wrapping_sub(other.0))
        }
    }

    /// A monoid whose `try_identity` forgets to agree with `identity`.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Forgetful(u8);

    impl Semigroup for Forgetful {
        fn combine(self, other: Self) -> Self {
            Forgetful(self.0.wrapping_add(other.0))
        }
    }

    impl Monoid for Forgetful {
        fn identity() -> Self {
            Forgetful(0)
        }
    }

    /// Keeps the right operand: `Skewed(0)` is only a left identity.
    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Skewed(u8);

    impl Semigroup for Skewed {
        fn combine(self, other: Self) -> Self {
            other
        }

        fn try_identity() -> Option<Self> {
            Some(Self::identity())
        }
    }

    impl Monoid for Skewed {
        fn identity() -> Self {
            Skewed(0)
        }
    }

    #[test]
    fn test_identity_checked_on_every_input() {
        let err = check_monoid_laws(Skewed(0), Skewed(0), Skewed(5)).unwrap_err();
        assert_eq!(err.law, "monoid right identity");
        assert_eq!(err.right, "Skewed(5)");
    }

    #[test]
    fn test_lawful_monoid_passes() {
        assert!(check_monoid_laws(Sum(1), Sum(2), Sum(3)).is_ok());
        assert!(check_semigroup_laws(First(1), First(2), First(3)).is_ok());
    }

    #[test]
    fn test_non_associative_combine_is_caught() {
        let err = check_associativity(Minus(10), Minus(4), Minus(3)).unwrap_err();
        assert_eq!(err.law, "semigroup associativity");
        assert!(err.instance.contains("Minus"));
        assert_eq!(err.left, "Minus(3)");
        assert_eq!(err.right, "Minus(9)");
    }

    #[test]
    fn test_identity_disagreement_is_caught() {
        let err = check_identity_agreement::<Forgetful>().unwrap_err();
        assert_eq!(err.law, "monoid identity agreement");
    }

    #[test]
    fn test_functor_laws_on_vec() {
        let result = check_functor_laws::<VecKind, i32, _, _, _, _>(
            vec![1, 2, 3],
            |x| x + 1,
            |x| x * 2,
            |v: Vec<i32>| v,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_applicative_composition_on_option() {
        let u = Some((|x| x * 3) as fn(i32) -> i32);
        let v = Some((|x| x + 1) as fn(i32) -> i32);
        let result = check_applicative_composition::<OptionKind, i32, i32, i32, _, _, _, _>(
            u,
            v,
            Some(5),
            |o: Option<i32>| o,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_monad_laws_on_state() {
        let m = State::new(|s: i32| (s, s.wrapping_add(1)));
        let f = |a: i32| State::new(move |s: i32| (a.wrapping_mul(2), s.wrapping_sub(a)));
        let g = |a: i32| State::new(move |s: i32| (a ^ s, s));
        let result = check_monad_laws::<StateKind<i32>, i32, _, _, _, _>(
            7,
            m,
            f,
            g,
            |m: State<i32, i32>| m.run(11),
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_traverse_identity_vec_in_option() {
        let result = check_traverse_identity::<VecKind, OptionKind, i32, _, _>(
            vec![4, 5],
            |o: Option<Vec<i32>>| o,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_fold_map_consistency_vec() {
        let result =
            check_fold_map_consistency::<VecKind, &str, String, _>(vec!["a", "b"], |s| s.repeat(2));
        assert!(result.is_ok());
    }
}
