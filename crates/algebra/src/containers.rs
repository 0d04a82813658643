//! # Container Instances
//!
//! Functor through Traversable for the three std containers:
//!
//! - [`OptionKind`]: optional value, short-circuits on `None`
//! - [`VecKind`]: ordered sequence, `apply` is the cartesian product
//! - [`ResultKind<E>`]: two-branch result, short-circuits on the first `Err`

use std::marker::PhantomData;

use crate::foldable::{Foldable, Traversable};
use crate::functor::{Applicative, Functor, Kind, Kinded, Monad};

/// Family marker for `Option<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptionKind;

/// Family marker for `Vec<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VecKind;

/// Family marker for `Result<_, E>`.
pub struct ResultKind<E>(PhantomData<fn() -> E>);

// ============================================================================
// Option
// ============================================================================

impl Kind for OptionKind {
    type Of<A> = Option<A>;
}

impl<A> Kinded for Option<A> {
    type Family = OptionKind;
    type Elem = A;

    fn into_kind(self) -> Option<A> {
        self
    }
}

impl Functor for OptionKind {
    fn map<A, B, F>(fa: Option<A>, f: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(f)
    }
}

impl Applicative for OptionKind {
    fn pure<A>(value: A) -> Option<A>
    where
        A: Clone + 'static,
    {
        Some(value)
    }

    fn apply<A, B, F>(ff: Option<F>, fa: Option<A>) -> Option<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        match (ff, fa) {
            (Some(f), Some(a)) => Some(f(a)),
            _ => None,
        }
    }

    fn map2<A, B, C, F>(fa: Option<A>, fb: Option<B>, f: F) -> Option<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Some(a), Some(b)) => Some(f(a, b)),
            _ => None,
        }
    }
}

impl Monad for OptionKind {
    fn bind<A, B, F>(ma: Option<A>, f: F) -> Option<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Option<B> + 'static,
    {
        ma.and_then(f)
    }
}

impl Foldable for OptionKind {
    fn fold_left<A, B, F>(fa: Option<A>, init: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Some(a) => f(init, a),
            None => init,
        }
    }
}

impl Traversable for OptionKind {
    fn traverse<G, A, B, F>(ta: Option<A>, f: F) -> G::Of<Option<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B>,
    {
        match ta {
            Some(a) => G::map::<B, Option<B>, _>(f(a), |b| Some(b)),
            None => G::pure::<Option<B>>(None),
        }
    }
}

// ============================================================================
// Vec
// ============================================================================

impl Kind for VecKind {
    type Of<A> = Vec<A>;
}

impl<A> Kinded for Vec<A> {
    type Family = VecKind;
    type Elem = A;

    fn into_kind(self) -> Vec<A> {
        self
    }
}

impl Functor for VecKind {
    fn map<A, B, F>(fa: Vec<A>, f: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.into_iter().map(f).collect()
    }
}

impl Applicative for VecKind {
    fn pure<A>(value: A) -> Vec<A>
    where
        A: Clone + 'static,
    {
        vec![value]
    }

    /// Every function applied to every value, functions outermost:
    /// `[f, g] <*> [x, y] == [f(x), f(y), g(x), g(y)]`.
    fn apply<A, B, F>(ff: Vec<F>, fa: Vec<A>) -> Vec<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let mut out = Vec::with_capacity(ff.len().saturating_mul(fa.len()));
        for f in &ff {
            for a in &fa {
                out.push(f(a.clone()));
            }
        }
        out
    }

    /// Same order as `apply`. Each `a` is moved into its last pairing, so a
    /// single-element `fb` never clones `a`.
    fn map2<A, B, C, F>(fa: Vec<A>, fb: Vec<B>, f: F) -> Vec<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let Some((last, init)) = fb.split_last() else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(fa.len().saturating_mul(fb.len()));
        for a in fa {
            for b in init {
                out.push(f(a.clone(), b.clone()));
            }
            out.push(f(a, last.clone()));
        }
        out
    }
}

impl Monad for VecKind {
    fn bind<A, B, F>(ma: Vec<A>, f: F) -> Vec<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Vec<B> + 'static,
    {
        ma.into_iter().flat_map(f).collect()
    }
}

impl Foldable for VecKind {
    fn fold_left<A, B, F>(fa: Vec<A>, init: B, f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        fa.into_iter().fold(init, f)
    }
}

impl Traversable for VecKind {
    fn traverse<G, A, B, F>(ta: Vec<A>, f: F) -> G::Of<Vec<B>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B>,
    {
        let capacity = ta.len();
        let mut acc = G::pure::<Vec<B>>(Vec::with_capacity(capacity));
        for a in ta {
            acc = G::map2::<Vec<B>, B, Vec<B>, _>(acc, f(a), |mut out, b| {
                out.push(b);
                out
            });
        }
        acc
    }
}

// ============================================================================
// Result
// ============================================================================

impl<E> Kind for ResultKind<E> {
    type Of<A> = Result<A, E>;
}

impl<A, E> Kinded for Result<A, E> {
    type Family = ResultKind<E>;
    type Elem = A;

    fn into_kind(self) -> Result<A, E> {
        self
    }
}

impl<E> Functor for ResultKind<E> {
    fn map<A, B, F>(fa: Result<A, E>, f: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(f)
    }
}

impl<E> Applicative for ResultKind<E> {
    fn pure<A>(value: A) -> Result<A, E>
    where
        A: Clone + 'static,
    {
        Ok(value)
    }

    /// The function side's error wins when both sides failed.
    fn apply<A, B, F>(ff: Result<F, E>, fa: Result<A, E>) -> Result<B, E>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        match (ff, fa) {
            (Ok(f), Ok(a)) => Ok(f(a)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }

    fn map2<A, B, C, F>(fa: Result<A, E>, fb: Result<B, E>, f: F) -> Result<C, E>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        match (fa, fb) {
            (Ok(a), Ok(b)) => Ok(f(a, b)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        }
    }
}

impl<E> Monad for ResultKind<E> {
    fn bind<A, B, F>(ma: Result<A, E>, f: F) -> Result<B, E>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Result<B, E> + 'static,
    {
        ma.and_then(f)
    }
}

impl<E> Foldable for ResultKind<E> {
    fn fold_left<A, B, F>(fa: Result<A, E>, init: B, mut f: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        match fa {
            Ok(a) => f(init, a),
            Err(_) => init,
        }
    }
}

impl<E: Clone + 'static> Traversable for ResultKind<E> {
    fn traverse<G, A, B, F>(ta: Result<A, E>, f: F) -> G::Of<Result<B, E>>
    where
        G: Applicative,
        A: 'static,
        B: Clone + 'static,
        F: Fn(A) -> G::Of<B>,
    {
        match ta {
            Ok(a) => G::map::<B, Result<B, E>, _>(f(a), |b| Ok(b)),
            Err(e) => G::pure::<Result<B, E>>(Err(e)),
        }
    }
}
