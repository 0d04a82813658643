//! # Functor, Applicative, Monad
//!
//! These contracts are polymorphic over the *wrapping* type (`Option`,
//! `Vec`, `State<S, _>`), not over the element. Rust has no `F<_>` type
//! parameter, so each wrapping type gets a zero-sized family marker that
//! implements [`Kind`]:
//!
//! ```text
//! OptionKind::Of<A>  = Option<A>
//! VecKind::Of<A>     = Vec<A>
//! StateKind<S>::Of<A> = State<S, A>
//! ```
//!
//! The contracts are implemented on the marker, and every operation is an
//! associated function taking and returning `Self::Of<_>`. Generic code
//! names the family once (`K: Monad`) and every intermediate type follows
//! from it, so no equality constraints between wrapped types are needed.
//!
//! ## Function bounds
//!
//! Functions handed to `map`/`apply`/`bind` are owned `Fn + 'static`
//! closures. `State` and `Reader` store them behind `Rc<dyn Fn>`, which
//! fixes the bound for every instance.
//!
//! ## Laws
//!
//! ```text
//! map(fa, id) == fa
//! map(fa, g ∘ f) == map(map(fa, f), g)
//! apply(pure(id), v) == v
//! apply(pure(f), pure(x)) == pure(f(x))
//! apply(u, pure(y)) == apply(pure(|f| f(y)), u)
//! bind(pure(x), f) == f(x)
//! bind(m, pure) == m
//! bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))
//! ```

use std::rc::Rc;

/// A type-level family: `Of<A>` is the wrapping type applied to `A`.
pub trait Kind {
    /// The concrete wrapped type for element `A`.
    type Of<A>;
}

/// Links a concrete value type back to its family and element.
///
/// Lets the free combinators in [`crate::combinators`] infer the family
/// from an argument instead of requiring a turbofish.
pub trait Kinded: Sized {
    /// The family this value belongs to.
    type Family: Kind;
    /// The element type.
    type Elem;

    /// View `self` as `Family::Of<Elem>`. Always the identity conversion.
    fn into_kind(self) -> <Self::Family as Kind>::Of<Self::Elem>;
}

/// Shape-preserving, element-wise transformation.
pub trait Functor: Kind {
    /// Apply `f` to every element, keeping the shape.
    fn map<A, B, F>(fa: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;
}

/// Lifting plain values and combining independent effects.
pub trait Applicative: Functor {
    /// Lift a value into the minimal context.
    fn pure<A>(value: A) -> Self::Of<A>
    where
        A: Clone + 'static;

    /// Apply wrapped functions to wrapped values.
    ///
    /// The effects of `ff` are sequenced before those of `fa`.
    fn apply<A, B, F>(ff: Self::Of<F>, fa: Self::Of<A>) -> Self::Of<B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static;

    /// Combine two independent computations with a binary function.
    ///
    /// Effects of `fa` come before effects of `fb`.
    fn map2<A, B, C, F>(fa: Self::Of<A>, fb: Self::Of<B>, f: F) -> Self::Of<C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        let f = Rc::new(f);
        let curried = Self::map::<A, Box<dyn Fn(B) -> C>, _>(fa, move |a: A| {
            let f = Rc::clone(&f);
            Box::new(move |b: B| (*f)(a.clone(), b)) as Box<dyn Fn(B) -> C>
        });
        Self::apply::<B, C, Box<dyn Fn(B) -> C>>(curried, fb)
    }

    /// Pair the results of two independent computations.
    fn product<A, B>(fa: Self::Of<A>, fb: Self::Of<B>) -> Self::Of<(A, B)>
    where
        A: Clone + 'static,
        B: Clone + 'static,
    {
        Self::map2::<A, B, (A, B), _>(fa, fb, |a, b| (a, b))
    }
}

/// Dependent sequencing of computations.
pub trait Monad: Applicative {
    /// Run `ma`, then feed its result to `f` and run what it returns.
    ///
    /// Every effect of `ma` is determined before `f` is called.
    fn bind<A, B, F>(ma: Self::Of<A>, f: F) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Self::Of<B> + 'static;

    /// Sequence two computations, keeping the second result.
    fn then<A, B>(ma: Self::Of<A>, mb: Self::Of<B>) -> Self::Of<B>
    where
        A: 'static,
        B: 'static,
        Self::Of<B>: Clone + 'static,
    {
        Self::bind::<A, B, _>(ma, move |_| mb.clone())
    }

    /// Collapse one layer of nesting.
    fn flatten<A>(mma: Self::Of<Self::Of<A>>) -> Self::Of<A>
    where
        A: 'static,
        Self::Of<A>: 'static,
    {
        Self::bind::<Self::Of<A>, A, _>(mma, |ma| ma)
    }
}
