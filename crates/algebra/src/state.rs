//! # State Context
//!
//! A `State<S, A>` is an inert description of a state transition
//! `S -> (A, S)`. Nothing runs until [`State::run`] (or `eval`/`exec`)
//! supplies the initial state.
//!
//! ```text
//! get    : S -> (S, S)
//! put(n) : _ -> ((), n)
//! modify : S -> ((), f(S))
//! bind   : threads the state left to right through the chain
//! ```
//!
//! ## Example
//!
//! ```
//! use compositional_algebra::state::{get, modify};
//!
//! let tick = modify(|n: i32| n + 1).then(get());
//! assert_eq!(tick.run(3), (4, 4));
//! assert_eq!(tick.clone().then(tick).run(3), (5, 5));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::functor::{Applicative, Functor, Kind, Kinded, Monad};

/// A deferred computation threading a state of type `S`.
///
/// Values are immutable once built. Every combinator returns a new `State`
/// sharing the underlying transitions, so cloning is cheap and running the
/// same value twice with the same input gives the same output.
pub struct State<S, A> {
    transition: Rc<dyn Fn(S) -> (A, S)>,
}

impl<S, A> Clone for State<S, A> {
    fn clone(&self) -> Self {
        Self {
            transition: Rc::clone(&self.transition),
        }
    }
}

impl<S, A> fmt::Debug for State<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State").finish_non_exhaustive()
    }
}

impl<S: 'static, A: 'static> State<S, A> {
    /// Wrap a state transition.
    pub fn new<F>(transition: F) -> Self
    where
        F: Fn(S) -> (A, S) + 'static,
    {
        Self {
            transition: Rc::new(transition),
        }
    }

    /// Produce `value` without touching the state.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |s| (value.clone(), s))
    }

    /// Produce a value derived from the current state, leaving it unchanged.
    pub fn gets<F>(f: F) -> Self
    where
        F: Fn(&S) -> A + 'static,
    {
        Self::new(move |s| (f(&s), s))
    }

    /// Run the computation from `initial`, returning `(value, final_state)`.
    ///
    /// Each `bind`/`then`/`map` layer adds one nested call, so a chain of
    /// `n` steps needs stack proportional to `n`. A thousand steps fit
    /// comfortably in a default 2 MiB thread stack; much longer chains
    /// should run on a thread spawned with a larger `stack_size`, or be
    /// restructured into a loop over shorter chains.
    pub fn run(&self, initial: S) -> (A, S) {
        tracing::trace!(context = "State", "run");
        (self.transition)(initial)
    }

    /// Run and keep only the produced value.
    pub fn eval(&self, initial: S) -> A {
        self.run(initial).0
    }

    /// Run and keep only the final state.
    pub fn exec(&self, initial: S) -> S {
        self.run(initial).1
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let transition = self.transition;
        State::new(move |s| {
            let (a, s) = transition(s);
            (f(a), s)
        })
    }

    /// Feed the produced value to `f` and continue with the state it left.
    pub fn bind<B, F>(self, f: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        let transition = self.transition;
        State::new(move |s| {
            let (a, s) = transition(s);
            f(a).run(s)
        })
    }

    /// Alias for [`State::bind`].
    pub fn and_then<B, F>(self, f: F) -> State<S, B>
    where
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        self.bind(f)
    }

    /// Run `self`, discard its value, then run `next`.
    pub fn then<B: 'static>(self, next: State<S, B>) -> State<S, B> {
        self.bind(move |_| next.clone())
    }

    /// Run `self` then `other`, pairing both values.
    pub fn zip<B: 'static>(self, other: State<S, B>) -> State<S, (A, B)> {
        let transition = self.transition;
        State::new(move |s| {
            let (a, s) = transition(s);
            let (b, s) = other.run(s);
            ((a, b), s)
        })
    }
}

impl<S: Clone + 'static> State<S, S> {
    /// Produce the current state as the value.
    pub fn get() -> Self {
        Self::new(|s: S| (s.clone(), s))
    }
}

impl<S: 'static> State<S, ()> {
    /// Replace the state, discarding the old one.
    pub fn put(state: S) -> Self
    where
        S: Clone,
    {
        Self::new(move |_| ((), state.clone()))
    }

    /// Replace the state with `f(current)`.
    pub fn modify<F>(f: F) -> Self
    where
        F: Fn(S) -> S + 'static,
    {
        Self::new(move |s| ((), f(s)))
    }
}

/// Build a `State` from a transition function.
pub fn state_of<S, A, F>(transition: F) -> State<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(S) -> (A, S) + 'static,
{
    State::new(transition)
}

/// See [`State::get`].
pub fn get<S: Clone + 'static>() -> State<S, S> {
    State::get()
}

/// See [`State::gets`].
pub fn gets<S, A, F>(f: F) -> State<S, A>
where
    S: 'static,
    A: 'static,
    F: Fn(&S) -> A + 'static,
{
    State::gets(f)
}

/// See [`State::put`].
pub fn put<S: Clone + 'static>(state: S) -> State<S, ()> {
    State::put(state)
}

/// See [`State::modify`].
pub fn modify<S, F>(f: F) -> State<S, ()>
where
    S: 'static,
    F: Fn(S) -> S + 'static,
{
    State::modify(f)
}

// ============================================================================
// Contract Instances
// ============================================================================

/// Family marker for `State<S, _>`.
pub struct StateKind<S>(PhantomData<fn() -> S>);

impl<S> Kind for StateKind<S> {
    type Of<A> = State<S, A>;
}

impl<S, A> Kinded for State<S, A> {
    type Family = StateKind<S>;
    type Elem = A;

    fn into_kind(self) -> State<S, A> {
        self
    }
}

impl<S: 'static> Functor for StateKind<S> {
    fn map<A, B, F>(fa: State<S, A>, f: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(f)
    }
}

impl<S: 'static> Applicative for StateKind<S> {
    fn pure<A>(value: A) -> State<S, A>
    where
        A: Clone + 'static,
    {
        State::pure(value)
    }

    fn apply<A, B, F>(ff: State<S, F>, fa: State<S, A>) -> State<S, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        ff.zip(fa).map(|(f, a)| f(a))
    }

    fn map2<A, B, C, F>(fa: State<S, A>, fb: State<S, B>, f: F) -> State<S, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.zip(fb).map(move |(a, b)| f(a, b))
    }
}

impl<S: 'static> Monad for StateKind<S> {
    fn bind<A, B, F>(ma: State<S, A>, f: F) -> State<S, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> State<S, B> + 'static,
    {
        ma.bind(f)
    }
}
