//! # Writer Context
//!
//! A `Writer<W, A>` is a result paired with an accumulated log. The log
//! type must be a [`Monoid`]: `pure` needs an empty log, and `bind` merges
//! the left log with the right one via `combine`.
//!
//! Because `combine` is associative, the final log is the ordered
//! concatenation of every `tell`, however the sub-computations were
//! grouped.
//!
//! Unlike `State` and `Reader`, a `Writer` needs no input, so it is built
//! eagerly: `bind` calls its continuation immediately and the value holds
//! no closures. Chains of any length run in constant stack depth.

use std::marker::PhantomData;

use crate::functor::{Applicative, Functor, Kind, Kinded, Monad};
use crate::monoid::Monoid;

/// A value of type `A` together with a log of type `W`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Writer<W, A> {
    value: A,
    log: W,
}

impl<W: Monoid, A> Writer<W, A> {
    /// A computation that yields `value` and writes `log`.
    pub fn new(value: A, log: W) -> Self {
        Self { value, log }
    }

    /// Yield `value` with an empty log.
    pub fn pure(value: A) -> Self {
        Self::new(value, W::identity())
    }

    /// The produced value.
    pub fn value(&self) -> &A {
        &self.value
    }

    /// The log written so far.
    pub fn log(&self) -> &W {
        &self.log
    }

    /// Take apart into `(value, log)`.
    pub fn run(self) -> (A, W) {
        tracing::trace!(context = "Writer", "run");
        (self.value, self.log)
    }

    /// Keep only the value.
    pub fn eval(self) -> A {
        self.value
    }

    /// Keep only the log.
    pub fn exec(self) -> W {
        self.log
    }

    /// Transform the value; the log is untouched.
    pub fn map<B, F>(self, f: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(f(self.value), self.log)
    }

    /// Continue with `f(value)`; the result's log is `combine(left, right)`.
    pub fn bind<B, F>(self, f: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        let next = f(self.value);
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Alias for [`Writer::bind`].
    pub fn and_then<B, F>(self, f: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
    {
        self.bind(f)
    }

    /// Keep this log, discard this value, continue with `next`.
    pub fn then<B>(self, next: Writer<W, B>) -> Writer<W, B> {
        Writer::new(next.value, self.log.combine(next.log))
    }

    /// Pair the values, concatenate the logs in order.
    pub fn zip<B>(self, other: Writer<W, B>) -> Writer<W, (A, B)> {
        Writer::new((self.value, other.value), self.log.combine(other.log))
    }

    /// Expose the log produced so far alongside the value.
    pub fn listen(self) -> Writer<W, (A, W)>
    where
        W: Clone,
    {
        let log = self.log.clone();
        Writer::new((self.value, log), self.log)
    }

    /// Rewrite the log this computation produced.
    pub fn censor<F>(self, f: F) -> Self
    where
        F: FnOnce(W) -> W,
    {
        Writer::new(self.value, f(self.log))
    }
}

impl<W: Monoid> Writer<W, ()> {
    /// Append `entry` to the log.
    pub fn tell(entry: W) -> Self {
        Self::new((), entry)
    }
}

/// Build a `Writer` from a value and its log.
pub fn writer_of<W: Monoid, A>(value: A, log: W) -> Writer<W, A> {
    Writer::new(value, log)
}

/// See [`Writer::tell`].
pub fn tell<W: Monoid>(entry: W) -> Writer<W, ()> {
    Writer::tell(entry)
}

// ============================================================================
// Contract Instances
// ============================================================================

/// Family marker for `Writer<W, _>`.
pub struct WriterKind<W>(PhantomData<fn() -> W>);

impl<W> Kind for WriterKind<W> {
    type Of<A> = Writer<W, A>;
}

impl<W, A> Kinded for Writer<W, A> {
    type Family = WriterKind<W>;
    type Elem = A;

    fn into_kind(self) -> Writer<W, A> {
        self
    }
}

impl<W: Monoid> Functor for WriterKind<W> {
    fn map<A, B, F>(fa: Writer<W, A>, f: F) -> Writer<W, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(f)
    }
}

impl<W: Monoid> Applicative for WriterKind<W> {
    fn pure<A>(value: A) -> Writer<W, A>
    where
        A: Clone + 'static,
    {
        Writer::pure(value)
    }

    fn apply<A, B, F>(ff: Writer<W, F>, fa: Writer<W, A>) -> Writer<W, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        ff.zip(fa).map(|(f, a)| f(a))
    }

    fn map2<A, B, C, F>(fa: Writer<W, A>, fb: Writer<W, B>, f: F) -> Writer<W, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.zip(fb).map(|(a, b)| f(a, b))
    }
}

impl<W: Monoid> Monad for WriterKind<W> {
    fn bind<A, B, F>(ma: Writer<W, A>, f: F) -> Writer<W, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Writer<W, B> + 'static,
    {
        ma.bind(f)
    }
}
