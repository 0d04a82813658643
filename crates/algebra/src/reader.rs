//! # Reader Context
//!
//! A `Reader<E, A>` is a deferred query `&E -> A` against a read-only
//! environment. Every step of a `bind` chain sees the same environment,
//! unmodified, for the whole of one [`Reader::run`].
//!
//! [`Reader::local`] runs a sub-computation under a derived environment;
//! the outer chain still sees the original.

use std::fmt;
use std::marker::PhantomData;
use std::rc::Rc;

use crate::functor::{Applicative, Functor, Kind, Kinded, Monad};

/// A deferred computation reading an environment of type `E`.
pub struct Reader<E, A> {
    query: Rc<dyn Fn(&E) -> A>,
}

impl<E, A> Clone for Reader<E, A> {
    fn clone(&self) -> Self {
        Self {
            query: Rc::clone(&self.query),
        }
    }
}

impl<E, A> fmt::Debug for Reader<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reader").finish_non_exhaustive()
    }
}

impl<E: 'static, A: 'static> Reader<E, A> {
    /// Wrap a query against the environment.
    pub fn new<F>(query: F) -> Self
    where
        F: Fn(&E) -> A + 'static,
    {
        Self {
            query: Rc::new(query),
        }
    }

    /// Produce `value`, ignoring the environment.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |_| value.clone())
    }

    /// Produce a value projected from the environment.
    pub fn asks<F>(f: F) -> Self
    where
        F: Fn(&E) -> A + 'static,
    {
        Self::new(f)
    }

    /// Run against a borrowed environment.
    ///
    /// Each `bind`/`then`/`map` layer adds one nested call, so stack use
    /// grows with the length of the chain. A thousand steps fit
    /// comfortably in a default 2 MiB thread stack.
    pub fn run(&self, env: &E) -> A {
        tracing::trace!(context = "Reader", "run");
        (self.query)(env)
    }

    /// Run against an owned environment.
    pub fn eval(&self, env: E) -> A {
        self.run(&env)
    }

    /// Run `self` under `f(env)` instead of `env`.
    pub fn local<F>(self, f: F) -> Self
    where
        F: Fn(&E) -> E + 'static,
    {
        let query = self.query;
        Self::new(move |env| query(&f(env)))
    }

    /// Transform the produced value.
    pub fn map<B, F>(self, f: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        let query = self.query;
        Reader::new(move |env| f(query(env)))
    }

    /// Feed the produced value to `f`, running its result on the same environment.
    pub fn bind<B, F>(self, f: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<E, B> + 'static,
    {
        let query = self.query;
        Reader::new(move |env| f(query(env)).run(env))
    }

    /// Alias for [`Reader::bind`].
    pub fn and_then<B, F>(self, f: F) -> Reader<E, B>
    where
        B: 'static,
        F: Fn(A) -> Reader<E, B> + 'static,
    {
        self.bind(f)
    }

    /// Discard this value and continue with `next`.
    pub fn then<B: 'static>(self, next: Reader<E, B>) -> Reader<E, B> {
        self.bind(move |_| next.clone())
    }

    /// Run both against the same environment and pair the values.
    pub fn zip<B: 'static>(self, other: Reader<E, B>) -> Reader<E, (A, B)> {
        let query = self.query;
        Reader::new(move |env| (query(env), other.run(env)))
    }
}

impl<E: Clone + 'static> Reader<E, E> {
    /// Produce the environment itself.
    pub fn ask() -> Self {
        Self::new(|env: &E| env.clone())
    }
}

/// Build a `Reader` from a query function.
pub fn reader_of<E, A, F>(query: F) -> Reader<E, A>
where
    E: 'static,
    A: 'static,
    F: Fn(&E) -> A + 'static,
{
    Reader::new(query)
}

/// See [`Reader::ask`].
pub fn ask<E: Clone + 'static>() -> Reader<E, E> {
    Reader::ask()
}

/// See [`Reader::asks`].
pub fn asks<E, A, F>(f: F) -> Reader<E, A>
where
    E: 'static,
    A: 'static,
    F: Fn(&E) -> A + 'static,
{
    Reader::asks(f)
}

// ============================================================================
// Contract Instances
// ============================================================================

/// Family marker for `Reader<E, _>`.
pub struct ReaderKind<E>(PhantomData<fn() -> E>);

impl<E> Kind for ReaderKind<E> {
    type Of<A> = Reader<E, A>;
}

impl<E, A> Kinded for Reader<E, A> {
    type Family = ReaderKind<E>;
    type Elem = A;

    fn into_kind(self) -> Reader<E, A> {
        self
    }
}

impl<E: 'static> Functor for ReaderKind<E> {
    fn map<A, B, F>(fa: Reader<E, A>, f: F) -> Reader<E, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        fa.map(f)
    }
}

impl<E: 'static> Applicative for ReaderKind<E> {
    fn pure<A>(value: A) -> Reader<E, A>
    where
        A: Clone + 'static,
    {
        Reader::pure(value)
    }

    fn apply<A, B, F>(ff: Reader<E, F>, fa: Reader<E, A>) -> Reader<E, B>
    where
        A: Clone + 'static,
        B: 'static,
        F: Fn(A) -> B + 'static,
    {
        ff.zip(fa).map(|(f, a)| f(a))
    }

    fn map2<A, B, C, F>(fa: Reader<E, A>, fb: Reader<E, B>, f: F) -> Reader<E, C>
    where
        A: Clone + 'static,
        B: Clone + 'static,
        C: 'static,
        F: Fn(A, B) -> C + 'static,
    {
        fa.zip(fb).map(move |(a, b)| f(a, b))
    }
}

impl<E: 'static> Monad for ReaderKind<E> {
    fn bind<A, B, F>(ma: Reader<E, A>, f: F) -> Reader<E, B>
    where
        A: 'static,
        B: 'static,
        F: Fn(A) -> Reader<E, B> + 'static,
    {
        ma.bind(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greeting() -> Reader<String, String> {
        ask().map(|name: String| format!("hello, {name}!"))
    }

    fn farewell() -> Reader<String, String> {
        asks(|name: &String| format!("bye, {name}!"))
    }

    #[test]
    fn test_ask_returns_environment() {
        assert_eq!(ask::<u32>().eval(42), 42);
    }

    #[test]
    fn test_shared_environment_composition() {
        let both = greeting().bind(|g| farewell().map(move |b| format!("{g} {b}")));
        assert_eq!(both.eval("adit".to_string()), "hello, adit! bye, adit!");
    }

    #[test]
    fn test_repeated_ask_is_deterministic() {
        let twice = ask::<String>().zip(ask()).map(|(a, b)| a + &b);
        let env = "adit".to_string();
        assert_eq!(twice.run(&env), "aditadit");
        assert_eq!(twice.run(&env), twice.run(&env));
    }

    #[test]
    fn test_local_does_not_leak() {
        let shouted = greeting().local(|name: &String| name.to_uppercase());
        let program = shouted.zip(greeting()).map(|(a, b)| format!("{a} / {b}"));
        assert_eq!(program.eval("adit".to_string()), "hello, ADIT! / hello, adit!");
    }

    #[test]
    fn test_pure_ignores_environment() {
        assert_eq!(Reader::<i32, &str>::pure("fixed").eval(0), "fixed");
    }

    #[test]
    fn test_long_bind_chain_within_default_stack() {
        let mut program = Reader::pure(0u64);
        for _ in 0..1_000 {
            program = program.bind(|acc| asks(move |step: &u64| acc + step));
        }
        assert_eq!(program.eval(3), 3_000);
    }
}
