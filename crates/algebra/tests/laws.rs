//! Property tests for every built-in instance.
//!
//! Each block feeds random inputs through the harness in
//! `compositional_algebra::laws`. Wrapped functions (`State`, `Reader`) are
//! compared by running both sides from the same random seed.

use compositional_algebra::combinators::traverse;
use compositional_algebra::laws::{
    check_applicative_composition, check_applicative_laws, check_fold_map_consistency,
    check_functor_laws, check_monad_laws, check_monoid_laws, check_semigroup_laws,
    check_traverse_identity,
};
use compositional_algebra::monoid::{concat, reduce};
use compositional_algebra::reader::{reader_of, Reader, ReaderKind};
use compositional_algebra::state::{State, StateKind};
use compositional_algebra::writer::{tell, writer_of, Writer, WriterKind};
use compositional_algebra::{
    All, Any, First, Last, Max, Min, OptionKind, Product, ResultKind, Sum, VecKind,
};
use proptest::prelude::*;

fn inc(x: i32) -> i32 {
    x.wrapping_add(1)
}

fn triple(x: i32) -> i32 {
    x.wrapping_mul(3)
}

fn small_vec() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..6)
}

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok::<i32, String>),
        "[a-z]{0,4}".prop_map(Err::<i32, String>),
    ]
}

// ============================================================================
// Semigroup / Monoid
// ============================================================================

proptest! {
    #[test]
    fn prop_sum_product_monoid(a in any::<i64>(), b in any::<i64>(), c in any::<i64>()) {
        prop_assert_eq!(check_monoid_laws(Sum(a), Sum(b), Sum(c)), Ok(()));
        prop_assert_eq!(check_monoid_laws(Product(a), Product(b), Product(c)), Ok(()));
    }

    #[test]
    fn prop_bool_monoids(a in any::<bool>(), b in any::<bool>(), c in any::<bool>()) {
        prop_assert_eq!(check_monoid_laws(All(a), All(b), All(c)), Ok(()));
        prop_assert_eq!(check_monoid_laws(Any(a), Any(b), Any(c)), Ok(()));
    }

    #[test]
    fn prop_string_and_vec_monoid(a in ".{0,8}", b in ".{0,8}", c in ".{0,8}", xs in small_vec(), ys in small_vec(), zs in small_vec()) {
        prop_assert_eq!(check_monoid_laws(a, b, c), Ok(()));
        prop_assert_eq!(check_monoid_laws(xs, ys, zs), Ok(()));
    }

    #[test]
    fn prop_option_and_pair_monoid(a in any::<Option<i32>>(), b in any::<Option<i32>>(), c in any::<Option<i32>>()) {
        let lift = |o: Option<i32>| o.map(Sum);
        prop_assert_eq!(check_monoid_laws(lift(a), lift(b), lift(c)), Ok(()));

        let pair = |o: Option<i32>| (Sum(o.unwrap_or(0)), o.map(|n| n.to_string()).unwrap_or_default());
        prop_assert_eq!(check_monoid_laws(pair(a), pair(b), pair(c)), Ok(()));
    }

    #[test]
    fn prop_semigroup_only_instances(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        prop_assert_eq!(check_semigroup_laws(Max(a), Max(b), Max(c)), Ok(()));
        prop_assert_eq!(check_semigroup_laws(Min(a), Min(b), Min(c)), Ok(()));
        prop_assert_eq!(check_semigroup_laws(First(a), First(b), First(c)), Ok(()));
        prop_assert_eq!(check_semigroup_laws(Last(a), Last(b), Last(c)), Ok(()));
    }

    #[test]
    fn prop_reduce_agrees_with_concat(xs in small_vec()) {
        let sums: Vec<Sum<i32>> = xs.iter().copied().map(Sum).collect();
        prop_assert_eq!(reduce(sums.clone()), Ok(concat(sums)));
    }

    #[test]
    fn prop_reduce_semigroup_nonempty(xs in prop::collection::vec(any::<i32>(), 1..6)) {
        let expected = xs.iter().copied().max().map(Max);
        prop_assert_eq!(reduce(xs.into_iter().map(Max)).ok(), expected);
    }
}

// ============================================================================
// Containers
// ============================================================================

proptest! {
    #[test]
    fn prop_option_laws(fa in any::<Option<i32>>(), x in any::<i32>()) {
        let observe = |o: Option<i32>| o;
        let f = |a: i32| if a % 2 == 0 { Some(a / 2) } else { None };
        let g = |a: i32| Some(inc(a));

        prop_assert_eq!(check_functor_laws::<OptionKind, _, _, _, _, _>(fa, inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<OptionKind, _, _, _>(fa, x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<OptionKind, _, _, _, _, _>(x, fa, f, g, observe), Ok(()));
        prop_assert_eq!(
            check_applicative_composition::<OptionKind, i32, i32, i32, _, _, _, _>(
                Some(triple as fn(i32) -> i32),
                fa.map(|_| inc as fn(i32) -> i32),
                Some(x),
                observe,
            ),
            Ok(())
        );
        prop_assert_eq!(check_fold_map_consistency::<OptionKind, i32, Sum<i32>, _>(fa, Sum), Ok(()));
    }

    #[test]
    fn prop_vec_laws(fa in small_vec(), x in any::<i32>()) {
        let observe = |v: Vec<i32>| v;
        let f = |a: i32| vec![a, inc(a)];
        let g = |a: i32| if a % 3 == 0 { Vec::new() } else { vec![triple(a)] };

        prop_assert_eq!(check_functor_laws::<VecKind, _, _, _, _, _>(fa.clone(), inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<VecKind, _, _, _>(fa.clone(), x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<VecKind, _, _, _, _, _>(x, fa.clone(), f, g, observe), Ok(()));
        prop_assert_eq!(
            check_applicative_composition::<VecKind, i32, i32, i32, _, _, _, _>(
                vec![triple as fn(i32) -> i32, inc],
                vec![inc as fn(i32) -> i32, triple],
                fa.clone(),
                observe,
            ),
            Ok(())
        );
        prop_assert_eq!(
            check_fold_map_consistency::<VecKind, i32, Vec<String>, _>(fa.clone(), |n| vec![n.to_string()]),
            Ok(())
        );
        prop_assert_eq!(
            check_traverse_identity::<VecKind, OptionKind, i32, _, _>(fa, |o: Option<Vec<i32>>| o),
            Ok(())
        );
    }

    #[test]
    fn prop_result_laws(fa in result_strategy(), x in any::<i32>()) {
        let observe = |r: Result<i32, String>| r;
        let f = |a: i32| if a < 0 { Err(format!("negative {a}")) } else { Ok(a / 2) };
        let g = |a: i32| Ok::<i32, String>(triple(a));

        prop_assert_eq!(check_functor_laws::<ResultKind<String>, _, _, _, _, _>(fa.clone(), inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<ResultKind<String>, _, _, _>(fa.clone(), x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<ResultKind<String>, _, _, _, _, _>(x, fa.clone(), f, g, observe), Ok(()));
        prop_assert_eq!(
            check_traverse_identity::<ResultKind<String>, VecKind, i32, _, _>(fa, |v: Vec<Result<i32, String>>| v),
            Ok(())
        );
    }
}

// ============================================================================
// Contexts
// ============================================================================

fn counter(step: i32) -> State<i32, i32> {
    State::new(move |s: i32| (s, s.wrapping_add(step)))
}

fn offset(k: i32) -> Reader<i32, i32> {
    reader_of(move |env: &i32| env.wrapping_add(k))
}

proptest! {
    #[test]
    fn prop_state_laws(step in any::<i32>(), x in any::<i32>(), seed in any::<i32>()) {
        let observe = move |m: State<i32, i32>| m.run(seed);
        let f = |a: i32| State::new(move |s: i32| (a.wrapping_sub(s), s.wrapping_mul(2)));
        let g = |a: i32| State::new(move |s: i32| (s ^ a, a));

        prop_assert_eq!(check_functor_laws::<StateKind<i32>, _, _, _, _, _>(counter(step), inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<StateKind<i32>, _, _, _>(counter(step), x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<StateKind<i32>, _, _, _, _, _>(x, counter(step), f, g, observe), Ok(()));
        prop_assert_eq!(
            check_applicative_composition::<StateKind<i32>, i32, i32, i32, _, _, _, _>(
                counter(step).map(|_| triple as fn(i32) -> i32),
                counter(step).map(|_| inc as fn(i32) -> i32),
                counter(step),
                observe,
            ),
            Ok(())
        );
    }

    #[test]
    fn prop_reader_laws(k in any::<i32>(), x in any::<i32>(), env in any::<i32>()) {
        let observe = move |m: Reader<i32, i32>| m.run(&env);
        let f = |a: i32| reader_of(move |e: &i32| a.wrapping_add(*e));
        let g = |a: i32| reader_of(move |e: &i32| a ^ *e);

        prop_assert_eq!(check_functor_laws::<ReaderKind<i32>, _, _, _, _, _>(offset(k), inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<ReaderKind<i32>, _, _, _>(offset(k), x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<ReaderKind<i32>, _, _, _, _, _>(x, offset(k), f, g, observe), Ok(()));
    }

    #[test]
    fn prop_writer_laws(a in any::<i32>(), log in "[a-z]{0,4}", x in any::<i32>()) {
        let observe = |w: Writer<String, i32>| w.run();
        let m = writer_of(a, log);
        let f = |n: i32| writer_of(triple(n), format!("f{n};"));
        let g = |n: i32| writer_of(inc(n), format!("g{n};"));

        prop_assert_eq!(check_functor_laws::<WriterKind<String>, _, _, _, _, _>(m.clone(), inc, triple, observe), Ok(()));
        prop_assert_eq!(check_applicative_laws::<WriterKind<String>, _, _, _>(m.clone(), x, inc, observe), Ok(()));
        prop_assert_eq!(check_monad_laws::<WriterKind<String>, _, _, _, _, _>(x, m.clone(), f, g, observe), Ok(()));
        prop_assert_eq!(
            check_applicative_composition::<WriterKind<String>, i32, i32, i32, _, _, _, _>(
                writer_of(triple as fn(i32) -> i32, "u".to_string()),
                writer_of(inc as fn(i32) -> i32, "v".to_string()),
                m,
                observe,
            ),
            Ok(())
        );
    }

    #[test]
    fn prop_traverse_effects_left_to_right(xs in small_vec()) {
        let (values, log) = traverse::<WriterKind<Vec<i32>>, _, _, _>(xs.clone(), |x| {
            tell(vec![x]).map(move |_| inc(x))
        })
        .run();

        prop_assert_eq!(values, xs.iter().copied().map(inc).collect::<Vec<_>>());
        prop_assert_eq!(log, xs.clone());

        prop_assert_eq!(
            check_traverse_identity::<VecKind, WriterKind<String>, i32, _, _>(xs, |w: Writer<String, Vec<i32>>| w.run()),
            Ok(())
        );
    }

    #[test]
    fn prop_traverse_threads_state(xs in small_vec(), seed in any::<i32>()) {
        let program = traverse::<StateKind<i32>, _, _, _>(xs.clone(), |x| {
            State::new(move |s: i32| (s, s.wrapping_add(x)))
        });
        let (seen, last) = program.run(seed);

        let mut expected = Vec::new();
        let mut acc = seed;
        for x in &xs {
            expected.push(acc);
            acc = acc.wrapping_add(*x);
        }
        prop_assert_eq!(seen, expected);
        prop_assert_eq!(last, acc);
    }
}
