//! Contexts: State, Reader and Writer as composable values
//!
//! Run with: cargo run --example session_contexts
//!
//! This example demonstrates:
//! - Threading a counter through a State chain
//! - Sharing one environment across Reader computations
//! - Accumulating a log with Writer
//! - Generic traverse over any applicative
//! - Reductions and the contract registry

use compositional_algebra::combinators::traverse;
use compositional_algebra::monoid::reduce;
use compositional_algebra::reader::{ask, asks};
use compositional_algebra::state::{gets, modify};
use compositional_algebra::writer::tell;
use compositional_algebra::{
    registry, Contract, ContractRegistry, Max, OptionKind, State, Sum, Writer, WriterKind,
};

struct Tally;

fn label_with_counter(label: String) -> State<i32, String> {
    modify(|n: i32| n + 1).then(gets(move |n: &i32| format!("{label} {n}")))
}

fn halve(n: i32) -> Writer<String, i32> {
    tell(format!("Halving {n}!")).map(move |_| n / 2)
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Contexts ===\n");

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------
    println!("1. State");
    println!("--------");

    let program = State::pure("Hey".to_string())
        .bind(label_with_counter)
        .bind(label_with_counter);

    // Nothing has run yet: `program` is a description
    let (value, state) = program.run(3);
    println!("run(3)  = ({value:?}, {state})");
    println!("run(10) = {:?}", program.run(10));
    println!();

    // -------------------------------------------------------------------------
    // Reader
    // -------------------------------------------------------------------------
    println!("2. Reader");
    println!("---------");

    let greeting = ask().map(|name: String| format!("Hello, {name}!"));
    let length = asks(|name: &String| name.len());
    let both = greeting.zip(length).map(|(g, n)| format!("{g} ({n} letters)"));
    println!("{}", both.eval("adit".to_string()));

    let shouted = both.clone().local(|name: &String| name.to_uppercase());
    println!("{}", shouted.eval("adit".to_string()));
    println!();

    // -------------------------------------------------------------------------
    // Writer
    // -------------------------------------------------------------------------
    println!("3. Writer");
    println!("---------");

    let (value, log) = Writer::pure(10).bind(halve).bind(halve).run();
    println!("value = {value}, log = {log:?}");
    println!();

    // -------------------------------------------------------------------------
    // Traverse
    // -------------------------------------------------------------------------
    println!("4. Traverse");
    println!("-----------");

    let positive = |x: i32| if x > 0 { Some(x) } else { None };
    println!(
        "[1, 2, 3] in Option  = {:?}",
        traverse::<OptionKind, _, _, _>(vec![1, 2, 3], positive)
    );
    println!(
        "[1, -2, 3] in Option = {:?}",
        traverse::<OptionKind, _, _, _>(vec![1, -2, 3], positive)
    );

    let logged = traverse::<WriterKind<Vec<String>>, _, _, _>(vec![1, 2, 3], |x| {
        tell(vec![format!("saw {x}")]).map(move |_| x * x)
    });
    println!("squares in Writer    = {:?}", logged.run());
    println!();

    // -------------------------------------------------------------------------
    // Reductions and Registry
    // -------------------------------------------------------------------------
    println!("5. Reductions and Registry");
    println!("--------------------------");

    println!("reduce([] : Sum) = {:?}", reduce(Vec::<Sum<i32>>::new()));
    match reduce(Vec::<Max<i32>>::new()) {
        Ok(m) => println!("reduce([] : Max) = {m:?} (unexpected!)"),
        Err(e) => println!("reduce([] : Max) failed: {e}"),
    }

    let mut local = ContractRegistry::new();
    if let Err(e) = local.declare::<Tally>(&[Contract::Monoid]) {
        println!("declare Monoid alone: {e}");
    }
    if local
        .declare::<Tally>(&[Contract::Semigroup, Contract::Monoid])
        .is_ok()
    {
        println!("declare Semigroup + Monoid: ok");
    }

    println!("built-in instances: {}", registry().len());
    for name in registry().instances() {
        println!("  {name}");
    }
}
