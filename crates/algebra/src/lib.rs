//! # Algebra - Composable Abstraction Contracts
//!
//! Generic code written once against an abstraction works for every type
//! that conforms to it:
//!
//! - **Monoids**: associative combination with an identity (`monoid`, `newtypes`)
//! - **Functors**: `Functor`, `Applicative`, `Monad` over type families (`functor`)
//! - **Folds**: `Foldable` and `Traversable` containers (`foldable`)
//! - **Instances**: `Option`, `Vec`, `Result` (`containers`)
//! - **Contexts**: deferred `State` and `Reader`, strict `Writer`
//! - **Combinators**: free functions dispatching to any instance (`combinators`)
//! - **Laws**: executable checks of every contract's laws (`laws`)
//! - **Registry**: which contracts each instance declares (`registry`)
//!
//! ## Design Philosophy
//!
//! Contracts are the only interface. A combinator never inspects the
//! concrete type it runs on; it only calls the operations the contract
//! guarantees, and the laws are what make that sound.

pub mod combinators;
pub mod containers;
pub mod error;
pub mod foldable;
pub mod functor;
pub mod laws;
pub mod monoid;
pub mod newtypes;
pub mod reader;
pub mod registry;
pub mod state;
pub mod writer;

// Re-export key types at crate root for convenience
pub use containers::{OptionKind, ResultKind, VecKind};
pub use error::{AlgebraError, Result};
pub use foldable::{Foldable, Traversable};
pub use functor::{Applicative, Functor, Kind, Kinded, Monad};
pub use laws::{LawResult, LawViolation};
pub use monoid::{Monoid, Semigroup};
pub use newtypes::{All, Any, First, Last, Max, Min, Product, Sum};
pub use reader::{Reader, ReaderKind};
pub use registry::{registry, Contract, ContractRegistry};
pub use state::{State, StateKind};
pub use writer::{Writer, WriterKind};
