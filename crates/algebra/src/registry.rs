//! # Contract Registry
//!
//! Rust checks trait implementations at compile time, but nothing stops a
//! library from *claiming* a derived contract in its documentation or
//! metadata without satisfying the ones it extends. The registry records,
//! per instance, which contracts it claims, and refuses a claim whose
//! prerequisites are missing:
//!
//! ```text
//! Monoid       requires Semigroup
//! Applicative  requires Functor
//! Monad        requires Applicative
//! Traversable  requires Functor + Foldable
//! ```
//!
//! Instances are keyed by type constructor (`Sum`, not `Sum<i32>`), so one
//! declaration covers every instantiation. Structural types keep their
//! shape: `(Sum<i32>, String)` is keyed as `(Sum, String)`.
//!
//! [`registry()`] is the process-wide, read-only registry of this crate's
//! own instances. It is built once, on first access.

use std::any::type_name;
use std::borrow::Cow;
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{AlgebraError, Result};

// ============================================================================
// Contracts
// ============================================================================

/// The capability contracts an instance can claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Contract {
    Semigroup,
    Monoid,
    Functor,
    Applicative,
    Monad,
    Foldable,
    Traversable,
}

impl Contract {
    /// Every contract, in hierarchy order.
    pub const ALL: [Contract; 7] = [
        Contract::Semigroup,
        Contract::Monoid,
        Contract::Functor,
        Contract::Applicative,
        Contract::Monad,
        Contract::Foldable,
        Contract::Traversable,
    ];

    /// Contracts this one directly extends.
    pub fn prerequisites(self) -> &'static [Contract] {
        match self {
            Contract::Semigroup | Contract::Functor | Contract::Foldable => &[],
            Contract::Monoid => &[Contract::Semigroup],
            Contract::Applicative => &[Contract::Functor],
            Contract::Monad => &[Contract::Applicative],
            Contract::Traversable => &[Contract::Functor, Contract::Foldable],
        }
    }

    /// Human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Contract::Semigroup => "Semigroup",
            Contract::Monoid => "Monoid",
            Contract::Functor => "Functor",
            Contract::Applicative => "Applicative",
            Contract::Monad => "Monad",
            Contract::Foldable => "Foldable",
            Contract::Traversable => "Traversable",
        }
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `T`'s name with every generic argument list removed, at any nesting
/// depth: `a::Sum<i32>` becomes `a::Sum`, and `(a::Sum<u8>, b::Bag)`
/// becomes `(a::Sum, b::Bag)`.
pub fn instance_name<T: ?Sized>() -> Cow<'static, str> {
    let full = type_name::<T>();
    if !full.contains('<') {
        return Cow::Borrowed(full);
    }

    let mut name = String::with_capacity(full.len());
    let mut depth = 0usize;
    let mut prev = '\0';
    for c in full.chars() {
        match c {
            '<' => depth += 1,
            // `->` in `fn(A) -> B` is not a closing bracket.
            '>' if prev != '-' && depth > 0 => depth -= 1,
            _ if depth == 0 => name.push(c),
            _ => {}
        }
        prev = c;
    }
    Cow::Owned(name)
}

/// Returns the first contract in `contracts` whose prerequisites are not all present.
fn first_gap(contracts: &BTreeSet<Contract>) -> Option<(Contract, Contract)> {
    contracts.iter().find_map(|&contract| {
        contract
            .prerequisites()
            .iter()
            .find(|p| !contracts.contains(*p))
            .map(|&missing| (contract, missing))
    })
}

// ============================================================================
// ContractRegistry
// ============================================================================

/// Instance → claimed contracts.
#[derive(Debug, Clone, Default)]
pub struct ContractRegistry {
    instances: HashMap<Cow<'static, str>, BTreeSet<Contract>>,
}

impl ContractRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
        }
    }

    /// Declare that `T` satisfies `contracts`.
    ///
    /// Declarations accumulate: earlier claims for the same instance count
    /// towards prerequisites. A claim with a missing prerequisite is rejected
    /// as a whole and leaves the registry unchanged.
    pub fn declare<T: ?Sized>(&mut self, contracts: &[Contract]) -> Result<&mut Self> {
        self.declare_named(instance_name::<T>(), contracts)
    }

    /// Like [`ContractRegistry::declare`], for an instance named at runtime.
    pub fn declare_named(
        &mut self,
        instance: impl Into<Cow<'static, str>>,
        contracts: &[Contract],
    ) -> Result<&mut Self> {
        let instance = instance.into();
        let mut merged = self.instances.get(&*instance).cloned().unwrap_or_default();
        merged.extend(contracts.iter().copied());

        if let Some((contract, missing)) = first_gap(&merged) {
            tracing::warn!(
                instance = %instance,
                contract = %contract,
                missing = %missing,
                "rejected contract declaration"
            );
            return Err(AlgebraError::CapabilityConstraint {
                operation: "declare",
                instance: instance.into_owned(),
                contract,
                missing,
            });
        }

        tracing::debug!(instance = %instance, contracts = ?merged, "declared instance");
        self.instances.insert(instance, merged);
        Ok(self)
    }

    /// Check whether `T` has claimed `contract`.
    pub fn satisfies<T: ?Sized>(&self, contract: Contract) -> bool {
        self.instances
            .get(&*instance_name::<T>())
            .is_some_and(|set| set.contains(&contract))
    }

    /// Contracts claimed by `T`, in hierarchy order.
    pub fn contracts_of<T: ?Sized>(&self) -> Vec<Contract> {
        self.instances
            .get(&*instance_name::<T>())
            .map(|set| set.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Fail unless `T` has claimed `contract`.
    pub fn require<T: ?Sized>(&self, contract: Contract) -> Result<()> {
        if self.satisfies::<T>(contract) {
            Ok(())
        } else {
            Err(AlgebraError::ContractNotSatisfied {
                instance: instance_name::<T>().into_owned(),
                contract,
            })
        }
    }

    /// Check every recorded instance against the prerequisite rules.
    pub fn validate(&self) -> Result<()> {
        for (instance, contracts) in &self.instances {
            if let Some((contract, missing)) = first_gap(contracts) {
                return Err(AlgebraError::CapabilityConstraint {
                    operation: "validate",
                    instance: instance.to_string(),
                    contract,
                    missing,
                });
            }
        }
        Ok(())
    }

    /// Merge two registries; claims for the same instance are unioned.
    pub fn merge(mut self, other: Self) -> Self {
        for (instance, contracts) in other.instances {
            self.instances.entry(instance).or_default().extend(contracts);
        }
        self
    }

    /// Names of every registered instance.
    pub fn instances(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.instances.keys().map(|name| &**name).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Check if no instance is registered.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Record without validation. Only for the built-in table.
    fn record<T: ?Sized>(&mut self, contracts: &[Contract]) -> &mut Self {
        self.instances
            .entry(instance_name::<T>())
            .or_default()
            .extend(contracts.iter().copied());
        self
    }
}

// ============================================================================
// Built-in Registry
// ============================================================================

const MONOID: &[Contract] = &[Contract::Semigroup, Contract::Monoid];
const MONAD: &[Contract] = &[Contract::Functor, Contract::Applicative, Contract::Monad];
const CONTAINER: &[Contract] = &[
    Contract::Functor,
    Contract::Applicative,
    Contract::Monad,
    Contract::Foldable,
    Contract::Traversable,
];

fn builtin() -> ContractRegistry {
    use crate::containers::{OptionKind, ResultKind, VecKind};
    use crate::newtypes::{All, Any, First, Last, Max, Min, Product, Sum};
    use crate::reader::ReaderKind;
    use crate::state::StateKind;
    use crate::writer::WriterKind;

    let mut registry = ContractRegistry::new();
    registry
        .record::<String>(MONOID)
        .record::<Vec<()>>(MONOID)
        .record::<Option<()>>(MONOID)
        .record::<()>(MONOID)
        .record::<Sum<i32>>(MONOID)
        .record::<Product<i32>>(MONOID)
        .record::<All>(MONOID)
        .record::<Any>(MONOID)
        .record::<Max<i32>>(&[Contract::Semigroup])
        .record::<Min<i32>>(&[Contract::Semigroup])
        .record::<First<()>>(&[Contract::Semigroup])
        .record::<Last<()>>(&[Contract::Semigroup])
        .record::<OptionKind>(CONTAINER)
        .record::<VecKind>(CONTAINER)
        .record::<ResultKind<()>>(CONTAINER)
        .record::<StateKind<()>>(MONAD)
        .record::<ReaderKind<()>>(MONAD)
        .record::<WriterKind<()>>(MONAD);
    registry
}

/// The read-only registry of this crate's instances.
pub fn registry() -> &'static ContractRegistry {
    static REGISTRY: OnceLock<ContractRegistry> = OnceLock::new();
    REGISTRY.get_or_init(builtin)
}
