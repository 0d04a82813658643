//! # Error Types
//!
//! Only misuse that can be detected at call time is an error here:
//! reducing an empty input without an identity element, and declaring an
//! instance for a derived contract without the contracts it extends.
//!
//! Law violations are not errors here. A `combine` that is not
//! associative produces wrong answers silently; the harness in
//! [`crate::laws`] is the only place such defects surface.

use thiserror::Error;

use crate::registry::Contract;

/// Errors raised by the algebra library.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlgebraError {
    /// A reduction over empty input found no identity to fall back on.
    #[error("{operation}: empty input for {instance}, which has no identity element")]
    EmptyInput {
        operation: &'static str,
        instance: &'static str,
    },

    /// An instance was declared for a contract without one of its prerequisites.
    #[error("{operation}: {instance} cannot be declared {contract}: missing prerequisite {missing}")]
    CapabilityConstraint {
        operation: &'static str,
        instance: String,
        contract: Contract,
        missing: Contract,
    },

    /// A registry lookup required a contract the instance never declared.
    #[error("{instance} does not satisfy {contract}")]
    ContractNotSatisfied { instance: String, contract: Contract },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AlgebraError>;
