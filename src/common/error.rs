//! Error Definitions.
//!
//! `CountError` covers contract violations of the component tree and the
//! counting engine. `Error` is the crate-wide error that additionally carries
//! unit-level failures (bad addresses, missing children) and the I/O and
//! serialization failures of report output and configuration loading.

use thiserror::Error as ThisError;

/// Contract violations raised by the component tree and counting engine.
///
/// Every variant is reported synchronously to the caller. None of them leave
/// a counter or the tree partially updated.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum CountError {
    /// Counting was attempted on a container node.
    #[error("InvalidOperation: '{component}' is a container and has no actions")]
    InvalidOperation {
        /// Name of the offending node.
        component: String,
    },

    /// The action name is not part of the leaf's schema.
    #[error("UnknownAction: '{component}' has no action named '{action}'")]
    UnknownAction {
        /// Name of the leaf.
        component: String,
        /// Requested action name.
        action: String,
    },

    /// The number of supplied arguments differs from the action's arity.
    #[error("ArityMismatch: action '{action}' takes {expected} argument(s), got {actual}")]
    ArityMismatch {
        /// Action name.
        action: String,
        /// Declared arity.
        expected: usize,
        /// Number of supplied arguments.
        actual: usize,
    },

    /// An argument value (or a flat index) is outside its declared range.
    #[error("IndexOutOfRange: position {position} of '{action}' is {value}, limit is {limit}")]
    IndexOutOfRange {
        /// Action name.
        action: String,
        /// Argument position, or the arity when a flat index was rejected.
        position: usize,
        /// Supplied value.
        value: usize,
        /// Exclusive upper bound.
        limit: usize,
    },

    /// A sibling with the same name is already attached to the parent.
    #[error("DuplicateName: '{parent}' already has a child named '{name}'")]
    DuplicateName {
        /// Name of the parent node.
        parent: String,
        /// Rejected child name.
        name: String,
    },

    /// A leaf's child would take the report key of one of the leaf's own
    /// fields (`class`, `hardware_attributes` or an action name).
    #[error("ReservedName: leaf '{parent}' already reports a field named '{name}'")]
    ReservedName {
        /// Name of the parent leaf.
        parent: String,
        /// Rejected child name.
        name: String,
    },

    /// Two actions of one schema share a name.
    #[error("DuplicateAction: action '{action}' is declared more than once")]
    DuplicateAction {
        /// Repeated action name.
        action: String,
    },

    /// A cardinality is zero or the table size does not fit in `usize`.
    #[error("InvalidCardinality: action '{action}' has cardinalities {cardinalities:?}")]
    InvalidCardinality {
        /// Action name.
        action: String,
        /// The rejected cardinality vector.
        cardinalities: Vec<usize>,
    },

    /// Adding the delta would overflow the counter cell.
    #[error("CounterOverflow: counter {index} of '{action}' cannot absorb {delta}")]
    CounterOverflow {
        /// Action name.
        action: String,
        /// Flat index of the cell.
        index: usize,
        /// Rejected delta.
        delta: u64,
    },
}

/// Crate-wide error type.
#[derive(Debug, ThisError)]
pub enum Error {
    /// A counting or tree-construction contract was violated.
    #[error(transparent)]
    Count(#[from] CountError),

    /// A memory unit was addressed past its depth.
    #[error("AddressOutOfRange: '{component}' has depth {depth}, address {address} requested")]
    AddressOutOfRange {
        /// Name of the memory component.
        component: String,
        /// Requested address.
        address: usize,
        /// Configured depth.
        depth: usize,
    },

    /// A unit expected a child component that is not in the tree.
    #[error("MissingComponent: '{parent}' has no child named '{name}'")]
    MissingComponent {
        /// Node that was searched.
        parent: String,
        /// Expected child name.
        name: String,
    },

    /// Report or configuration file I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The TOML configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
