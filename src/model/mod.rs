//! Component Tree and Action Counting.
//!
//! The hierarchy is built once from containers and leaves, then only leaf
//! counters change while a simulation runs.

/// Mixed-radix counter tables.
pub mod counters;

/// Tree nodes and the counting API.
pub mod node;

/// Action declarations.
pub mod schema;

pub use counters::{checked_decode, checked_flatten, decode, flatten, CounterTable};
pub use node::{
    ComponentNode, HardwareAttributes, LeafState, NodeKind, CLASS_KEY, HARDWARE_ATTRIBUTES_KEY,
};
pub use schema::{Action, ActionSchema};
