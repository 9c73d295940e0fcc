//! Example Hardware Units.
//!
//! Leaf behaviors that drive the counting API from their own domain
//! operations. Each unit keeps its functional state to itself and records
//! actions on the tree node it is handed, so the tree stays the sole owner
//! of every component.

/// Multiply-accumulate unit.
pub mod mac;

/// Banked memory.
pub mod memory;

/// Processing element built from a MAC and a scratchpad.
pub mod pe;

pub use mac::Mac;
pub use memory::Memory;
pub use pe::Pe;

use crate::common::{Error, Result};
use crate::model::ComponentNode;

/// Borrows the child `name` of `node`, failing with `MissingComponent`.
pub(crate) fn require_child<'a>(
    node: &'a mut ComponentNode,
    name: &str,
) -> Result<&'a mut ComponentNode> {
    let parent = node.name().to_string();
    node.child_mut(name).ok_or_else(|| Error::MissingComponent {
        parent,
        name: name.to_string(),
    })
}
