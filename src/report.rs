//! Hierarchical Report Builder.
//!
//! Produces the two documents that mirror the component tree:
//!
//! * the **architecture description**, giving each leaf's class and hardware
//!   attributes, nested exactly like the tree;
//! * the **action counts**, giving each leaf's accumulated observations.
//!
//! Both are ordered YAML mappings keyed by node name, in child insertion
//! order, and both are pure functions of the tree: building one twice without
//! recording in between yields equal documents.
//!
//! ```text
//! my_design:                       my_design:
//!   PE:                              PE:
//!     mac:                             mac:
//!       class: MAC                       mac_random: {count: 2}
//!       hardware_attributes: {...}       mac_gated: {count: 1}
//!     spad:                            spad:
//!       class: SRAM                      access:
//!       hardware_attributes: {...}       - {count: 1, arguments: [2, 1]}
//! ```
//!
//! An action with arguments always maps to a sequence, even when a single
//! cell is nonzero as for `access` above. A leaf can observe the same action
//! with several argument tuples, and a sequence keeps every one of them under
//! the one action key instead of letting the last tuple win.

use serde_yaml::{Mapping, Number, Value};

use crate::model::{decode, ComponentNode, LeafState, CLASS_KEY, HARDWARE_ATTRIBUTES_KEY};

/// A report document: an ordered mapping of node names to entries.
pub type Document = Mapping;

/// Builds the architecture description rooted at `node`.
///
/// Containers map to the merged entries of their children. Leaves map to
/// `class` and `hardware_attributes`, followed by their children's entries.
pub fn structural_report(node: &ComponentNode) -> Document {
    let mut doc = Mapping::new();
    doc.insert(key(node.name()), Value::Mapping(structural_entry(node)));
    doc
}

/// Builds the action-count report rooted at `node`.
///
/// Only leaves contribute actions. An arity-0 action always appears as
/// `{count: n}`. An action with arguments appears as a sequence holding one
/// `{count, arguments}` observation per nonzero cell, in flat-index order,
/// and is omitted when every cell is zero.
pub fn action_count_report(node: &ComponentNode) -> Document {
    let mut doc = Mapping::new();
    doc.insert(key(node.name()), Value::Mapping(action_count_entry(node)));
    doc
}

fn structural_entry(node: &ComponentNode) -> Mapping {
    let mut entry = Mapping::new();

    if let Some(state) = node.leaf_state() {
        let attributes = state
            .hardware_attributes()
            .iter()
            .map(|(k, v)| (key(k), Value::String(v.clone())))
            .collect();
        entry.insert(key(CLASS_KEY), Value::String(state.class_tag().to_string()));
        entry.insert(key(HARDWARE_ATTRIBUTES_KEY), Value::Mapping(attributes));
    }

    for child in node.children() {
        entry.insert(key(child.name()), Value::Mapping(structural_entry(child)));
    }
    entry
}

fn action_count_entry(node: &ComponentNode) -> Mapping {
    let mut entry = Mapping::new();

    if let Some(state) = node.leaf_state() {
        leaf_action_counts(state, &mut entry);
    }

    for child in node.children() {
        entry.insert(key(child.name()), Value::Mapping(action_count_entry(child)));
    }
    entry
}

fn leaf_action_counts(state: &LeafState, entry: &mut Mapping) {
    let counters = state.counters();

    for (idx, action) in state.schema().actions().iter().enumerate() {
        if action.arity() == 0 {
            let mut observation = Mapping::new();
            observation.insert(key("count"), count(counters.get(idx, 0).unwrap_or(0)));
            entry.insert(key(action.name()), Value::Mapping(observation));
            continue;
        }

        let observations: Vec<Value> = counters
            .nonzero(idx)
            .map(|(cell, n)| {
                let arguments = decode(cell, action.cardinalities())
                    .into_iter()
                    .map(|v| Value::Number(Number::from(v as u64)))
                    .collect();
                let mut observation = Mapping::new();
                observation.insert(key("count"), count(n));
                observation.insert(key("arguments"), Value::Sequence(arguments));
                Value::Mapping(observation)
            })
            .collect();

        if !observations.is_empty() {
            entry.insert(key(action.name()), Value::Sequence(observations));
        }
    }
}

fn key(s: &str) -> Value {
    Value::String(s.to_string())
}

fn count(n: u64) -> Value {
    Value::Number(Number::from(n))
}
