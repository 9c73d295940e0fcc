//! Component Tree Nodes.
//!
//! A `ComponentNode` is either a container, used purely for grouping, or a
//! leaf that carries an action schema and its counters. Leaf-ness is
//! independent of whether a node has children: leaves may own children too.
//!
//! Children are owned exclusively by their parent. `attach_child` moves the
//! child into the tree, so once attached a node is only reachable through its
//! parent.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::counters::{checked_flatten, CounterTable};
use super::schema::ActionSchema;
use crate::common::CountError;

/// Report key of a leaf's class tag.
pub const CLASS_KEY: &str = "class";
/// Report key of a leaf's hardware attributes.
pub const HARDWARE_ATTRIBUTES_KEY: &str = "hardware_attributes";

/// Hardware attributes of a leaf, ordered by key.
pub type HardwareAttributes = BTreeMap<String, String>;

/// Instrumentation state owned by a leaf node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeafState {
    class_tag: String,
    hardware_attributes: HardwareAttributes,
    schema: ActionSchema,
    counters: CounterTable,
}

impl LeafState {
    pub fn class_tag(&self) -> &str {
        &self.class_tag
    }

    pub fn hardware_attributes(&self) -> &HardwareAttributes {
        &self.hardware_attributes
    }

    pub fn schema(&self) -> &ActionSchema {
        &self.schema
    }

    pub fn counters(&self) -> &CounterTable {
        &self.counters
    }

    /// Whether `name` is already a key of this leaf's own report entries.
    fn reports_key(&self, name: &str) -> bool {
        name == CLASS_KEY || name == HARDWARE_ATTRIBUTES_KEY || self.schema.get(name).is_some()
    }
}

/// Kind of a tree node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeKind {
    /// Grouping node without actions.
    Container,
    /// Instrumentable node.
    Leaf(LeafState),
}

/// A node of the component hierarchy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComponentNode {
    name: String,
    kind: NodeKind,
    children: Vec<ComponentNode>,
}

impl ComponentNode {
    /// Creates a leaf with every counter zeroed.
    ///
    /// # Arguments
    ///
    /// * `name` - Node name, unique among its siblings.
    /// * `class_tag` - Component class reported in the architecture description.
    /// * `hardware_attributes` - Attribute map reported next to the class.
    /// * `schema` - Actions this leaf can record.
    pub fn leaf(
        name: impl Into<String>,
        class_tag: impl Into<String>,
        hardware_attributes: HardwareAttributes,
        schema: ActionSchema,
    ) -> Self {
        let name = name.into();
        let counters = CounterTable::new(&schema);
        debug!(
            component = %name,
            actions = schema.len(),
            "created leaf component"
        );
        Self {
            name,
            kind: NodeKind::Leaf(LeafState {
                class_tag: class_tag.into(),
                hardware_attributes,
                schema,
                counters,
            }),
            children: Vec::new(),
        }
    }

    /// Creates a container with no schema and no children.
    pub fn container(name: impl Into<String>) -> Self {
        let name = name.into();
        debug!(component = %name, "created container component");
        Self {
            name,
            kind: NodeKind::Container,
            children: Vec::new(),
        }
    }

    /// Moves `child` to the end of this node's children.
    ///
    /// Fails with `DuplicateName` if a direct child already uses the same
    /// name, and with `ReservedName` if this node is a leaf and the name is
    /// `class`, `hardware_attributes` or one of its action names. On error
    /// the rejected child is dropped and this node is unchanged.
    pub fn attach_child(&mut self, child: ComponentNode) -> Result<(), CountError> {
        if self.child(&child.name).is_some() {
            return Err(CountError::DuplicateName {
                parent: self.name.clone(),
                name: child.name,
            });
        }
        if let NodeKind::Leaf(state) = &self.kind {
            if state.reports_key(&child.name) {
                return Err(CountError::ReservedName {
                    parent: self.name.clone(),
                    name: child.name,
                });
            }
        }
        debug!(parent = %self.name, child = %child.name, "attached component");
        self.children.push(child);
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Leaf state, or `None` for containers.
    pub fn leaf_state(&self) -> Option<&LeafState> {
        match &self.kind {
            NodeKind::Leaf(state) => Some(state),
            NodeKind::Container => None,
        }
    }

    /// Children in insertion order.
    pub fn children(&self) -> &[ComponentNode] {
        &self.children
    }

    pub fn child(&self, name: &str) -> Option<&ComponentNode> {
        self.children.iter().find(|c| c.name == name)
    }

    pub fn child_mut(&mut self, name: &str) -> Option<&mut ComponentNode> {
        self.children.iter_mut().find(|c| c.name == name)
    }

    /// Follows a path of child names below this node.
    ///
    /// An empty path returns this node.
    pub fn find(&self, path: &[&str]) -> Option<&ComponentNode> {
        path.iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Mutable variant of [`ComponentNode::find`].
    pub fn find_mut(&mut self, path: &[&str]) -> Option<&mut ComponentNode> {
        path.iter()
            .try_fold(self, |node, name| node.child_mut(name))
    }

    pub fn class_tag(&self) -> Option<&str> {
        self.leaf_state().map(LeafState::class_tag)
    }

    pub fn hardware_attributes(&self) -> Option<&HardwareAttributes> {
        self.leaf_state().map(LeafState::hardware_attributes)
    }

    pub fn schema(&self) -> Option<&ActionSchema> {
        self.leaf_state().map(LeafState::schema)
    }

    pub fn counters(&self) -> Option<&CounterTable> {
        self.leaf_state().map(LeafState::counters)
    }

    /// Adds `delta` to the counter of `action` at `arg_values`.
    ///
    /// # Returns
    ///
    /// * `InvalidOperation` if this node is a container.
    /// * `UnknownAction` if the schema has no such action.
    /// * `ArityMismatch` / `IndexOutOfRange` for a malformed argument tuple.
    /// * `CounterOverflow` if the cell cannot absorb `delta`.
    ///
    /// No counter changes when an error is returned.
    pub fn record(
        &mut self,
        action: &str,
        arg_values: &[usize],
        delta: u64,
    ) -> Result<(), CountError> {
        let state = match &mut self.kind {
            NodeKind::Leaf(state) => state,
            NodeKind::Container => {
                return Err(CountError::InvalidOperation {
                    component: self.name.clone(),
                })
            }
        };

        let (action_idx, spec) =
            state
                .schema
                .position(action)
                .ok_or_else(|| CountError::UnknownAction {
                    component: self.name.clone(),
                    action: action.to_string(),
                })?;
        let index = checked_flatten(spec, arg_values)?;
        let value = state.counters.add(spec, action_idx, index, delta)?;

        trace!(
            component = %self.name,
            action,
            index,
            value,
            "recorded action"
        );
        Ok(())
    }

    /// Records a single occurrence of `action`.
    pub fn count(&mut self, action: &str, arg_values: &[usize]) -> Result<(), CountError> {
        self.record(action, arg_values, 1)
    }

    /// Current counter of `action` at `arg_values`, with the same validation
    /// as [`ComponentNode::record`].
    pub fn counter_value(&self, action: &str, arg_values: &[usize]) -> Result<u64, CountError> {
        let state = self.leaf_state().ok_or_else(|| CountError::InvalidOperation {
            component: self.name.clone(),
        })?;
        let (action_idx, spec) =
            state
                .schema
                .position(action)
                .ok_or_else(|| CountError::UnknownAction {
                    component: self.name.clone(),
                    action: action.to_string(),
                })?;
        let index = checked_flatten(spec, arg_values)?;
        Ok(state.counters.get(action_idx, index).unwrap_or_default())
    }
}
