//! Design Harness.
//!
//! This module defines the `Design` structure, which owns the root container
//! of an instrumented hierarchy. Top-level components are attached under a
//! root named after the design, so both reports are keyed by the design name.

use tracing::info;

use crate::common::CountError;
use crate::model::ComponentNode;
use crate::report::{action_count_report, structural_report, Document};

/// Top-level container of an instrumented design.
pub struct Design {
    root: ComponentNode,
}

impl Design {
    /// Creates an empty design whose root container is called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let root = ComponentNode::container(name);
        info!(design = %root.name(), "created design");
        Self { root }
    }

    pub fn name(&self) -> &str {
        self.root.name()
    }

    /// Moves a component under the design root.
    ///
    /// # Returns
    ///
    /// `DuplicateName` if another top-level component already uses the name.
    pub fn add_top_level_component(&mut self, component: ComponentNode) -> Result<(), CountError> {
        self.root.attach_child(component)
    }

    pub fn root(&self) -> &ComponentNode {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut ComponentNode {
        &mut self.root
    }

    /// Looks up a component by its path of names below the root.
    pub fn component(&self, path: &[&str]) -> Option<&ComponentNode> {
        self.root.find(path)
    }

    /// Mutable variant of [`Design::component`].
    pub fn component_mut(&mut self, path: &[&str]) -> Option<&mut ComponentNode> {
        self.root.find_mut(path)
    }

    /// Builds the architecture description of the whole design.
    pub fn architecture_description(&self) -> Document {
        structural_report(&self.root)
    }

    /// Builds the action-count report of the whole design.
    pub fn action_counts(&self) -> Document {
        action_count_report(&self.root)
    }
}
