//! Processing Element.
//!
//! A PE is a container holding one MAC (`PE_mac`) and one scratchpad memory
//! (`PE_spad`). A job reads two operands from the scratchpad, runs them
//! through the MAC twice and writes the result back.

use tracing::debug;

use super::{require_child, Mac, Memory};
use crate::common::{CountError, Result};
use crate::config::PeConfig;
use crate::model::ComponentNode;

/// Name of the MAC child.
pub const PE_MAC: &str = "PE_mac";

/// Name of the scratchpad child.
pub const PE_SPAD: &str = "PE_spad";

/// Processing element state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pe {
    name: String,
    mac: Mac,
    spad: Memory,
}

impl Pe {
    /// Creates a PE whose scratchpad is `bit_width` wide.
    pub fn new(config: &PeConfig) -> Self {
        Self {
            name: config.name.clone(),
            mac: Mac::new(config.bit_width, config.mac_n_pipe_stage),
            spad: Memory::new(config.bit_width as usize, config.mem_depth, config.nbanks),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn spad(&self) -> &Memory {
        &self.spad
    }

    /// Creates the container node with its MAC and scratchpad leaves.
    pub fn build(&self) -> std::result::Result<ComponentNode, CountError> {
        let mut node = ComponentNode::container(self.name.as_str());
        node.attach_child(self.mac.build(PE_MAC)?)?;
        node.attach_child(self.spad.build(PE_SPAD)?)?;
        Ok(node)
    }

    /// Runs one job on the PE subtree `node`.
    ///
    /// Both operand addresses are checked before anything is recorded.
    ///
    /// # Returns
    ///
    /// The value written back to `op1_addr`.
    pub fn process_job(
        &mut self,
        node: &mut ComponentNode,
        op0_addr: usize,
        op1_addr: usize,
        offset: i64,
    ) -> Result<i64> {
        debug!(pe = %self.name, op0_addr, op1_addr, offset, "processing job");

        let spad = require_child(node, PE_SPAD)?;
        self.spad.check_address(spad, op0_addr)?;
        self.spad.check_address(spad, op1_addr)?;
        let op0 = self.spad.read(spad, op0_addr)?;
        let op1 = self.spad.read(spad, op1_addr)?;

        let mac = require_child(node, PE_MAC)?;
        let step1 = self.mac.calc(mac, op0, op1, offset)?;
        debug!(pe = %self.name, result = step1, "step 1");
        let step2 = self.mac.calc(mac, op0, 0, offset)?;
        debug!(pe = %self.name, result = step2, "step 2");

        let spad = require_child(node, PE_SPAD)?;
        self.spad.write(spad, op1_addr, step2)?;
        Ok(step2)
    }
}
