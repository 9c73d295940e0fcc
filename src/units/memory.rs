//! Banked Memory Unit.
//!
//! A word-addressed memory of fixed depth split into `nbanks` banks, with
//! address `a` living in bank `a % nbanks`. Reads and writes are recorded
//! per bank, so the action-count report shows which banks were used.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::{CountError, Error, Result};
use crate::config::MemoryConfig;
use crate::model::{Action, ActionSchema, ComponentNode};

/// Class tag of memory leaves.
pub const MEMORY_CLASS: &str = "SRAM";

/// Action recorded for every read, argument 0 is the bank.
pub const READ_RANDOM: &str = "read_random";

/// Action recorded for every write, argument 0 is the bank.
pub const WRITE_RANDOM: &str = "write_random";

/// Memory unit parameters and contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Memory {
    width: usize,
    depth: usize,
    nbanks: usize,
    contents: Vec<i64>,
}

impl Memory {
    /// Creates a memory whose word at address `a` initially holds `a % 10`.
    pub fn new(width: usize, depth: usize, nbanks: usize) -> Self {
        let contents = (0..depth).map(|a| (a % 10) as i64).collect();
        Self {
            width,
            depth,
            nbanks,
            contents,
        }
    }

    pub fn from_config(config: &MemoryConfig) -> Self {
        Self::new(config.width, config.depth, config.nbanks)
    }

    /// Actions of a memory with `nbanks` banks.
    ///
    /// Fails with `InvalidCardinality` when `nbanks` is zero.
    pub fn schema(nbanks: usize) -> std::result::Result<ActionSchema, CountError> {
        ActionSchema::new(vec![
            Action::new(READ_RANDOM, vec![nbanks])?,
            Action::new(WRITE_RANDOM, vec![nbanks])?,
        ])
    }

    /// Creates the leaf node describing this unit.
    pub fn build(&self, name: &str) -> std::result::Result<ComponentNode, CountError> {
        let attrs = BTreeMap::from([
            ("width".to_string(), self.width.to_string()),
            ("depth".to_string(), self.depth.to_string()),
            ("nbanks".to_string(), self.nbanks.to_string()),
        ]);
        Ok(ComponentNode::leaf(
            name,
            MEMORY_CLASS,
            attrs,
            Self::schema(self.nbanks)?,
        ))
    }

    /// Overwrites words starting at `address`, without recording any action.
    ///
    /// `node` only names the memory in the `AddressOutOfRange` error raised
    /// when the data would run past the depth.
    pub fn load(&mut self, node: &ComponentNode, address: usize, data: &[i64]) -> Result<()> {
        let end = address.saturating_add(data.len());
        if end > self.depth {
            return Err(Error::AddressOutOfRange {
                component: node.name().to_string(),
                address: end.saturating_sub(1),
                depth: self.depth,
            });
        }
        self.contents[address..end].copy_from_slice(data);
        Ok(())
    }

    /// Fails with `AddressOutOfRange` if `address` is past the depth.
    pub fn check_address(&self, node: &ComponentNode, address: usize) -> Result<()> {
        if address >= self.depth {
            return Err(Error::AddressOutOfRange {
                component: node.name().to_string(),
                address,
                depth: self.depth,
            });
        }
        Ok(())
    }

    /// Reads one word and records `read_random` on its bank.
    pub fn read(&self, node: &mut ComponentNode, address: usize) -> Result<i64> {
        self.check_address(node, address)?;
        node.count(READ_RANDOM, &[self.bank(address)])?;
        debug!(component = %node.name(), address, "memory read");
        Ok(self.contents[address])
    }

    /// Writes one word and records `write_random` on its bank.
    pub fn write(&mut self, node: &mut ComponentNode, address: usize, data: i64) -> Result<()> {
        self.check_address(node, address)?;
        node.count(WRITE_RANDOM, &[self.bank(address)])?;
        debug!(component = %node.name(), address, data, "memory write");
        self.contents[address] = data;
        Ok(())
    }

    /// Word at `address`, without recording any action.
    pub fn peek(&self, address: usize) -> Option<i64> {
        self.contents.get(address).copied()
    }

    fn bank(&self, address: usize) -> usize {
        address % self.nbanks.max(1)
    }
}
