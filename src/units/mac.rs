//! Multiply-Accumulate Unit.
//!
//! Computes `a * b + c` at a fixed bit width. A multiplication with a zero
//! operand is gated: the unit passes the addend through and records
//! `mac_gated` instead of `mac_random`.

use std::collections::BTreeMap;

use tracing::debug;

use crate::common::CountError;
use crate::model::{ActionSchema, ComponentNode};

/// Class tag of MAC leaves.
pub const MAC_CLASS: &str = "MAC";

/// Action recorded for an ungated multiply-accumulate.
pub const MAC_RANDOM: &str = "mac_random";

/// Action recorded when an operand is zero.
pub const MAC_GATED: &str = "mac_gated";

/// Multiply-accumulate unit parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mac {
    bit_width: u32,
    n_pipe_stage: u32,
}

impl Mac {
    pub fn new(bit_width: u32, n_pipe_stage: u32) -> Self {
        Self {
            bit_width,
            n_pipe_stage,
        }
    }

    /// Actions of every MAC leaf.
    pub fn schema() -> Result<ActionSchema, CountError> {
        ActionSchema::simple([MAC_RANDOM, MAC_GATED])
    }

    /// Creates the leaf node describing this unit.
    pub fn build(&self, name: &str) -> Result<ComponentNode, CountError> {
        let attrs = BTreeMap::from([
            ("bit_width".to_string(), self.bit_width.to_string()),
            ("n_pipe_stage".to_string(), self.n_pipe_stage.to_string()),
        ]);
        Ok(ComponentNode::leaf(name, MAC_CLASS, attrs, Self::schema()?))
    }

    /// Performs one multiply-accumulate and records it on `node`.
    ///
    /// # Returns
    ///
    /// The result truncated to `bit_width` bits and sign-extended back.
    pub fn calc(
        &self,
        node: &mut ComponentNode,
        mult0: i64,
        mult1: i64,
        add: i64,
    ) -> Result<i64, CountError> {
        if mult0 != 0 && mult1 != 0 {
            node.count(MAC_RANDOM, &[])?;
            Ok(self.truncate(mult0.wrapping_mul(mult1).wrapping_add(add)))
        } else {
            debug!(component = %node.name(), "mac gated");
            node.count(MAC_GATED, &[])?;
            Ok(self.truncate(add))
        }
    }

    fn truncate(&self, value: i64) -> i64 {
        if self.bit_width == 0 || self.bit_width >= 64 {
            return value;
        }
        let shift = 64 - self.bit_width;
        (value << shift) >> shift
    }
}
