//! Action count summary.
//!
//! Flattens the counters of a tree into one row per leaf action, totalled
//! over every argument tuple, for printing at the end of a run.

use crate::model::ComponentNode;

/// One summary row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryRow {
    /// Slash-separated path from the summarized root to the leaf.
    pub component: String,
    pub class: String,
    pub action: String,
    /// Sum of all cells of the action's table.
    pub count: u64,
}

/// Per-action totals of a component tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CountSummary {
    rows: Vec<SummaryRow>,
}

impl CountSummary {
    /// Collects one row per action of every leaf below and including `root`,
    /// in tree traversal order.
    pub fn collect(root: &ComponentNode) -> Self {
        let mut rows = Vec::new();
        collect_rows(root, root.name().to_string(), &mut rows);
        Self { rows }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    /// Total of a single leaf action, if present.
    pub fn count(&self, component: &str, action: &str) -> Option<u64> {
        self.rows
            .iter()
            .find(|r| r.component == component && r.action == action)
            .map(|r| r.count)
    }

    /// Sum over all rows.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .fold(0u64, |acc, r| acc.saturating_add(r.count))
    }

    /// Prints a formatted summary of all recorded actions.
    pub fn print(&self) {
        println!("\n==========================================================");
        println!("ACTION COUNT SUMMARY");
        println!("==========================================================");
        println!("{:<28} {:<6} {:<14} {:>8}", "component", "class", "action", "count");
        println!("----------------------------------------------------------");
        for row in &self.rows {
            println!(
                "{:<28} {:<6} {:<14} {:>8}",
                row.component, row.class, row.action, row.count
            );
        }
        println!("----------------------------------------------------------");
        println!("{:<50} {:>8}", "total", self.total());
        println!("==========================================================");
    }
}

fn collect_rows(node: &ComponentNode, path: String, rows: &mut Vec<SummaryRow>) {
    if let Some(state) = node.leaf_state() {
        for (idx, action) in state.schema().actions().iter().enumerate() {
            rows.push(SummaryRow {
                component: path.clone(),
                class: state.class_tag().to_string(),
                action: action.name().to_string(),
                count: state.counters().total(idx),
            });
        }
    }

    for child in node.children() {
        collect_rows(child, format!("{}/{}", path, child.name()), rows);
    }
}
