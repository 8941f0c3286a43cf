//! Repository methods on [`PlgDb`](crate::PlgDb), one module per table.

pub mod branch_node;
pub mod context_block;
pub mod decision;
pub mod level;
