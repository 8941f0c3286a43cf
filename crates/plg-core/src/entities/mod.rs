//! Entity structs for the decision tree.
//!
//! Each entity maps to a table in the libSQL database (see `plg-db`
//! migrations). All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` for JSON output and schema validation.

mod branch_node;
mod context_block;
mod decision;

pub use branch_node::BranchNode;
pub use context_block::ContextBlock;
pub use decision::Decision;
