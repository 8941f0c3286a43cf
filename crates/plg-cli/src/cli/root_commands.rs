use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Ask the context questions and store a new root decision.
    Collect(CollectArgs),
    /// Summarize a decision's context (cached after the first run).
    Summarise(DecisionArgs),
    /// Run one branch-generation round for a decision.
    Branch(BranchArgs),
    /// Tag a decision with risk, growth and emotion labels.
    Annotate(DecisionArgs),
    /// Expand a decision tree breadth-first under the node budget.
    Expand(ExpandArgs),
    /// Write a decision tree to a Markdown or Mermaid file.
    Export(ExportArgs),
    /// Print a decision tree to the terminal.
    Show(DecisionArgs),
    /// List root decisions, newest first.
    List,
    /// Full session: collect, summarise, expand, optionally export.
    Launch(LaunchArgs),
}

/// Arguments for `plg collect`.
#[derive(Clone, Debug, Args)]
pub struct CollectArgs {
    /// Pre-filled answer as `key=value` (e.g. `current_situation=...`).
    /// Questions without an answer are asked on stdin.
    #[arg(short, long = "answer", value_name = "KEY=VALUE")]
    pub answers: Vec<String>,
}

/// Arguments for commands that take a single decision id.
#[derive(Clone, Debug, Args)]
pub struct DecisionArgs {
    /// Decision ID.
    pub id: i64,
}

/// Arguments for `plg branch`.
#[derive(Clone, Debug, Args)]
pub struct BranchArgs {
    /// Decision ID to branch from.
    pub id: i64,
    /// Number of branches to request.
    #[arg(short, long, default_value_t = 3)]
    pub children: u32,
}

/// Arguments for `plg expand`.
#[derive(Clone, Debug, Args)]
pub struct ExpandArgs {
    /// Root decision ID.
    pub id: i64,
    /// Levels to generate (defaults to `general.default_depth`).
    #[arg(short, long)]
    pub depth: Option<u32>,
    /// Branches requested per node (defaults to `general.default_children`).
    #[arg(short, long)]
    pub children: Option<u32>,
}

/// Arguments for `plg export`.
#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Decision ID to start from.
    pub id: i64,
    /// Output file path.
    pub file: String,
    /// File format: markdown or mermaid.
    #[arg(short = 'f', long = "file-format", default_value = "markdown")]
    pub file_format: String,
}

/// Arguments for `plg launch`.
#[derive(Clone, Debug, Args)]
pub struct LaunchArgs {
    /// Levels to generate (defaults to `general.default_depth`).
    #[arg(short, long)]
    pub depth: Option<u32>,
    /// Branches requested per node (defaults to `general.default_children`).
    #[arg(short, long)]
    pub children: Option<u32>,
    /// Export the finished tree into the sessions directory.
    #[arg(short, long, value_name = "FORMAT")]
    pub export: Option<String>,
    /// Pre-filled answer as `key=value`.
    #[arg(short, long = "answer", value_name = "KEY=VALUE")]
    pub answers: Vec<String>,
}
