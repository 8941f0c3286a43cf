use std::io::{BufRead, Write};

use anyhow::{Context, bail};
use plg_core::enums::ContextQuestion;
use plg_core::responses::CollectResponse;
use plg_db::PlgDb;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CollectArgs;
use crate::commands::shared::parse::parse_answers;
use crate::context::AppContext;
use crate::output::output;

/// Text stored on every collected root decision.
pub const ROOT_TEXT: &str = "Initial context collected.";

/// Handle `plg collect`.
pub async fn handle(args: &CollectArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = collect_from_stdin(&ctx.db, &args.answers).await?;
    output(&response, flags.format)
}

/// Fill unanswered questions from stdin, then store the root decision.
pub async fn collect_from_stdin(db: &PlgDb, raw_answers: &[String]) -> anyhow::Result<CollectResponse> {
    let given = parse_answers(raw_answers)?;
    let blocks = ask_off_runtime(given, || (std::io::stdin().lock(), std::io::stderr())).await?;
    store_root(db, &blocks).await
}

/// Run [`ask_missing`] on tokio's blocking pool. `open` builds the reader
/// and prompt writer on that thread.
pub async fn ask_off_runtime<F, R, W>(
    given: Vec<(ContextQuestion, String)>,
    open: F,
) -> anyhow::Result<Vec<(String, String)>>
where
    F: FnOnce() -> (R, W) + Send + 'static,
    R: BufRead,
    W: Write,
{
    tokio::task::spawn_blocking(move || {
        let (mut input, mut prompts) = open();
        ask_missing(&given, &mut input, &mut prompts)
    })
    .await
    .context("question prompt task failed")?
}

/// Answers in question order as `(role, text)` pairs. Questions already in
/// `given` are not asked.
pub fn ask_missing<R, W>(
    given: &[(ContextQuestion, String)],
    input: &mut R,
    prompts: &mut W,
) -> anyhow::Result<Vec<(String, String)>>
where
    R: BufRead,
    W: Write,
{
    let mut blocks = Vec::with_capacity(ContextQuestion::ALL.len());
    for question in ContextQuestion::ALL {
        if let Some((_, answer)) = given.iter().find(|(q, _)| *q == question) {
            blocks.push((question.key().to_string(), answer.clone()));
            continue;
        }

        write!(prompts, "{}\n> ", question.prompt()).context("failed to write prompt")?;
        prompts.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed to read answer from stdin")?;
        if read == 0 {
            bail!("stdin closed before '{}' was answered", question.key());
        }
        blocks.push((question.key().to_string(), line.trim().to_string()));
    }
    Ok(blocks)
}

/// Create the root decision and its context blocks in one transaction.
pub async fn store_root(db: &PlgDb, blocks: &[(String, String)]) -> anyhow::Result<CollectResponse> {
    let (decision, context_blocks) = db
        .create_decision_with_context(ROOT_TEXT, blocks)
        .await
        .context("failed to store collected context")?;
    tracing::info!(decision_id = decision.id, blocks = context_blocks.len(), "context collected");
    Ok(CollectResponse {
        decision,
        context_blocks,
    })
}
