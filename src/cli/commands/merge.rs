use std::fs;

use anyhow::{Context, Result, bail};

use super::helper::LoadContext;
use super::{CommandResult, CommandSummary, MergeSummary};
use crate::{cli::args::MergeCommand, core::MergedTable};

pub fn merge(cmd: MergeCommand) -> Result<CommandResult> {
    let ctx = LoadContext::new(&cmd.common)?;

    let narrowed;
    let table: &MergedTable = match &cmd.namespace {
        Some(namespace) => {
            if !ctx.table.contains_namespace(namespace) {
                bail!("Unknown namespace \"{}\"", namespace);
            }
            narrowed = ctx.table.only_namespace(namespace);
            &narrowed
        }
        None => ctx.table.as_ref(),
    };

    let json =
        serde_json::to_string_pretty(table).context("Failed to serialize merged translations")?;
    let namespace_count = table.namespaces().count();

    let summary = match cmd.output {
        Some(output) => {
            fs::write(&output, format!("{}\n", json))
                .with_context(|| format!("Failed to write {}", output.display()))?;
            MergeSummary {
                namespace_count,
                json: None,
                output: Some(output),
            }
        }
        None => MergeSummary {
            namespace_count,
            json: Some(json),
            output: None,
        },
    };

    Ok(ctx.finish(CommandResult::new(CommandSummary::Merge(summary))))
}
