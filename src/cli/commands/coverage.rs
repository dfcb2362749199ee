use anyhow::Result;

use super::helper::LoadContext;
use super::{CommandResult, CommandSummary, CoverageSummary};
use crate::cli::args::CoverageCommand;

pub fn coverage(cmd: CoverageCommand) -> Result<CommandResult> {
    let ctx = LoadContext::new(&cmd.common)?;

    let rows = ctx
        .table
        .coverage()
        .into_iter()
        .filter(|row| {
            if cmd.locales.is_empty() {
                !row.locale.is_reference()
            } else {
                cmd.locales.contains(&row.locale)
            }
        })
        .collect();

    let summary = CoverageSummary {
        rows,
        strict: cmd.strict,
    };
    let failed = summary.strict && summary.fallback_count() > 0;

    let mut result = CommandResult::new(CommandSummary::Coverage(summary));
    result.failed = failed;
    Ok(ctx.finish(result))
}
