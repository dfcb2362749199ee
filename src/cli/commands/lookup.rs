use anyhow::Result;

use super::helper::LoadContext;
use super::{CommandResult, CommandSummary, LookupSummary};
use crate::{
    cli::args::LookupCommand,
    core::{EnvLocale, Translator},
};

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let ctx = LoadContext::new(&cmd.common)?;
    let translator = Translator::new(
        ctx.table.clone(),
        EnvLocale::new(&ctx.config.locale_env),
    );

    let locale = cmd.locale.unwrap_or_else(|| translator.current_locale());
    let text = translator.tr_in(&cmd.namespace, &cmd.key, locale).to_string();
    let resolved = translator
        .table()
        .get(&cmd.namespace, locale, &cmd.key)
        .is_some();
    let fallback = translator
        .table()
        .is_fallback(&cmd.namespace, locale, &cmd.key);

    let summary = LookupSummary {
        namespace: cmd.namespace,
        key: cmd.key,
        locale,
        text,
        resolved,
        fallback,
    };

    Ok(ctx.finish(CommandResult::new(CommandSummary::Lookup(summary))))
}
