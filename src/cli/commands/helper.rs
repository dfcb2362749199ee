use std::{env, sync::Arc};

use anyhow::{Context, Result};

use super::CommandResult;
use crate::{
    cli::args::CommonArgs,
    config::{Config, load_config},
    core::{LoadedSources, MergedTable, load_sources},
};

/// Configuration and merged translations shared by every loading command.
pub struct LoadContext {
    pub config: Config,
    pub sources: LoadedSources,
    pub table: Arc<MergedTable>,
}

impl LoadContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let start_dir = match &common.root {
            Some(root) => root.clone(),
            None => env::current_dir().context("Failed to determine current directory")?,
        };

        let loaded = load_config(&start_dir)?;
        let mut config = loaded.config;
        if let Some(reference) = &common.reference {
            config.reference = reference.clone();
        }

        let sources = load_sources(&loaded.root, &config)?;
        let table = Arc::new(sources.merge());

        Ok(Self {
            config,
            sources,
            table,
        })
    }

    /// Attach load statistics to a command result.
    pub fn finish(self, mut result: CommandResult) -> CommandResult {
        result.files_loaded = self.sources.files_loaded;
        result.warnings = self.sources.warnings;
        result
    }
}
