use std::path::PathBuf;

use crate::{
    core::{Coverage, LoadWarning},
    locale::Locale,
};

#[derive(Debug)]
pub enum CommandSummary {
    Merge(MergeSummary),
    Lookup(LookupSummary),
    Coverage(CoverageSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct MergeSummary {
    pub namespace_count: usize,
    /// Pretty JSON, when the table goes to stdout.
    pub json: Option<String>,
    /// Destination file, when the table was written to disk.
    pub output: Option<PathBuf>,
}

#[derive(Debug)]
pub struct LookupSummary {
    pub namespace: String,
    pub key: String,
    pub locale: Locale,
    pub text: String,
    /// False when the key itself was returned because nothing resolved.
    pub resolved: bool,
    pub fallback: bool,
}

#[derive(Debug)]
pub struct CoverageSummary {
    pub rows: Vec<Coverage>,
    pub strict: bool,
}

impl CoverageSummary {
    pub fn fallback_count(&self) -> usize {
        self.rows.iter().map(|r| r.fallback).sum()
    }

    pub fn incomplete_count(&self) -> usize {
        self.rows.iter().filter(|r| !r.is_complete()).count()
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running trmerge commands
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Non-fatal problems found while loading translation files.
    pub warnings: Vec<LoadWarning>,
    /// Number of translation files read, reference included.
    pub files_loaded: usize,
    /// True when the command found problems worth a failing exit status.
    pub failed: bool,
}

impl CommandResult {
    pub fn new(summary: CommandSummary) -> Self {
        Self {
            summary,
            warnings: Vec::new(),
            files_loaded: 0,
            failed: false,
        }
    }
}
