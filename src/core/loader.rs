//! Reading translation bundles from disk.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use serde_json::{Map, Value};

use super::{
    bundle::TranslationBundle,
    merge::{combine_bundles, merge_translations},
    table::MergedTable,
};
use crate::{config::Config, locale::Locale};

/// A non-fatal problem found while loading sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadWarning {
    pub file_path: String,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ParsedBundle {
    pub bundle: TranslationBundle,
    pub warnings: Vec<LoadWarning>,
}

/// Everything read for one merge: the reference and each locale's combined bundle.
#[derive(Debug, Default)]
pub struct LoadedSources {
    pub english: TranslationBundle,
    pub locales: BTreeMap<Locale, TranslationBundle>,
    pub files_loaded: usize,
    pub warnings: Vec<LoadWarning>,
}

impl LoadedSources {
    pub fn merge(&self) -> MergedTable {
        merge_translations(&self.english, &self.locales)
    }
}

pub fn parse_bundle_file(path: &Path) -> Result<ParsedBundle> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let file_path = path.to_string_lossy().to_string();
    parse_bundle_str(&content, &file_path)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))
}

/// Parse a bundle document `{ namespace: { locale: { key: text } } }`.
///
/// Objects nested below the locale level are flattened into dotted keys.
/// Non-string leaves are skipped with a warning.
pub fn parse_bundle_str(content: &str, file_path: &str) -> Result<ParsedBundle> {
    let json: Value = serde_json::from_str(content)?;
    let Value::Object(namespaces) = json else {
        bail!("expected a JSON object of namespaces at the top level");
    };

    let mut parsed = ParsedBundle::default();
    for (namespace, locales) in &namespaces {
        let Value::Object(locales) = locales else {
            bail!("namespace \"{}\" must map locales to messages", namespace);
        };
        for (locale, messages) in locales {
            let Value::Object(messages) = messages else {
                bail!(
                    "messages for \"{}\" in namespace \"{}\" must be an object",
                    locale,
                    namespace
                );
            };
            let mut scope = Scope {
                namespace,
                locale,
                file_path,
                parsed: &mut parsed,
            };
            scope.flatten(messages, "");
        }
    }

    Ok(parsed)
}

struct Scope<'a> {
    namespace: &'a str,
    locale: &'a str,
    file_path: &'a str,
    parsed: &'a mut ParsedBundle,
}

impl Scope<'_> {
    fn flatten(&mut self, map: &Map<String, Value>, prefix: &str) {
        for (key, value) in map {
            let full_key = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match value {
                Value::String(text) => {
                    let duplicate = self
                        .parsed
                        .bundle
                        .messages(self.namespace, self.locale)
                        .is_some_and(|messages| messages.contains_key(&full_key));
                    if duplicate {
                        self.warn(format!(
                            "duplicate key \"{}\" in {}/{} (nested and dotted forms); keeping the later value",
                            full_key, self.namespace, self.locale
                        ));
                    }
                    self.parsed
                        .bundle
                        .insert(self.namespace, self.locale, &full_key, text);
                }
                Value::Object(nested) => self.flatten(nested, &full_key),
                other => self.warn(format!(
                    "skipped non-string value for \"{}\" in {}/{} ({})",
                    full_key,
                    self.namespace,
                    self.locale,
                    value_kind(other)
                )),
            }
        }
    }

    fn warn(&mut self, message: String) {
        self.parsed.warnings.push(LoadWarning {
            file_path: self.file_path.to_string(),
            message,
        });
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::Array(_) => "array",
        Value::String(_) => "string",
        Value::Object(_) => "object",
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Resolve source patterns against `root`, keeping the listed order.
///
/// Literal paths must exist. Glob matches are sorted; a glob matching
/// nothing produces a warning rather than an error.
pub fn expand_sources(
    root: &Path,
    patterns: &[String],
) -> Result<(Vec<PathBuf>, Vec<LoadWarning>)> {
    let mut files = Vec::new();
    let mut warnings = Vec::new();

    for pattern in patterns {
        let joined = root.join(pattern);
        if !is_glob(pattern) {
            if !joined.is_file() {
                bail!("Translation file '{}' does not exist.", joined.display());
            }
            files.push(joined);
            continue;
        }

        // Only the pattern part may carry glob syntax; the root is matched literally.
        let escaped_root = Pattern::escape(&root.to_string_lossy());
        let full_pattern = Path::new(&escaped_root)
            .join(pattern)
            .to_string_lossy()
            .to_string();
        let mut matches: Vec<PathBuf> = glob::glob(&full_pattern)
            .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?
            .filter_map(|entry| entry.ok())
            .filter(|path| path.is_file())
            .collect();
        matches.sort();

        if matches.is_empty() {
            warnings.push(LoadWarning {
                file_path: joined.to_string_lossy().to_string(),
                message: "pattern matched no files".to_string(),
            });
        }
        files.extend(matches);
    }

    Ok((files, warnings))
}

/// Load the reference bundle and every configured locale's sources.
///
/// Files are parsed in parallel and combined in declared order.
pub fn load_sources(root: &Path, config: &Config) -> Result<LoadedSources> {
    let reference = root.join(&config.reference);
    if !reference.is_file() {
        bail!(
            "Reference translation file '{}' does not exist.\n\
             Hint: Check your {} 'reference' setting.",
            reference.display(),
            crate::config::CONFIG_FILE_NAME
        );
    }

    let mut warnings = Vec::new();
    let mut jobs: Vec<(Option<Locale>, PathBuf)> = vec![(None, reference)];
    for (locale, patterns) in config.locale_sources()? {
        let (files, expand_warnings) = expand_sources(root, patterns)?;
        warnings.extend(expand_warnings);
        jobs.extend(files.into_iter().map(|path| (Some(locale), path)));
    }

    let parsed: Vec<(Option<Locale>, ParsedBundle)> = jobs
        .par_iter()
        .map(|(locale, path)| parse_bundle_file(path).map(|p| (*locale, p)))
        .collect::<Result<_>>()?;

    let mut sources = LoadedSources {
        files_loaded: parsed.len(),
        ..Default::default()
    };
    let mut parts: BTreeMap<Locale, Vec<TranslationBundle>> = BTreeMap::new();

    for (locale, bundle) in parsed {
        warnings.extend(bundle.warnings);
        match locale {
            None => sources.english = bundle.bundle,
            Some(locale) => parts.entry(locale).or_default().push(bundle.bundle),
        }
    }

    sources.locales = parts
        .into_iter()
        .map(|(locale, bundles)| (locale, combine_bundles(&bundles, config.combine)))
        .collect();
    sources.warnings = warnings;

    Ok(sources)
}
