//! Combining partial bundles and building the fallback-merged table.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::{
    bundle::{Messages, TranslationBundle},
    table::MergedTable,
};
use crate::locale::Locale;

/// How the partial bundles of one locale are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineMode {
    /// Later bundles override earlier ones key by key.
    #[default]
    Keys,
    /// A later bundle's namespace replaces the earlier namespace entry whole.
    Namespaces,
}

/// Combine one locale's partial bundles in order, later bundles winning.
pub fn combine_bundles<'a, I>(bundles: I, mode: CombineMode) -> TranslationBundle
where
    I: IntoIterator<Item = &'a TranslationBundle>,
{
    let mut combined = TranslationBundle::new();
    for bundle in bundles {
        match mode {
            CombineMode::Keys => combined.overlay_keys(bundle),
            CombineMode::Namespaces => combined.overlay_namespaces(bundle),
        }
    }
    combined
}

/// Build the merged table from the English reference and each locale's
/// combined bundle.
///
/// The output covers the union of namespaces across all inputs. For every
/// namespace, `en` is exactly the English keys (or empty) and each other
/// locale is the English keys overlaid by that locale's own keys. Locales
/// missing from `locales` resolve entirely through English.
pub fn merge_translations(
    english: &TranslationBundle,
    locales: &BTreeMap<Locale, TranslationBundle>,
) -> MergedTable {
    let all_namespaces: BTreeSet<&str> = english
        .namespaces()
        .chain(locales.values().flat_map(|b| b.namespaces()))
        .collect();

    let empty = Messages::new();
    let mut merged = MergedTable::default();

    for namespace in all_namespaces {
        let en_keys = english
            .messages(namespace, Locale::En.code())
            .unwrap_or(&empty);

        let mut per_locale = BTreeMap::from([(Locale::En, en_keys.clone())]);
        let mut fallbacks = BTreeMap::new();

        for locale in Locale::translated() {
            let own = locales
                .get(&locale)
                .and_then(|b| b.messages(namespace, locale.code()))
                .unwrap_or(&empty);

            let mut messages = en_keys.clone();
            messages.extend(own.iter().map(|(k, v)| (k.clone(), v.clone())));

            let missing: BTreeSet<String> = en_keys
                .keys()
                .filter(|k| !own.contains_key(*k))
                .cloned()
                .collect();

            per_locale.insert(locale, messages);
            fallbacks.insert(locale, missing);
        }

        merged.tables.insert(namespace.to_string(), per_locale);
        merged.fallbacks.insert(namespace.to_string(), fallbacks);
    }

    merged
}
