use std::collections::{BTreeMap, BTreeSet};

use schemars::JsonSchema;
use serde::{Serialize, Serializer};

use super::bundle::Messages;
use crate::locale::Locale;

/// Fallback-resolved translations: namespace -> locale -> key -> text.
///
/// Built once by [`merge_translations`](super::merge::merge_translations) and
/// never mutated afterwards. Every namespace carries an entry for every
/// supported locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedTable {
    pub(super) tables: BTreeMap<String, BTreeMap<Locale, Messages>>,
    /// Keys whose value was taken from English rather than the locale itself.
    pub(super) fallbacks: BTreeMap<String, BTreeMap<Locale, BTreeSet<String>>>,
}

/// Per-namespace, per-locale translation counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub namespace: String,
    pub locale: Locale,
    /// Keys resolvable in this locale.
    pub total: usize,
    /// Keys the locale translates itself that English also defines.
    pub translated: usize,
    /// Keys resolved through the English value.
    pub fallback: usize,
    /// Keys the locale defines that English does not.
    pub extra: usize,
}

impl Coverage {
    pub fn is_complete(&self) -> bool {
        self.fallback == 0
    }
}

impl MergedTable {
    pub fn get(&self, namespace: &str, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(namespace)?
            .get(&locale)?
            .get(key)
            .map(String::as_str)
    }

    /// Resolve `key`, returning the key itself when nothing is defined for it.
    pub fn lookup<'a>(&'a self, namespace: &str, key: &'a str, locale: Locale) -> &'a str {
        self.get(namespace, locale, key).unwrap_or(key)
    }

    pub fn messages(&self, namespace: &str, locale: Locale) -> Option<&Messages> {
        self.tables.get(namespace)?.get(&locale)
    }

    pub fn namespace(&self, namespace: &str) -> Option<&BTreeMap<Locale, Messages>> {
        self.tables.get(namespace)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn contains_namespace(&self, namespace: &str) -> bool {
        self.tables.contains_key(namespace)
    }

    pub fn is_fallback(&self, namespace: &str, locale: Locale, key: &str) -> bool {
        self.fallbacks
            .get(namespace)
            .and_then(|locales| locales.get(&locale))
            .is_some_and(|keys| keys.contains(key))
    }

    /// Coverage rows ordered by namespace, then locale.
    pub fn coverage(&self) -> Vec<Coverage> {
        let empty = Messages::new();
        let mut rows = Vec::new();

        for (namespace, locales) in &self.tables {
            let english = locales.get(&Locale::En).unwrap_or(&empty);
            for (&locale, messages) in locales {
                let fallback = self
                    .fallbacks
                    .get(namespace)
                    .and_then(|f| f.get(&locale))
                    .map_or(0, BTreeSet::len);
                let extra = messages
                    .keys()
                    .filter(|k| !english.contains_key(*k))
                    .count();
                rows.push(Coverage {
                    namespace: namespace.clone(),
                    locale,
                    total: messages.len(),
                    translated: messages.len() - fallback - extra,
                    fallback,
                    extra,
                });
            }
        }

        rows
    }

    /// A copy restricted to a single namespace, for narrowed output.
    pub fn only_namespace(&self, namespace: &str) -> MergedTable {
        let mut narrowed = MergedTable::default();
        if let Some(locales) = self.tables.get(namespace) {
            narrowed
                .tables
                .insert(namespace.to_string(), locales.clone());
        }
        if let Some(fallbacks) = self.fallbacks.get(namespace) {
            narrowed
                .fallbacks
                .insert(namespace.to_string(), fallbacks.clone());
        }
        narrowed
    }
}

impl Serialize for MergedTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.tables.serialize(serializer)
    }
}
