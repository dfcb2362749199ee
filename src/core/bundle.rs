use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Message key to message text for one namespace in one locale.
pub type Messages = BTreeMap<String, String>;

/// A loaded translation document: namespace -> locale code -> key -> text.
///
/// Locale codes are kept as plain strings because source files may carry
/// entries for locales outside the supported set; the merge only reads the
/// entries it needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationBundle {
    namespaces: BTreeMap<String, BTreeMap<String, Messages>>,
}

impl TranslationBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages for `namespace` under `locale`, if the bundle has any.
    pub fn messages(&self, namespace: &str, locale: &str) -> Option<&Messages> {
        self.namespaces.get(namespace)?.get(locale)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    pub fn insert(&mut self, namespace: &str, locale: &str, key: &str, text: &str) {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .entry(locale.to_string())
            .or_default()
            .insert(key.to_string(), text.to_string());
    }

    /// Overlay `other` key by key; `other` wins on collision.
    pub fn overlay_keys(&mut self, other: &TranslationBundle) {
        for (namespace, locales) in &other.namespaces {
            let target = self.namespaces.entry(namespace.clone()).or_default();
            for (locale, messages) in locales {
                let entry = target.entry(locale.clone()).or_default();
                entry.extend(messages.iter().map(|(k, v)| (k.clone(), v.clone())));
            }
        }
    }

    /// Overlay `other` namespace by namespace; a namespace present in
    /// `other` replaces this bundle's entry for it wholesale.
    pub fn overlay_namespaces(&mut self, other: &TranslationBundle) {
        for (namespace, locales) in &other.namespaces {
            self.namespaces.insert(namespace.clone(), locales.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }
}
