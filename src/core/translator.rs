use std::{
    env,
    sync::{Arc, PoisonError, RwLock},
};

use super::table::MergedTable;
use crate::locale::{DEFAULT_LOCALE_ENV, Locale};

/// Where the active locale comes from.
///
/// Implementations are consulted on every lookup, never cached, so a change
/// to the underlying setting is picked up by the next call.
pub trait LocaleSource {
    fn current(&self) -> Locale;
}

impl LocaleSource for Locale {
    fn current(&self) -> Locale {
        *self
    }
}

/// Reads the active locale from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvLocale {
    var: String,
}

impl EnvLocale {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvLocale {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE_ENV)
    }
}

impl LocaleSource for EnvLocale {
    fn current(&self) -> Locale {
        Locale::from_setting(env::var(&self.var).ok().as_deref())
    }
}

/// A locale setting that can be switched at runtime and shared across clones.
#[derive(Debug, Clone, Default)]
pub struct SharedLocale(Arc<RwLock<Locale>>);

impl SharedLocale {
    pub fn new(locale: Locale) -> Self {
        Self(Arc::new(RwLock::new(locale)))
    }

    pub fn set(&self, locale: Locale) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = locale;
    }
}

impl LocaleSource for SharedLocale {
    fn current(&self) -> Locale {
        *self.0.read().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Resolves UI strings from a shared merged table for the active locale.
#[derive(Debug, Clone)]
pub struct Translator<S = EnvLocale> {
    table: Arc<MergedTable>,
    source: S,
}

impl Translator<EnvLocale> {
    /// Translator reading the locale from the `LOCALE` environment variable.
    pub fn from_env(table: Arc<MergedTable>) -> Self {
        Self::new(table, EnvLocale::default())
    }
}

impl<S: LocaleSource> Translator<S> {
    pub fn new(table: Arc<MergedTable>, source: S) -> Self {
        Self { table, source }
    }

    pub fn table(&self) -> &MergedTable {
        &self.table
    }

    pub fn current_locale(&self) -> Locale {
        self.source.current()
    }

    /// Translate `key` in `namespace` for the locale active right now.
    ///
    /// Falls back to English, then to the key itself.
    pub fn tr<'a>(&'a self, namespace: &str, key: &'a str) -> &'a str {
        self.tr_in(namespace, key, self.source.current())
    }

    pub fn tr_in<'a>(&'a self, namespace: &str, key: &'a str, locale: Locale) -> &'a str {
        self.table.lookup(namespace, key, locale)
    }
}
