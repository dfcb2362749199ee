//! Supported locales and resolution of the active-locale setting.

use std::{fmt, str::FromStr};

use anyhow::bail;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Environment variable read for the active locale when no other is configured.
pub const DEFAULT_LOCALE_ENV: &str = "LOCALE";

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English, the reference locale every other locale falls back to.
    #[default]
    En,
    Fr,
    It,
    Ja,
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Fr, Locale::It, Locale::Ja];

    pub const fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
            Locale::It => "it",
            Locale::Ja => "ja",
        }
    }

    pub fn is_reference(self) -> bool {
        self == Locale::En
    }

    /// Every locale except English, in declaration order.
    pub fn translated() -> impl Iterator<Item = Locale> {
        Self::ALL.into_iter().filter(|l| !l.is_reference())
    }

    /// Resolve an external setting permissively.
    ///
    /// Unset, empty, or unsupported values resolve to English. A region or
    /// encoding suffix is ignored, so `fr-FR` and `ja_JP.UTF-8` both match.
    pub fn from_setting(value: Option<&str>) -> Locale {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .and_then(|v| {
                let base = v.split(['-', '_', '.']).next().unwrap_or(v);
                base.parse().ok()
            })
            .unwrap_or_default()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase();
        match Locale::ALL.into_iter().find(|l| l.code() == lowered) {
            Some(locale) => Ok(locale),
            None => bail!(
                "Unsupported locale \"{}\" (expected one of: en, fr, it, ja)",
                s
            ),
        }
    }
}
