use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::{
    core::merge::CombineMode,
    locale::{DEFAULT_LOCALE_ENV, Locale},
};

pub const CONFIG_FILE_NAME: &str = ".trmergerc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_reference")]
    pub reference: String,
    #[serde(default = "default_sources")]
    pub sources: BTreeMap<String, Vec<String>>,
    #[serde(default = "default_locale_env")]
    pub locale_env: String,
    #[serde(default)]
    pub combine: CombineMode,
}

fn default_reference() -> String {
    "translations/en.json".to_string()
}

fn default_sources() -> BTreeMap<String, Vec<String>> {
    Locale::translated()
        .map(|locale| {
            (
                locale.code().to_string(),
                vec![format!("translations/*-{}.json", locale.code())],
            )
        })
        .collect()
}

fn default_locale_env() -> String {
    DEFAULT_LOCALE_ENV.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reference: default_reference(),
            sources: default_sources(),
            locale_env: default_locale_env(),
            combine: CombineMode::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Source locales must be supported, non-English codes, and every source
    /// pattern must be a valid glob.
    pub fn validate(&self) -> Result<()> {
        if self.locale_env.trim().is_empty() {
            bail!("'localeEnv' must not be empty");
        }

        for (code, patterns) in &self.sources {
            let locale: Locale = code
                .parse()
                .with_context(|| format!("Invalid locale in 'sources': \"{}\"", code))?;
            if locale.is_reference() {
                bail!(
                    "'sources' must not list \"{}\"; the English bundle is set by 'reference'",
                    code
                );
            }
            for pattern in patterns {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'sources.{}': \"{}\"", code, pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Source patterns keyed by parsed locale. Call after [`Config::validate`].
    pub fn locale_sources(&self) -> Result<BTreeMap<Locale, &[String]>> {
        self.sources
            .iter()
            .map(|(code, patterns)| Ok((code.parse::<Locale>()?, patterns.as_slice())))
            .collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory paths in the config are relative to.
    pub root: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            Ok(ConfigLoadResult {
                config,
                root,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            root: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
