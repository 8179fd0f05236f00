use crate::options::PassphraseOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{error, info};

/// Persistence seam for the mutable "custom" preset. Loading never fails:
/// a broken or missing store degrades to the custom-default set.
pub trait OptionsStore {
    /// Raw key/value form of the persisted "passphrase" section.
    fn load(&self) -> BTreeMap<String, String>;

    /// Replaces the persisted section wholesale.
    fn save(&self, options: &BTreeMap<String, String>) -> Result<()>;
}

/// One JSON document holding a single "passphrase" section of stringly
/// typed option values.
#[derive(Serialize, Deserialize)]
struct ConfigDocument {
    passphrase: BTreeMap<String, String>,
}

/// File-backed store. Writes go through a temp file in the same directory
/// and an atomic rename, so a crash mid-write cannot truncate the config.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<BTreeMap<String, String>> {
        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let document: ConfigDocument = serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse {}", self.path.display()))?;
        Ok(document.passphrase)
    }

    /// Rewrites the store with the custom-default section and returns it.
    fn reinitialize(&self) -> BTreeMap<String, String> {
        let defaults = PassphraseOptions::CUSTOM_DEFAULT.to_string_map();
        match self.save(&defaults) {
            Ok(()) => info!(path = %self.path.display(), "options file created with defaults"),
            Err(err) => error!(
                path = %self.path.display(),
                %err,
                "could not write default options, continuing in memory"
            ),
        }
        defaults
    }
}

impl OptionsStore for JsonFileStore {
    fn load(&self) -> BTreeMap<String, String> {
        let section = match self.read_document() {
            Ok(section) => section,
            Err(err) => {
                error!(
                    path = %self.path.display(),
                    %err,
                    "options file unusable, reinitializing with defaults"
                );
                return self.reinitialize();
            }
        };

        // A section that lost one of its keys is as broken as a missing
        // one: rewrite the file instead of handing back a partial map.
        for key in PassphraseOptions::FIELD_NAMES {
            if !section.contains_key(key) {
                error!(
                    path = %self.path.display(),
                    option = key,
                    "option key missing from store, reinitializing with defaults"
                );
                return self.reinitialize();
            }
        }
        section
    }

    fn save(&self, options: &BTreeMap<String, String>) -> Result<()> {
        let document = ConfigDocument {
            passphrase: options.clone(),
        };
        let serialized = serde_json::to_string_pretty(&document)?;

        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(dir) = dir {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }

        let mut temp = NamedTempFile::new_in(dir.unwrap_or_else(|| Path::new(".")))
            .context("failed to create temporary options file")?;
        temp.write_all(serialized.as_bytes())
            .context("failed to write options")?;
        temp.persist(&self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}
