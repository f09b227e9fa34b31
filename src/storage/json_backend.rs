use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    ledger::Ledger,
    utils::{app_data_dir, ensure_dir, write_atomic},
};

use super::{Result, StorageBackend};

const LEDGER_DIR: &str = "ledgers";
const LEDGER_EXTENSION: &str = "json";

/// Stores ledgers as pretty-printed JSON snapshots under a managed directory.
///
/// Every save rewrites the whole snapshot through a temp-file rename, so a
/// ledger on disk is always a fully applied write; a seed and its expanded
/// occurrences can never be persisted partially.
#[derive(Clone)]
pub struct JsonStorage {
    ledgers_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let app_root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&app_root)?;
        let ledgers_dir = app_root.join(LEDGER_DIR);
        ensure_dir(&ledgers_dir)?;
        Ok(Self { ledgers_dir })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn ledger_path(&self, name: &str) -> PathBuf {
        self.ledgers_dir
            .join(format!("{}.{}", canonical_name(name), LEDGER_EXTENSION))
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, ledger: &Ledger, name: &str) -> Result<()> {
        let path = self.ledger_path(name);
        save_ledger_to_path(ledger, &path)?;
        tracing::info!(name, path = %path.display(), "ledger saved");
        Ok(())
    }

    fn load(&self, name: &str) -> Result<Ledger> {
        load_ledger_from_path(&self.ledger_path(name))
    }

    fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.ledgers_dir)? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(LEDGER_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn delete(&self, name: &str) -> Result<()> {
        fs::remove_file(self.ledger_path(name))?;
        Ok(())
    }
}

/// Serializes a ledger snapshot to an explicit path.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let json = serde_json::to_string_pretty(ledger)?;
    write_atomic(path, &json)
}

/// Reads a ledger snapshot from an explicit path.
pub fn load_ledger_from_path(path: &Path) -> Result<Ledger> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

fn canonical_name(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if (ch == ' ' || ch == '-' || ch == '_') && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_matches('-').to_string();
    if slug.is_empty() {
        "ledger".into()
    } else {
        slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_names_are_slugged() {
        assert_eq!(canonical_name("My Ledger"), "my-ledger");
        assert_eq!(canonical_name("  Shared -- Budget  "), "shared-budget");
        assert_eq!(canonical_name("***"), "ledger");
    }
}
