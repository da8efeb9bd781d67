//! # Registry Persistence
//!
//! A [`Registry`] owns exactly one backing YAML file and the document state
//! loaded from it. Every update is a single read-validate-write sequence:
//! validation failures leave the backing store untouched, and a successful
//! update canonically re-serializes the whole document before writing it
//! back, so a subsequent load yields an entry equal to the one just merged.
//!
//! Exclusive access to the backing file is assumed; there is no locking and
//! concurrent writers race (last writer wins).

use std::fs;
use std::path::{Path, PathBuf};

use crate::document::Document;
use crate::error::{Error, Result};
use crate::model::StandardName;
use crate::units::UnitFormat;

/// The two equivalent extension spellings, in resolution order; the first is
/// the canonical suffix for new files.
const EXTENSIONS: [&str; 2] = ["yaml", "yml"];

pub struct Registry {
    path: PathBuf,
    document: Document,
}

impl Registry {
    /// Load the registry from `path`. A bare base name resolves to whichever
    /// extension spelling exists, defaulting to `.yaml`; a missing file is an
    /// empty registry that will be created on the first update.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = resolve_path(path.as_ref());
        let text = if path.exists() {
            fs::read_to_string(&path)?
        } else {
            String::new()
        };
        Ok(Self { path, document: Document::parse(&text)? })
    }

    /// Render units in `format` on lookup instead of the default.
    pub fn with_unit_format(mut self, format: UnitFormat) -> Self {
        self.document = self.document.with_unit_format(format);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, name: &str) -> bool {
        self.document.contains(name)
    }

    pub fn len(&self) -> usize {
        self.document.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.is_empty()
    }

    pub fn lookup(&self, name: &str) -> Result<StandardName> {
        self.document.lookup(name)
    }

    pub fn to_yaml(&self) -> Result<String> {
        self.document.to_yaml()
    }

    /// Merge a validated entry into the registry and persist the result.
    ///
    /// Fails without touching the backing store when `entry.name` already
    /// exists and `overwrite` is false (echoing the current content), or when
    /// `entry.alias` names an entry absent from the document.
    pub fn update(&mut self, entry: &StandardName, overwrite: bool) -> Result<()> {
        if !overwrite && self.document.contains(&entry.name) {
            let existing = self.document.lookup(&entry.name)?.as_yaml()?;
            return Err(Error::DuplicateName { name: entry.name.clone(), existing });
        }
        if !entry.alias.is_empty() && !self.document.contains(&entry.alias) {
            return Err(Error::MissingAliasTarget(entry.alias.clone()));
        }
        self.document.merge(entry);
        self.save()
    }

    fn save(&self) -> Result<()> {
        let text = self.document.to_yaml()?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

fn resolve_path(path: &Path) -> PathBuf {
    if let Some(extension) = path.extension().and_then(|e| e.to_str()) {
        if EXTENSIONS.contains(&extension) {
            return path.to_path_buf();
        }
    }
    for extension in EXTENSIONS {
        let candidate = path.with_extension(extension);
        if candidate.exists() {
            return candidate;
        }
    }
    path.with_extension(EXTENSIONS[0])
}
