//! Generic-name denylist.
//!
//! Generic names ("area", "current", ...) denote bare quantities and are
//! reserved: they may not be proposed as standard names. The list lives in a
//! two-column CSV file (`Unit`, `Generic Name`) and is consulted through
//! [`GenericNames::contains`] before a submission reaches the registry. This
//! component owns no other validation or persistence logic.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Deserialize)]
struct GenericRecord {
    #[serde(rename = "Unit")]
    unit: String,
    #[serde(rename = "Generic Name")]
    name: String,
}

pub struct GenericNames {
    records: Vec<GenericRecord>,
}

impl GenericNames {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_reader(csv::Reader::from_path(path)?)
    }

    fn from_reader<R: Read>(mut reader: csv::Reader<R>) -> Result<Self> {
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<GenericRecord>, _>>()?;
        Ok(Self { records })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|record| record.name == name)
    }

    /// Reject `name` when it appears in the denylist.
    pub fn check(&self, name: &str) -> Result<()> {
        if self.contains(name) {
            return Err(Error::GenericName(name.to_string()));
        }
        Ok(())
    }

    /// The list as a markdown table, for ticket-bot banners.
    pub fn to_markdown(&self) -> String {
        let mut table = String::from("| Unit | Generic Name |\n|------|--------------|\n");
        for record in &self.records {
            table.push_str(&format!("| {} | {} |\n", record.unit, record.name));
        }
        table
    }
}
