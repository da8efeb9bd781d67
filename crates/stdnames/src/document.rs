//! # Document Parser
//!
//! Validates raw structured input against the registry schema and
//! materializes [`StandardName`] entries on demand. Two entry points:
//!
//! - [`Document::parse`] — a multi-entry registry document: an ordered YAML
//!   mapping of name to attributes. Entries are materialized lazily through
//!   [`Document::lookup`].
//! - [`Submission::parse`] — a single-entry submission originating from a
//!   ticket-style flat JSON payload, reshaped into the mapping form.
//!
//! An entry built from a registry-document lookup and one built from a ticket
//! submission with the same logical content compare equal field-by-field.

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::model::{RawEntry, StandardName, StringOrList};
use crate::units::UnitFormat;

/// A schema-validated multi-entry document: an ordered mapping from standard
/// name to its raw attributes. Insertion order of first-seen names is
/// preserved; re-inserting an existing name updates it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    entries: IndexMap<String, RawEntry>,
    unit_format: Option<UnitFormat>,
}

impl Document {
    /// Parse and schema-validate a registry document. Each value must supply
    /// `documentation`; `units`, `alias`, `tags`, `links` are optional, and
    /// `tags`/`links` accept either a single string or a sequence.
    pub fn parse(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let entries = serde_yaml::from_str(text)?;
        Ok(Self { entries, unit_format: None })
    }

    /// Render units in `format` on lookup instead of the default. Canonical
    /// serialization is unaffected; see [`Document::to_yaml`].
    pub fn with_unit_format(mut self, format: UnitFormat) -> Self {
        self.unit_format = Some(format);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materialize the entry stored under `name`.
    pub fn lookup(&self, name: &str) -> Result<StandardName> {
        let raw = self
            .entries
            .get(name)
            .ok_or_else(|| Error::MissingEntry(name.to_string()))?;
        StandardName::with_unit_format(name, raw.clone(), self.unit_format)
    }

    /// Merge a validated entry into the document: on an existing name the
    /// incoming links are appended after the existing ones (order-preserving
    /// concatenation, no de-duplication) and every other attribute comes from
    /// the incoming entry; a new name is appended.
    pub fn merge(&mut self, entry: &StandardName) {
        let merged = merge_entry(self.entries.get(&entry.name), entry);
        self.entries.insert(entry.name.clone(), merged);
    }

    /// Canonically re-serialize the whole document. Every entry is
    /// re-validated and rendered in the default unit format, so saved
    /// documents stay canonical regardless of any lookup format override.
    pub fn to_yaml(&self) -> Result<String> {
        let mut document = IndexMap::with_capacity(self.entries.len());
        for (name, raw) in &self.entries {
            let entry = StandardName::new(name, raw.clone())?;
            document.insert(name.as_str(), entry.as_canonical_document());
        }
        Ok(serde_yaml::to_string(&document)?)
    }
}

fn merge_entry(existing: Option<&RawEntry>, incoming: &StandardName) -> RawEntry {
    let mut doc = incoming.as_canonical_document();
    if let Some(existing) = existing {
        let mut links = existing.links.to_list();
        links.append(&mut doc.links);
        doc.links = links;
    }
    RawEntry::from(doc)
}

/// A single-entry submission reshaped from a ticket-style flat JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    standard_name: StandardName,
    overwrite: bool,
}

impl Submission {
    /// Reshape a flat `{"name": ..., attributes..., "options": [...]}`
    /// payload into one validated entry. Empty/falsy attributes are dropped,
    /// a non-empty `issue_link` is appended to `links`, and attributes
    /// outside the recognized set are silently ignored so upstream forms may
    /// carry triage fields that are not registry attributes.
    pub fn parse(payload: &str, issue_link: Option<&str>) -> Result<Self> {
        let value: Value = serde_json::from_str(payload)?;
        let object = value.as_object().ok_or_else(|| {
            Error::Validation("submission payload must be a JSON object".to_string())
        })?;

        let mut raw = RawEntry::default();
        let mut name = None;
        let mut overwrite = false;
        for (key, value) in object {
            if is_falsy(value) {
                continue;
            }
            match key.as_str() {
                "name" => name = Some(string_field(key, value)?),
                "documentation" => raw.documentation = string_field(key, value)?,
                "units" => raw.units = Some(string_field(key, value)?),
                "alias" => raw.alias = Some(string_field(key, value)?),
                "tags" => raw.tags = list_field(key, value)?,
                "links" => raw.links = list_field(key, value)?,
                "options" => {
                    overwrite = list_field(key, value)?
                        .to_list()
                        .iter()
                        .any(|option| option.eq_ignore_ascii_case("overwrite"));
                }
                _ => {}
            }
        }
        let name = name.ok_or_else(|| {
            Error::Validation("submission is missing the 'name' field".to_string())
        })?;
        if let Some(link) = issue_link.filter(|link| !link.is_empty()) {
            raw.links.push(link.to_string());
        }
        let standard_name = StandardName::new(&name, raw)?;
        Ok(Self { standard_name, overwrite })
    }

    pub fn name(&self) -> &str {
        &self.standard_name.name
    }

    pub fn standard_name(&self) -> &StandardName {
        &self.standard_name
    }

    /// True when the submission's `options` list carries the overwrite flag.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn string_field(key: &str, value: &Value) -> Result<String> {
    value.as_str().map(String::from).ok_or_else(|| {
        Error::Validation(format!("submission field '{key}' must be a string"))
    })
}

fn list_field(key: &str, value: &Value) -> Result<StringOrList> {
    match value {
        Value::String(s) => Ok(StringOrList::One(s.clone())),
        Value::Array(items) => {
            let items = items
                .iter()
                .map(|item| string_field(key, item))
                .collect::<Result<Vec<String>>>()?;
            Ok(StringOrList::Many(items))
        }
        _ => Err(Error::Validation(format!(
            "submission field '{key}' must be a string or a list of strings"
        ))),
    }
}
