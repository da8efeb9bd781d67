//! # Entry Model
//!
//! A [`StandardName`] is one validated registry entry: a unique lowercase
//! identifier for a physical quantity, bound to a canonical unit string,
//! free-text documentation, optional tags/links, and an optional alias to
//! another entry.
//!
//! The model moves through three shapes:
//!
//! 1. [`RawEntry`] — the loosely-typed attribute mapping as it appears in a
//!    persisted document or a reshaped submission. `tags`/`links` accept a
//!    single comma-separated string or a sequence.
//! 2. [`StandardName`] — the validated form. Construction validates, in
//!    order: name shape, units (normalized through [`crate::units`]),
//!    documentation presence, list normalization. Never mutated afterwards;
//!    merging produces a new document state, not an edited entry.
//! 3. [`EntryDoc`] — the canonical serializable projection. Attributes that
//!    are empty or equal to their default are omitted, which keeps the
//!    persisted file minimal and makes load-then-save stable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::units::{self, UnitFormat, NO_UNITS};

/// A validated standard name entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardName {
    pub name: String,
    pub documentation: String,
    /// Canonical unit string, or [`NO_UNITS`] when dimensionless/unspecified.
    pub units: String,
    /// Name of the entry this one aliases; empty when not an alias.
    pub alias: String,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

impl StandardName {
    /// Validate `raw` into an entry, rendering units in the default format.
    pub fn new(name: &str, raw: RawEntry) -> Result<Self> {
        Self::with_unit_format(name, raw, None)
    }

    /// Validate `raw`, rendering units in `format` when one is given
    /// (overriding any selector the raw units string carries).
    pub fn with_unit_format(
        name: &str,
        raw: RawEntry,
        format: Option<UnitFormat>,
    ) -> Result<Self> {
        validate_name(name)?;
        let raw_units = raw.units.unwrap_or_else(|| NO_UNITS.to_string());
        let units = match format {
            Some(format) => units::normalize_with(&raw_units, format)?,
            None => units::normalize(&raw_units)?,
        };
        if raw.documentation.trim().is_empty() {
            return Err(Error::Validation(format!(
                "standard name '{name}' is missing documentation"
            )));
        }
        Ok(Self {
            name: name.to_string(),
            documentation: raw.documentation,
            units,
            alias: raw.alias.unwrap_or_default(),
            tags: raw.tags.to_list(),
            links: raw.links.to_list(),
        })
    }

    /// The entry's serializable form, restricted to non-default attributes:
    /// `units` is dropped when it equals the sentinel, `alias`/`tags`/`links`
    /// when empty. The empty units string is kept; only the sentinel means
    /// "no units".
    pub fn as_canonical_document(&self) -> EntryDoc {
        EntryDoc {
            documentation: self.documentation.clone(),
            units: (self.units != NO_UNITS).then(|| self.units.clone()),
            alias: (!self.alias.is_empty()).then(|| self.alias.clone()),
            tags: self.tags.clone(),
            links: self.links.clone(),
        }
    }

    /// The entry as a single-key YAML document.
    pub fn as_yaml(&self) -> Result<String> {
        let mut document = IndexMap::new();
        document.insert(self.name.as_str(), self.as_canonical_document());
        Ok(serde_yaml::to_string(&document)?)
    }
}

fn validate_name(name: &str) -> Result<()> {
    let valid = name
        .chars()
        .next()
        .is_some_and(|first| first.is_alphabetic())
        && !name.chars().any(char::is_uppercase)
        && !name.chars().any(char::is_whitespace);
    if valid {
        Ok(())
    } else {
        Err(Error::InvalidName(name.to_string()))
    }
}

/// One entry's attributes as they appear in a persisted registry document,
/// before validation. Unknown attribute keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    pub documentation: String,
    #[serde(default)]
    pub units: Option<String>,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub tags: StringOrList,
    #[serde(default)]
    pub links: StringOrList,
    /// Submission-form flags; tolerated on load, never persisted.
    #[serde(default)]
    pub options: Vec<String>,
}

impl From<EntryDoc> for RawEntry {
    fn from(doc: EntryDoc) -> Self {
        RawEntry {
            documentation: doc.documentation,
            units: doc.units,
            alias: doc.alias,
            tags: StringOrList::Many(doc.tags),
            links: StringOrList::Many(doc.links),
            options: Vec::new(),
        }
    }
}

/// The canonical persisted form of one entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryDoc {
    pub documentation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<String>,
}

/// Either a single comma-separated string or a sequence of strings; both
/// spellings are accepted on input for `tags` and `links`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StringOrList {
    One(String),
    Many(Vec<String>),
}

impl Default for StringOrList {
    fn default() -> Self {
        StringOrList::One(String::new())
    }
}

impl StringOrList {
    pub fn is_empty(&self) -> bool {
        match self {
            StringOrList::One(s) => s.trim().is_empty(),
            StringOrList::Many(items) => items.is_empty(),
        }
    }

    /// Normalize into an ordered sequence of trimmed, non-empty strings.
    pub fn to_list(&self) -> Vec<String> {
        match self {
            StringOrList::One(s) => s
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
            StringOrList::Many(items) => items.clone(),
        }
    }

    pub fn push(&mut self, item: String) {
        let mut items = self.to_list();
        items.push(item);
        *self = StringOrList::Many(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(documentation: &str) -> RawEntry {
        RawEntry {
            documentation: documentation.to_string(),
            ..RawEntry::default()
        }
    }

    #[test]
    fn test_valid_name() {
        let entry = StandardName::new("plasma_current", raw("docs")).unwrap();
        assert_eq!(entry.name, "plasma_current");
        assert_eq!(entry.units, NO_UNITS);
        assert!(entry.tags.is_empty());
        assert!(entry.links.is_empty());
    }

    #[test]
    fn test_invalid_names() {
        for name in [
            "1st_plasma",
            "Main_ion_density",
            "_private",
            "plasma current",
            "plasmaCurrent",
            "",
        ] {
            let result = StandardName::new(name, raw("docs"));
            assert!(
                matches!(result, Err(Error::InvalidName(_))),
                "name accepted: {name:?}"
            );
        }
    }

    #[test]
    fn test_units_are_canonicalized() {
        let mut fields = raw("docs");
        fields.units = Some("electron_volt".to_string());
        let entry = StandardName::new("electron_temperature", fields).unwrap();
        assert_eq!(entry.units, "eV");
    }

    #[test]
    fn test_unknown_units_fail() {
        let mut fields = raw("docs");
        fields.units = Some("eVv".to_string());
        let result = StandardName::new("electron_temperature", fields);
        assert!(matches!(result, Err(Error::Unit(_))));
    }

    #[test]
    fn test_missing_documentation_fails() {
        for documentation in ["", "   \n"] {
            let result = StandardName::new("plasma_current", raw(documentation));
            assert!(matches!(result, Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_validation_order_name_before_units() {
        let mut fields = raw("");
        fields.units = Some("eVv".to_string());
        // both the name and the units are bad; the name is reported
        let result = StandardName::new("Bad Name", fields);
        assert!(matches!(result, Err(Error::InvalidName(_))));
    }

    #[test]
    fn test_comma_separated_lists_are_split_and_trimmed() {
        let mut fields = raw("docs");
        fields.tags = StringOrList::One("pf_active,equilibrium, tag with space ".to_string());
        let entry = StandardName::new("plasma_current", fields).unwrap();
        assert_eq!(entry.tags, ["pf_active", "equilibrium", "tag with space"]);
    }

    #[test]
    fn test_sequence_lists_pass_through() {
        let mut fields = raw("docs");
        fields.links = StringOrList::Many(vec!["one".to_string(), "two".to_string()]);
        let entry = StandardName::new("plasma_current", fields).unwrap();
        assert_eq!(entry.links, ["one", "two"]);
    }

    #[test]
    fn test_canonical_document_omits_defaults() {
        let entry = StandardName::new("plasma_current", raw("docs")).unwrap();
        let doc = entry.as_canonical_document();
        assert_eq!(doc.units, None);
        assert_eq!(doc.alias, None);
        assert!(doc.tags.is_empty());
        assert!(doc.links.is_empty());

        let yaml = entry.as_yaml().unwrap();
        assert!(yaml.contains("documentation"));
        assert!(!yaml.contains("units"));
        assert!(!yaml.contains("alias"));
        assert!(!yaml.contains("tags"));
        assert!(!yaml.contains("links"));
    }

    #[test]
    fn test_canonical_document_keeps_empty_string_units() {
        let mut fields = raw("docs");
        fields.units = Some(String::new());
        let entry = StandardName::new("plasma_current", fields).unwrap();
        assert_eq!(entry.as_canonical_document().units, Some(String::new()));
    }

    #[test]
    fn test_unit_format_override() {
        let mut fields = raw("docs");
        fields.units = Some("m/s^2".to_string());
        let entry = StandardName::with_unit_format(
            "ion_velocity_gradient",
            fields,
            Some(UnitFormat::Pretty),
        )
        .unwrap();
        assert_eq!(entry.units, "m\u{b7}s\u{207b}\u{b2}");
    }

    #[test]
    fn test_string_or_list_push() {
        let mut links = StringOrList::One("a, b".to_string());
        links.push("c".to_string());
        assert_eq!(links.to_list(), ["a", "b", "c"]);
    }
}
