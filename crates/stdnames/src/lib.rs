//! # Standard Names Registry
//!
//! A crowd-submitted registry of standard names: unique, machine-checkable
//! identifiers for physical quantities, each bound to a physical unit,
//! free-text documentation, optional tags/links, and an optional alias to
//! another entry.
//!
//! This crate is the validation-and-merge engine, UI-agnostic by design: it
//! takes regular Rust values, returns structured [`Result`]s, and never
//! writes to stdout or assumes a terminal. Rendering failures into
//! human-readable messages is the job of whatever boundary sits on top (the
//! companion CLI crate renders them as ticket-bot banners).
//!
//! ## Pipeline
//!
//! ```text
//! raw submission ──► Submission::parse ──► StandardName
//!                                              │
//!                        GenericNames::check ──┤ (denylist)
//!                                              ▼
//!                                    Registry::update ──► backing file
//! ```
//!
//! A submission is validated into a [`StandardName`], checked against the
//! generic-name denylist, and merged into the persisted registry. The merge
//! is transactional: it either fully succeeds (validate, merge, persist) or
//! leaves the backing file untouched.
//!
//! ## Module Overview
//!
//! - [`model`]: the entry model — validation and canonical serialization
//! - [`document`]: schema-validated parsing of registry documents and
//!   ticket-style submissions
//! - [`registry`]: the persisted ordered registry — load, lookup, merge,
//!   save
//! - [`units`]: unit expression normalizer
//! - [`generic`]: generic-name denylist
//! - [`error`]: error types

pub mod document;
pub mod error;
pub mod generic;
pub mod model;
pub mod registry;
pub mod units;

pub use document::{Document, Submission};
pub use error::{Error, Result};
pub use generic::GenericNames;
pub use model::{EntryDoc, RawEntry, StandardName, StringOrList};
pub use registry::Registry;
pub use units::{UnitError, UnitFormat, NO_UNITS};
