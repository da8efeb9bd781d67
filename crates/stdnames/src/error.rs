use thiserror::Error;

use crate::units::UnitError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(
        "invalid standard name '{0}': standard names must be lowercase, \
         start with a letter, and contain no whitespace"
    )]
    InvalidName(String),

    #[error(transparent)]
    Unit(#[from] UnitError),

    #[error("{0}")]
    Validation(String),

    #[error("standard name '{0}' is not present in the registry")]
    MissingEntry(String),

    #[error("standard name '{name}' is already present:\n{existing}")]
    DuplicateName { name: String, existing: String },

    #[error("alias target '{0}' is not present in the registry")]
    MissingAliasTarget(String),

    #[error("'{0}' is a generic name and cannot be proposed as a standard name")]
    GenericName(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
