//! Markdown/emoji banners for the ticketing system.
//!
//! The registry core raises structured errors; this module is the only place
//! that turns them into human-readable replies. Banners are plain markdown so
//! the ticket system renders them as bot comments.

use stdnames::{Error, GenericNames, StandardName};

/// Kind label shown in bold ahead of the message, mirroring the error
/// taxonomy the registry guarantees.
fn error_kind(error: &Error) -> &'static str {
    match error {
        Error::InvalidName(_) => "NameError",
        Error::Unit(_) => "UnitError",
        Error::Validation(_) | Error::Yaml(_) | Error::Json(_) | Error::Csv(_) => {
            "ValidationError"
        }
        Error::MissingEntry(_) | Error::DuplicateName { .. } | Error::MissingAliasTarget(_) => {
            "KeyError"
        }
        Error::GenericName(_) => "NameConflict",
        Error::Io(_) => "IoError",
    }
}

pub fn error_message(error: &Error) -> String {
    format!("**{}**: {}", error_kind(error), error)
}

/// Full error banner for a failed submission. Echoes the submitted payload as
/// YAML so the author can fix it in place.
pub fn error_banner(error: &Error, submission_json: Option<&str>) -> String {
    let mut banner = String::new();
    banner.push_str(":boom: The proposed Standard Name is not valid.\n\n");
    banner.push_str(&error_message(error));
    banner.push('\n');
    if let Error::DuplicateName { .. } = error {
        banner.push_str(
            "\nMark the :white_check_mark: **overwrite** checkbox to overwrite \
             this standard name.\n",
        );
    }
    banner.push_str(
        "\n:pencil: Please correct the error by editing the issue body at the \
         top of the page.\n",
    );
    if let Some(yaml) = submission_json.and_then(|json| submission_as_yaml(json)) {
        banner.push('\n');
        banner.push_str(&yaml);
    }
    banner
}

/// Banner for a name rejected by the generic-name denylist; includes the
/// full list so the author can steer clear of it.
pub fn generic_name_banner(error: &Error, generic_names: &GenericNames) -> String {
    format!(
        ":card_file_box: {}\n\n{}\nPlease propose a different name.\n",
        error_message(error),
        generic_names.to_markdown()
    )
}

/// Banner for an accepted submission, echoing the merged entry.
pub fn approval_banner(entry: &StandardName) -> Result<String, Error> {
    Ok(format!(
        ":sparkles: This proposal is ready for submission to the standard \
         names repository.\n\n{}\n:label: Label the issue with `approve` to commit.\n",
        entry.as_yaml()?
    ))
}

fn submission_as_yaml(json: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(json).ok()?;
    serde_yaml::to_string(&value).ok()
}
