use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "stdnames",
    bin_name = "stdnames",
    version,
    about = "Validate and merge standard name submissions",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a submission and merge it into the standard names file
    Update {
        /// Standard names registry file (.yaml or .yml)
        standardnames_file: PathBuf,
        /// Generic (reserved) names CSV file
        genericnames_file: PathBuf,
        /// Submission JSON file exported from the issue form
        submission_file: PathBuf,
        /// Unit format selector (F, P, D, or L)
        #[arg(long, default_value = "F")]
        unit_format: String,
        /// Link to the submitting issue, appended to the entry's links
        #[arg(long, default_value = "")]
        issue_link: String,
        /// Overwrite an existing entry
        #[arg(long)]
        overwrite: bool,
    },
    /// Check whether a standard name exists in the registry
    Has {
        /// Standard names registry file (.yaml or .yml)
        standardnames_file: PathBuf,
        /// The name to look up (words are joined with spaces)
        #[arg(required = true)]
        standard_name: Vec<String>,
    },
    /// Print a registry entry as YAML
    Get {
        /// Standard names registry file (.yaml or .yml)
        standardnames_file: PathBuf,
        /// The name to look up (words are joined with spaces)
        #[arg(required = true)]
        standard_name: Vec<String>,
        /// Unit format selector (F, P, D, or L)
        #[arg(long, default_value = "F")]
        unit_format: String,
    },
    /// Check whether a name appears in the generic names list
    IsGeneric {
        /// Generic (reserved) names CSV file
        genericnames_file: PathBuf,
        /// The name to look up (words are joined with spaces)
        #[arg(required = true)]
        standard_name: Vec<String>,
    },
}
