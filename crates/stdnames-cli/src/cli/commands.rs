//! Command dispatch and per-command handlers.
//!
//! `run()` parses the CLI and calls the matching `handle_*` function. A
//! rejected submission is part of normal operation — the rendered banner is
//! the bot's reply to the ticket — so it prints to stdout and the process
//! exits zero. Operational failures (unreadable registry or denylist files,
//! bad arguments) bubble up as errors instead.

use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use stdnames::{Error, GenericNames, Registry, Submission, UnitFormat};

use super::render;
use super::setup::{Cli, Commands};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Update {
            standardnames_file,
            genericnames_file,
            submission_file,
            unit_format,
            issue_link,
            overwrite,
        } => handle_update(
            &standardnames_file,
            &genericnames_file,
            &submission_file,
            &unit_format,
            &issue_link,
            overwrite,
        ),
        Commands::Has { standardnames_file, standard_name } => {
            handle_has(&standardnames_file, &standard_name)
        }
        Commands::Get { standardnames_file, standard_name, unit_format } => {
            handle_get(&standardnames_file, &standard_name, &unit_format)
        }
        Commands::IsGeneric { genericnames_file, standard_name } => {
            handle_is_generic(&genericnames_file, &standard_name)
        }
    }
}

fn open_registry(path: &Path, unit_format: &str) -> anyhow::Result<Registry> {
    let format = UnitFormat::from_selector(unit_format)
        .with_context(|| format!("bad --unit-format '{unit_format}'"))?;
    let registry = Registry::open(path)
        .with_context(|| format!("failed to load registry {}", path.display()))?;
    Ok(registry.with_unit_format(format))
}

fn handle_update(
    standardnames_file: &Path,
    genericnames_file: &Path,
    submission_file: &Path,
    unit_format: &str,
    issue_link: &str,
    overwrite: bool,
) -> anyhow::Result<()> {
    let mut registry = open_registry(standardnames_file, unit_format)?;
    let generic_names = GenericNames::open(genericnames_file)
        .with_context(|| format!("failed to load generic names {}", genericnames_file.display()))?;
    let payload = fs::read_to_string(submission_file)
        .with_context(|| format!("failed to read submission {}", submission_file.display()))?;

    let merged = Submission::parse(&payload, Some(issue_link)).and_then(|submission| {
        generic_names.check(submission.name())?;
        registry.update(
            submission.standard_name(),
            overwrite || submission.overwrite(),
        )?;
        // echo the merged entry, not the submission: links may have accumulated
        registry.lookup(submission.name())
    });

    match merged {
        Ok(entry) => println!("{}", render::approval_banner(&entry)?),
        Err(error @ Error::GenericName(_)) => {
            println!("{}", render::generic_name_banner(&error, &generic_names));
        }
        Err(error) => println!("{}", render::error_banner(&error, Some(&payload))),
    }
    Ok(())
}

fn handle_has(standardnames_file: &Path, words: &[String]) -> anyhow::Result<()> {
    let registry = Registry::open(standardnames_file)
        .with_context(|| format!("failed to load registry {}", standardnames_file.display()))?;
    println!("{}", registry.contains(&words.join(" ")));
    Ok(())
}

fn handle_get(
    standardnames_file: &Path,
    words: &[String],
    unit_format: &str,
) -> anyhow::Result<()> {
    let registry = open_registry(standardnames_file, unit_format)?;
    let name = words.join(" ");
    match registry.lookup(&name).and_then(|entry| entry.as_yaml()) {
        Ok(yaml) => println!("{yaml}"),
        Err(error) => println!("{}", render::error_message(&error)),
    }
    Ok(())
}

fn handle_is_generic(genericnames_file: &Path, words: &[String]) -> anyhow::Result<()> {
    let generic_names = GenericNames::open(genericnames_file)
        .with_context(|| format!("failed to load generic names {}", genericnames_file.display()))?;
    println!("{}", generic_names.contains(&words.join(" ")));
    Ok(())
}
