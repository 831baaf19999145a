//! Implementation of the `msgloc languages` command.

use miette::{IntoDiagnostic, Result};
use msgloc::LanguageManager;
use serde::Serialize;

use super::{build_manager, RegistryArgs};
use crate::output::table::{format_languages_table, LanguageRow};

/// Arguments for the languages command.
#[derive(Debug, clap::Args)]
pub struct LanguagesArgs {
    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct LanguageJson {
    code: String,
    keys: usize,
    missing: usize,
    fallback: bool,
}

/// Run the languages command.
pub fn run_languages(args: LanguagesArgs) -> Result<i32> {
    let manager = build_manager(&args.registry)?;

    let rows = language_rows(&manager);

    if args.json {
        let json: Vec<LanguageJson> = rows
            .iter()
            .map(|row| LanguageJson {
                code: row.code.clone(),
                keys: row.keys,
                missing: row.missing,
                fallback: row.fallback,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json).into_diagnostic()?);
    } else if rows.is_empty() {
        println!("No languages registered");
    } else {
        println!("{}", format_languages_table(&rows));
    }

    Ok(exitcode::OK)
}

/// One row per registered language. Only the set that is the fallback
/// (not another set sharing its code) is marked.
fn language_rows(manager: &LanguageManager) -> Vec<LanguageRow> {
    manager
        .supported_languages()
        .iter()
        .map(|language| LanguageRow {
            code: language.code().to_string(),
            keys: language.len(),
            missing: manager.missing_keys(language.code()).len(),
            fallback: manager.is_fallback(language.code()),
        })
        .collect()
}
