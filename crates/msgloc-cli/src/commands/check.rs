//! Implementation of the `msgloc check` command.

use std::fs::read_to_string;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Report, Result};
use msgloc::TranslationSet;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::output::MsglocDiagnostic;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Translation files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut results = Vec::with_capacity(args.files.len());
    let mut failed = false;

    for path in &args.files {
        let content = match read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                failed = true;
                if !args.json {
                    eprintln!("{} {}: {}", "error:".red(), path.display(), e);
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: false,
                    keys: None,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        // The code is irrelevant for syntax checking.
        match TranslationSet::parse("und", &content) {
            Ok(language) => {
                if !args.json {
                    println!(
                        "{} {} ({} keys)",
                        "ok".green(),
                        path.display(),
                        language.len()
                    );
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: true,
                    keys: Some(language.len()),
                    error: None,
                });
            }
            Err(e) => {
                failed = true;
                if !args.json {
                    let diagnostic = MsglocDiagnostic::from_parse_error(path, &content, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckJson {
                    file: path.display().to_string(),
                    ok: false,
                    keys: None,
                    error: Some(e.to_string()),
                });
            }
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).into_diagnostic()?
        );
    }

    if failed {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
