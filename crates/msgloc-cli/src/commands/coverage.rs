//! Coverage command implementation.

use clap::Args;
use miette::{IntoDiagnostic, Result};
use msgloc::Locale;
use serde::Serialize;

use super::{build_manager, RegistryArgs};
use crate::output::table::{format_coverage_table, LanguageCoverage};

/// Arguments for the coverage command.
#[derive(Debug, Args)]
pub struct CoverageArgs {
    /// Languages to report (comma-separated). Defaults to every registered
    /// language except the fallback.
    #[arg(long, value_delimiter = ',')]
    pub lang: Vec<Locale>,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Exit with non-zero code if any translation is incomplete.
    #[arg(long)]
    pub strict: bool,

    /// Output results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for coverage data.
#[derive(Debug, Serialize)]
struct CoverageJson {
    language: String,
    translated: usize,
    total: usize,
    missing: Vec<String>,
}

/// Run the coverage command.
pub fn run_coverage(args: CoverageArgs) -> Result<i32> {
    let manager = build_manager(&args.registry)?;
    let total = manager.fallback_language().len();

    let codes: Vec<String> = if args.lang.is_empty() {
        manager
            .supported_languages()
            .iter()
            .map(|language| language.code().to_string())
            .filter(|code| !manager.is_fallback(code))
            .collect()
    } else {
        args.lang.iter().map(|l| l.code().to_string()).collect()
    };

    let coverage_data: Vec<LanguageCoverage> = codes
        .into_iter()
        .map(|code| {
            let missing: Vec<String> = manager
                .missing_keys(&code)
                .into_iter()
                .map(str::to_string)
                .collect();
            LanguageCoverage {
                translated: total - missing.len(),
                language: code,
                missing,
            }
        })
        .collect();

    let any_incomplete = coverage_data.iter().any(|c| !c.missing.is_empty());

    if args.json {
        let json_data: Vec<CoverageJson> = coverage_data
            .iter()
            .map(|c| CoverageJson {
                language: c.language.clone(),
                translated: c.translated,
                total,
                missing: c.missing.clone(),
            })
            .collect();

        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        let table = format_coverage_table(total, &coverage_data);
        println!("{}", table);

        for lang_coverage in &coverage_data {
            if !lang_coverage.missing.is_empty() {
                println!("\nMissing in {}:", lang_coverage.language);
                for name in &lang_coverage.missing {
                    println!("  - {}", name);
                }
            }
        }
    }

    if args.strict && any_incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
