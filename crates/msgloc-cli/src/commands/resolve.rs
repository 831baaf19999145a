//! Implementation of the `msgloc resolve` command.

use miette::{IntoDiagnostic, Result};
use msgloc::Locale;
use serde::Serialize;

use super::{build_manager, RegistryArgs};
use crate::config::Settings;

/// Arguments for the resolve command.
#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    /// Message key to resolve (e.g., NotNullValidator)
    pub key: String,

    /// Registered locale to use as the fallback language (its neutral
    /// parent is used when the exact code is not registered)
    #[arg(long)]
    pub fallback: Option<Locale>,

    /// Ignore locale-specific sets and resolve against the fallback only
    #[arg(long)]
    pub disable_localization: bool,

    #[command(flatten)]
    pub registry: RegistryArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for resolve results.
#[derive(Serialize)]
pub struct ResolveResult {
    pub key: String,
    pub locale: String,
    pub found: bool,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// Run the resolve command.
pub fn run_resolve(args: ResolveArgs, settings: &Settings) -> Result<i32> {
    let mut manager = build_manager(&args.registry)?;
    if let Some(fallback) = &args.fallback {
        manager.set_fallback_locale(fallback).into_diagnostic()?;
    }
    manager.set_enabled(!args.disable_localization);
    manager.set_culture(settings.locale.clone());

    let text = manager.resolve(&args.key, None);
    let found = !text.is_empty();
    let suggestions = if found {
        Vec::new()
    } else {
        manager.suggest_keys(&args.key)
    };

    if args.json {
        let output = ResolveResult {
            key: args.key,
            locale: manager.culture().to_string(),
            found,
            text,
            suggestions,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{}", text);
        if !found {
            eprintln!("No translation for '{}'", args.key);
            if !suggestions.is_empty() {
                eprintln!("Did you mean: {}?", suggestions.join(", "));
            }
        }
    }

    Ok(exitcode::OK)
}
