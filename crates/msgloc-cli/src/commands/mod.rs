//! CLI command implementations.

mod check;
mod coverage;
mod languages;
mod resolve;

use std::ffi::OsStr;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use miette::{miette, Report, Result};
use msgloc::{LanguageManager, LoadError, Locale};
use tracing::debug;

use crate::output::MsglocDiagnostic;

pub use check::{run_check, CheckArgs};
pub use coverage::{run_coverage, CoverageArgs};
pub use languages::{run_languages, LanguagesArgs};
pub use resolve::{run_resolve, ResolveArgs};

/// Translation sources shared by commands that build a registry.
#[derive(Debug, Clone, clap::Args)]
pub struct RegistryArgs {
    /// Translation files to register, as `path` (code taken from the file
    /// stem, e.g. `fr_CA.msg`) or `code=path` (repeatable)
    #[arg(short = 't', long = "translations", value_parser = parse_source)]
    pub translations: Vec<TranslationSource>,

    /// Start from an empty registry instead of the built-in languages
    #[arg(long)]
    pub no_builtin: bool,
}

/// A translation file paired with the locale code it registers under.
#[derive(Debug, Clone)]
pub struct TranslationSource {
    pub code: String,
    pub path: PathBuf,
}

/// Parse a `code=path` or bare `path` translation source.
fn parse_source(s: &str) -> Result<TranslationSource, String> {
    let (code, path) = match s.split_once('=') {
        Some((code, path)) => (code.to_string(), PathBuf::from(path)),
        None => {
            let path = PathBuf::from(s);
            let stem = path
                .file_stem()
                .and_then(OsStr::to_str)
                .ok_or_else(|| format!("cannot derive a locale code from '{s}'"))?;
            (stem.to_string(), path)
        }
    };
    let locale = Locale::parse(&code).map_err(|e| format!("invalid translation source '{s}': {e}"))?;
    Ok(TranslationSource {
        code: locale.code().to_string(),
        path,
    })
}

/// Build a registry from the built-in languages plus the given files.
pub fn build_manager(args: &RegistryArgs) -> Result<LanguageManager> {
    let mut manager = LanguageManager::new();
    if args.no_builtin {
        manager.clear();
    }
    for source in &args.translations {
        let keys = manager
            .load_translations(&source.code, &source.path)
            .map_err(|e| load_error_report(&source.path, e))?;
        debug!(code = %source.code, path = %source.path.display(), keys, "loaded translations");
    }
    Ok(manager)
}

/// Report a load failure, with source context when the file failed to parse.
fn load_error_report(path: &Path, error: LoadError) -> Report {
    match error {
        LoadError::Parse {
            line,
            column,
            message,
            ..
        } => match read_to_string(path) {
            Ok(content) => {
                MsglocDiagnostic::from_location(path, &content, line, column, message).into()
            }
            Err(_) => miette!("{}:{}:{}: {}", path.display(), line, column, message),
        },
        LoadError::Io { path, source } => {
            miette!("Failed to read translation file {}: {}", path.display(), source)
        }
        LoadError::Language(e) => miette!("Cannot register {}: {}", path.display(), e),
    }
}
