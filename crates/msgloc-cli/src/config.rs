//! CLI configuration: ambient locale detection and logging setup.

use std::env;
use std::io;

use miette::miette;
use msgloc::Locale;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
const LOG_ENV: &str = "MSGLOC_LOG";

/// POSIX locale variables, in precedence order.
const POSIX_LOCALE_VARS: &[&str] = &["LC_ALL", "LC_MESSAGES", "LANG"];

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Locale used when a command is not given one explicitly.
    pub locale: Locale,
}

impl Settings {
    /// Build settings from the `--locale` flag, falling back to the
    /// environment.
    ///
    /// An explicit but malformed `--locale` is an error; a malformed
    /// environment locale is ignored.
    pub fn from_cli(locale: Option<&str>) -> miette::Result<Self> {
        let locale = match locale {
            Some(value) => Locale::parse(value).map_err(|e| miette!("{e}"))?,
            None => ambient_locale(|name| env::var(name).ok()),
        };
        debug!(locale = locale.code(), "using ambient locale");
        Ok(Self { locale })
    }
}

/// Determine the ambient locale from POSIX environment variables.
///
/// Empty values and the `C`/`POSIX` pseudo-locales are skipped.
pub fn ambient_locale(lookup: impl Fn(&str) -> Option<String>) -> Locale {
    POSIX_LOCALE_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .find_map(|value| {
            let bare = value.split(['.', '@']).next().unwrap_or_default();
            if bare.eq_ignore_ascii_case("C") || bare.eq_ignore_ascii_case("POSIX") {
                return None;
            }
            Locale::parse(&value).ok()
        })
        .unwrap_or_default()
}

/// Install the stderr log subscriber.
///
/// `MSGLOC_LOG` takes precedence; otherwise `--verbose` selects `debug` and
/// the default is `warn`.
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
