//! msgloc CLI entry point.
//!
//! Provides command-line tools for working with msgloc translation tables:
//! - `msgloc resolve` - Resolve a message key for a locale
//! - `msgloc languages` - List registered languages
//! - `msgloc check` - Validate translation file syntax
//! - `msgloc coverage` - Report translation coverage against the fallback

mod commands;
mod config;
mod output;

use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_coverage, run_languages, run_resolve, CheckArgs, CoverageArgs, LanguagesArgs,
    ResolveArgs,
};
use config::Settings;

/// msgloc translation tools.
#[derive(Debug, Parser)]
#[command(name = "msgloc")]
#[command(about = "Localized validation-message tools", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Ambient locale used when a command needs one (defaults to LC_ALL,
    /// LC_MESSAGES or LANG, then `en`)
    #[arg(long, global = true, env = "MSGLOC_LOCALE")]
    pub locale: Option<String>,

    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Resolve a message key through the locale fallback chain
    Resolve(ResolveArgs),
    /// List registered languages
    Languages(LanguagesArgs),
    /// Check translation file syntax
    Check(CheckArgs),
    /// Report translation coverage against the fallback language
    Coverage(CoverageArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    config::init_tracing(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let settings = Settings::from_cli(cli.locale.as_deref())?;

    let result = match cli.command {
        Commands::Resolve(args) => run_resolve(args, &settings),
        Commands::Languages(args) => run_languages(args),
        Commands::Check(args) => run_check(args),
        Commands::Coverage(args) => run_coverage(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
