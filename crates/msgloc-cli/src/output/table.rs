//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};

/// Coverage data for a single language.
pub struct LanguageCoverage {
    /// Language code (e.g., "fr", "pt-BR").
    pub language: String,
    /// Number of fallback keys the language translates.
    pub translated: usize,
    /// Fallback keys the language does not translate.
    pub missing: Vec<String>,
}

/// One row of the `languages` listing.
pub struct LanguageRow {
    pub code: String,
    pub keys: usize,
    pub missing: usize,
    pub fallback: bool,
}

/// Format coverage data as a table.
pub fn format_coverage_table(total: usize, coverage: &[LanguageCoverage]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Language", "Coverage", "Missing"]);

    for lang in coverage {
        table.add_row(vec![
            lang.language.clone(),
            format!("{}/{}", lang.translated, total),
            lang.missing.len().to_string(),
        ]);
    }

    table
}

/// Format the registered languages as a table.
pub fn format_languages_table(rows: &[LanguageRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Code", "Keys", "Missing", "Fallback"]);

    for row in rows {
        table.add_row(vec![
            row.code.clone(),
            row.keys.to_string(),
            row.missing.to_string(),
            if row.fallback { "*" } else { "" }.to_string(),
        ]);
    }

    table
}
