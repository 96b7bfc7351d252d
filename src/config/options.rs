// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub extract: ExtractOptions,
    pub export: ExportOptions,
}

/// Where the rows live in the saved page and where the input comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractOptions {
    pub input: PathBuf,
    pub row_class: String,
    pub name_class: String,
    pub win_class: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            row_class: ROW_CLASS.to_string(),
            name_class: NAME_CLASS.to_string(),
            win_class: WIN_CLASS.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> u8 {
        match self { ExportFormat::Csv => b',', ExportFormat::Tsv => b'\t' }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    // None → "<DEFAULT_OUT_STEM>.<ext>" in the working directory
    out: Option<PathBuf>,
}

impl ExportOptions {
    /// Explicit path if one was set, otherwise the default file name for the format.
    pub fn out_path(&self) -> PathBuf {
        match &self.out {
            Some(p) => p.clone(),
            None => PathBuf::from(format!("{DEFAULT_OUT_STEM}.{}", self.format.ext())),
        }
    }

    /// Set from user text (CLI flag or GUI field). Blank text restores the default.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        self.out = if s.is_empty() { None } else { Some(PathBuf::from(s)) };
    }

    pub fn has_explicit_path(&self) -> bool {
        self.out.is_some()
    }

    pub fn with_path(mut self, path: impl AsRef<Path>) -> Self {
        self.out = Some(path.as_ref().to_path_buf());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_out_path_follows_format() {
        let mut export = ExportOptions::default();
        assert_eq!(export.out_path(), PathBuf::from("out.csv"));

        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("out.tsv"));
    }

    #[test]
    fn explicit_path_keeps_user_extension() {
        let mut export = ExportOptions::default();
        export.set_path("  results/winrates.txt ");
        export.format = ExportFormat::Tsv;
        assert_eq!(export.out_path(), PathBuf::from("results/winrates.txt"));

        export.set_path("");
        assert!(!export.has_explicit_path());
        assert_eq!(export.out_path(), PathBuf::from("out.tsv"));
    }
}
