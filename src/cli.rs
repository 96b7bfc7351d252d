// src/cli.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::config::{
    consts::{NAME_CLASS, ROW_CLASS, WIN_CLASS, DEFAULT_INPUT},
    options::{AppOptions, ExportFormat},
};
use crate::runner::{self, RunSummary};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "champ_scrape", version)]
#[command(about = "Extract champion names and win rates from a saved HTML page into CSV", long_about = None)]
pub struct Arguments {
    /// Saved HTML page to read
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output file [default: out.csv, or out.tsv with --format tsv]
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = FormatArg::Csv)]
    pub format: FormatArg,

    /// Class token marking each champion row
    #[arg(long, value_name = "CLASS", default_value = ROW_CLASS)]
    pub row_class: String,

    /// Class token of the name cell inside a row
    #[arg(long, value_name = "CLASS", default_value = NAME_CLASS)]
    pub name_class: String,

    /// Class token of the win cell inside a row
    #[arg(long, value_name = "CLASS", default_value = WIN_CLASS)]
    pub win_class: String,

    /// More log output (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Less log output (repeatable)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "verbose")]
    pub quiet: u8,
}

impl Arguments {
    pub fn to_options(&self) -> AppOptions {
        let mut options = AppOptions::default();

        let extract = &mut options.extract;
        extract.input = self.input.clone();
        extract.row_class = self.row_class.clone();
        extract.name_class = self.name_class.clone();
        extract.win_class = self.win_class.clone();

        options.export.format = self.format.into();
        if let Some(out) = &self.out {
            options.export = options.export.with_path(out);
        }
        options
    }

    pub fn run(self) -> crate::Result<RunSummary> {
        crate::logging::init(crate::logging::level_for(self.verbose, self.quiet));
        runner::run(&self.to_options())
    }
}
