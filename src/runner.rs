// src/runner.rs
use std::path::PathBuf;

use log::info;

use crate::{
    config::options::AppOptions,
    data::Record,
    error::Result,
    file,
    specs,
};

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub rows: usize,
    pub out_path: PathBuf,
}

/// Read the saved page and extract its records. Does not touch the output.
pub fn load_records(options: &AppOptions) -> Result<Vec<Record>> {
    let input = &options.extract.input;
    let html = file::read_input(input)?;
    info!("Read {} ({} bytes)", input.display(), html.len());

    let records = specs::champions::extract(&html, &options.extract)?;
    info!("Extracted {} row(s)", records.len());
    Ok(records)
}

/// Full pipeline: read → extract → write.
pub fn run(options: &AppOptions) -> Result<RunSummary> {
    let records = load_records(options)?;

    let export = &options.export;
    let out_path = file::write_table(&export.out_path(), &records, export.format)?;
    info!("Wrote {}", out_path.display());

    Ok(RunSummary { rows: records.len(), out_path })
}
