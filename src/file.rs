// src/file.rs

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use log::warn;

use crate::config::options::ExportFormat;
use crate::data::Record;
use crate::error::{Error, Result};

fn writer_for<W: std::io::Write>(w: W, format: ExportFormat) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .delimiter(format.delim())
        .terminator(csv::Terminator::Any(b'\n'))
        .has_headers(true)
        .from_writer(w)
}

/// Serialize the whole table (header + rows) into memory.
pub fn to_export_bytes(records: &[Record], format: ExportFormat) -> Result<Vec<u8>> {
    let mut wtr = writer_for(Vec::new(), format);
    if records.is_empty() {
        // serde only emits the header alongside the first record
        wtr.write_record(crate::config::consts::HEADERS)?;
    }
    for r in records {
        wtr.serialize(r)?;
    }
    wtr.into_inner().map_err(|e| Error::Io(e.into_error()))
}

/// Same bytes as an export file, as text (clipboard).
pub fn to_export_string(records: &[Record], format: ExportFormat) -> Result<String> {
    let bytes = to_export_bytes(records, format)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write the table to `path`, creating parent directories. Nothing is written
/// unless the whole table serialized.
pub fn write_table(path: &Path, records: &[Record], format: ExportFormat) -> Result<PathBuf> {
    let bytes = to_export_bytes(records, format)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, bytes).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(path.to_path_buf())
}

/// Parse a previously exported table. Rows that do not deserialize are skipped.
pub fn parse_table<R: Read>(rdr: R, format: ExportFormat) -> Vec<Record> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(format.delim())
        .has_headers(true)
        .from_reader(rdr);

    rdr.deserialize::<Record>()
        .enumerate()
        .filter_map(|(i, res)| match res {
            Ok(r) => Some(r),
            Err(e) => {
                warn!("Load: skipping row {i}: {e}");
                None
            }
        })
        .collect()
}

pub fn read_table(path: &Path, format: ExportFormat) -> Result<Vec<Record>> {
    let file = fs::File::open(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_table(file, format))
}

pub fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::WriteOutput {
            path: dir.to_path_buf(),
            source: std::io::Error::other("path exists but is not a directory"),
        });
    }
    fs::create_dir_all(dir).map_err(|source| Error::WriteOutput {
        path: dir.to_path_buf(),
        source,
    })
}
