// src/specs/champions.rs
//! Champion winrate rows.
//!
//! Each row container carries the row class; inside it the first element with
//! the name class holds the champion name and the first element with the win
//! class holds a cell like `53.2%+0.4`. Rows are returned in document order.

use log::debug;
use scraper::Html;

use crate::config::options::ExtractOptions;
use crate::core::{dom, sanitize};
use crate::data::Record;
use crate::error::{Error, Result};

/// Untouched cell texts of one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRecord {
    pub name: String,
    pub win: String,
}

pub fn extract_raw(html: &str, opts: &ExtractOptions) -> Vec<RawRecord> {
    let doc = Html::parse_document(html);
    let rows = dom::select_by_class(&doc, &opts.row_class);
    debug!("Extract: {} element(s) with class {:?}", rows.len(), opts.row_class);

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let name = dom::find_text(row, &opts.name_class);
            let win = dom::find_text(row, &opts.win_class);
            if name.is_empty() || win.is_empty() {
                debug!("Extract: row {i} has empty field(s) name={name:?} win={win:?}");
            }
            RawRecord { name, win }
        })
        .collect()
}

/// Extract and normalize. The first unparseable win cell fails the whole page.
pub fn extract(html: &str, opts: &ExtractOptions) -> Result<Vec<Record>> {
    extract_raw(html, opts)
        .into_iter()
        .enumerate()
        .map(|(row, raw)| {
            let win = sanitize::parse_win(&raw.win).map_err(|source| Error::ParseWin {
                row,
                text: raw.win.clone(),
                source,
            })?;
            Ok(Record { name: raw.name, win })
        })
        .collect()
}
