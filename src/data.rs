// src/data.rs
use std::cmp::Ordering;

use serde::{Deserialize, Serialize, Serializer};

/// One champion row of the output table. Field order is the column order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(serialize_with = "serialize_win")]
    pub win: f64,
}

// NaN is a missing value: written as an empty field.
fn serialize_win<S: Serializer>(win: &f64, s: S) -> Result<S::Ok, S::Error> {
    if win.is_nan() { s.serialize_str("") } else { s.serialize_f64(*win) }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Win,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

impl SortDir {
    fn flip(self) -> Self {
        match self { SortDir::Asc => SortDir::Desc, SortDir::Desc => SortDir::Asc }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sort {
    pub key: SortKey,
    pub dir: SortDir,
}

impl Default for Sort {
    fn default() -> Self {
        Self { key: SortKey::Win, dir: SortDir::Desc }
    }
}

impl Sort {
    /// Header click: same column flips direction, a new column starts descending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.dir = self.dir.flip();
        } else {
            *self = Sort { key, dir: SortDir::Desc };
        }
    }

    fn compare(&self, a: &Record, b: &Record) -> Ordering {
        let ord = match self.key {
            SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortKey::Win => a.win.total_cmp(&b.win),
        };
        match self.dir { SortDir::Asc => ord, SortDir::Desc => ord.reverse() }
    }
}

/// Canonical records in document order. Views index into it and never reorder it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row indices whose name contains any `|`-separated part of `search`
    /// (case-insensitive), ordered by `sort`. Ties keep document order.
    pub fn view(&self, search: &str, sort: Sort) -> Vec<usize> {
        let search = search.trim().to_lowercase();
        let needles: Vec<&str> = search.split('|').map(str::trim).filter(|p| !p.is_empty()).collect();
        let mut ix: Vec<usize> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                let name = r.name.to_lowercase();
                needles.is_empty() || needles.iter().any(|n| name.contains(n))
            })
            .map(|(i, _)| i)
            .collect();
        ix.sort_by(|&a, &b| sort.compare(&self.records[a], &self.records[b]));
        ix
    }
}
