// src/core/sanitize.rs
use std::num::ParseFloatError;

/// Numeric head of a win cell: text before the first `+`/`-`, trimmed,
/// with one trailing `%` dropped. `"53.2% +0.4"` → `"53.2"`.
pub fn win_prefix(raw: &str) -> &str {
    let cut = raw.find(['+', '-']).unwrap_or(raw.len());
    let head = raw[..cut].trim();
    head.strip_suffix('%').map(str::trim_end).unwrap_or(head)
}

/// Parse a win cell into a percentage value. Anything after the sign is discarded.
pub fn parse_win(raw: &str) -> Result<f64, ParseFloatError> {
    win_prefix(raw).parse()
}
