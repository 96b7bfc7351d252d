// src/core/dom.rs
//! Class-token lookups over a parsed document.
//!
//! Matching is on whole tokens of the `class` attribute, so utility-style
//! names such as `h-[52px]` work without CSS selector escaping.

use scraper::{CaseSensitivity, ElementRef, Html};

#[inline]
pub fn has_class(el: &ElementRef<'_>, class: &str) -> bool {
    el.value().has_class(class, CaseSensitivity::CaseSensitive)
}

/// Every element carrying `class`, in document order. Nested matches included.
pub fn select_by_class<'a>(doc: &'a Html, class: &str) -> Vec<ElementRef<'a>> {
    doc.root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|el| has_class(el, class))
        .collect()
}

/// First descendant of `el` (not `el` itself) carrying `class`.
pub fn find_first<'a>(el: &ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    el.descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|d| has_class(d, class))
}

/// Text content of the first descendant carrying `class`, or "" when there is none.
/// Text nodes are concatenated as-is, no trimming.
pub fn find_text(el: &ElementRef<'_>, class: &str) -> String {
    find_first(el, class)
        .map(|d| d.text().collect())
        .unwrap_or_default()
}
