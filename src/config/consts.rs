// src/config/consts.rs

// Extraction: class tokens of the saved stats page
pub const ROW_CLASS: &str = "h-[52px]";
pub const NAME_CLASS: &str = "text-xl";
pub const WIN_CLASS: &str = "text-center";

// Files
pub const DEFAULT_INPUT: &str = "input.html";
pub const DEFAULT_OUT_STEM: &str = "out";

// Output columns, in order
pub const HEADERS: [&str; 2] = ["name", "win"];
