// src/specs/mod.rs
//! # Page specs
//!
//! A spec knows where the ground truth lives in one saved page and how to pull
//! it out. It takes HTML text in and gives records back; reading files,
//! writing exports and presenting the table happen elsewhere
//! (`runner`, `file`, `gui`).
//!
//! Specs are testable offline against inline fixtures.
pub mod champions;
