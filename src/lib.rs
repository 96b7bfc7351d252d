// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod logging;
pub mod runner;
pub mod specs;

#[cfg(feature = "gui")]
pub mod gui;

pub use crate::{
    data::{Record, Table},
    error::{Error, Result},
};
