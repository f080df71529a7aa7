//! File I/O and configuration loading for splice
//!
//! The block engine never touches the filesystem. This crate is the layer
//! that reads native files, writes them back atomically, and skips the write
//! entirely when nothing changed.

pub mod config;
pub mod error;
pub mod io;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use io::{read_text, write_atomic, write_if_changed};
